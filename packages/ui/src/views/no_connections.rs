use dioxus::prelude::*;

use crate::button::Button;
use crate::icon_provider::{IconName, Icons};
use crate::navigation::Navigation;

/// Route of the connections management screen.
pub const CONNECTIONS_ROUTE: &str = "/connections";

pub const HEADING: &str = "Nenhuma conexão WhatsApp ativa";
pub const DESCRIPTION: &str =
    "Conecte um número de WhatsApp para começar a enviar e receber mensagens.";
pub const CONNECT_LABEL: &str = "Conectar WhatsApp";

const BADGE_ICON_SIZE: u32 = 28;
const BUTTON_ICON_SIZE: u32 = 16;

/// Sends the user to the connections screen.
pub fn connect_whatsapp(navigation: &Navigation) {
    tracing::debug!(route = CONNECTIONS_ROUTE, "opening connections setup");
    navigation.navigate(CONNECTIONS_ROUTE);
}

/// Empty state shown when there is no active WhatsApp connection.
#[component]
pub fn NoConnectionsView(navigation: Navigation, #[props(default)] icons: Icons) -> Element {
    rsx! {
        div {
            class: "empty-state",
            div {
                class: "empty-state__badge",
                {icons.render(IconName::Device, BADGE_ICON_SIZE)}
            }
            h2 { class: "empty-state__title", "{HEADING}" }
            p { class: "empty-state__description", "{DESCRIPTION}" }
            Button {
                class: "btn-primary empty-state__action",
                onclick: move |_| connect_whatsapp(&navigation),
                "{CONNECT_LABEL}"
                {icons.render(IconName::ForwardArrow, BUTTON_ICON_SIZE)}
            }
        }
    }
}
