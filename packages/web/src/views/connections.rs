use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Connections() -> Element {
    rsx! {
        main {
            class: "app-main",
            div {
                class: "empty-state",
                h2 { class: "empty-state__title", "Conexões" }
                p {
                    class: "empty-state__description",
                    "Escaneie o QR code no seu WhatsApp para conectar um novo número."
                }
                Link { class: "back-link", to: Route::Home {}, "Voltar" }
            }
        }
    }
}
