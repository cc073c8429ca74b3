use dioxus::prelude::*;

use ui::{use_route_navigation, NoConnectionsView};

/// Landing page. No connection exists yet, so it shows the empty state.
#[component]
pub fn Home() -> Element {
    let navigation = use_route_navigation();

    rsx! {
        main {
            class: "app-main",
            NoConnectionsView { navigation }
        }
    }
}
