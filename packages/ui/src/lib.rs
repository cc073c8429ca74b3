//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod button;
pub use button::Button;

pub mod icon_provider;
pub use icon_provider::{FontAwesomeIcons, IconName, IconProvider, Icons};

pub mod navigation;
pub use navigation::{use_route_navigation, Navigate, Navigation, RouterNavigation};

pub mod views;
pub use views::{connect_whatsapp, NoConnectionsView, CONNECTIONS_ROUTE};
