//! Navigation capability handed to views as a prop.
//!
//! Views never look up the router themselves. They receive a [`Navigation`]
//! handle, which is backed by the Dioxus router in the app
//! ([`use_route_navigation`]) and by a recording double in tests.

use std::rc::Rc;

use dioxus::prelude::*;
use dioxus::router::Navigator;

/// Something that can move the app to another route.
pub trait Navigate {
    fn navigate(&self, route: &str);
}

/// Cloneable handle around a [`Navigate`] implementation.
///
/// Two handles are equal only when they share the same underlying navigator,
/// so passing one as a prop does not trigger needless re-renders.
#[derive(Clone)]
pub struct Navigation(Rc<dyn Navigate>);

impl Navigation {
    pub fn new(navigator: impl Navigate + 'static) -> Self {
        Self(Rc::new(navigator))
    }

    pub fn navigate(&self, route: &str) {
        self.0.navigate(route);
    }
}

impl std::fmt::Debug for Navigation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Navigation").finish_non_exhaustive()
    }
}

impl PartialEq for Navigation {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// [`Navigate`] backed by the Dioxus router.
#[derive(Clone)]
pub struct RouterNavigation {
    navigator: Navigator,
}

impl RouterNavigation {
    pub fn new(navigator: Navigator) -> Self {
        Self { navigator }
    }
}

impl Navigate for RouterNavigation {
    fn navigate(&self, route: &str) {
        if let Some(failure) = self.navigator.push(route.to_string()) {
            tracing::warn!(route, ?failure, "router rejected navigation");
        }
    }
}

/// Router-backed [`Navigation`] for the calling component.
///
/// Must be called from a component rendered inside a `Router`.
pub fn use_route_navigation() -> Navigation {
    let navigator = use_navigator();
    use_hook(move || Navigation::new(RouterNavigation::new(navigator)))
}
