//! Named icon lookup, decoupled from any particular icon library.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::icons::{FaArrowRight, FaMobileScreen};
use crate::Icon;

/// Icons the views ask for by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconName {
    Device,
    ForwardArrow,
}

/// Renders a named icon at a square pixel size.
pub trait IconProvider {
    fn render(&self, name: IconName, size: u32) -> Element;
}

/// Font Awesome solid icons from `dioxus-free-icons`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FontAwesomeIcons;

impl IconProvider for FontAwesomeIcons {
    fn render(&self, name: IconName, size: u32) -> Element {
        match name {
            IconName::Device => rsx! {
                Icon { icon: FaMobileScreen, width: size, height: size }
            },
            IconName::ForwardArrow => rsx! {
                Icon { icon: FaArrowRight, width: size, height: size }
            },
        }
    }
}

/// Cloneable handle around an [`IconProvider`], compared by identity.
#[derive(Clone)]
pub struct Icons(Rc<dyn IconProvider>);

impl Icons {
    pub fn new(provider: impl IconProvider + 'static) -> Self {
        Self(Rc::new(provider))
    }

    pub fn render(&self, name: IconName, size: u32) -> Element {
        self.0.render(name, size)
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::new(FontAwesomeIcons)
    }
}

impl std::fmt::Debug for Icons {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Icons").finish_non_exhaustive()
    }
}

impl PartialEq for Icons {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Renders each icon as a text marker and remembers what was asked for.
    #[derive(Clone, Default)]
    pub(crate) struct RecordingIcons {
        pub(crate) requests: Rc<RefCell<Vec<(IconName, u32)>>>,
    }

    impl IconProvider for RecordingIcons {
        fn render(&self, name: IconName, size: u32) -> Element {
            self.requests.borrow_mut().push((name, size));
            rsx! {
                span { class: "test-icon", "{name:?}@{size}" }
            }
        }
    }

    #[test]
    fn test_icons_equality_is_identity() {
        let icons = Icons::default();
        assert_eq!(icons, icons.clone());
        assert_ne!(icons, Icons::default());
    }

    #[test]
    fn test_font_awesome_renders_svg() {
        fn app() -> Element {
            rsx! {
                div {
                    {FontAwesomeIcons.render(IconName::Device, 28)}
                    {FontAwesomeIcons.render(IconName::ForwardArrow, 16)}
                }
            }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert_eq!(html.matches("<svg").count(), 2);
        assert!(html.contains("width=\"28\""));
        assert!(html.contains("width=\"16\""));
    }
}
