use dioxus::prelude::*;

/// Plain clickable control. Extra classes are appended to `btn`.
#[component]
pub fn Button(
    onclick: EventHandler<MouseEvent>,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "btn {class}",
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_renders_children_and_class() {
        fn app() -> Element {
            rsx! {
                Button { class: "btn-primary", onclick: move |_| {}, "Save" }
            }
        }

        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.starts_with("<button"));
        assert!(html.contains("type=\"button\""));
        assert!(html.contains("class=\"btn btn-primary\""));
        assert!(html.contains("Save"));
    }
}
