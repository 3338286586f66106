use dioxus::prelude::*;

/// A Bootstrap-styled modal dialog with a backdrop.
/// Clicking the backdrop or the close button triggers `on_close`.
#[component]
pub fn ModalOverlay(
    id: String,
    title: String,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "modal-backdrop fade show" }
        div {
            id: "{id}",
            class: "modal fade show d-block",
            tabindex: "-1",
            role: "dialog",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-dialog modal-dialog-scrollable",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                div {
                    class: "modal-content",
                    div {
                        class: "modal-header",
                        h5 { class: "modal-title", "{title}" }
                        button {
                            r#type: "button",
                            class: "btn-close",
                            aria_label: "Close",
                            onclick: move |_| on_close.call(()),
                        }
                    }
                    div {
                        class: "modal-body",
                        {children}
                    }
                }
            }
        }
    }
}
