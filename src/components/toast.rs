//! Toast notification area.

use dioxus::prelude::*;

use crate::context::use_toasts;

/// Renders the active toasts in a fixed corner region. Clicking a
/// toast dismisses it ahead of its expiry.
#[component]
pub fn ToastHost() -> Element {
    let toasts = use_toasts();

    rsx! {
        div { class: "toast-region", "aria-live": "polite",
            for toast in toasts.entries() {
                {
                    let id = toast.id;

                    rsx! {
                        button {
                            key: "{id}",
                            class: "{toast.kind.class()}",
                            onclick: move |_| toasts.dismiss(id),
                            "{toast.message}"
                        }
                    }
                }
            }
        }
    }
}
