use dioxus::prelude::*;

use crate::context::use_session;

/// Order history page (read-only list, fed by the orders collaborator)
#[component]
pub fn Orders() -> Element {
    let session = use_session();
    let signed_in = session.read().current_user().is_some();

    rsx! {
        section { class: "page",
            h1 { class: "page-title", "My Orders" }

            if signed_in {
                p { class: "page-hint", "You have no orders yet." }
            } else {
                p { class: "page-hint", "Sign in to see your orders." }
            }
        }
    }
}
