use dioxus::prelude::*;

use crate::context::use_session;

/// Account page: read-only view of the session user
#[component]
pub fn Profile() -> Element {
    let session = use_session();
    let user = session.read().current_user().cloned();

    rsx! {
        section { class: "page",
            h1 { class: "page-title", "My Profile" }

            if let Some(user) = user {
                dl { class: "profile-details",
                    dt { "Name" }
                    dd { "{user.full_name()}" }
                    dt { "Email" }
                    dd { "{user.email}" }
                    dt { "Role" }
                    dd { "{user.role}" }
                }
            } else {
                p { class: "page-hint", "Sign in to see your profile." }
            }
        }
    }
}
