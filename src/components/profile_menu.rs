//! Profile dropdown (desktop).
//!
//! Trigger button plus the account panel. Dismissal follows the
//! backdrop pattern: while open, a full-viewport backdrop sits under
//! the panel and a pointer-down on it closes exactly this region.

use dioxus::prelude::*;
use faraon_core::SessionUser;

#[derive(Props, Clone, PartialEq)]
pub struct ProfileMenuProps {
    /// The signed-in user; the trigger is not rendered for guests
    pub user: SessionUser,
    /// Whether the panel is open
    pub open: bool,
    /// Trigger clicked
    pub on_toggle: EventHandler<()>,
    /// Pointer-down landed outside the panel
    pub on_dismiss: EventHandler<()>,
    /// A menu entry was selected
    pub on_navigate: EventHandler<String>,
    /// Sign-out entry was selected
    pub on_logout: EventHandler<()>,
}

/// Account menu for the signed-in user
#[component]
pub fn ProfileMenu(props: ProfileMenuProps) -> Element {
    let chevron = if props.open { "\u{25B4}" } else { "\u{25BE}" };

    rsx! {
        div { class: "profile-menu-root",
            button {
                class: "profile-trigger",
                "aria-expanded": "{props.open}",
                onclick: move |_| props.on_toggle.call(()),
                span { class: "profile-trigger-name", "{props.user.name}" }
                span { class: "profile-chevron", "{chevron}" }
            }

            if props.open {
                div {
                    class: "menu-backdrop",
                    onpointerdown: move |_| props.on_dismiss.call(()),
                }

                div {
                    class: "profile-panel",
                    onpointerdown: move |e| e.stop_propagation(),

                    header { class: "profile-panel-header",
                        p { class: "profile-panel-name", "{props.user.full_name()}" }
                        p { class: "profile-panel-email", "{props.user.email}" }
                    }

                    button {
                        class: "profile-panel-item",
                        onclick: move |_| props.on_navigate.call("/profile".to_string()),
                        "My Profile"
                    }
                    button {
                        class: "profile-panel-item",
                        onclick: move |_| props.on_navigate.call("/orders".to_string()),
                        "My Orders"
                    }

                    button {
                        class: "profile-panel-item danger",
                        onclick: move |_| props.on_logout.call(()),
                        "Sign Out"
                    }
                }
            }
        }
    }
}
