//! Mobile slide-in drawer.
//!
//! The second rendering of the shared taxonomy: a single-open accordion
//! under the main links. The drawer stays mounted so the slide/fade
//! transitions can run; visibility is a class toggle. Backdrop
//! pointer-down and the X button both close it through `on_close`,
//! which also resets the accordion.

use dioxus::prelude::*;
use faraon_core::types::CategoryId;
use faraon_core::{SessionUser, Taxonomy};

#[derive(Props, Clone, PartialEq)]
pub struct MobileDrawerProps {
    /// Whether the drawer is open
    pub open: bool,
    /// Signed-in user, if any (guests get a sign-in hint instead)
    pub user: Option<SessionUser>,
    /// Shared read-only taxonomy projection
    pub taxonomy: Taxonomy,
    /// Taxonomy fetch still in flight
    pub loading: bool,
    /// The single expanded accordion category, if any
    pub expanded: Option<CategoryId>,
    /// Backdrop or X button hit
    pub on_close: EventHandler<()>,
    /// Accordion row hit
    pub on_toggle_category: EventHandler<CategoryId>,
    /// A static link was selected
    pub on_navigate: EventHandler<String>,
    /// "View all in {category}" selected
    pub on_select_category: EventHandler<String>,
    /// (category name, subcategory name) selected
    pub on_select_subcategory: EventHandler<(String, String)>,
    /// Sign-out entry selected
    pub on_logout: EventHandler<()>,
}

/// Slide-in navigation drawer for narrow viewports
#[component]
pub fn MobileDrawer(props: MobileDrawerProps) -> Element {
    let overlay_class = if props.open {
        "drawer-overlay open"
    } else {
        "drawer-overlay"
    };
    let greeting = match props.user {
        Some(ref user) => format!("Hello, {}", user.name),
        None => "Hello, guest".to_string(),
    };

    rsx! {
        div { class: "{overlay_class} mobile-only",
            div {
                class: "drawer-backdrop",
                onpointerdown: move |_| props.on_close.call(()),
            }

            aside {
                class: "drawer-panel",
                onpointerdown: move |e| e.stop_propagation(),

                header { class: "drawer-header",
                    div { class: "drawer-header-row",
                        p { class: "drawer-greeting", "{greeting}" }
                        button {
                            class: "drawer-close",
                            "aria-label": "Close menu",
                            onclick: move |_| props.on_close.call(()),
                            "\u{00D7}"
                        }
                    }
                    if let Some(ref user) = props.user {
                        span { class: "role-badge", "{user.role.to_uppercase()}" }
                    }
                }

                nav { class: "drawer-links",
                    button {
                        class: "drawer-link",
                        onclick: move |_| props.on_navigate.call("/".to_string()),
                        "Home"
                    }
                    button {
                        class: "drawer-link",
                        onclick: move |_| props.on_navigate.call("/catalog".to_string()),
                        "Products"
                    }
                    button {
                        class: "drawer-link",
                        onclick: move |_| props.on_navigate.call("/contact".to_string()),
                        "Help center"
                    }
                }

                section { class: "drawer-categories",
                    p { class: "drawer-section-title", "Our Categories" }

                    if props.loading {
                        p { class: "drawer-loading", "Loading..." }
                    } else {
                        for category in props.taxonomy.categories.iter() {
                            {
                                let id = category.id;
                                let expanded = props.expanded == Some(id);
                                let row_chevron = if expanded { "\u{25B4}" } else { "\u{203A}" };
                                let category_name = category.name.clone();
                                let view_all_name = category.name.clone();
                                let on_toggle_category = props.on_toggle_category;
                                let on_select_category = props.on_select_category;

                                rsx! {
                                    div { key: "{id}", class: "accordion-section",
                                        button {
                                            class: if expanded { "accordion-row expanded" } else { "accordion-row" },
                                            "aria-expanded": "{expanded}",
                                            onclick: move |_| on_toggle_category.call(id),
                                            span { "{category.name}" }
                                            span { class: "accordion-chevron", "{row_chevron}" }
                                        }

                                        if expanded {
                                            div { class: "accordion-panel",
                                                button {
                                                    class: "accordion-view-all",
                                                    onclick: move |_| on_select_category.call(view_all_name.clone()),
                                                    "View all in {category_name}"
                                                }

                                                for sub in props.taxonomy.subcategories_of(id) {
                                                    {
                                                        let pair = (category.name.clone(), sub.name.clone());
                                                        let on_select_subcategory = props.on_select_subcategory;

                                                        rsx! {
                                                            button {
                                                                key: "{sub.id}",
                                                                class: "accordion-subcategory",
                                                                onclick: move |_| on_select_subcategory.call(pair.clone()),
                                                                "{sub.name}"
                                                            }
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                if props.user.is_some() {
                    footer { class: "drawer-footer",
                        button {
                            class: "drawer-link",
                            onclick: move |_| props.on_navigate.call("/profile".to_string()),
                            "My Profile"
                        }
                        button {
                            class: "drawer-link",
                            onclick: move |_| props.on_navigate.call("/orders".to_string()),
                            "My Orders"
                        }
                        button {
                            class: "drawer-link danger",
                            onclick: move |_| props.on_logout.call(()),
                            "Sign Out"
                        }
                    }
                }
            }
        }
    }
}
