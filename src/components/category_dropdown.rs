//! Desktop category dropdown.
//!
//! One of the two renderings of the shared taxonomy: a two-column grid
//! of categories with their subcategories listed underneath. Selection
//! goes out through the header's navigation dispatcher; this component
//! never builds paths itself.

use dioxus::prelude::*;
use faraon_core::Taxonomy;

#[derive(Props, Clone, PartialEq)]
pub struct CategoryDropdownProps {
    /// Shared read-only taxonomy projection
    pub taxonomy: Taxonomy,
    /// Taxonomy fetch still in flight
    pub loading: bool,
    /// Whether the panel is open
    pub open: bool,
    /// Trigger clicked
    pub on_toggle: EventHandler<()>,
    /// Pointer-down landed outside the panel
    pub on_dismiss: EventHandler<()>,
    /// Category name selected
    pub on_select_category: EventHandler<String>,
    /// (category name, subcategory name) selected
    pub on_select_subcategory: EventHandler<(String, String)>,
}

/// Hover/click category dropdown for the desktop header
#[component]
pub fn CategoryDropdown(props: CategoryDropdownProps) -> Element {
    let chevron_class = if props.open {
        "dropdown-chevron open"
    } else {
        "dropdown-chevron"
    };

    rsx! {
        div { class: "category-root",
            button {
                class: "category-trigger",
                "aria-expanded": "{props.open}",
                onclick: move |_| props.on_toggle.call(()),
                "Categories"
                span { class: "{chevron_class}", "\u{203A}" }
            }

            if props.open {
                div {
                    class: "menu-backdrop",
                    onpointerdown: move |_| props.on_dismiss.call(()),
                }

                div {
                    class: "category-panel",
                    onpointerdown: move |e| e.stop_propagation(),

                    if props.loading {
                        p { class: "category-panel-empty", "Loading..." }
                    } else if props.taxonomy.is_empty() {
                        p { class: "category-panel-empty", "No categories available" }
                    } else {
                        div { class: "category-grid",
                            for category in props.taxonomy.categories.iter() {
                                {
                                    let category_name = category.name.clone();
                                    let on_select_category = props.on_select_category;

                                    rsx! {
                                        div { key: "{category.id}", class: "category-column",
                                            button {
                                                class: "category-name",
                                                onclick: move |_| on_select_category.call(category_name.clone()),
                                                "{category.name}"
                                            }
                                            ul { class: "subcategory-list",
                                                for sub in props.taxonomy.subcategories_of(category.id) {
                                                    {
                                                        let pair = (category.name.clone(), sub.name.clone());
                                                        let on_select_subcategory = props.on_select_subcategory;

                                                        rsx! {
                                                            li { key: "{sub.id}",
                                                                button {
                                                                    class: "subcategory-item",
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
                }
            }
        }
    }
}
