use dioxus::prelude::*;

/// Catalog browse page.
///
/// The header's navigation dispatcher lands here with the selected
/// filters in the query string; this page only reflects them back.
/// Product listing itself is the catalog collaborator's concern.
#[component]
pub fn Catalog(category: String, subcategory: String) -> Element {
    let heading = match (category.is_empty(), subcategory.is_empty()) {
        (true, _) => "All products".to_string(),
        (false, true) => category.clone(),
        (false, false) => format!("{category} / {subcategory}"),
    };

    rsx! {
        section { class: "page",
            h1 { class: "page-title", "{heading}" }

            if !category.is_empty() {
                div { class: "filter-chips",
                    span { class: "filter-chip", "Category: {category}" }
                    if !subcategory.is_empty() {
                        span { class: "filter-chip", "Subcategory: {subcategory}" }
                    }
                }
            }

            p { class: "page-hint", "Products matching your selection appear here." }
        }
    }
}
