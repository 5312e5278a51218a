use dioxus::prelude::*;

/// Help center / contact page
#[component]
pub fn Contact() -> Element {
    rsx! {
        section { class: "page",
            h1 { class: "page-title", "Help center" }
            p { "Questions about an order or a product? Reach out:" }
            ul { class: "contact-list",
                li { "Email: soporte@faraon.example" }
                li { "Phone: +51 1 555 0147" }
                li { "Hours: Mon-Sat, 9:00-18:00" }
            }
        }
    }
}
