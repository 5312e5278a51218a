use dioxus::prelude::*;

/// Landing page
#[component]
pub fn Home() -> Element {
    let nav = navigator();

    rsx! {
        section { class: "page hero",
            h1 { class: "hero-title", "Welcome to Faraón" }
            p { class: "hero-subtitle", "Everything for your home, in one place." }
            button {
                class: "hero-cta",
                onclick: move |_| { nav.push("/catalog"); },
                "Browse products"
            }
        }
    }
}
