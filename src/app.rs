use dioxus::prelude::*;
use faraon_core::{CatalogClient, SessionStore};

use crate::components::{Navbar, ToastHost};
use crate::context::Toasts;
use crate::pages::{Catalog, Contact, Home, Orders, Profile};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// Every page shares the [`StoreLayout`] shell (header + toasts). The
/// catalog route carries the category/subcategory filters the header's
/// navigation dispatcher composes; both arrive already percent-decoded.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[layout(StoreLayout)]
    #[route("/")]
    Home {},
    #[route("/catalog?:category&:subcategory")]
    Catalog {
        category: String,
        subcategory: String,
    },
    #[route("/contact")]
    Contact {},
    #[route("/profile")]
    Profile {},
    #[route("/orders")]
    Orders {},
}

/// Root application component.
///
/// Provides global styles, the catalog/session/toast contexts, and
/// routing.
#[component]
pub fn App() -> Element {
    let bootstrap = crate::bootstrap();

    let catalog: Signal<CatalogClient> = use_signal(|| bootstrap.catalog.clone());
    let session: Signal<SessionStore> = use_signal(|| bootstrap.session.clone());

    use_context_provider(|| catalog);
    use_context_provider(|| session);
    use_context_provider(Toasts::new);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

/// Shared page shell: header with the category navigation, the toast
/// area, and the routed page body.
#[component]
fn StoreLayout() -> Element {
    rsx! {
        Navbar {}
        main { class: "page-body",
            Outlet::<Route> {}
        }
        ToastHost {}
    }
}
