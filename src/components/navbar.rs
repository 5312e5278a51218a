//! Site header with the category navigation core.
//!
//! Owns the taxonomy (fetched once per mount), the menu state machine,
//! the body scroll lock, and the navigation dispatcher. The desktop
//! dropdown and the mobile drawer are two renderings of the same
//! read-only taxonomy; which one shows is a CSS media-query concern.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::document;
use dioxus::prelude::*;
use faraon_core::nav::{
    catalog_path, category_path, subcategory_path, MenuState, Overlay, ScrollLock, ScrollSurface,
};
use faraon_core::Taxonomy;

use crate::components::category_dropdown::CategoryDropdown;
use crate::components::mobile_drawer::MobileDrawer;
use crate::components::profile_menu::ProfileMenu;
use crate::context::{use_catalog, use_session, use_toasts};

/// Scroll capability over `document.body`. Page-global; exactly one
/// header is mounted at a time, so one lock owns the flag.
struct BodyScroll;

impl ScrollSurface for BodyScroll {
    fn set_locked(&self, locked: bool) {
        let overflow = if locked { "hidden" } else { "" };
        let _ = document::eval(&format!("document.body.style.overflow = '{overflow}';"));
    }
}

/// Site header component
#[component]
pub fn Navbar() -> Element {
    let catalog = use_catalog();
    let mut session = use_session();
    let toasts = use_toasts();
    let nav = navigator();

    let mut menu = use_signal(MenuState::new);
    let mut taxonomy = use_signal(Taxonomy::default);
    let mut loading = use_signal(|| true);

    // Fetch categories and subcategories together, once per mount.
    // Either request failing leaves the taxonomy empty with a single
    // toast; the loading flag clears on every path. The task is scoped
    // to this component, so an unmount mid-fetch just drops it.
    use_effect(move || {
        spawn(async move {
            loading.set(true);
            match catalog().load_taxonomy().await {
                Ok(loaded) => taxonomy.set(loaded),
                Err(e) => {
                    tracing::error!(error = %e, "failed to load categories");
                    toasts.error("Could not load categories");
                }
            }
            loading.set(false);
        });
    });

    // Body scroll follows the drawer. The lock is owned by this mount;
    // use_drop releases it even if the header unmounts with the drawer
    // open, and the guard's Drop backstops the release order.
    let scroll = use_hook(|| Rc::new(RefCell::new(ScrollLock::new(BodyScroll))));
    use_effect({
        let scroll = scroll.clone();
        move || {
            let open = menu.read().mobile_drawer_open;
            scroll.borrow_mut().update(open);
        }
    });
    use_drop({
        let scroll = scroll.clone();
        move || scroll.borrow_mut().update(false)
    });

    // Navigation dispatcher: the single choke point for route changes
    // from the header. Closes every menu, then moves.
    let navigate_to = move |path: String| {
        menu.with_mut(|m| m.close_all());
        nav.push(path);
    };

    let select_category = move |name: String| {
        navigate_to(category_path(&name));
    };
    let select_subcategory = move |(category, sub): (String, String)| {
        navigate_to(subcategory_path(&category, &sub));
    };

    // Logout never fails from the UI's perspective.
    let logout = move |_: ()| {
        session.with_mut(|s| s.logout());
        toasts.success("Signed out");
        navigate_to("/".to_string());
    };

    let user = session.read().current_user().cloned();
    let drawer_user = user.clone();
    let state = menu();

    // Static links shown in the desktop nav row
    let links = [
        ("Home", "/"),
        ("Products", catalog_path()),
        ("Contact", "/contact"),
    ];

    rsx! {
        header { class: "site-header",
            div { class: "header-row",
                button {
                    class: "hamburger mobile-only",
                    "aria-label": "Open menu",
                    onclick: move |_| menu.with_mut(|m| m.open_mobile_drawer()),
                    "\u{2630}"
                }

                button {
                    class: "brand",
                    onclick: move |_| navigate_to("/".to_string()),
                    "Faraón"
                }

                div { class: "header-actions",
                    if let Some(user) = user {
                        div { class: "desktop-only",
                            ProfileMenu {
                                user: user.clone(),
                                open: state.profile_menu_open,
                                on_toggle: move |_| menu.with_mut(|m| m.toggle_profile_menu()),
                                on_dismiss: move |_| menu.with_mut(|m| m.dismiss(Overlay::ProfileMenu)),
                                on_navigate: navigate_to,
                                on_logout: logout,
                            }
                        }
                    }
                }
            }

            div { class: "header-nav desktop-only",
                CategoryDropdown {
                    taxonomy: taxonomy(),
                    loading: loading(),
                    open: state.category_dropdown_open,
                    on_toggle: move |_| menu.with_mut(|m| m.toggle_category_dropdown()),
                    on_dismiss: move |_| menu.with_mut(|m| m.dismiss(Overlay::CategoryDropdown)),
                    on_select_category: select_category,
                    on_select_subcategory: select_subcategory,
                }

                nav { class: "nav-links",
                    for (label, path) in links {
                        button {
                            class: "nav-link",
                            onclick: move |_| navigate_to(path.to_string()),
                            "{label}"
                        }
                    }
                }
            }
        }

        MobileDrawer {
            open: state.mobile_drawer_open,
            user: drawer_user,
            taxonomy: taxonomy(),
            loading: loading(),
            expanded: state.expanded_mobile_category,
            on_close: move |_| menu.with_mut(|m| m.close_mobile_drawer()),
            on_toggle_category: move |id| menu.with_mut(|m| m.toggle_mobile_category(id)),
            on_navigate: navigate_to,
            on_select_category: select_category,
            on_select_subcategory: select_subcategory,
            on_logout: logout,
        }
    }
}
