//! End-to-end flows through the header menu state machine: selecting a
//! taxonomy entry must produce the right catalog path and leave no menu
//! open, and outside-interaction dismissal must stay per-region.

use faraon_core::nav::{subcategory_path, MenuState, Overlay, ScrollLock, ScrollSurface};
use faraon_core::types::{Category, Subcategory};
use faraon_core::Taxonomy;

fn sample_taxonomy() -> Taxonomy {
    Taxonomy::new(
        vec![Category {
            id: 1,
            name: "Electronics".to_string(),
        }],
        vec![Subcategory {
            id: 10,
            category_id: 1,
            name: "Phones".to_string(),
        }],
    )
}

/// Simulates the header's navigation dispatcher: close everything, then
/// hand the path to the router. The recording closure stands in for
/// `navigator().push`.
fn dispatch(menu: &mut MenuState, path: String, navigated: &mut Vec<String>) {
    menu.close_all();
    navigated.push(path);
}

#[test]
fn subcategory_selection_navigates_and_closes_everything() {
    let taxonomy = sample_taxonomy();
    let category = &taxonomy.categories[0];
    let sub = taxonomy.subcategories_of(category.id).next().unwrap();

    // Worst case: every region open before the selection.
    let mut menu = MenuState::new();
    menu.toggle_profile_menu();
    menu.toggle_category_dropdown();
    menu.open_mobile_drawer();
    menu.toggle_mobile_category(category.id);

    let mut navigated = Vec::new();
    dispatch(
        &mut menu,
        subcategory_path(&category.name, &sub.name),
        &mut navigated,
    );

    assert_eq!(navigated.len(), 1);
    let path = &navigated[0];
    assert!(path.contains("category=Electronics"));
    assert!(path.contains("subcategory=Phones"));

    assert!(!menu.profile_menu_open);
    assert!(!menu.category_dropdown_open);
    assert!(!menu.mobile_drawer_open);
    assert_eq!(menu.expanded_mobile_category, None);
}

#[test]
fn selection_from_all_closed_still_navigates_once() {
    let mut menu = MenuState::new();
    let mut navigated = Vec::new();
    dispatch(
        &mut menu,
        subcategory_path("Electronics", "Phones"),
        &mut navigated,
    );

    assert_eq!(
        navigated,
        vec!["/catalog?category=Electronics&subcategory=Phones".to_string()]
    );
    assert_eq!(menu, MenuState::new());
}

#[test]
fn outside_pointer_down_closes_only_the_hit_region() {
    let mut menu = MenuState::new();
    menu.toggle_profile_menu();
    menu.toggle_category_dropdown();

    // Pointer-down lands outside the profile menu root.
    menu.dismiss(Overlay::ProfileMenu);
    assert!(!menu.profile_menu_open);
    assert!(menu.category_dropdown_open);

    // A pointer-down inside a region never reaches the guard; the
    // dropdown only closes when its own backdrop is hit.
    menu.dismiss(Overlay::CategoryDropdown);
    assert!(!menu.category_dropdown_open);
}

#[derive(Clone, Default)]
struct FlagSurface(std::rc::Rc<std::cell::Cell<bool>>);

impl ScrollSurface for FlagSurface {
    fn set_locked(&self, locked: bool) {
        self.0.set(locked);
    }
}

#[test]
fn unmount_with_open_drawer_releases_scroll_lock() {
    let surface = FlagSurface::default();
    let mut menu = MenuState::new();

    {
        let mut lock = ScrollLock::new(surface.clone());
        menu.open_mobile_drawer();
        lock.update(menu.mobile_drawer_open);
        assert!(surface.0.get(), "drawer open must lock scrolling");
        // Header unmounts here with the drawer still open.
    }

    assert!(!surface.0.get(), "unmount must restore scrolling");
}
