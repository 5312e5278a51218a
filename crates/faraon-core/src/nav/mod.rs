//! Header menu state machine.
//!
//! Four largely-orthogonal regions: the profile dropdown, the desktop
//! category dropdown, the mobile drawer, and the drawer's single-open
//! category accordion. The one cross-region rule is that closing the
//! drawer also collapses the accordion, so reopening it never shows a
//! stale expansion.
//!
//! All of this is plain data so the transitions can be tested without a
//! UI runtime; the Dioxus header holds a `Signal<MenuState>` and calls
//! these methods from its event handlers.

mod routes;
mod scroll;

pub use routes::{catalog_path, category_path, subcategory_path};
pub use scroll::{ScrollLock, ScrollSurface};

use crate::types::CategoryId;

/// A dismissable overlay region tracked by the outside-interaction guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    ProfileMenu,
    CategoryDropdown,
    MobileDrawer,
}

/// Open/closed state of every header overlay.
///
/// Created all-closed at mount, mutated only by direct user interaction
/// or outside-interaction dismissal, discarded on unmount. Never
/// persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuState {
    pub profile_menu_open: bool,
    pub category_dropdown_open: bool,
    pub mobile_drawer_open: bool,
    /// At most one drawer category is expanded at a time
    pub expanded_mobile_category: Option<CategoryId>,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the profile dropdown. Only meaningful while a user is
    /// signed in; the header does not render the trigger for guests.
    pub fn toggle_profile_menu(&mut self) {
        self.profile_menu_open = !self.profile_menu_open;
    }

    /// Flip the desktop category dropdown
    pub fn toggle_category_dropdown(&mut self) {
        self.category_dropdown_open = !self.category_dropdown_open;
    }

    /// Open the mobile drawer. Explicit rather than a toggle: the
    /// drawer has distinct open (hamburger) and close (backdrop, X
    /// button) affordances.
    pub fn open_mobile_drawer(&mut self) {
        self.mobile_drawer_open = true;
    }

    /// Close the mobile drawer and collapse its accordion
    pub fn close_mobile_drawer(&mut self) {
        self.mobile_drawer_open = false;
        self.expanded_mobile_category = None;
    }

    /// Single-open accordion policy: toggling the expanded category
    /// collapses it, toggling any other expands that one and implicitly
    /// collapses the previous.
    pub fn toggle_mobile_category(&mut self, category_id: CategoryId) {
        if self.expanded_mobile_category == Some(category_id) {
            self.expanded_mobile_category = None;
        } else {
            self.expanded_mobile_category = Some(category_id);
        }
    }

    /// Whether the given drawer category is currently expanded
    pub fn is_mobile_category_expanded(&self, category_id: CategoryId) -> bool {
        self.expanded_mobile_category == Some(category_id)
    }

    /// Outside-interaction dismissal: close exactly one region, leaving
    /// the others untouched.
    pub fn dismiss(&mut self, overlay: Overlay) {
        match overlay {
            Overlay::ProfileMenu => self.profile_menu_open = false,
            Overlay::CategoryDropdown => self.category_dropdown_open = false,
            Overlay::MobileDrawer => self.close_mobile_drawer(),
        }
    }

    /// Close everything ahead of a navigation: profile menu, then the
    /// drawer (with its accordion), then the category dropdown. No menu
    /// survives a route change.
    pub fn close_all(&mut self) {
        self.profile_menu_open = false;
        self.close_mobile_drawer();
        self.category_dropdown_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_all_closed() {
        let state = MenuState::new();
        assert!(!state.profile_menu_open);
        assert!(!state.category_dropdown_open);
        assert!(!state.mobile_drawer_open);
        assert!(state.expanded_mobile_category.is_none());
    }

    #[test]
    fn toggles_are_independent() {
        let mut state = MenuState::new();
        state.toggle_profile_menu();
        state.toggle_category_dropdown();
        assert!(state.profile_menu_open);
        assert!(state.category_dropdown_open);

        state.toggle_profile_menu();
        assert!(!state.profile_menu_open);
        assert!(state.category_dropdown_open);
    }

    #[test]
    fn accordion_round_trip_is_idempotent() {
        let mut state = MenuState::new();
        state.toggle_mobile_category(1);
        assert_eq!(state.expanded_mobile_category, Some(1));
        state.toggle_mobile_category(1);
        assert_eq!(state.expanded_mobile_category, None);
    }

    #[test]
    fn accordion_is_single_open() {
        let mut state = MenuState::new();
        state.toggle_mobile_category(1);
        state.toggle_mobile_category(2);
        assert_eq!(state.expanded_mobile_category, Some(2));
        assert!(!state.is_mobile_category_expanded(1));
        assert!(state.is_mobile_category_expanded(2));
    }

    #[test]
    fn closing_drawer_resets_accordion() {
        let mut state = MenuState::new();
        state.open_mobile_drawer();
        state.toggle_mobile_category(3);

        state.close_mobile_drawer();
        assert!(!state.mobile_drawer_open);
        assert_eq!(state.expanded_mobile_category, None);

        // Reopening starts with nothing expanded.
        state.open_mobile_drawer();
        assert_eq!(state.expanded_mobile_category, None);
    }

    #[test]
    fn dismiss_closes_only_its_region() {
        let mut state = MenuState::new();
        state.toggle_profile_menu();
        state.toggle_category_dropdown();

        state.dismiss(Overlay::ProfileMenu);
        assert!(!state.profile_menu_open);
        assert!(state.category_dropdown_open);

        state.dismiss(Overlay::CategoryDropdown);
        assert!(!state.category_dropdown_open);
    }

    #[test]
    fn dismiss_drawer_resets_accordion() {
        let mut state = MenuState::new();
        state.open_mobile_drawer();
        state.toggle_mobile_category(5);

        state.dismiss(Overlay::MobileDrawer);
        assert!(!state.mobile_drawer_open);
        assert_eq!(state.expanded_mobile_category, None);
    }

    #[test]
    fn close_all_from_any_state() {
        let mut state = MenuState::new();
        state.toggle_profile_menu();
        state.toggle_category_dropdown();
        state.open_mobile_drawer();
        state.toggle_mobile_category(2);

        state.close_all();
        assert_eq!(state, MenuState::new());
    }
}
