//! UI components for the storefront shell.
//!
//! The header (`Navbar`) owns all menu state; the dropdown, profile
//! menu, and drawer are presentational children driven through props.

mod category_dropdown;
mod mobile_drawer;
mod navbar;
mod profile_menu;
mod toast;

pub use navbar::Navbar;
pub use toast::ToastHost;
