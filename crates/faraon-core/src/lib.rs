//! Faraón Storefront Core Library
//!
//! Non-visual logic for the storefront client: catalog and session
//! collaborators, the two-level category taxonomy, and the header menu
//! state machine. The Dioxus app in the workspace root renders on top
//! of this crate; nothing here depends on a UI runtime, so all of it is
//! unit-testable.
//!
//! ## Quick Start
//!
//! ```ignore
//! use faraon_core::{CatalogClient, nav::MenuState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = CatalogClient::new("http://localhost:8080/api")?;
//!     let taxonomy = catalog.load_taxonomy().await?;
//!
//!     for category in &taxonomy.categories {
//!         println!("{}", category.name);
//!         for sub in taxonomy.subcategories_of(category.id) {
//!             println!("  - {}", sub.name);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod catalog;
pub mod error;
pub mod nav;
pub mod taxonomy;
pub mod types;

// Re-exports
pub use auth::SessionStore;
pub use catalog::CatalogClient;
pub use error::{StoreError, StoreResult};
pub use taxonomy::Taxonomy;
pub use types::{Category, CategoryId, SessionUser, Subcategory, SubcategoryId};
