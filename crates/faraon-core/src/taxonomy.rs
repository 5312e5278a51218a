//! The loaded category/subcategory taxonomy.
//!
//! One `Taxonomy` is fetched per header mount and shared read-only by
//! both menu surfaces (desktop dropdown and mobile drawer), so the
//! load/derivation logic exists exactly once.

use serde::{Deserialize, Serialize};

use crate::types::{Category, CategoryId, Subcategory};

/// Full category/subcategory set for one session.
///
/// Insertion order from the source feed is preserved for display.
/// Subcategories whose `category_id` references no loaded category are
/// tolerated; they simply never surface through [`subcategories_of`].
///
/// [`subcategories_of`]: Taxonomy::subcategories_of
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    pub categories: Vec<Category>,
    pub subcategories: Vec<Subcategory>,
}

impl Taxonomy {
    pub fn new(categories: Vec<Category>, subcategories: Vec<Subcategory>) -> Self {
        Self {
            categories,
            subcategories,
        }
    }

    /// Lazy, order-preserving filter of subcategories belonging to the
    /// given category. Pure over the loaded data; cheap enough at the
    /// expected taxonomy size that no caching is warranted.
    pub fn subcategories_of(
        &self,
        category_id: CategoryId,
    ) -> impl Iterator<Item = &Subcategory> + '_ {
        self.subcategories
            .iter()
            .filter(move |sub| sub.category_id == category_id)
    }

    /// True when no categories were loaded (initial state, or a failed fetch)
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Subcategory;

    fn category(id: CategoryId, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
        }
    }

    fn subcategory(id: i64, category_id: CategoryId, name: &str) -> Subcategory {
        Subcategory {
            id,
            category_id,
            name: name.to_string(),
        }
    }

    #[test]
    fn subcategories_of_filters_and_preserves_order() {
        let taxonomy = Taxonomy::new(
            vec![category(1, "Electronics"), category(2, "Home")],
            vec![
                subcategory(10, 1, "Phones"),
                subcategory(11, 2, "Kitchen"),
                subcategory(12, 1, "Laptops"),
            ],
        );

        let names: Vec<&str> = taxonomy
            .subcategories_of(1)
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, ["Phones", "Laptops"]);
    }

    #[test]
    fn unknown_category_yields_nothing() {
        let taxonomy = Taxonomy::new(
            vec![category(1, "Electronics")],
            vec![subcategory(10, 1, "Phones")],
        );
        assert_eq!(taxonomy.subcategories_of(99).count(), 0);
    }

    #[test]
    fn orphaned_subcategories_are_tolerated() {
        // Subcategory 20 points at a category that never loaded; it must
        // never surface, and nothing may fail because of it.
        let taxonomy = Taxonomy::new(
            vec![category(1, "Electronics")],
            vec![subcategory(10, 1, "Phones"), subcategory(20, 7, "Ghost")],
        );

        for cat in &taxonomy.categories {
            for sub in taxonomy.subcategories_of(cat.id) {
                assert_ne!(sub.name, "Ghost");
            }
        }
        assert!(!taxonomy.is_empty());
    }

    #[test]
    fn default_taxonomy_is_empty() {
        assert!(Taxonomy::default().is_empty());
    }
}
