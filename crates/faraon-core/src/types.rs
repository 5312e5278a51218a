//! Domain types shared between the catalog client and the UI.
//!
//! Categories and subcategories form a two-level product taxonomy; both
//! are immutable once loaded and identified by their numeric id. The
//! session user mirrors what the auth collaborator hands out and is
//! never mutated by this crate.

use serde::{Deserialize, Serialize};

/// Identifier for a [`Category`]
pub type CategoryId = i64;

/// Identifier for a [`Subcategory`]
pub type SubcategoryId = i64;

/// Top-level product category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// Second-level taxonomy node, belonging to exactly one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subcategory {
    pub id: SubcategoryId,
    pub category_id: CategoryId,
    pub name: String,
}

/// Signed-in user summary, as read from the auth collaborator.
///
/// Absent entirely for guests; this core only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
}

impl SessionUser {
    /// Full display name, as shown in the profile menu header
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subcategory_wire_names_are_camel_case() {
        let sub: Subcategory =
            serde_json::from_str(r#"{"id":10,"categoryId":1,"name":"Phones"}"#).unwrap();
        assert_eq!(sub.id, 10);
        assert_eq!(sub.category_id, 1);
        assert_eq!(sub.name, "Phones");
    }

    #[test]
    fn session_user_full_name() {
        let user = SessionUser {
            name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            role: "cliente".to_string(),
        };
        assert_eq!(user.full_name(), "Ada Lovelace");
    }
}
