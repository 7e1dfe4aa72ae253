//! Category record.

use crate::model::NO_NAME_PLACEHOLDER;
use crate::store::Document;

/// One catalog category.
///
/// Categories group people through the soft foreign key
/// [`Person::category_id`](crate::model::Person::category_id); nothing
/// enforces the reference on the store side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Opaque store-assigned identifier.
    pub id: String,
    /// Display name. Empty when the record carries none; by convention every
    /// record visible to the pipeline has one.
    pub name: String,
    pub description: Option<String>,
    /// Server-assigned creation time, epoch milliseconds.
    pub created_at: Option<i64>,
    /// Server-assigned last-update time, epoch milliseconds.
    pub updated_at: Option<i64>,
}

impl Category {
    /// Decodes one store document. Never fails: absent or mistyped fields
    /// fall back to their defaults.
    pub fn from_document(doc: &Document) -> Self {
        Self {
            id: doc.id.clone(),
            name: doc.text_field("name").unwrap_or_default(),
            description: doc.text_field("description"),
            created_at: doc.int_field("createdAt"),
            updated_at: doc.int_field("updatedAt"),
        }
    }

    /// Name with the documented placeholder substituted for empty values.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            NO_NAME_PLACEHOLDER
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Category;
    use crate::store::Document;
    use serde_json::json;

    #[test]
    fn decodes_full_record() {
        let doc = Document::new(
            "c1",
            json!({
                "name": "Mathematicians",
                "description": "Numbers people",
                "createdAt": 1000,
                "updatedAt": 2000
            }),
        );
        let category = Category::from_document(&doc);
        assert_eq!(category.id, "c1");
        assert_eq!(category.name, "Mathematicians");
        assert_eq!(category.description.as_deref(), Some("Numbers people"));
        assert_eq!(category.created_at, Some(1000));
        assert_eq!(category.updated_at, Some(2000));
    }

    #[test]
    fn missing_name_decodes_empty_and_displays_placeholder() {
        let doc = Document::new("c2", json!({}));
        let category = Category::from_document(&doc);
        assert_eq!(category.name, "");
        assert_eq!(category.display_name(), "[No name]");
    }
}
