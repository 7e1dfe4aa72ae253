//! Person record.

use crate::model::NO_NAME_PLACEHOLDER;
use crate::store::Document;

/// One catalog person.
///
/// All optional fields are presence-or-default: an absent field and a blank
/// string decode to the same `None`. Dates are free-form display strings,
/// never validated as calendar dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Opaque store-assigned identifier.
    pub id: String,
    /// Display name. Empty when the record carries none.
    pub name: String,
    /// Free-form date of birth.
    pub dob: Option<String>,
    /// Free-form date of death.
    pub dod: Option<String>,
    /// Required by the external write path, but tolerated absent on read.
    pub wikipedia_url: Option<String>,
    pub image_url: Option<String>,
    pub youtube_url: Option<String>,
    /// Soft foreign key to a `Category` id; may dangle.
    pub category_id: Option<String>,
    /// Ordered, not deduplicated.
    pub tags: Vec<String>,
    /// Free text in the restricted markup subset.
    pub bio_markdown: Option<String>,
    /// Server-assigned creation time, epoch milliseconds.
    pub created_at: Option<i64>,
    /// Server-assigned last-update time, epoch milliseconds.
    pub updated_at: Option<i64>,
}

impl Person {
    /// Decodes one store document. Never fails: absent or mistyped fields
    /// fall back to their defaults.
    pub fn from_document(doc: &Document) -> Self {
        Self {
            id: doc.id.clone(),
            name: doc.text_field("name").unwrap_or_default(),
            dob: doc.text_field("dob"),
            dod: doc.text_field("dod"),
            wikipedia_url: doc.text_field("wikipediaURL"),
            image_url: doc.text_field("imageURL"),
            youtube_url: doc.text_field("youtubeURL"),
            category_id: doc.text_field("categoryID"),
            tags: doc.text_list_field("tags"),
            bio_markdown: match doc.fields.get("bioMarkdown").and_then(|v| v.as_str()) {
                Some(text) if !text.is_empty() => Some(text.to_string()),
                _ => None,
            },
            created_at: doc.int_field("createdAt"),
            updated_at: doc.int_field("updatedAt"),
        }
    }

    /// Last whitespace-delimited token of the name, the surname
    /// approximation both sort paths key on. Empty for empty names.
    pub fn surname_key(&self) -> &str {
        self.name.split_whitespace().last().unwrap_or("")
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
