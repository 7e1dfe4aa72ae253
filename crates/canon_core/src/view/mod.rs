//! Presentation surface: escaping, selection lists and view states.
//!
//! # Responsibility
//! - Compose the data handed to the UI shell: selection lists, per-person
//!   card fragments and the header text for every display state.
//! - Own HTML entity escaping. The markup transformer deliberately does not
//!   escape; everything the composer itself interpolates is escaped here.

pub mod card;
pub mod video;

use crate::model::{Category, Person};
use serde::{Deserialize, Serialize};

/// Leading placeholder label of the category selection list.
pub const CATEGORY_PLACEHOLDER: &str = "Select a category…";
/// Leading placeholder label of the person selection list.
pub const PERSON_PLACEHOLDER: &str = "Select a person…";

/// Escapes the five markup-significant characters for safe interpolation
/// into element content or attribute values.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            other => out.push(other),
        }
    }
    out
}

/// One entry of a selection list: the record id and its escaped label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn placeholder(label: &str) -> Self {
        Self {
            value: String::new(),
            label: label.to_string(),
        }
    }
}

/// Category selection list in engine order, placeholder first.
pub fn category_options(categories: &[Category]) -> Vec<SelectOption> {
    let mut options = vec![SelectOption::placeholder(CATEGORY_PLACEHOLDER)];
    options.extend(categories.iter().map(|category| SelectOption {
        value: category.id.clone(),
        label: escape_html(category.display_name()),
    }));
    options
}

/// Person selection list for one filtered subset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonSelect {
    /// Options in engine order, placeholder first.
    pub options: Vec<SelectOption>,
    /// False when the filtered subset is empty and the list should not be
    /// interactable.
    pub enabled: bool,
}

pub fn person_select(people: &[&Person]) -> PersonSelect {
    let mut options = vec![SelectOption::placeholder(PERSON_PLACEHOLDER)];
    options.extend(people.iter().map(|person| SelectOption {
        value: person.id.clone(),
        label: escape_html(person.display_name()),
    }));
    PersonSelect {
        options,
        enabled: !people.is_empty(),
    }
}

/// Serializes a selection list to `<option>` elements. Labels arrive
/// pre-escaped from the option builders.
pub fn options_markup(options: &[SelectOption]) -> String {
    options
        .iter()
        .map(|option| format!("<option value=\"{}\">{}</option>", option.value, option.label))
        .collect()
}

/// Display state of the card surface, with its header text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// No category selected yet.
    Prompt,
    /// Selected category matches nobody.
    EmptyCategory,
    /// Category selected; nothing shown until a person or show-all is picked.
    Browsing { available: usize },
    /// One person's card is shown.
    Single { name: String, fragment: String },
    /// Every card of the filtered subset is shown.
    All { fragments: Vec<String> },
    /// The chosen person is not part of the filtered subset.
    NotFound,
    /// The initial bulk load failed; the surface stays empty but stable.
    LoadError,
}

impl ViewState {
    /// Header/status line for this state. Plain text, not markup.
    pub fn header_text(&self) -> String {
        match self {
            Self::Prompt => "Select a category to see profiles.".to_string(),
            Self::EmptyCategory => "No people found in this category yet.".to_string(),
            Self::Browsing { available } => {
                format!("{available} profiles in this category. Choose one or show all.")
            }
            Self::Single { name, .. } => format!("Showing {name}."),
            Self::All { fragments } => {
                format!("Showing all {} profiles in this category.", fragments.len())
            }
            Self::NotFound => "Could not find that person in this category.".to_string(),
            Self::LoadError => "Error loading data. Please try again later.".to_string(),
        }
    }
}
