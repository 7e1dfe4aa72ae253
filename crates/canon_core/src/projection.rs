//! Snapshot-fed projection of the remote catalog collections.
//!
//! # Responsibility
//! - Hold the latest known, ordered category and person sets.
//! - Replace a collection wholesale from each snapshot and re-sort it;
//!   nothing is ever patched incrementally.
//!
//! # Invariants
//! - One explicit state object owned by its controller; there is no shared
//!   module-level cache.
//! - The two collections are replaced independently: a person snapshot may
//!   be projected against a stale category set and vice versa.
//! - Records absent from a snapshot disappear; there are no tombstones.

use crate::model::{Category, Person};
use crate::order::{category_order, person_order, person_public_order};
use crate::store::Document;

/// Latest known projection of the two catalog collections.
#[derive(Debug, Default)]
pub struct CatalogState {
    categories: Vec<Category>,
    people: Vec<Person>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the category projection from a snapshot, sorted by name.
    pub fn apply_categories(&mut self, documents: &[Document]) {
        let mut categories: Vec<Category> =
            documents.iter().map(Category::from_document).collect();
        categories.sort_by(category_order);
        self.categories = categories;
    }

    /// Replaces the person projection from a snapshot, in the global order
    /// (surname key, full-name tie-break).
    pub fn apply_people(&mut self, documents: &[Document]) {
        let mut people: Vec<Person> = documents.iter().map(Person::from_document).collect();
        people.sort_by(person_order);
        self.people = people;
    }

    /// Replaces the person projection in the public-page load order
    /// (lower-cased surname keys).
    pub fn apply_people_public(&mut self, documents: &[Document]) {
        let mut people: Vec<Person> = documents.iter().map(Person::from_document).collect();
        people.sort_by(person_public_order);
        self.people = people;
    }

    /// Ordered categories, latest snapshot.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Ordered people, latest snapshot.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Resolves a category name by id. A dangling reference resolves to the
    /// empty string rather than failing.
    pub fn category_name(&self, category_id: &str) -> &str {
        self.categories
            .iter()
            .find(|category| category.id == category_id)
            .map(|category| category.name.as_str())
            .unwrap_or("")
    }
}
