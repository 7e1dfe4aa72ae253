//! Deterministic comparators for catalog records.
//!
//! # Responsibility
//! - Order categories by name and people by surname approximation (last
//!   whitespace-delimited name token).
//! - Keep the two observed person-sort paths distinct: the global list
//!   compares tokens case-aware, the public-page load path lower-cases
//!   tokens first.
//!
//! # Invariants
//! - Comparators never panic; empty names sort with an empty key.
//! - Sorting is stable, so re-sorting an already-sorted set is a no-op.

use crate::model::{Category, Person};
use std::cmp::Ordering;

/// Locale-aware comparison approximation: case-folded code-point order with
/// a case-sensitive tie-break. Stands in for `localeCompare`; no collation
/// tables are involved.
pub fn collate(a: &str, b: &str) -> Ordering {
    match a.to_lowercase().cmp(&b.to_lowercase()) {
        Ordering::Equal => a.cmp(b),
        folded => folded,
    }
}

/// Categories sort ascending by name.
pub fn category_order(a: &Category, b: &Category) -> Ordering {
    collate(&a.name, &b.name)
}

/// Global person order: surname key first, full name as tie-break.
pub fn person_order(a: &Person, b: &Person) -> Ordering {
    match collate(a.surname_key(), b.surname_key()) {
        Ordering::Equal => collate(&a.name, &b.name),
        other => other,
    }
}

/// Public-page person order: surname keys are lower-cased before comparison;
/// ties fall back to the unlowered full names.
pub fn person_public_order(a: &Person, b: &Person) -> Ordering {
    let key_a = a.surname_key().to_lowercase();
    let key_b = b.surname_key().to_lowercase();
    match key_a.cmp(&key_b) {
        Ordering::Equal => collate(&a.name, &b.name),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::{category_order, collate, person_order, person_public_order};
    use crate::model::{Category, Person};
    use crate::store::Document;
    use serde_json::json;
    use std::cmp::Ordering;

    fn person(name: &str) -> Person {
        Person::from_document(&Document::new("id", json!({ "name": name })))
    }

    #[test]
    fn collate_folds_case_before_comparing() {
        assert_eq!(collate("adams", "Smith"), Ordering::Less);
        assert_eq!(collate("Smith", "smith"), Ordering::Less);
        assert_eq!(collate("same", "same"), Ordering::Equal);
    }

    #[test]
    fn people_sort_by_last_name_token() {
        let mut people = vec![
            person("Zadie Smith"),
            person("John Quincy Adams"),
            person("Plato"),
        ];
        people.sort_by(person_order);
        let names: Vec<&str> = people.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["John Quincy Adams", "Plato", "Zadie Smith"]);
    }

    #[test]
    fn full_name_breaks_surname_ties() {
        let mut people = vec![person("Zadie Smith"), person("Adam Smith")];
        people.sort_by(person_order);
        assert_eq!(people[0].name, "Adam Smith");

        let mut public = vec![person("Zadie Smith"), person("Adam Smith")];
        public.sort_by(person_public_order);
        assert_eq!(public[0].name, "Adam Smith");
    }

    #[test]
    fn empty_names_sort_first_without_panicking() {
        let mut people = vec![person("Ada Lovelace"), person("")];
        people.sort_by(person_order);
        assert_eq!(people[0].name, "");
    }

    #[test]
    fn resorting_a_sorted_set_is_identity() {
        let mut people = vec![
            person("Ada Lovelace"),
            person("Alan Turing"),
            person("Grace Hopper"),
            person("grace hopper"),
        ];
        people.sort_by(person_public_order);
        let first: Vec<String> = people.iter().map(|p| p.name.clone()).collect();
        people.sort_by(person_public_order);
        let second: Vec<String> = people.iter().map(|p| p.name.clone()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn categories_sort_by_name() {
        let c = |name: &str| Category::from_document(&Document::new("c", json!({ "name": name })));
        let mut categories = vec![c("Writers"), c("artists"), c("Mathematicians")];
        categories.sort_by(category_order);
        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["artists", "Mathematicians", "Writers"]);
    }
}
