//! Category filter over the ordered person projection.

use crate::model::Person;

/// Outcome of filtering the person set by a category selection.
///
/// "Nothing selected" and "selected but empty" are distinct presentation
/// states, never errors.
#[derive(Debug, PartialEq, Eq)]
pub enum CategoryFilter<'a> {
    /// No category selected (absent or empty selection value).
    NoSelection,
    /// A category is selected and matches nobody.
    Empty,
    /// The matching subsequence, in the order the person set already has.
    Matches(Vec<&'a Person>),
}

/// People whose soft foreign key equals `category_id`, preserving the input
/// order. Dangling references on other people are simply never matched.
pub fn people_in_category<'a>(people: &'a [Person], category_id: &str) -> Vec<&'a Person> {
    people
        .iter()
        .filter(|person| person.category_id.as_deref() == Some(category_id))
        .collect()
}

/// Applies a possibly-absent category selection to the person set.
pub fn filter_by_selection<'a>(
    people: &'a [Person],
    selection: Option<&str>,
) -> CategoryFilter<'a> {
    match selection {
        None | Some("") => CategoryFilter::NoSelection,
        Some(category_id) => {
            let matches = people_in_category(people, category_id);
            if matches.is_empty() {
                CategoryFilter::Empty
            } else {
                CategoryFilter::Matches(matches)
            }
        }
    }
}
