//! Core catalog pipeline: projection, ordering, filtering and safe
//! rendering of a small two-entity catalog (categories and people)
//! mirrored from a remote document store.
//!
//! The store pushes immutable full-collection snapshots; this crate reduces
//! them into an ordered local projection and composes the displayable
//! surface from it. All write paths live outside this crate.

pub mod filter;
pub mod logging;
pub mod markup;
pub mod model;
pub mod order;
pub mod projection;
pub mod service;
pub mod store;
pub mod view;

pub use filter::{filter_by_selection, people_in_category, CategoryFilter};
pub use logging::{default_log_level, init_logging, logging_status};
pub use markup::transform;
pub use model::{Category, Person};
pub use projection::CatalogState;
pub use service::catalog_service::{CatalogError, CatalogService, Selection};
pub use store::{Document, DocumentStore, MemoryStore, StoreError, Subscription};
pub use view::card::person_card;
pub use view::video::extract_video_id;
pub use view::{category_options, person_select, PersonSelect, SelectOption, ViewState};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
