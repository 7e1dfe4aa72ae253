//! Catalog use-case service.
//!
//! # Responsibility
//! - Own the catalog projection and the two collection subscriptions.
//! - Serve the UI boundary: selection lists, view states and card
//!   fragments for the three observed interactions (category chosen,
//!   person chosen, show-all).
//!
//! # Invariants
//! - Everything runs on one cooperative thread: snapshots are applied only
//!   inside `pump()`, never concurrently with a read.
//! - Snapshots are applied strictly in arrival order per collection; there
//!   is no reordering or sequence numbering.
//! - A total load failure degrades the view to a stable `LoadError` state;
//!   it never propagates a panic and is never retried automatically.

use crate::filter::{filter_by_selection, CategoryFilter};
use crate::projection::CatalogState;
use crate::store::{Document, DocumentStore, StoreError, StoreResult, Subscription, CATEGORIES, PEOPLE};
use crate::view::card::person_card;
use crate::view::{self, PersonSelect, SelectOption, ViewState};
use log::{debug, error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for catalog orchestration.
#[derive(Debug)]
pub enum CatalogError {
    /// The initial bulk read failed.
    Load(StoreError),
    /// Establishing a subscription failed.
    Subscribe(StoreError),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Load(err) => write!(f, "catalog load failed: {err}"),
            Self::Subscribe(err) => write!(f, "catalog subscription failed: {err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Load(err) | Self::Subscribe(err) => Some(err),
        }
    }
}

/// Current UI selection, as reported by the shell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Selected category id; `None` or empty means no selection.
    pub category: Option<String>,
    /// Selected person id within the category filter.
    pub person: Option<String>,
}

impl Selection {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn category(id: impl Into<String>) -> Self {
        Self {
            category: Some(id.into()),
            person: None,
        }
    }

    pub fn person(category: impl Into<String>, person: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            person: Some(person.into()),
        }
    }
}

/// Use-case facade over one document store.
pub struct CatalogService<S: DocumentStore> {
    store: S,
    state: CatalogState,
    categories_sub: Option<Subscription>,
    people_sub: Option<Subscription>,
    load_failed: bool,
}

impl<S: DocumentStore> CatalogService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: CatalogState::new(),
            categories_sub: None,
            people_sub: None,
            load_failed: false,
        }
    }

    /// Latest projection, for callers needing direct record access.
    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    /// One-shot bulk load of both collections (public-page load path; the
    /// person set uses the public ordering). A failure is logged, flips the
    /// view into its `LoadError` state and is not retried.
    pub fn load(&mut self) -> Result<(), CatalogError> {
        match self.read_both() {
            Ok((categories, people)) => {
                self.state.apply_categories(&categories);
                self.state.apply_people_public(&people);
                self.load_failed = false;
                info!(
                    "event=catalog_loaded module=service status=ok categories={} people={}",
                    self.state.categories().len(),
                    self.state.people().len()
                );
                Ok(())
            }
            Err(err) => {
                self.load_failed = true;
                error!("event=catalog_load_failed module=service status=error error={err}");
                Err(CatalogError::Load(err))
            }
        }
    }

    fn read_both(&self) -> StoreResult<(Vec<Document>, Vec<Document>)> {
        let categories = self.store.read_all(CATEGORIES)?;
        let people = self.store.read_all(PEOPLE)?;
        Ok((categories, people))
    }

    /// Establishes the two independent collection subscriptions. Their
    /// snapshots are not coordinated with each other.
    pub fn watch(&mut self) -> Result<(), CatalogError> {
        let categories = self
            .store
            .subscribe(CATEGORIES)
            .map_err(CatalogError::Subscribe)?;
        let people = self.store.subscribe(PEOPLE).map_err(CatalogError::Subscribe)?;
        self.categories_sub = Some(categories);
        self.people_sub = Some(people);
        Ok(())
    }

    /// Drains every pending snapshot in arrival order, replacing the
    /// affected collection wholesale each time. Returns how many snapshots
    /// were applied, so callers know whether to rebuild their view.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        if let Some(subscription) = &self.categories_sub {
            while let Some(snapshot) = subscription.poll() {
                self.state.apply_categories(&snapshot);
                applied += 1;
            }
        }
        if let Some(subscription) = &self.people_sub {
            while let Some(snapshot) = subscription.poll() {
                self.state.apply_people(&snapshot);
                applied += 1;
            }
        }
        if applied > 0 {
            debug!("event=snapshots_applied module=service count={applied}");
        }
        applied
    }

    /// Category selection list, placeholder first.
    pub fn category_options(&self) -> Vec<SelectOption> {
        view::category_options(self.state.categories())
    }

    /// Person selection list for the given category selection; disabled
    /// when the filter matches nobody.
    pub fn person_options(&self, category: Option<&str>) -> PersonSelect {
        match filter_by_selection(self.state.people(), category) {
            CategoryFilter::Matches(people) => view::person_select(&people),
            _ => view::person_select(&[]),
        }
    }

    /// View state for the current selection.
    pub fn view(&self, selection: &Selection) -> ViewState {
        if self.load_failed {
            return ViewState::LoadError;
        }
        match filter_by_selection(self.state.people(), selection.category.as_deref()) {
            CategoryFilter::NoSelection => ViewState::Prompt,
            CategoryFilter::Empty => ViewState::EmptyCategory,
            CategoryFilter::Matches(filtered) => match selection.person.as_deref() {
                None | Some("") => ViewState::Browsing {
                    available: filtered.len(),
                },
                Some(person_id) => match filtered.iter().find(|person| person.id == person_id) {
                    Some(person) => ViewState::Single {
                        name: person.display_name().to_string(),
                        fragment: person_card(person),
                    },
                    None => ViewState::NotFound,
                },
            },
        }
    }

    /// Show-all interaction: every card of the filtered subset, in order.
    pub fn view_all(&self, category: Option<&str>) -> ViewState {
        if self.load_failed {
            return ViewState::LoadError;
        }
        match filter_by_selection(self.state.people(), category) {
            CategoryFilter::NoSelection => ViewState::Prompt,
            CategoryFilter::Empty => ViewState::EmptyCategory,
            CategoryFilter::Matches(filtered) => ViewState::All {
                fragments: filtered.iter().map(|person| person_card(person)).collect(),
            },
        }
    }
}
