//! Catalog orchestration services.
//!
//! # Responsibility
//! - Tie the store boundary, projection, filter and view layers into the
//!   use-case API the UI shell consumes.
//! - Keep the shell decoupled from store and rendering details.

pub mod catalog_service;
