//! Catalog domain model.
//!
//! # Responsibility
//! - Define the canonical `Category` and `Person` records the pipeline
//!   projects and renders.
//! - Decode raw store documents defensively: every optional field becomes an
//!   explicit presence-or-default value here, so no rendering code ever
//!   re-checks raw document shape.
//!
//! # Invariants
//! - Decoding never fails; a malformed record degrades field-by-field
//!   instead of aborting the snapshot it arrived in.
//! - `name` is kept verbatim (possibly empty); display placeholders are a
//!   view concern.

pub mod category;
pub mod person;

pub use category::Category;
pub use person::Person;

/// Placeholder shown wherever a record carries no usable name.
pub const NO_NAME_PLACEHOLDER: &str = "[No name]";
