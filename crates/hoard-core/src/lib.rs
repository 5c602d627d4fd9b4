//! # hoard-core
//!
//! Core types and file IO for the dragon-book catalog.
//!
//! This crate provides the foundational types shared across all hoard crates:
//! - [`BookRecord`]: one entry of a book list, kept as an ordered JSON object
//! - [`RatingSource`] and [`Rating`]: where a rating comes from and how it is
//!   stored
//! - Link canonicalization (tracking suffix removal)
//! - Scrape target planning (one target per distinct canonical link)
//! - [`CatalogFile`]: load and save a book list without disturbing fields this
//!   tool does not own

pub mod book;
pub mod catalog;
pub mod enums;
pub mod errors;
pub mod link;
pub mod rating;
pub mod targets;

pub use book::BookRecord;
pub use catalog::CatalogFile;
pub use enums::RatingSource;
pub use errors::CoreError;
pub use link::canonical_link;
pub use rating::{Rating, RatingTable};
pub use targets::{ScrapeTarget, plan_targets};
