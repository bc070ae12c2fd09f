//! # seafund
//!
//! Catalog domain for the Sea Fund crowdfunding page: the bundled game
//! records, the derived list views (filter, search, top-pledged), the
//! aggregate statistics shown above the list, and the number formatting
//! they render with.
//!
//! Everything in this crate is pure and synchronous so it can be unit
//! tested on the host; the browser frontend (`seafund_web`) owns the DOM
//! and the debounce timer and calls in here for every decision.
//!
//! ## Quick Start
//!
//! ```
//! use seafund::filter::FilterKind;
//! use seafund::stats::CatalogTotals;
//! use seafund::Catalog;
//!
//! let catalog = Catalog::from_json(
//!     r#"[{"name": "Gloamway", "description": "A lantern-lit trek.",
//!          "img": "assets/covers/gloamway.svg",
//!          "pledged": 50, "goal": 100, "backers": 5}]"#,
//! )?;
//!
//! let totals = CatalogTotals::compute(&catalog);
//! assert_eq!(totals.total_backers, 5);
//! assert_eq!(FilterKind::UnfundedOnly.apply(&catalog).len(), 1);
//! # Ok::<(), seafund::CatalogError>(())
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: the record type and the parsed, order-preserving catalog
//! - [`filter`]: the three button-selectable list views
//! - [`search`]: input normalization, allow-listing, and the match decision
//! - [`stats`]: whole-catalog reductions and the funding-status sentence
//! - [`highlight`]: the top-pledged pair shown above the list
//! - [`num_fmt`]: grouped integers and whole-dollar currency

pub mod catalog;
pub mod filter;
pub mod highlight;
pub mod num_fmt;
pub mod search;
pub mod stats;

pub use catalog::{Catalog, CatalogError, GameRecord};
