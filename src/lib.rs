//! # atomic-candidates
//!
//! Parses atomic-CSS utility-class strings (`hover:bg-red-500/50`,
//! `[mask-type:luminance]`, `group-[&_p]/card:flex!`) into typed candidates.
//!
//! ```ignore
//! use atomic_candidates::{catalog, parse_candidate};
//!
//! let catalog = catalog::load_defaults()?;
//! let candidate = parse_candidate("hover:bg-red-500/50", &catalog);
//! ```
//!
//! The parser is pure and never errs: a string that is not a known utility
//! simply yields `None`. Which names exist is decided by a
//! [`DesignSystem`]; [`catalog::Catalog`] is the bundled implementation, loaded
//! from TOML.

pub mod candidate;
pub mod catalog;

pub use candidate::{
    par_parse_candidates, parse_candidate, parse_candidates, print_candidate, Candidate,
    DesignSystem, Modifier, Value, Variant,
};
pub use catalog::{Catalog, CatalogError};
