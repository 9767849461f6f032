//! Utility-class candidate parsing.
//!
//! A candidate is one whitespace-free class string such as
//! `md:hover:bg-red-500/50!`. [`parse_candidate`] turns it into a typed
//! [`Candidate`] by consulting a [`DesignSystem`] for which utilities and
//! variants exist. Failures are silent: anything outside the grammar is `None`.
//!
//! Pipeline:
//!
//! 1. `segment`: bracket-aware splitting on `:` and `/`
//! 2. `value`: modifier and value payload extraction
//! 3. `utility` / `variant`: classification against the design system
//! 4. `parser`: prefix, importance and variant ordering
//!
//! [`print_candidate`] goes the other way.

mod design_system;
mod nodes;
mod parser;
mod printer;
mod roots;
mod segment;
mod utility;
mod value;
mod variant;

use rayon::prelude::*;

pub use design_system::{DesignSystem, UtilityKind, VariantKind};
pub use nodes::{Candidate, Modifier, Value, Variant, VariantNodeKind};
pub use parser::parse_candidate;
pub use printer::print_candidate;
pub use segment::{decode_arbitrary_value, is_valid_arbitrary, segment};
pub use utility::{classify_utility, ParsedUtility};
pub use value::{extract_modifier, extract_value, parse_modifier, ModifierSplit};
pub use variant::classify_variant;

/// Parse every input in order, keeping only the candidates that parse.
pub fn parse_candidates<I, D>(raws: I, design_system: &D) -> Vec<Candidate>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    D: DesignSystem + ?Sized,
{
    raws.into_iter()
        .filter_map(|raw| parse_candidate(raw.as_ref(), design_system))
        .collect()
}

/// [`parse_candidates`] spread over the rayon pool. Output order matches input
/// order.
pub fn par_parse_candidates<S, D>(raws: &[S], design_system: &D) -> Vec<Candidate>
where
    S: AsRef<str> + Sync,
    D: DesignSystem + Sync + ?Sized,
{
    raws.par_iter()
        .filter_map(|raw| parse_candidate(raw.as_ref(), design_system))
        .collect()
}
