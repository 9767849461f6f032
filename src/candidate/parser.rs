//! Candidate parsing entry point.

use super::design_system::DesignSystem;
use super::nodes::Candidate;
use super::segment::segment;
use super::utility::classify_utility;
use super::variant::classify_variant;

/// Parse one raw class string into a [`Candidate`].
///
/// Returns `None` for anything outside the grammar: a missing theme prefix,
/// unbalanced brackets, an unknown utility or variant, a modifier on a static
/// utility, an empty required value. Plain class names that are not utilities
/// are the common case, so there is no error to inspect.
pub fn parse_candidate<D>(raw: &str, design_system: &D) -> Option<Candidate>
where
    D: DesignSystem + ?Sized,
{
    let mut input = raw;

    if let Some(prefix) = design_system.theme_prefix().filter(|p| !p.is_empty()) {
        input = match input
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix(':'))
        {
            Some(rest) => rest,
            None => {
                tracing::trace!(candidate = raw, prefix, "missing theme prefix");
                return None;
            }
        };
    }

    let (input, important) = match input.strip_suffix('!') {
        Some(rest) => (rest, true),
        None => (input, false),
    };

    let segments = segment(input, ':');
    let Some((base, raw_variants)) = segments.split_last() else {
        tracing::trace!(candidate = raw, "unbalanced brackets");
        return None;
    };

    let utility = classify_utility(base, design_system)?;

    // Right to left, so the variant closest to the utility comes first.
    let mut variants = Vec::with_capacity(raw_variants.len());
    for raw_variant in raw_variants.iter().rev() {
        variants.push(classify_variant(raw_variant, design_system)?);
    }

    Some(utility.into_candidate(important, variants, raw))
}
