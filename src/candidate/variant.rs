//! Classification of the variant segments in front of the utility.

use super::design_system::{DesignSystem, VariantKind};
use super::nodes::Variant;
use super::roots::find_roots;
use super::segment::{decode_arbitrary_value, is_valid_arbitrary};
use super::value::{extract_modifier, extract_variant_value};

/// Classify one variant segment, recursing into compound variants.
///
/// The longest registered root decides the kind, so a static `data-disabled`
/// wins over a functional `data` root for the same text.
pub fn classify_variant<D>(segment: &str, design_system: &D) -> Option<Variant>
where
    D: DesignSystem + ?Sized,
{
    if let Some(inner) = segment.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        return arbitrary_selector(inner);
    }

    let split = extract_modifier(segment)?;

    for (root, value) in find_roots(split.base, |root| design_system.has_variant(root)) {
        let Some(kind) = design_system.variant_kind(root) else {
            continue;
        };

        match kind {
            VariantKind::Static => {
                if value.is_some() || split.modifier.is_some() {
                    tracing::trace!(variant = segment, root, "static variant takes no value");
                    return None;
                }
                return Some(Variant::Static {
                    root: root.to_string(),
                });
            }
            VariantKind::Functional => {
                let value = match value {
                    None => None,
                    // `data-foo]` style leftovers belong to a shorter root.
                    Some(value) if value.ends_with(']') && !value.starts_with('[') => continue,
                    Some(value) => Some(extract_variant_value(value)?),
                };
                return Some(Variant::Functional {
                    root: root.to_string(),
                    value,
                    modifier: split.modifier,
                });
            }
            VariantKind::Compound => {
                let sub_variant = classify_variant(value?, design_system)?;
                if !design_system.compounds_with(root, &sub_variant) {
                    tracing::trace!(variant = segment, root, "compound variant refuses sub-variant");
                    return None;
                }
                return Some(Variant::Compound {
                    root: root.to_string(),
                    modifier: split.modifier,
                    variant: Box::new(sub_variant),
                });
            }
        }
    }

    tracing::trace!(variant = segment, "no registered variant root");
    None
}

/// `[&>*]`, `[>_p]`, `[@media(print)]`
fn arbitrary_selector(inner: &str) -> Option<Variant> {
    // At-rules can't reference the matched element.
    if inner.starts_with('@') && inner.contains('&') {
        return None;
    }

    let selector = decode_arbitrary_value(inner);
    if !is_valid_arbitrary(&selector) || selector.trim().is_empty() {
        return None;
    }

    let relative = matches!(selector.as_bytes().first(), Some(b'>' | b'~' | b'+'));
    Some(Variant::Arbitrary { selector, relative })
}
