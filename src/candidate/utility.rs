//! Classification of the base (rightmost) segment of a candidate.

use super::design_system::{DesignSystem, UtilityKind};
use super::nodes::{Candidate, Modifier, Value, Variant};
use super::roots::find_roots;
use super::segment::{decode_arbitrary_value, find_top_level, is_valid_arbitrary};
use super::value::{extract_modifier, extract_value};

/// The utility part of a candidate, before variants and importance are attached.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedUtility {
    Static {
        root: String,
    },
    Functional {
        root: String,
        value: Option<Value>,
        modifier: Option<Modifier>,
    },
    Arbitrary {
        property: String,
        value: String,
        modifier: Option<Modifier>,
    },
}

impl ParsedUtility {
    pub fn into_candidate(self, important: bool, variants: Vec<Variant>, raw: &str) -> Candidate {
        let raw = raw.to_string();
        match self {
            ParsedUtility::Static { root } => Candidate::Static {
                root,
                important,
                variants,
                raw,
            },
            ParsedUtility::Functional {
                root,
                value,
                modifier,
            } => Candidate::Functional {
                root,
                value,
                modifier,
                important,
                variants,
                raw,
            },
            ParsedUtility::Arbitrary {
                property,
                value,
                modifier,
            } => Candidate::Arbitrary {
                property,
                value,
                modifier,
                important,
                variants,
                raw,
            },
        }
    }
}

/// Classify `segment` as a static utility, a functional utility or an
/// arbitrary property. `None` when nothing in the design system matches.
pub fn classify_utility<D>(segment: &str, design_system: &D) -> Option<ParsedUtility>
where
    D: DesignSystem + ?Sized,
{
    if !segment.contains('[') && design_system.has_utility(segment, UtilityKind::Static) {
        return Some(ParsedUtility::Static {
            root: segment.to_string(),
        });
    }

    let split = extract_modifier(segment)?;
    let base = split.base;

    if base.starts_with('[') {
        return arbitrary_property(base, split.modifier);
    }

    let is_functional = |root: &str| design_system.has_utility(root, UtilityKind::Functional);

    // `bg-[#0088cc]` and `bg-(--brand)`: the root ends at the first opener.
    for (closer, opener) in [(']', "-["), (')', "-(")] {
        if !base.ends_with(closer) {
            continue;
        }
        let idx = base.find(opener)?;
        let root = &base[..idx];
        if !is_functional(root) {
            tracing::trace!(root, "unknown functional utility");
            return None;
        }
        let value = extract_value(&base[idx + 1..], split.modifier_text, split.modifier.as_ref())?;
        return Some(ParsedUtility::Functional {
            root: root.to_string(),
            value: Some(value),
            modifier: split.modifier,
        });
    }

    for (root, value) in find_roots(base, is_functional) {
        let value = match value {
            None => None,
            Some(value) => {
                match extract_value(value, split.modifier_text, split.modifier.as_ref()) {
                    Some(value) => Some(value),
                    None => continue,
                }
            }
        };
        return Some(ParsedUtility::Functional {
            root: root.to_string(),
            value,
            modifier: split.modifier,
        });
    }

    tracing::trace!(utility = segment, "no registered utility root");
    None
}

/// `[mask-type:luminance]`
fn arbitrary_property(base: &str, modifier: Option<Modifier>) -> Option<ParsedUtility> {
    let inner = base.strip_prefix('[')?.strip_suffix(']')?;
    if !matches!(inner.bytes().next(), Some(b'-' | b'a'..=b'z')) {
        return None;
    }

    let colon = find_top_level(inner, b':')?;
    if colon == 0 || colon == inner.len() - 1 {
        return None;
    }

    let value = decode_arbitrary_value(&inner[colon + 1..]);
    if !is_valid_arbitrary(&value) || value.trim().is_empty() {
        return None;
    }

    Some(ParsedUtility::Arbitrary {
        property: inner[..colon].to_string(),
        value,
        modifier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn catalog() -> Catalog {
        Catalog::new()
            .with_static_utility("flex")
            .with_static_utility("hidden")
            .with_functional_utility("bg")
            .with_functional_utility("bg-red")
            .with_functional_utility("w")
            .with_functional_utility("shadow")
            .with_functional_utility("-translate-x")
            .with_functional_utility("grid-cols")
    }

    #[test]
    fn static_utility() {
        assert_eq!(
            classify_utility("flex", &catalog()),
            Some(ParsedUtility::Static {
                root: "flex".into()
            })
        );
    }

    #[test]
    fn static_utility_rejects_modifier() {
        assert_eq!(classify_utility("flex/foo", &catalog()), None);
    }

    #[test]
    fn prefers_longest_functional_root() {
        let parsed = classify_utility("bg-red-500", &catalog()).unwrap();
        assert_eq!(
            parsed,
            ParsedUtility::Functional {
                root: "bg-red".into(),
                value: Some(Value::named("500")),
                modifier: None,
            }
        );
    }

    #[test]
    fn malformed_named_value_is_rejected() {
        assert_eq!(classify_utility("bg-red-a*b", &catalog()), None);
        let parsed = classify_utility("bg-red-0.5", &catalog()).unwrap();
        assert!(matches!(parsed, ParsedUtility::Functional { ref root, .. } if root == "bg-red"));
    }

    #[test]
    fn bare_functional_root_has_no_value() {
        assert_eq!(
            classify_utility("shadow", &catalog()),
            Some(ParsedUtility::Functional {
                root: "shadow".into(),
                value: None,
                modifier: None,
            })
        );
    }

    #[test]
    fn empty_payload_is_rejected() {
        assert_eq!(classify_utility("bg-", &catalog()), None);
        assert_eq!(classify_utility("flex-", &catalog()), None);
        assert_eq!(classify_utility("bg-[]", &catalog()), None);
    }

    #[test]
    fn fraction_values() {
        let parsed = classify_utility("w-1/2", &catalog()).unwrap();
        let ParsedUtility::Functional {
            value, modifier, ..
        } = parsed
        else {
            panic!("expected functional utility");
        };
        assert_eq!(value.unwrap().fraction(), Some("1/2"));
        assert_eq!(modifier, Some(Modifier::named("2")));
    }

    #[test]
    fn arbitrary_values_use_first_bracket() {
        let parsed = classify_utility("grid-cols-[1fr_2fr]", &catalog()).unwrap();
        assert_eq!(
            parsed,
            ParsedUtility::Functional {
                root: "grid-cols".into(),
                value: Some(Value::arbitrary("1fr 2fr")),
                modifier: None,
            }
        );
        assert_eq!(classify_utility("unknown-[1px]", &catalog()), None);
    }

    #[test]
    fn variable_shorthand() {
        let parsed = classify_utility("bg-(--brand)/50", &catalog()).unwrap();
        assert_eq!(
            parsed,
            ParsedUtility::Functional {
                root: "bg".into(),
                value: Some(Value::arbitrary("var(--brand)")),
                modifier: Some(Modifier::named("50")),
            }
        );
    }

    #[test]
    fn arbitrary_properties() {
        assert_eq!(
            classify_utility("[--gap:1rem]", &catalog()),
            Some(ParsedUtility::Arbitrary {
                property: "--gap".into(),
                value: "1rem".into(),
                modifier: None,
            })
        );
        assert_eq!(classify_utility("[color]", &catalog()), None);
        assert_eq!(classify_utility("[Color:red]", &catalog()), None);
        assert_eq!(classify_utility("[:red]", &catalog()), None);
        assert_eq!(classify_utility("[color:]", &catalog()), None);
        assert_eq!(classify_utility("[color:red;x:y]", &catalog()), None);
    }

    #[test]
    fn negative_root_requires_registration() {
        assert!(classify_utility("-translate-x-4", &catalog()).is_some());
        assert_eq!(classify_utility("-bg-red", &catalog()), None);
    }
}
