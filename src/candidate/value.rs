//! Value and modifier extraction shared by the utility and variant classifiers.

use once_cell::sync::Lazy;
use regex::Regex;

use super::nodes::{Modifier, Value};
use super::segment::{decode_arbitrary_value, is_valid_arbitrary, segment};

/// Bare values and named modifiers: `red-500`, `1.5`, `50%`, `parent_name`.
static NAMED_VALUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_.%-]+$").unwrap());

/// A segment with its trailing `/modifier` split off.
#[derive(Debug, Clone, PartialEq)]
pub struct ModifierSplit<'a> {
    pub base: &'a str,
    /// The modifier exactly as written, needed to rebuild fractions.
    pub modifier_text: Option<&'a str>,
    pub modifier: Option<Modifier>,
}

/// Split a single top-level `/modifier` off `tail`.
///
/// `None` when there is more than one top-level `/`, when the brackets don't
/// balance, or when the modifier text is malformed.
pub fn extract_modifier(tail: &str) -> Option<ModifierSplit<'_>> {
    match segment(tail, '/').as_slice() {
        [base] => Some(ModifierSplit {
            base: *base,
            modifier_text: None,
            modifier: None,
        }),
        [base, text] => {
            let modifier = parse_modifier(text)?;
            Some(ModifierSplit {
                base: *base,
                modifier_text: Some(*text),
                modifier: Some(modifier),
            })
        }
        _ => None,
    }
}

/// Parse modifier text: `[...]`, `(--var)` or a bare name.
pub fn parse_modifier(text: &str) -> Option<Modifier> {
    if let Some(inner) = enclosed(text, '[', ']') {
        return arbitrary_payload(inner).map(Modifier::arbitrary);
    }
    if let Some(inner) = enclosed(text, '(', ')') {
        return css_variable(inner).map(Modifier::arbitrary);
    }
    NAMED_VALUE.is_match(text).then(|| Modifier::named(text))
}

/// Classify the payload after a functional utility root.
///
/// Arbitrary values may carry a leading `type:` tag. A named value remembers
/// `value/modifier` as its fraction when the modifier is named.
pub fn extract_value(
    value: &str,
    modifier_text: Option<&str>,
    modifier: Option<&Modifier>,
) -> Option<Value> {
    if value.is_empty() {
        return None;
    }

    if let Some(inner) = enclosed(value, '[', ']') {
        let decoded = decode_arbitrary_value(inner);
        if !is_valid_arbitrary(&decoded) {
            return None;
        }
        let (data_type, payload) = split_data_type(&decoded);
        if payload.trim().is_empty() {
            return None;
        }
        return Some(Value::Arbitrary {
            value: payload.to_string(),
            data_type: data_type.map(str::to_string),
        });
    }

    if let Some(inner) = enclosed(value, '(', ')') {
        let (data_type, name) = match segment(inner, ':').as_slice() {
            [name] => (None, *name),
            [data_type, name] if is_data_type(data_type) => (Some(*data_type), *name),
            _ => return None,
        };
        return Some(Value::Arbitrary {
            value: css_variable(name)?,
            data_type: data_type.map(str::to_string),
        });
    }

    if !NAMED_VALUE.is_match(value) {
        return None;
    }
    let fraction = match (modifier_text, modifier) {
        (Some(text), Some(Modifier::Named { .. })) => Some(format!("{value}/{text}")),
        _ => None,
    };
    Some(Value::Named {
        value: value.to_string(),
        fraction,
    })
}

/// Classify the payload after a functional variant root.
///
/// Variant values never carry type tags or fractions.
pub fn extract_variant_value(value: &str) -> Option<Value> {
    if let Some(inner) = enclosed(value, '[', ']') {
        return arbitrary_payload(inner).map(Value::arbitrary);
    }
    if let Some(inner) = enclosed(value, '(', ')') {
        return css_variable(inner).map(Value::arbitrary);
    }
    NAMED_VALUE.is_match(value).then(|| Value::named(value))
}

/// Decoded bracket content, rejected when invalid or blank.
fn arbitrary_payload(inner: &str) -> Option<String> {
    let decoded = decode_arbitrary_value(inner);
    if !is_valid_arbitrary(&decoded) || decoded.trim().is_empty() {
        return None;
    }
    Some(decoded)
}

/// `(--brand)` shorthand for `var(--brand)`.
fn css_variable(name: &str) -> Option<String> {
    if !name.starts_with("--") || !is_valid_arbitrary(name) {
        return None;
    }
    Some(format!("var({name})"))
}

/// Split a leading `[a-z-]+:` tag off a decoded arbitrary value.
pub(super) fn split_data_type(value: &str) -> (Option<&str>, &str) {
    for (idx, byte) in value.bytes().enumerate() {
        match byte {
            b':' => {
                let tag = &value[..idx];
                return ((!tag.is_empty()).then_some(tag), &value[idx + 1..]);
            }
            b'-' | b'a'..=b'z' => {}
            _ => break,
        }
    }
    (None, value)
}

fn is_data_type(tag: &str) -> bool {
    !tag.is_empty() && tag.bytes().all(|b| b == b'-' || b.is_ascii_lowercase())
}

fn enclosed(text: &str, open: char, close: char) -> Option<&str> {
    text.strip_prefix(open)?.strip_suffix(close)
}
