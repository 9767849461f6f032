//! Rendering candidates back to class text.
//!
//! Printing is the inverse of parsing: parsing the printed text with the same
//! design system gives back an equal candidate, apart from `raw`.

use std::fmt::{self, Write};

use super::nodes::{Candidate, Modifier, Value, Variant};
use super::segment::{is_valid_arbitrary, matching_paren};
use super::value::split_data_type;

/// Print `candidate` as a class name, prepending `prefix:` when given.
pub fn print_candidate(candidate: &Candidate, prefix: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(prefix) = prefix.filter(|p| !p.is_empty()) {
        out.push_str(prefix);
        out.push(':');
    }
    // Infallible when writing into a String.
    let _ = write_candidate(&mut out, candidate);
    out
}

fn write_candidate(out: &mut impl Write, candidate: &Candidate) -> fmt::Result {
    for variant in candidate.variants().iter().rev() {
        write_variant(out, variant)?;
        out.write_char(':')?;
    }

    match candidate {
        Candidate::Static { root, .. } => out.write_str(root)?,
        Candidate::Functional {
            root,
            value,
            modifier,
            ..
        } => {
            out.write_str(root)?;
            let mut modifier = modifier.as_ref();
            match value {
                Some(Value::Named {
                    fraction: Some(fraction),
                    ..
                }) => {
                    write!(out, "-{fraction}")?;
                    modifier = None;
                }
                Some(value) => {
                    out.write_char('-')?;
                    write_value(out, value)?;
                }
                None => {}
            }
            if let Some(modifier) = modifier {
                write!(out, "/{modifier}")?;
            }
        }
        Candidate::Arbitrary {
            property,
            value,
            modifier,
            ..
        } => {
            write!(out, "[{property}:{}]", encode_arbitrary(value))?;
            if let Some(modifier) = modifier {
                write!(out, "/{modifier}")?;
            }
        }
    }

    if candidate.important() {
        out.write_char('!')?;
    }
    Ok(())
}

fn write_variant(out: &mut impl Write, variant: &Variant) -> fmt::Result {
    match variant {
        Variant::Static { root } => out.write_str(root),
        Variant::Arbitrary { selector, .. } => write!(out, "[{}]", encode_arbitrary(selector)),
        Variant::Functional {
            root,
            value,
            modifier,
        } => {
            out.write_str(root)?;
            if let Some(value) = value {
                // `@md`, not `@-md`
                if root != "@" {
                    out.write_char('-')?;
                }
                match value {
                    Value::Arbitrary { value, .. } => write_untyped(out, value)?,
                    Value::Named { value, .. } => out.write_str(value)?,
                }
            }
            if let Some(modifier) = modifier {
                write!(out, "/{modifier}")?;
            }
            Ok(())
        }
        Variant::Compound {
            root,
            modifier,
            variant,
        } => {
            write!(out, "{root}-")?;
            write_variant(out, variant)?;
            if let Some(modifier) = modifier {
                write!(out, "/{modifier}")?;
            }
            Ok(())
        }
    }
}

fn write_value(out: &mut impl Write, value: &Value) -> fmt::Result {
    match value {
        Value::Named { value, .. } => out.write_str(value),
        Value::Arbitrary { value, data_type } => write_typed(out, value, data_type.as_deref()),
    }
}

/// Utility values: `[type:payload]`, or `(type:--name)` when the payload is a
/// plain `var(--name)`.
fn write_typed(out: &mut impl Write, value: &str, data_type: Option<&str>) -> fmt::Result {
    if let Some(name) = variable_name(value) {
        return match data_type {
            Some(data_type) => write!(out, "({data_type}:{name})"),
            None => write!(out, "({name})"),
        };
    }

    match data_type {
        Some(data_type) => write!(out, "[{data_type}:{}]", encode_arbitrary(value)),
        // Keep `a:b` from being read back as a type tag.
        None if split_data_type(value).0.is_some() => {
            write!(out, "[:{}]", encode_arbitrary(value))
        }
        None => write!(out, "[{}]", encode_arbitrary(value)),
    }
}

/// Modifiers and variant values, which never carry a type tag.
fn write_untyped(out: &mut impl Write, value: &str) -> fmt::Result {
    match variable_name(value) {
        Some(name) => write!(out, "({name})"),
        None => write!(out, "[{}]", encode_arbitrary(value)),
    }
}

fn variable_name(value: &str) -> Option<&str> {
    let name = value.strip_prefix("var(")?.strip_suffix(')')?;
    let plain = name.starts_with("--")
        && is_valid_arbitrary(name)
        && !name.contains(|ch: char| matches!(ch, '_' | ':') || ch.is_whitespace());
    plain.then_some(name)
}

/// Inverse of `decode_arbitrary_value`: spaces become `_`, `_` becomes `\_`,
/// and `url(...)` is copied as written.
fn encode_arbitrary(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(start) = rest.find("url(") {
        push_encoded(&mut out, &rest[..start]);
        let end = matching_paren(rest, start + 3).map_or(rest.len(), |close| close + 1);
        out.push_str(&rest[start..end]);
        rest = &rest[end..];
    }
    push_encoded(&mut out, rest);
    out
}

fn push_encoded(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            ' ' => out.push('_'),
            '_' => out.push_str("\\_"),
            other => out.push(other),
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_candidate(f, self)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_variant(f, self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self)
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modifier::Named { value } => f.write_str(value),
            Modifier::Arbitrary { value } => write_untyped(f, value),
        }
    }
}
