//! Candidate nodes produced by the parser.
//!
//! Every node is a plain immutable value. The serde representation uses an
//! internal `kind` tag so the JSON shape reads `{"kind":"static","root":"flex",...}`.

use serde::{Deserialize, Serialize};

/// The structural meaning of one utility-class string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Candidate {
    /// A utility matched by its exact registered name, e.g. `flex`.
    Static {
        root: String,
        important: bool,
        variants: Vec<Variant>,
        raw: String,
    },
    /// A registered root plus an optional value, e.g. `bg-red-500/50`.
    Functional {
        root: String,
        value: Option<Value>,
        modifier: Option<Modifier>,
        important: bool,
        variants: Vec<Variant>,
        raw: String,
    },
    /// A bracketed `[property:value]` declaration.
    Arbitrary {
        property: String,
        value: String,
        modifier: Option<Modifier>,
        important: bool,
        variants: Vec<Variant>,
        raw: String,
    },
}

impl Candidate {
    /// Variants ordered nearest-to-utility first.
    pub fn variants(&self) -> &[Variant] {
        match self {
            Candidate::Static { variants, .. }
            | Candidate::Functional { variants, .. }
            | Candidate::Arbitrary { variants, .. } => variants,
        }
    }

    pub fn important(&self) -> bool {
        match self {
            Candidate::Static { important, .. }
            | Candidate::Functional { important, .. }
            | Candidate::Arbitrary { important, .. } => *important,
        }
    }

    /// The exact input string this candidate was parsed from.
    pub fn raw(&self) -> &str {
        match self {
            Candidate::Static { raw, .. }
            | Candidate::Functional { raw, .. }
            | Candidate::Arbitrary { raw, .. } => raw,
        }
    }

    /// Utility root, or `None` for arbitrary properties.
    pub fn root(&self) -> Option<&str> {
        match self {
            Candidate::Static { root, .. } | Candidate::Functional { root, .. } => Some(root),
            Candidate::Arbitrary { .. } => None,
        }
    }

    pub fn modifier(&self) -> Option<&Modifier> {
        match self {
            Candidate::Static { .. } => None,
            Candidate::Functional { modifier, .. } | Candidate::Arbitrary { modifier, .. } => {
                modifier.as_ref()
            }
        }
    }

    pub fn is_static(&self) -> bool {
        matches!(self, Candidate::Static { .. })
    }

    pub fn is_functional(&self) -> bool {
        matches!(self, Candidate::Functional { .. })
    }

    pub fn is_arbitrary(&self) -> bool {
        matches!(self, Candidate::Arbitrary { .. })
    }
}

/// A stacked condition in front of the utility.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Variant {
    /// `hover`, `focus`, `dark`
    Static { root: String },
    /// `data-[state=open]`, `min-[640px]`, `supports-grid`
    Functional {
        root: String,
        value: Option<Value>,
        modifier: Option<Modifier>,
    },
    /// `[&>*]`, `[@media(print)]`
    Arbitrary { selector: String, relative: bool },
    /// `group-hover`, `peer-[.open]/name`
    Compound {
        root: String,
        modifier: Option<Modifier>,
        variant: Box<Variant>,
    },
}

impl Variant {
    /// Registered root, or `None` for arbitrary selectors.
    pub fn root(&self) -> Option<&str> {
        match self {
            Variant::Static { root }
            | Variant::Functional { root, .. }
            | Variant::Compound { root, .. } => Some(root),
            Variant::Arbitrary { .. } => None,
        }
    }

    pub fn kind(&self) -> VariantNodeKind {
        match self {
            Variant::Static { .. } => VariantNodeKind::Static,
            Variant::Functional { .. } => VariantNodeKind::Functional,
            Variant::Arbitrary { .. } => VariantNodeKind::Arbitrary,
            Variant::Compound { .. } => VariantNodeKind::Compound,
        }
    }
}

/// Discriminant of a parsed [`Variant`], used when deciding what a compound
/// variant may wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantNodeKind {
    Static,
    Functional,
    Arbitrary,
    Compound,
}

/// Payload following a functional root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Value {
    /// A bare value such as `red-500` or `4`.
    ///
    /// `fraction` keeps the `value/modifier` text when the modifier was named,
    /// so `w-1/2` can be read back as the fraction `1/2`.
    Named {
        value: String,
        fraction: Option<String>,
    },
    /// A bracketed value with underscores decoded, plus an optional type tag
    /// (`bg-[color:red]` has data type `color`).
    Arbitrary {
        value: String,
        #[serde(rename = "dataType")]
        data_type: Option<String>,
    },
}

impl Value {
    pub fn named(value: impl Into<String>) -> Self {
        Value::Named {
            value: value.into(),
            fraction: None,
        }
    }

    pub fn arbitrary(value: impl Into<String>) -> Self {
        Value::Arbitrary {
            value: value.into(),
            data_type: None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Value::Named { value, .. } | Value::Arbitrary { value, .. } => value,
        }
    }

    pub fn fraction(&self) -> Option<&str> {
        match self {
            Value::Named { fraction, .. } => fraction.as_deref(),
            Value::Arbitrary { .. } => None,
        }
    }

    pub fn data_type(&self) -> Option<&str> {
        match self {
            Value::Arbitrary { data_type, .. } => data_type.as_deref(),
            Value::Named { .. } => None,
        }
    }

    pub fn is_arbitrary(&self) -> bool {
        matches!(self, Value::Arbitrary { .. })
    }
}

/// Trailing `/modifier` of a utility or variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Modifier {
    Named { value: String },
    Arbitrary { value: String },
}

impl Modifier {
    pub fn named(value: impl Into<String>) -> Self {
        Modifier::Named {
            value: value.into(),
        }
    }

    pub fn arbitrary(value: impl Into<String>) -> Self {
        Modifier::Arbitrary {
            value: value.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Modifier::Named { value } | Modifier::Arbitrary { value } => value,
        }
    }

    pub fn is_arbitrary(&self) -> bool {
        matches!(self, Modifier::Arbitrary { .. })
    }
}
