//! The read-only catalog the parser consults.
//!
//! The parser never builds a design system itself. Callers hand one in, and
//! every lookup must be free of side effects so that one instance can be
//! shared across threads.

use serde::{Deserialize, Serialize};

use super::nodes::Variant;

/// How a utility name is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UtilityKind {
    /// Matched by exact name, takes no value.
    Static,
    /// A root that takes a value payload.
    Functional,
}

/// How a variant root is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantKind {
    Static,
    Functional,
    /// A variant whose value is itself another variant (`group-hover`).
    Compound,
}

/// Existence and kind queries for utilities and variants.
pub trait DesignSystem {
    /// Theme prefix every candidate must start with (`tw` for `tw:flex`).
    fn theme_prefix(&self) -> Option<&str>;

    fn has_utility(&self, name: &str, kind: UtilityKind) -> bool;

    fn has_variant(&self, name: &str) -> bool;

    /// Kind of a registered variant, `None` when `name` is unknown.
    fn variant_kind(&self, name: &str) -> Option<VariantKind>;

    /// Whether the compound variant `root` may wrap `variant`.
    fn compounds_with(&self, root: &str, variant: &Variant) -> bool;
}

impl<T: DesignSystem + ?Sized> DesignSystem for &T {
    fn theme_prefix(&self) -> Option<&str> {
        (**self).theme_prefix()
    }

    fn has_utility(&self, name: &str, kind: UtilityKind) -> bool {
        (**self).has_utility(name, kind)
    }

    fn has_variant(&self, name: &str) -> bool {
        (**self).has_variant(name)
    }

    fn variant_kind(&self, name: &str) -> Option<VariantKind> {
        (**self).variant_kind(name)
    }

    fn compounds_with(&self, root: &str, variant: &Variant) -> bool {
        (**self).compounds_with(root, variant)
    }
}
