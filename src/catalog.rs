//! In-memory design system and its TOML loader.
//!
//! `defaults/catalog.default.toml` is embedded into the crate and seeds every
//! [`Loader`]. Applications layer their own catalog files on top before the
//! merged document is deserialized into a [`CatalogSpec`] and validated into a
//! [`Catalog`].

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::candidate::{DesignSystem, UtilityKind, Variant, VariantKind, VariantNodeKind};

const DEFAULT_TOML: &str = include_str!("../defaults/catalog.default.toml");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to load catalog: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid catalog entry `{name}`: {reason}")]
    Conflict { name: String, reason: String },
}

impl CatalogError {
    fn conflict(name: &str, reason: impl Into<String>) -> Self {
        CatalogError::Conflict {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Serialized catalog layout, shared by the TOML files and `atoms catalog`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSpec {
    pub prefix: Option<String>,
    pub utilities: UtilitySpec,
    pub variants: VariantSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UtilitySpec {
    #[serde(rename = "static")]
    pub static_names: Vec<String>,
    pub functional: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantSpec {
    #[serde(rename = "static")]
    pub static_names: Vec<String>,
    pub functional: Vec<String>,
    pub compound: Vec<String>,
    /// Sub-variant kinds each compound root may wrap. Roots left out wrap
    /// every kind.
    pub compounds: BTreeMap<String, Vec<VariantNodeKind>>,
}

/// A [`DesignSystem`] backed by name sets.
///
/// A utility name may be registered both as static and as functional. A
/// variant name has exactly one kind; the builder methods let the last
/// registration win, while [`Catalog::from_spec`] rejects duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    prefix: Option<String>,
    static_utilities: BTreeSet<String>,
    functional_utilities: BTreeSet<String>,
    variants: BTreeMap<String, VariantKind>,
    compounds: BTreeMap<String, BTreeSet<VariantNodeKind>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.prefix = (!prefix.is_empty()).then_some(prefix);
        self
    }

    pub fn with_static_utility(mut self, name: impl Into<String>) -> Self {
        self.static_utilities.insert(name.into());
        self
    }

    pub fn with_functional_utility(mut self, name: impl Into<String>) -> Self {
        self.functional_utilities.insert(name.into());
        self
    }

    pub fn with_static_variant(self, name: impl Into<String>) -> Self {
        self.with_variant(name.into(), VariantKind::Static)
    }

    pub fn with_functional_variant(self, name: impl Into<String>) -> Self {
        self.with_variant(name.into(), VariantKind::Functional)
    }

    /// Register `root` as a compound variant that wraps the given kinds.
    pub fn with_compound_variant(
        mut self,
        root: impl Into<String>,
        targets: impl IntoIterator<Item = VariantNodeKind>,
    ) -> Self {
        let root = root.into();
        self.compounds
            .insert(root.clone(), targets.into_iter().collect());
        self.with_variant(root, VariantKind::Compound)
    }

    fn with_variant(mut self, name: String, kind: VariantKind) -> Self {
        if kind != VariantKind::Compound {
            self.compounds.remove(&name);
        }
        self.variants.insert(name, kind);
        self
    }

    /// Validate a deserialized spec into a catalog.
    pub fn from_spec(spec: CatalogSpec) -> Result<Self, CatalogError> {
        let mut catalog = Catalog::new();
        if let Some(prefix) = spec.prefix {
            catalog = catalog.with_prefix(prefix);
        }

        for name in spec.utilities.static_names {
            check_name(&name)?;
            catalog.static_utilities.insert(name);
        }
        for name in spec.utilities.functional {
            check_name(&name)?;
            catalog.functional_utilities.insert(name);
        }

        let kinds = [
            (spec.variants.static_names, VariantKind::Static),
            (spec.variants.functional, VariantKind::Functional),
            (spec.variants.compound, VariantKind::Compound),
        ];
        for (names, kind) in kinds {
            for name in names {
                check_name(&name)?;
                match catalog.variants.get(&name) {
                    Some(existing) if *existing != kind => {
                        return Err(CatalogError::conflict(
                            &name,
                            format!("registered as both {existing:?} and {kind:?} variant"),
                        ));
                    }
                    _ => {
                        catalog.variants.insert(name, kind);
                    }
                }
            }
        }

        let every_kind = [
            VariantNodeKind::Static,
            VariantNodeKind::Functional,
            VariantNodeKind::Arbitrary,
            VariantNodeKind::Compound,
        ];
        for (name, kind) in &catalog.variants {
            if *kind == VariantKind::Compound {
                catalog
                    .compounds
                    .insert(name.clone(), every_kind.into_iter().collect());
            }
        }
        for (root, targets) in spec.variants.compounds {
            if catalog.variants.get(&root) != Some(&VariantKind::Compound) {
                return Err(CatalogError::conflict(
                    &root,
                    "compound targets listed for a root that is not a compound variant",
                ));
            }
            catalog.compounds.insert(root, targets.into_iter().collect());
        }

        tracing::debug!(
            static_utilities = catalog.static_utilities.len(),
            functional_utilities = catalog.functional_utilities.len(),
            variants = catalog.variants.len(),
            prefix = ?catalog.prefix,
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// The catalog in its serialized layout.
    pub fn to_spec(&self) -> CatalogSpec {
        let variants_of = |wanted: VariantKind| -> Vec<String> {
            self.variants
                .iter()
                .filter(|(_, kind)| **kind == wanted)
                .map(|(name, _)| name.clone())
                .collect()
        };

        CatalogSpec {
            prefix: self.prefix.clone(),
            utilities: UtilitySpec {
                static_names: self.static_utilities.iter().cloned().collect(),
                functional: self.functional_utilities.iter().cloned().collect(),
            },
            variants: VariantSpec {
                static_names: variants_of(VariantKind::Static),
                functional: variants_of(VariantKind::Functional),
                compound: variants_of(VariantKind::Compound),
                compounds: self
                    .compounds
                    .iter()
                    .map(|(root, targets)| (root.clone(), targets.iter().copied().collect()))
                    .collect(),
            },
        }
    }
}

fn check_name(name: &str) -> Result<(), CatalogError> {
    if name.is_empty() || name.contains(|ch: char| ch.is_whitespace() || ch == ':') {
        return Err(CatalogError::conflict(
            name,
            "names must be non-empty and contain no whitespace or `:`",
        ));
    }
    Ok(())
}

impl DesignSystem for Catalog {
    fn theme_prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    fn has_utility(&self, name: &str, kind: UtilityKind) -> bool {
        match kind {
            UtilityKind::Static => self.static_utilities.contains(name),
            UtilityKind::Functional => self.functional_utilities.contains(name),
        }
    }

    fn has_variant(&self, name: &str) -> bool {
        self.variants.contains_key(name)
    }

    fn variant_kind(&self, name: &str) -> Option<VariantKind> {
        self.variants.get(name).copied()
    }

    fn compounds_with(&self, root: &str, variant: &Variant) -> bool {
        self.compounds
            .get(root)
            .is_some_and(|targets| targets.contains(&variant.kind()))
    }
}

impl Serialize for Catalog {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_spec().serialize(serializer)
    }
}

/// Layers catalog files over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded default catalog.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Start a loader with no entries at all.
    pub fn empty() -> Self {
        Self {
            builder: Config::builder(),
        }
    }

    /// Layer a catalog file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional catalog file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer catalog TOML held in memory.
    pub fn with_toml(mut self, toml: &str) -> Self {
        self.builder = self
            .builder
            .add_source(File::from_str(toml, FileFormat::Toml));
        self
    }

    /// Apply a single key/value override, e.g. `prefix` from the command line.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, CatalogError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge the layers and deserialize them without validation.
    pub fn build_spec(self) -> Result<CatalogSpec, CatalogError> {
        Ok(self.builder.build()?.try_deserialize()?)
    }

    /// Merge, deserialize and validate the layers.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        Catalog::from_spec(self.build_spec()?)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the default catalog.
pub fn load_defaults() -> Result<Catalog, CatalogError> {
    Loader::new().build()
}
