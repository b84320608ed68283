// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Haram ingredient catalog.
//
// A `Catalog` only exists once loading has finished, and it is never mutated
// afterwards. Share it between checkers with `Arc<Catalog>`.

pub mod defaults;
pub mod loader;

use std::fmt;
use std::path::{Path, PathBuf};

use halalscan_core::error::Result;
use halalscan_core::HaramIngredient;
use serde::Serialize;
use tracing::{info, warn};

pub use defaults::default_haram_ingredients;

/// Where the loaded catalog came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "camelCase")]
pub enum CatalogOrigin {
    /// The resource compiled into the binary.
    Bundled,
    /// An external catalog file.
    File { path: PathBuf },
    /// Caller-supplied JSON.
    Inline,
    /// The hardcoded catalog, after loading failed for `reason`.
    Fallback { reason: String },
    /// The hardcoded catalog, requested directly.
    Defaults,
}

impl fmt::Display for CatalogOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bundled => f.write_str("bundled"),
            Self::File { path } => write!(f, "file {}", path.display()),
            Self::Inline => f.write_str("inline"),
            Self::Fallback { reason } => write!(f, "fallback ({reason})"),
            Self::Defaults => f.write_str("defaults"),
        }
    }
}

/// One catalog record with its lower-cased comparison keys.
#[derive(Debug, Clone)]
pub(crate) struct CatalogEntry {
    pub(crate) ingredient: HaramIngredient,
    pub(crate) name_key: String,
    pub(crate) alias_keys: Vec<String>,
}

impl CatalogEntry {
    fn new(ingredient: HaramIngredient) -> Self {
        let name_key = ingredient.name.to_lowercase();
        let alias_keys = ingredient
            .alternative_names
            .iter()
            .map(|alt| alt.to_lowercase())
            .collect();
        Self {
            ingredient,
            name_key,
            alias_keys,
        }
    }
}

/// The loaded, immutable collection of known haram ingredients.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    origin: CatalogOrigin,
    max_phrase_words: usize,
}

impl Catalog {
    /// Load the bundled catalog, or the hardcoded one if it cannot be parsed.
    pub fn initialize() -> Self {
        Self::resolve(
            loader::parse_catalog(loader::BUNDLED_CATALOG),
            CatalogOrigin::Bundled,
        )
    }

    /// Load a catalog file, or the hardcoded catalog if it is missing or malformed.
    pub fn initialize_from_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::resolve(
            loader::read_catalog_file(path),
            CatalogOrigin::File {
                path: path.to_path_buf(),
            },
        )
    }

    /// Async variant of [`initialize_from_path`](Self::initialize_from_path).
    pub async fn initialize_from_path_async(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::resolve(
            loader::read_catalog_file_async(path).await,
            CatalogOrigin::File {
                path: path.to_path_buf(),
            },
        )
    }

    /// Strict parse with no fallback.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries = loader::parse_catalog(json)?;
        Ok(Self::build(entries, CatalogOrigin::Inline))
    }

    /// The hardcoded catalog.
    pub fn defaults() -> Self {
        Self::build(default_haram_ingredients(), CatalogOrigin::Defaults)
    }

    fn resolve(outcome: Result<Vec<HaramIngredient>>, origin: CatalogOrigin) -> Self {
        match outcome {
            Ok(entries) => Self::build(entries, origin),
            Err(e) => {
                warn!(attempted = %origin, error = %e, "catalog load failed, using defaults");
                Self::build(
                    default_haram_ingredients(),
                    CatalogOrigin::Fallback {
                        reason: e.to_string(),
                    },
                )
            }
        }
    }

    fn build(ingredients: Vec<HaramIngredient>, origin: CatalogOrigin) -> Self {
        let entries: Vec<CatalogEntry> = ingredients.into_iter().map(CatalogEntry::new).collect();
        let max_phrase_words = entries
            .iter()
            .flat_map(|e| std::iter::once(&e.name_key).chain(e.alias_keys.iter()))
            .map(|key| key.split_whitespace().count())
            .max()
            .unwrap_or(1)
            .max(1);

        info!(entries = entries.len(), origin = %origin, "catalog ready");
        Self {
            entries,
            origin,
            max_phrase_words,
        }
    }

    pub fn origin(&self) -> &CatalogOrigin {
        &self.origin
    }

    /// Whether the hardcoded catalog was substituted after a failed load.
    pub fn is_fallback(&self) -> bool {
        matches!(self.origin, CatalogOrigin::Fallback { .. })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ingredients in loaded order.
    pub fn ingredients(&self) -> impl Iterator<Item = &HaramIngredient> {
        self.entries.iter().map(|e| &e.ingredient)
    }

    /// Word count of the longest name or alias.
    pub fn max_phrase_words(&self) -> usize {
        self.max_phrase_words
    }

    pub(crate) fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }
}
