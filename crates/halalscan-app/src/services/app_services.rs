// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer — loads configuration and the catalog once, then
// answers check and scan requests.
//
// `init` only returns after the catalog has finished loading, so no check can
// observe a partially loaded catalog.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use halalscan_checker::{Catalog, IngredientChecker};
use halalscan_core::error::Result;
use halalscan_core::{AppConfig, HalalCheckResult};
use halalscan_scan::{default_extractor, extract_or_empty};
use tracing::{info, warn};

use super::data_dir;

/// Settings given on the command line, applied over `config.json`.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub catalog_path: Option<PathBuf>,
    pub fuzzy_threshold: Option<u8>,
}

/// Text read from a label photo, with its verdict.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub text: String,
    pub result: HalalCheckResult,
}

/// Shared application services. Cheap to clone.
#[derive(Clone)]
pub struct AppServices {
    checker: IngredientChecker,
    config: AppConfig,
}

impl AppServices {
    /// Load settings from the default data directory and initialise services.
    pub async fn init(overrides: ConfigOverrides) -> Result<Self> {
        Self::init_in(&data_dir::data_dir(), overrides).await
    }

    /// Initialise from the settings stored in `dir`.
    pub async fn init_in(dir: &Path, overrides: ConfigOverrides) -> Result<Self> {
        info!(path = %dir.display(), "initialising app services");

        let mut config = AppConfig::load_or_default(dir);
        if let Some(path) = overrides.catalog_path {
            config.catalog_path = Some(path);
        }
        if let Some(threshold) = overrides.fuzzy_threshold {
            config.fuzzy_threshold = threshold;
        }
        config.validate()?;

        let catalog = match &config.catalog_path {
            Some(path) => Catalog::initialize_from_path_async(path).await,
            None => Catalog::initialize(),
        };

        let checker =
            IngredientChecker::new(Arc::new(catalog)).with_threshold(config.fuzzy_threshold);

        info!(
            origin = %checker.catalog().origin(),
            threshold = checker.threshold(),
            "app services initialised"
        );
        Ok(Self { checker, config })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        self.checker.catalog()
    }

    pub fn check_text(&self, text: &str) -> HalalCheckResult {
        self.checker.check_ingredients(text)
    }

    /// Read a label photo, extract its text, and check it.
    ///
    /// Extraction failures are treated as a label with no text.
    pub async fn scan_image(&self, path: &Path) -> Result<ScanOutcome> {
        let bytes = tokio::fs::read(path).await?;
        info!(path = %path.display(), bytes = bytes.len(), "image loaded for scanning");

        let model_dir = self.config.ocr_model_dir.clone();
        let text = tokio::task::spawn_blocking(move || {
            let extractor = default_extractor(model_dir.as_deref());
            extract_or_empty(extractor.as_ref(), &bytes)
        })
        .await
        .unwrap_or_else(|e| {
            warn!(error = %e, "text extraction task failed");
            String::new()
        });

        let result = self.check_text(&text);
        Ok(ScanOutcome { text, result })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use halalscan_checker::CatalogOrigin;
    use halalscan_core::HalalScanError;
    use halalscan_core::config::CONFIG_FILE;

    #[tokio::test]
    async fn defaults_use_bundled_catalog() {
        let dir = tempfile::tempdir().expect("tempdir");
        let svc = AppServices::init_in(dir.path(), ConfigOverrides::default())
            .await
            .expect("init");
        assert_eq!(svc.catalog().origin(), &CatalogOrigin::Bundled);
        assert_eq!(svc.config().fuzzy_threshold, 80);
        assert!(!svc.check_text("water, ham").is_halal());
    }

    #[tokio::test]
    async fn overrides_beat_config_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join(CONFIG_FILE), r#"{"fuzzy_threshold": 90}"#)
            .expect("write config");

        let overrides = ConfigOverrides {
            catalog_path: Some(dir.path().join("missing.json")),
            fuzzy_threshold: Some(70),
        };
        let svc = AppServices::init_in(dir.path(), overrides).await.expect("init");
        assert_eq!(svc.config().fuzzy_threshold, 70);
        assert!(svc.catalog().is_fallback());
        assert_eq!(svc.catalog().len(), 4);
    }

    #[tokio::test]
    async fn invalid_threshold_is_a_config_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let overrides = ConfigOverrides {
            fuzzy_threshold: Some(150),
            ..ConfigOverrides::default()
        };
        let err = AppServices::init_in(dir.path(), overrides).await.err();
        assert!(matches!(err, Some(HalalScanError::Config(_))));
    }

    #[tokio::test]
    async fn missing_image_is_an_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let svc = AppServices::init_in(dir.path(), ConfigOverrides::default())
            .await
            .expect("init");
        let err = svc.scan_image(&dir.path().join("label.jpg")).await.err();
        assert!(matches!(err, Some(HalalScanError::Io(_))));
    }

    #[cfg(not(feature = "ocr"))]
    #[tokio::test]
    async fn scan_without_ocr_checks_empty_text() {
        let dir = tempfile::tempdir().expect("tempdir");
        let image = dir.path().join("label.jpg");
        std::fs::write(&image, b"\xff\xd8\xff\xe0 not really a jpeg").expect("write");

        let svc = AppServices::init_in(dir.path(), ConfigOverrides::default())
            .await
            .expect("init");
        let outcome = svc.scan_image(&image).await.expect("scan");
        assert!(outcome.text.is_empty());
        assert!(outcome.result.is_halal());
    }
}
