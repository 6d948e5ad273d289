//! Configuration file support for shade-diff.
//!
//! Provides YAML-based configuration through `shade-diff.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use shade_diff::shade_diff::domain::BundleReference;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use shade_diff::shared::Result;

pub const CONFIG_FILENAME: &str = "shade-diff.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub dependencies: Option<PathBuf>,
    pub repository: Option<PathBuf>,
    pub format: Option<String>,
    pub property: Option<String>,
    pub include_scopes: Option<Vec<String>>,
    pub bundles: Option<Vec<BundleConfig>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// A shaded jar whose contents are excluded from the new bundle.
#[derive(Debug, Deserialize)]
pub struct BundleConfig {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub classifier: Option<String>,
}

impl BundleConfig {
    pub fn to_reference(&self) -> Result<BundleReference> {
        BundleReference::new(
            self.group_id.trim(),
            self.artifact_id.trim(),
            self.version.trim(),
            self.classifier.clone(),
        )
    }
}

impl ConfigFile {
    /// Bundle references declared in the file, in declaration order
    pub fn bundle_references(&self) -> Result<Vec<BundleReference>> {
        self.bundles
            .iter()
            .flatten()
            .map(BundleConfig::to_reference)
            .collect()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    for (i, bundle) in config.bundles.iter().flatten().enumerate() {
        for (field, value) in [
            ("group_id", &bundle.group_id),
            ("artifact_id", &bundle.artifact_id),
            ("version", &bundle.version),
        ] {
            if value.trim().is_empty() {
                bail!(
                    "Invalid config: bundles[{}].{} must not be empty.\n\n\
                     💡 Hint: Each bundles entry needs group_id, artifact_id and version (e.g., version: \"1.4.0\").",
                    i,
                    field
                );
            }
        }

        bundle
            .to_reference()
            .with_context(|| format!("Invalid config: bundles[{}]", i))?;
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
