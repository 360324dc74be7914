use std::path::Path;

use odonto_core::models::color::Rgb;
use odonto_core::models::locale::Locale;
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Current config version. Bump this when changing the shape of the file.
const CURRENT_VERSION: u32 = 1;

/// Presentation settings for a tooth chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    pub config_version: u32,
    pub locale: Locale,
    /// Fill of a tooth with no conditions.
    pub base_color: Rgb,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            locale: Locale::default(),
            base_color: Rgb::WHITE,
        }
    }
}

impl ChartConfig {
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_base_color(mut self, base_color: Rgb) -> Self {
        self.base_color = base_color;
        self
    }

    /// Parse a config document. Missing fields take their defaults.
    pub fn from_json(contents: &str) -> Result<Self, ChartError> {
        // Parse as raw JSON first so the version can be checked before the
        // shape is enforced.
        let json: serde_json::Value = serde_json::from_str(contents)?;
        if !json.is_object() {
            return Err(ChartError::MalformedConfig);
        }
        let found = json
            .get("config_version")
            .and_then(|v| v.as_u64())
            .unwrap_or(0);
        if found > u64::from(CURRENT_VERSION) {
            return Err(ChartError::UnsupportedConfigVersion {
                found: u32::try_from(found).unwrap_or(u32::MAX),
                supported: CURRENT_VERSION,
            });
        }

        let mut config: ChartConfig = serde_json::from_value(json)?;
        config.config_version = CURRENT_VERSION;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ChartError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ChartError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&contents)?;
        tracing::info!(
            path = %path.display(),
            locale = ?config.locale,
            base_color = %config.base_color,
            "chart config loaded"
        );
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ChartError> {
        let io_err = |source| ChartError::Io {
            path: path.to_path_buf(),
            source,
        };

        // Always write the current version, regardless of what was loaded.
        let mut stamped = self.clone();
        stamped.config_version = CURRENT_VERSION;
        let json = serde_json::to_string_pretty(&stamped)?;

        // Write to a temp file then rename for atomicity
        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, json.as_bytes()).map_err(io_err)?;
        std::fs::rename(&tmp_path, path).map_err(io_err)?;

        tracing::info!(path = %path.display(), "chart config saved");
        Ok(())
    }
}
