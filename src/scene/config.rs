use std::{collections::BTreeMap, path::Path};

use anyhow::Context;

use crate::foundation::error::{SceneError, SceneResult};

/// Label whose images are capped by default.
pub const LOGO_LABEL: &str = "logo";
/// Label whose images are capped by default.
pub const USER_IMAGE_LABEL: &str = "userImage";
/// Default cap for [`LOGO_LABEL`] and [`USER_IMAGE_LABEL`] images.
pub const DEFAULT_LABEL_MAX_DIMENSION: f64 = 80.0;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
/// Defaults and size policy applied while parsing a scene.
///
/// Every field has a default, so an empty JSON object is a valid configuration.
pub struct ParseConfig {
    /// Maximum rendered width/height per image label.
    pub label_max_dimension: BTreeMap<String, f64>,
    /// Font size used when a text object has none.
    pub default_font_size: f64,
    /// Fill used when a text object has none.
    pub default_fill: String,
    /// Width used when an image object has none.
    pub default_image_width: f64,
    /// Height used when an image object has none.
    pub default_image_height: f64,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            label_max_dimension: BTreeMap::from([
                (LOGO_LABEL.to_string(), DEFAULT_LABEL_MAX_DIMENSION),
                (USER_IMAGE_LABEL.to_string(), DEFAULT_LABEL_MAX_DIMENSION),
            ]),
            default_font_size: 12.0,
            default_fill: "#000000".to_string(),
            default_image_width: 50.0,
            default_image_height: 50.0,
        }
    }
}

impl ParseConfig {
    /// Load a JSON configuration file and validate it.
    pub fn from_path(path: impl AsRef<Path>) -> SceneResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("read parse config from '{}'", path.display()))?;
        let cfg: Self = serde_json::from_slice(&bytes)
            .map_err(|e| SceneError::serde(format!("parse config '{}': {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject limits and defaults that would produce meaningless elements.
    pub fn validate(&self) -> SceneResult<()> {
        fn positive(name: &str, v: f64) -> SceneResult<()> {
            if !v.is_finite() || v <= 0.0 {
                return Err(SceneError::validation(format!(
                    "{name} must be finite and > 0"
                )));
            }
            Ok(())
        }

        for (label, max) in &self.label_max_dimension {
            positive(&format!("labelMaxDimension[{label}]"), *max)?;
        }
        positive("defaultFontSize", self.default_font_size)?;
        positive("defaultImageWidth", self.default_image_width)?;
        positive("defaultImageHeight", self.default_image_height)?;
        if self.default_fill.trim().is_empty() {
            return Err(SceneError::validation("defaultFill must be non-empty"));
        }
        Ok(())
    }

    /// Size cap for images carrying `label`, if any.
    pub fn max_dimension_for(&self, label: &str) -> Option<f64> {
        self.label_max_dimension.get(label).copied()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
