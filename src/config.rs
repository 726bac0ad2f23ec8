//! Gradient configuration
//!
//! The colors come from, in order of precedence: `--start` / `--end` on the
//! command line, a JSON config file (`{"startColor": "#00E5FF", "endColor":
//! "#FF00FF"}`), and finally the built-in cyan to magenta gradient.

use crate::gradient::{Color, GradientSpec};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TintConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_color: Option<Color>,
}

impl TintConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Values set in `other` win over ours.
    pub fn merge(self, other: TintConfig) -> Self {
        Self {
            start_color: other.start_color.or(self.start_color),
            end_color: other.end_color.or(self.end_color),
        }
    }

    pub fn resolve(&self) -> GradientSpec {
        let fallback = GradientSpec::default();
        GradientSpec::new(
            self.start_color.unwrap_or(fallback.start),
            self.end_color.unwrap_or(fallback.end),
        )
    }
}
