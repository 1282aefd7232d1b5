//! Configuration for reading sheets and naming output files

use crate::validator;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SheetUnionConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub reader: ReaderConfig,
}

impl SheetUnionConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: SheetUnionConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Validate values that cannot be checked by deserialization alone
    pub fn validate(&self) -> Result<()> {
        let ext = &self.output.default_extension;
        if ext.trim().is_empty() {
            anyhow::bail!("Configuration error: output.default_extension must not be empty");
        }
        if ext.trim() != ext || ext.starts_with('.') {
            anyhow::bail!(
                "Configuration error: output.default_extension '{}' must not start with a dot or contain surrounding whitespace",
                ext
            );
        }
        if !validator::is_valid_output_name(&format!("output.{}", ext)) {
            anyhow::bail!(
                "Configuration error: output.default_extension '{}' does not produce a valid file name",
                ext
            );
        }
        Ok(())
    }

    /// Default output name for a source file: `<stem>.<default_extension>`
    pub fn default_output_name(&self, source: &Path) -> String {
        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("{}.{}", stem, self.output.default_extension)
    }
}

/// Output file settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Extension appended to the source file stem for the default output name
    #[serde(default = "default_extension")]
    pub default_extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_extension: default_extension(),
        }
    }
}

fn default_extension() -> String {
    "out".to_string()
}

/// Sheet reading settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReaderConfig {
    /// Treat the first row with data as column labels
    #[serde(default = "default_header")]
    pub header: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            header: default_header(),
        }
    }
}

fn default_header() -> bool {
    true
}
