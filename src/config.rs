//! Run configuration.
//!
//! All paths are fixed conventions; an optional `packager.toml` next to the
//! invocation can override them. The binary itself stays parameterless.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// File name looked up in the working directory for overrides.
pub const CONFIG_FILENAME: &str = "packager.toml";

/// Paths and naming for a packaging run.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct PackagerConfig {
    /// Directory tree to package.
    pub source_dir: PathBuf,
    /// Distribution directory receiving the archive and descriptor. Must
    /// already exist.
    pub dist_dir: PathBuf,
    /// Descriptor template with the four `{{...}}` placeholders.
    pub template_path: PathBuf,
    /// Fixed descriptor file name inside the distribution directory.
    pub descriptor_name: String,
    /// Prefix of the dated archive file name.
    pub artifact_prefix: String,
}

impl Default for PackagerConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("src"),
            dist_dir: PathBuf::from("dist"),
            template_path: PathBuf::from("updates_template.xml"),
            descriptor_name: "updates.xri".to_string(),
            artifact_prefix: "SetiAstroScripts".to_string(),
        }
    }
}

impl PackagerConfig {
    /// Parse a `packager.toml`.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading packager config '{}'", path.display()))?;
        let parsed = toml::from_str(&raw)
            .with_context(|| format!("parsing packager config '{}'", path.display()))?;
        Ok(parsed)
    }

    /// Use `dir/packager.toml` when present, the baked-in conventions
    /// otherwise.
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILENAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}
