// libattic/src/config.rs

use std::path::Path;

use anyhow::Context as _;
use libhellenic_core::Config;
use serde::{Deserialize, Serialize};

/// Attic-specific options on top of the shared grading [`Config`]. The
/// shared flags flatten into the same TOML table, so one file configures
/// both layers:
///
/// ```toml
/// ignore_breathing = true
/// prefill_stems = true
/// prefill_contract_stems = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AtticConfig {
    #[serde(flatten)]
    pub core: Config,

    /// Also prefill stems for the -άω/-έω/-όω contract verbs, whose
    /// prefilled stem gives away the contraction.
    pub prefill_contract_stems: bool,

    /// Refuse to prefill an infinitive whose ending matches none of the
    /// known shapes, instead of falling back to a positional cut.
    pub strict_infinitives: bool,
}

impl AtticConfig {
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("failed to parse config TOML")
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&raw)
    }
}
