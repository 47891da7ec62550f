//! libhellenic-core
//!
//! Polytonic Greek text layer shared by the morphology crates: mark tables,
//! the diacritic composer, lenient normalization, and answer comparison.
//!
//! Everything here is a pure function over its arguments plus fixed tables
//! built at compile time. Nothing is mutated after process start, so
//! concurrent reads need no synchronization.
//!
//! Public API:
//! - `MarkOp`, `Marks` and the mark tables from `marks`
//! - `compose` from `compose`
//! - `strip_breathing_only` / `strip_all_diacritics` / `strip_accent_only`
//!   from `normalize`
//! - `compare_table` / `compare_live` from `compare`
//! - `Config` - feature flags passed explicitly into grading calls

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod marks;
pub use marks::{Accent, Breathing, MarkOp, Marks};

pub mod compose;
pub use compose::compose;

pub mod normalize;
pub use normalize::{strip_accent_only, strip_all_diacritics, strip_breathing_only};

pub mod compare;
pub use compare::{compare_live, compare_table};

/// Generic grading configuration.
///
/// These were ambient UI toggles in earlier versions of the trainer; they are
/// now an explicit immutable value handed into comparator/extractor calls.
/// Language crates extend this with their own options (see `AtticConfig` in
/// the `libattic` crate).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Accept answers whose breathing marks differ from the reference
    /// (table-level grading only; live grading is always maximally lenient).
    pub ignore_breathing: bool,

    /// Prefill each answer field with the practical stem of the target form.
    pub prefill_stems: bool,

    /// Pick the next paradigm at random instead of following the fixed
    /// navigation sequence.
    pub randomize_next: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignore_breathing: false,
            prefill_stems: false,
            randomize_next: false,
        }
    }
}

impl Config {
    /// Parse a configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("failed to parse config TOML")
    }

    /// Load a configuration from a TOML file on disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&raw)
    }
}
