// core/src/compare.rs
//
// Answer comparison at the two strictness levels the trainer uses:
// - table grading: exact match, optionally breathing-insensitive
// - live single-field grading: full diacritic removal plus case fold
//
// The two entry points are deliberately separate (see normalize.rs); callers
// pick the path, the `ignore_breathing` flag is the only tunable.

use crate::normalize::{strip_all_diacritics, strip_breathing_only};
use unicode_normalization::UnicodeNormalization;

/// Grade one table cell. Case-sensitive and accent-sensitive; breathing
/// marks are ignored only when `ignore_breathing` is set. Empty user input
/// never matches a non-empty reference.
pub fn compare_table(user: &str, reference: &str, ignore_breathing: bool) -> bool {
    let user = user.trim();
    let reference = reference.trim();
    if user.is_empty() && !reference.is_empty() {
        return false;
    }
    if ignore_breathing {
        strip_breathing_only(user) == strip_breathing_only(reference)
    } else {
        // exact equality, insensitive only to the Unicode encoding form
        user.nfc().eq(reference.nfc())
    }
}

/// Grade a single field as the user types: maximally lenient. Both sides are
/// trimmed, stripped of every diacritic, and case-folded before comparison.
pub fn compare_live(user: &str, reference: &str) -> bool {
    let user = user.trim();
    let reference = reference.trim();
    if user.is_empty() && !reference.is_empty() {
        return false;
    }
    strip_all_diacritics(user).to_lowercase() == strip_all_diacritics(reference).to_lowercase()
}
