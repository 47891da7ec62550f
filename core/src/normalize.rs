// core/src/normalize.rs
//
// Lenient normalization for answer comparison. Three independent routines:
// breathing-only removal, full diacritic removal, and the narrow table-driven
// accent fold. The first two run through NFD, filter combining marks, and
// recompose; the third is a per-character lookup in the fixed accent table.
//
// The accent fold and the generic full strip are intentionally NOT unified:
// they back two grading paths of different leniency, and folding them into
// one routine would silently change grading behavior.

use crate::marks::{fold_accent, ALL_DIACRITICS, ROUGH_BREATHING, SMOOTH_BREATHING};
use unicode_normalization::UnicodeNormalization;

/// Remove only the two breathing marks; accents and iota subscripts survive.
pub fn strip_breathing_only(text: &str) -> String {
    text.nfd()
        .filter(|&c| c != SMOOTH_BREATHING && c != ROUGH_BREATHING)
        .nfc()
        .collect()
}

/// Remove every combining mark in the full diacritic set.
pub fn strip_all_diacritics(text: &str) -> String {
    text.nfd()
        .filter(|c| !ALL_DIACRITICS.contains(c))
        .nfc()
        .collect()
}

/// Fold accented precomposed characters to their unaccented counterparts via
/// the fixed table, lowercasing first. Breathing marks and iota subscripts
/// are preserved; characters absent from the table pass through unchanged.
pub fn strip_accent_only(text: &str) -> String {
    text.nfc()
        .flat_map(char::to_lowercase)
        .map(fold_accent)
        .collect()
}
