// core/src/compose.rs
//
// Diacritic composer: applies one combining-mark operation to the character
// immediately before the text cursor.
//
// Behavior contract:
// - incompatible bases are a no-op, never an error
// - breathing/accent operations replace any existing mark of the same
//   category, so applying the same operation twice is idempotent
// - the result is reassembled in canonical order and recomposed to the
//   single precomposed character whenever one exists

use crate::marks::{
    decompose_char, is_greek_vowel, recompose, takes_circumflex, takes_iota_subscript, Accent,
    Breathing, MarkOp,
};
use tracing::trace;
use unicode_normalization::UnicodeNormalization;

/// Apply `op` to the character immediately before `cursor` (a char index
/// into the NFC form of `text`).
///
/// Returns the new text, or the input unchanged when the cursor is at the
/// start, out of range, or the preceding character cannot carry the mark.
/// The cursor position of the caller stays valid: the modified character
/// recomposes to a single precomposed character for every reachable
/// combination.
pub fn compose(text: &str, cursor: usize, op: MarkOp) -> String {
    let chars: Vec<char> = text.nfc().collect();
    if cursor == 0 || cursor > chars.len() {
        return text.to_string();
    }

    let target = chars[cursor - 1];
    let (base, mut marks) = decompose_char(target);
    if !is_greek_vowel(base) {
        trace!(%base, ?op, "mark on non-vowel base ignored");
        return text.to_string();
    }

    match op {
        MarkOp::SmoothBreathing => marks.breathing = Some(Breathing::Smooth),
        MarkOp::RoughBreathing => marks.breathing = Some(Breathing::Rough),
        MarkOp::Acute => marks.accent = Some(Accent::Acute),
        MarkOp::Grave => marks.accent = Some(Accent::Grave),
        MarkOp::Circumflex => {
            if !takes_circumflex(base) {
                return text.to_string();
            }
            marks.accent = Some(Accent::Circumflex);
        }
        MarkOp::IotaSubscript => {
            if !takes_iota_subscript(base) {
                return text.to_string();
            }
            marks.iota_subscript = true;
        }
    }

    let mut out = String::new();
    out.extend(&chars[..cursor - 1]);
    out.push_str(&recompose(base, &marks));
    out.extend(&chars[cursor..]);
    out
}

/// Convenience used by tests and callers operating on a single character:
/// applies `op` to the last character of `text`.
pub fn compose_last(text: &str, op: MarkOp) -> String {
    let len = text.nfc().count();
    compose(text, len, op)
}
