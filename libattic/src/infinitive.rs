// libattic/src/infinitive.rs
//
// Infinitive ending shapes per (tense, voice). Ordered longest-first so the
// sigmatic/thematic shape wins over the bare athematic one where both fit.

use libhellenic_core::strip_all_diacritics;

use crate::record::{Tense, Voice};

pub fn suffixes(tense: Tense, voice: Voice) -> &'static [&'static str] {
    use Tense::*;
    use Voice::*;
    match (tense, voice) {
        (Present, Active) => &["ειν", "ναι"],
        (Present, Middle | Passive) => &["εσθαι", "σθαι"],
        (Future, Active) => &["ειν"],
        (Future, Middle | Passive) => &["εσθαι"],
        (Aorist, Active) => &["σαι", "αι"],
        (Aorist, Middle) => &["σασθαι", "ασθαι"],
        (Aorist, Passive) => &["θηναι", "ηναι"],
        (Perfect, Active) => &["εναι", "ναι"],
        (Perfect, Middle | Passive) => &["σθαι"],
        // no infinitives exist for these tenses
        (Imperfect | Pluperfect, _) => &[],
    }
}

/// Stem length in characters of an infinitive form, if one of the ending
/// shapes for this (tense, voice) matches. Matching is accent-free; the
/// stem must be non-empty.
pub fn stem_chars(word: &str, tense: Tense, voice: Voice) -> Option<usize> {
    let bare = strip_all_diacritics(word);
    let total = bare.chars().count();
    for suffix in suffixes(tense, voice) {
        let n = suffix.chars().count();
        if total > n && bare.ends_with(suffix) {
            return Some(total - n);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thematic_and_sigmatic_shapes() {
        assert_eq!(stem_chars("λύειν", Tense::Present, Voice::Active), Some(2));
        assert_eq!(stem_chars("λύεσθαι", Tense::Present, Voice::Middle), Some(2));
        assert_eq!(stem_chars("λῦσαι", Tense::Aorist, Voice::Active), Some(2));
        assert_eq!(stem_chars("λύσασθαι", Tense::Aorist, Voice::Middle), Some(2));
        assert_eq!(stem_chars("λύσειν", Tense::Future, Voice::Active), Some(3));
    }

    #[test]
    fn passive_and_perfect_shapes() {
        // the θη tense marker stays on the ending side, like the aorist σ
        assert_eq!(stem_chars("λυθῆναι", Tense::Aorist, Voice::Passive), Some(2));
        assert_eq!(stem_chars("γραφῆναι", Tense::Aorist, Voice::Passive), Some(4));
        assert_eq!(stem_chars("λελυκέναι", Tense::Perfect, Voice::Active), Some(5));
        assert_eq!(stem_chars("λελύσθαι", Tense::Perfect, Voice::Middle), Some(4));
    }

    #[test]
    fn no_match_without_a_shape() {
        assert_eq!(stem_chars("λύω", Tense::Present, Voice::Active), None);
        assert_eq!(stem_chars("ἔλυον", Tense::Imperfect, Voice::Active), None);
        // the suffix alone is not an infinitive
        assert_eq!(stem_chars("ειν", Tense::Present, Voice::Active), None);
    }
}
