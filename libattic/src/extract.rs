// libattic/src/extract.rs
//
// Stem/ending extraction. Strategies run in a fixed priority order:
//
//   1. irregular override table (μι-verbs, οἶδα, φημί)
//   2. infinitive ending shapes (root-aorist bare root first)
//   3. contract-verb lemma truncation (-άω/-έω/-όω)
//   4. alignment against the paradigm siblings, with per-tense refinement
//      (augment reversal, sigma extension, theme-vowel drop)
//   5. category ending lists, then a positional split
//
// All matching runs on accent-free text; the winning strategy yields a
// character count that is mapped back onto the accented word, so
// `stem + ending == word` always holds exactly.

use libhellenic_core::strip_all_diacritics;
use tracing::debug;

use crate::contraction::ContractClass;
use crate::infinitive;
use crate::irregular;
use crate::record::{
    Aorist, Category, ExtractionContext, Mood, ParadigmRecord, PrefillHint, StemSplit, Tense,
    Voice,
};
use crate::store::ParadigmStore;

pub struct Extractor<'s> {
    store: &'s ParadigmStore,
}

impl<'s> Extractor<'s> {
    pub fn new(store: &'s ParadigmStore) -> Self {
        Extractor { store }
    }

    /// Split `word`, locating the sibling paradigm through the store when
    /// the context identifies one (verbs). Nominal contexts without a
    /// record go straight to the category fallback; prefer
    /// [`Extractor::extract_in`] when the paradigm is at hand.
    pub fn extract(&self, word: &str, ctx: &ExtractionContext) -> StemSplit {
        let record = match ctx {
            ExtractionContext::Verb {
                lemma,
                tense,
                mood,
                voice,
                ..
            } => self.store.find_verb(lemma, *tense, *mood, *voice),
            _ => None,
        };
        self.extract_in(record, word, ctx)
    }

    /// Split `word` using `record` as the sibling paradigm.
    pub fn extract_in(
        &self,
        record: Option<&ParadigmRecord>,
        word: &str,
        ctx: &ExtractionContext,
    ) -> StemSplit {
        if let ExtractionContext::Verb {
            lemma,
            tense,
            mood,
            voice,
            number,
        } = ctx
        {
            if let Some(over) = irregular::lookup(lemma, *tense) {
                let stem = over.resolve(*number);
                if let Some(n) = bare_prefix_chars(word, stem) {
                    debug!(%lemma, stem, "irregular override");
                    return StemSplit::at(word, n);
                }
                // an override that does not fit the form wins nothing
                return basic_split(word, Category::Verb);
            }

            let aorist_root = record
                .and_then(ParadigmRecord::verb_info)
                .and_then(|info| match &info.aorist {
                    Aorist::Root { root } => Some(root.as_str()),
                    Aorist::Regular => None,
                });

            if *mood == Mood::Infinitive {
                return self.split_infinitive(word, *tense, *voice, aorist_root);
            }

            if ContractClass::detect(lemma).is_some() {
                let cut = lemma.chars().count().saturating_sub(2);
                let stem: String = lemma.chars().take(cut).collect();
                if let Some(n) = bare_prefix_chars(word, &stem) {
                    debug!(%lemma, %stem, "contract lemma truncation");
                    return StemSplit::at(word, n);
                }
            }

            if let Some(record) = record {
                if let Some(n) = verb_alignment(record, word, *tense, aorist_root) {
                    return StemSplit::at(word, n);
                }
            }
            return basic_split(word, Category::Verb);
        }

        if let Some(record) = record {
            if let Some(n) = nominal_alignment(record, word) {
                return StemSplit::at(word, n);
            }
        }
        basic_split(word, ctx.category())
    }

    pub fn prefill_hint(
        &self,
        record: Option<&ParadigmRecord>,
        word: &str,
        ctx: &ExtractionContext,
    ) -> PrefillHint {
        self.extract_in(record, word, ctx).into()
    }

    fn split_infinitive(
        &self,
        word: &str,
        tense: Tense,
        voice: Voice,
        aorist_root: Option<&str>,
    ) -> StemSplit {
        if tense == Tense::Aorist && voice == Voice::Active {
            if let Some(root) = aorist_root {
                // root aorist infinitive: the unaugmented root is the stem
                if let Some(n) = bare_prefix_chars(word, root) {
                    return StemSplit::at(word, n);
                }
            }
        }
        if let Some(n) = infinitive::stem_chars(word, tense, voice) {
            return StemSplit::at(word, n);
        }
        let len = word.chars().count();
        if len > 2 {
            return StemSplit::at(word, len - 2);
        }
        basic_split(word, Category::Verb)
    }
}

/// Char count of `stem` if its accent-free form is a proper prefix of the
/// accent-free `word`.
fn bare_prefix_chars(word: &str, stem: &str) -> Option<usize> {
    let bare_word = strip_all_diacritics(word);
    let bare_stem = strip_all_diacritics(stem);
    let n = bare_stem.chars().count();
    if n > 0 && n < bare_word.chars().count() && bare_word.starts_with(&bare_stem) {
        Some(n)
    } else {
        None
    }
}

fn common_prefix_chars(items: &[String]) -> usize {
    let Some(first) = items.first() else { return 0 };
    let mut len = first.chars().count();
    for item in &items[1..] {
        len = len.min(
            first
                .chars()
                .zip(item.chars())
                .take_while(|(a, b)| a == b)
                .count(),
        );
    }
    len
}

fn min_stem_chars(word_chars: usize) -> usize {
    if word_chars > 4 {
        3
    } else {
        2
    }
}

fn take_chars(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

/// Strip the syllabic augment or reverse the temporal lengthening at the
/// front of an accent-free indicative form. Returns the de-augmented form
/// and how many characters the augment added to the original.
fn de_augment(bare: &str) -> (String, usize) {
    let mut chars = bare.chars();
    match (chars.next(), chars.clone().next()) {
        (Some('η'), Some('υ')) => (format!("αυ{}", chars.skip(1).collect::<String>()), 0),
        (Some('ε'), _) => (chars.collect(), 1),
        (Some('η'), _) => (format!("ε{}", chars.collect::<String>()), 0),
        (Some('ω'), _) => (format!("ο{}", chars.collect::<String>()), 0),
        _ => (bare.to_string(), 0),
    }
}

const THEMATIC_ENDINGS: &[&str] = &["ω", "εις", "ει", "ομεν", "ετε", "ουσι", "ουσιν"];

fn verb_alignment(
    record: &ParadigmRecord,
    word: &str,
    tense: Tense,
    aorist_root: Option<&str>,
) -> Option<usize> {
    let bare_word = strip_all_diacritics(word);
    let word_chars = bare_word.chars().count();
    let siblings: Vec<String> = record
        .sibling_forms()
        .iter()
        .map(|f| strip_all_diacritics(f))
        .collect();
    if siblings.is_empty() {
        return None;
    }

    if tense == Tense::Aorist {
        if let Some(root) = aorist_root {
            // finite root aorist: augment plus bare root
            let augmented = format!("ε{}", strip_all_diacritics(root));
            let n = augmented.chars().count();
            if n < word_chars && bare_word.starts_with(&augmented) {
                debug!(root, "root aorist stem");
                return Some(n);
            }
        }
    }

    let (delta, mut prefix_len) = match tense {
        Tense::Imperfect | Tense::Pluperfect => {
            let stripped: Vec<String> = siblings.iter().map(|s| de_augment(s).0).collect();
            let plen = common_prefix_chars(&stripped);
            let (bare_target, tdelta) = de_augment(&bare_word);
            let prefix = take_chars(&stripped[0], plen);
            if plen == 0 || !bare_target.starts_with(&prefix) {
                return None;
            }
            (tdelta, plen)
        }
        _ => {
            let plen = common_prefix_chars(&siblings);
            let prefix = take_chars(&siblings[0], plen);
            if plen == 0 || !bare_word.starts_with(&prefix) {
                return None;
            }
            (0, plen)
        }
    };

    match tense {
        // sigmatic stems extend through the σ of the target
        Tense::Aorist | Tense::Future => {
            if bare_word.chars().nth(prefix_len) == Some('σ') {
                prefix_len += 1;
            }
        }
        // drop a theme vowel the whole paradigm happens to share
        Tense::Present => {
            let prefix = take_chars(&siblings[0], prefix_len);
            if prefix_len > 1 && matches!(prefix.chars().last(), Some('ο' | 'ε')) {
                let all_thematic = siblings.iter().all(|s| {
                    let tail: String = s.chars().skip(prefix_len - 1).collect();
                    THEMATIC_ENDINGS.contains(&tail.as_str())
                });
                if all_thematic {
                    prefix_len -= 1;
                }
            }
        }
        _ => {}
    }

    let stem = delta + prefix_len;
    // too short a prefix says the paradigm mixes stems; let the ending
    // lists decide instead
    if stem < min_stem_chars(word_chars) || stem >= word_chars {
        return None;
    }
    debug!(stem, ?tense, "paradigm alignment");
    Some(stem)
}

fn nominal_alignment(record: &ParadigmRecord, word: &str) -> Option<usize> {
    let bare_word = strip_all_diacritics(word);
    let word_chars = bare_word.chars().count();
    let siblings: Vec<String> = record
        .sibling_forms()
        .iter()
        .map(|f| strip_all_diacritics(f))
        .collect();
    if siblings.is_empty() {
        return None;
    }

    let mut prefix_len = common_prefix_chars(&siblings);
    let prefix = take_chars(&siblings[0], prefix_len);
    if prefix_len == 0 || !bare_word.starts_with(&prefix) {
        return None;
    }

    let min = min_stem_chars(word_chars);
    // a trailing declension vowel belongs to the ending column
    if prefix_len > min && matches!(prefix.chars().last(), Some('α' | 'η' | 'ο')) {
        prefix_len -= 1;
    }

    if prefix_len < min || prefix_len >= word_chars {
        return None;
    }
    Some(prefix_len)
}

const NOUN_ENDINGS: &[&str] = &[
    "ουσι", "εσσι", "αις", "οις", "ους", "ων", "ου", "ος", "ον", "οι", "ας", "αι", "αν", "ης",
    "ην", "ω", "α", "η", "ε",
];

const VERB_ENDINGS: &[&str] = &[
    "ουσιν", "ονται", "ομεθα", "ουσι", "αμεν", "ομεν", "ομην", "εσθε", "εται", "ομαι", "ασιν",
    "ατε", "ετε", "εις", "ασι", "σαν", "ει", "ες", "εν", "ον", "αν", "ας", "ην", "ης", "ου", "ω",
    "α", "ε", "η",
];

fn category_endings(category: Category) -> &'static [&'static str] {
    match category {
        Category::Verb => VERB_ENDINGS,
        Category::Noun | Category::Adjective | Category::Pronoun => NOUN_ENDINGS,
    }
}

/// Last-resort split: the longest known ending for the category that
/// leaves at least two characters of stem, else a positional cut.
fn basic_split(word: &str, category: Category) -> StemSplit {
    let bare = strip_all_diacritics(word);
    let n = bare.chars().count();
    if n == 0 {
        return StemSplit::at(word, 0);
    }

    for ending in category_endings(category) {
        let el = ending.chars().count();
        if n > el && n - el >= 2 && bare.ends_with(ending) {
            return StemSplit::at(word, n - el);
        }
    }

    let ending_len = match n {
        6.. => 3,
        4..=5 => 2,
        2..=3 => 1,
        _ => 0,
    };
    StemSplit::at(word, n - ending_len)
}
