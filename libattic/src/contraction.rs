// libattic/src/contraction.rs
//
// Vowel-contraction rules for the α-, ε-, and ο-contract verbs. The tables
// map an accent-free vowel cluster (stem vowel plus the opening vowels of
// the ending) to its contracted outcome; iota subscripts belong to the
// outcome, accents are the caller's business.

use libhellenic_core::strip_all_diacritics;
use phf::phf_map;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractClass {
    Alpha,
    Epsilon,
    Omicron,
}

static ALPHA_RULES: phf::Map<&'static str, &'static str> = phf_map! {
    "αει" => "ᾳ",
    "αε" => "α",
    "αη" => "α",
    "αο" => "ω",
    "αου" => "ω",
    "αω" => "ω",
    "αοι" => "ῳ",
};

static EPSILON_RULES: phf::Map<&'static str, &'static str> = phf_map! {
    "εει" => "ει",
    "εε" => "ει",
    "εο" => "ου",
    "εου" => "ου",
    "εω" => "ω",
    "εοι" => "οι",
    "εη" => "η",
};

static OMICRON_RULES: phf::Map<&'static str, &'static str> = phf_map! {
    "οει" => "οι",
    "οε" => "ου",
    "οο" => "ου",
    "οου" => "ου",
    "οω" => "ω",
    "οοι" => "οι",
    "οη" => "οι",
};

impl ContractClass {
    /// Classify a lemma by its dictionary ending: -άω, -έω, or -όω.
    pub fn detect(lemma: &str) -> Option<Self> {
        let bare: Vec<char> = strip_all_diacritics(lemma).chars().collect();
        match bare.as_slice() {
            [.., v, 'ω'] => Self::of_vowel(*v),
            _ => None,
        }
    }

    pub fn of_vowel(v: char) -> Option<Self> {
        match v {
            'α' => Some(ContractClass::Alpha),
            'ε' => Some(ContractClass::Epsilon),
            'ο' => Some(ContractClass::Omicron),
            _ => None,
        }
    }

    pub fn vowel(self) -> char {
        match self {
            ContractClass::Alpha => 'α',
            ContractClass::Epsilon => 'ε',
            ContractClass::Omicron => 'ο',
        }
    }

    fn rules(self) -> &'static phf::Map<&'static str, &'static str> {
        match self {
            ContractClass::Alpha => &ALPHA_RULES,
            ContractClass::Epsilon => &EPSILON_RULES,
            ContractClass::Omicron => &OMICRON_RULES,
        }
    }
}

fn bare(c: char) -> char {
    strip_all_diacritics(&c.to_string()).chars().next().unwrap_or(c)
}

const VOWELS: &[char] = &['α', 'ε', 'η', 'ι', 'ο', 'υ', 'ω'];

/// Join `stem` and `ending`, contracting at the seam when a rule applies.
///
/// The candidate cluster is the stem-final contract vowel (if there is one)
/// followed by the ending's leading vowel run; the longest matching rule
/// wins. With no matching rule the parts are concatenated as-is.
///
/// # Example
/// ```
/// use libattic::contraction::apply_contraction;
/// assert_eq!(apply_contraction("τιμ", "αει"), "τιμᾳ");
/// assert_eq!(apply_contraction("φιλε", "ομεν"), "φιλουμεν");
/// assert_eq!(apply_contraction("λυ", "ομεν"), "λυομεν");
/// ```
pub fn apply_contraction(stem: &str, ending: &str) -> String {
    let stem_chars: Vec<char> = stem.chars().collect();
    let ending_chars: Vec<char> = ending.chars().collect();

    let stem_vowel = stem_chars.last().map(|&c| bare(c));
    let (class, from_stem) = match stem_vowel.and_then(ContractClass::of_vowel) {
        Some(class) => (Some(class), 1usize),
        None => (
            ending_chars
                .first()
                .map(|&c| bare(c))
                .and_then(ContractClass::of_vowel),
            0,
        ),
    };
    let Some(class) = class else {
        return format!("{stem}{ending}");
    };

    let mut cluster = String::new();
    if from_stem == 1 {
        cluster.push(stem_vowel.unwrap());
    }
    for &c in &ending_chars {
        let b = bare(c);
        if VOWELS.contains(&b) {
            cluster.push(b);
        } else {
            break;
        }
    }

    let cluster_chars: Vec<char> = cluster.chars().collect();
    let max = cluster_chars.len().min(3);
    for take in (2..=max).rev() {
        let key: String = cluster_chars[..take].iter().collect();
        if let Some(contracted) = class.rules().get(key.as_str()) {
            let keep_stem: String = stem_chars[..stem_chars.len() - from_stem].iter().collect();
            let keep_ending: String = ending_chars[take - from_stem..].iter().collect();
            return format!("{keep_stem}{contracted}{keep_ending}");
        }
    }
    format!("{stem}{ending}")
}

/// Undo a contraction at the end of a surface form: find the contracted
/// outcome the word ends with (accents ignored, iota subscripts respected)
/// and return the remaining stem portion together with the uncontracted
/// cluster. Ambiguous outcomes resolve to the shortest source cluster.
pub fn uncontract(word: &str, class: ContractClass) -> Option<(String, String)> {
    let folded = fold_accents(word);
    let mut entries: Vec<(&str, &str)> = class.rules().entries().map(|(k, v)| (*k, *v)).collect();
    entries.sort_by_key(|(cluster, outcome)| {
        (std::cmp::Reverse(outcome.chars().count()), cluster.chars().count())
    });
    for (cluster, outcome) in entries {
        if folded.ends_with(outcome) {
            let keep = word.chars().count() - outcome.chars().count();
            let stem: String = word.chars().take(keep).collect();
            return Some((stem, cluster.to_string()));
        }
    }
    None
}

// Accent removal that keeps breathing marks and iota subscripts, so the
// contracted outcomes (which may carry a subscript) still line up.
fn fold_accents(text: &str) -> String {
    use unicode_normalization::UnicodeNormalization;
    const ACCENT_MARKS: &[char] = &[
        '\u{0300}', '\u{0301}', '\u{0342}', '\u{0304}', '\u{0306}', '\u{0308}',
    ];
    text.nfd().filter(|c| !ACCENT_MARKS.contains(c)).nfc().collect()
}
