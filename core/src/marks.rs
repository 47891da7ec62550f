// core/src/marks.rs
//
// Mark tables for polytonic Greek: combining-character constants, vowel
// classification, and the fixed accent-fold table. Pure data plus the
// decompose/recompose helpers built on Unicode NFD/NFC; the composer and
// normalizer consume these, no logic of their own lives here.

use phf::{phf_map, phf_set};
use unicode_normalization::UnicodeNormalization;

/// Combining smooth breathing (psili).
pub const SMOOTH_BREATHING: char = '\u{0313}';
/// Combining rough breathing (dasia).
pub const ROUGH_BREATHING: char = '\u{0314}';
/// Combining grave accent (varia).
pub const GRAVE: char = '\u{0300}';
/// Combining acute accent (oxia/tonos).
pub const ACUTE: char = '\u{0301}';
/// Combining circumflex (perispomeni).
pub const CIRCUMFLEX: char = '\u{0342}';
/// Combining iota subscript (ypogegrammeni).
pub const IOTA_SUBSCRIPT: char = '\u{0345}';

/// The full set of combining marks removed by `strip_all_diacritics`:
/// grave, acute, circumflex accent (both encodings), macron, breve,
/// diaeresis, the two breathings, koronis, dialytika-tonos, and the iota
/// subscript treated as a mark.
pub const ALL_DIACRITICS: [char; 12] = [
    '\u{0300}', // grave
    '\u{0301}', // acute
    '\u{0302}', // circumflex (Latin-style encoding)
    '\u{0304}', // macron
    '\u{0306}', // breve
    '\u{0308}', // diaeresis
    '\u{0313}', // smooth breathing
    '\u{0314}', // rough breathing
    '\u{0342}', // circumflex (perispomeni)
    '\u{0343}', // koronis
    '\u{0344}', // dialytika-tonos
    '\u{0345}', // iota subscript
];

/// One combining-mark operation requested at the text cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkOp {
    SmoothBreathing,
    RoughBreathing,
    Acute,
    Grave,
    Circumflex,
    IotaSubscript,
}

/// Breathing category: at most one per character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breathing {
    Smooth,
    Rough,
}

impl Breathing {
    pub fn combining_char(self) -> char {
        match self {
            Breathing::Smooth => SMOOTH_BREATHING,
            Breathing::Rough => ROUGH_BREATHING,
        }
    }
}

/// Accent category: at most one per character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Acute,
    Grave,
    Circumflex,
}

impl Accent {
    pub fn combining_char(self) -> char {
        match self {
            Accent::Acute => ACUTE,
            Accent::Grave => GRAVE,
            Accent::Circumflex => CIRCUMFLEX,
        }
    }
}

/// The ordered mark set carried by one character.
///
/// Canonical emission order for recomposition is base, breathing, unmanaged
/// marks, accent, iota subscript; that is the NFD order for every reachable
/// combination, including diaeresis-then-acute (ΐ). Marks outside the three
/// categories (macron, diaeresis, ...) are carried through untouched in
/// `extra`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Marks {
    pub breathing: Option<Breathing>,
    pub accent: Option<Accent>,
    pub iota_subscript: bool,
    /// Combining marks we do not manage, preserved verbatim.
    pub extra: Vec<char>,
}

/// Lowercase and uppercase Greek vowels.
static GREEK_VOWELS: phf::Set<char> = phf_set! {
    'α', 'ε', 'η', 'ι', 'ο', 'υ', 'ω',
    'Α', 'Ε', 'Η', 'Ι', 'Ο', 'Υ', 'Ω',
};

/// The three vowels that historically take an iota subscript.
static IOTA_SUBSCRIPT_VOWELS: phf::Set<char> = phf_set! {
    'α', 'η', 'ω', 'Α', 'Η', 'Ω',
};

/// Vowels with distinguishable long quantity; only these carry a circumflex.
/// Epsilon and omicron are short-only and are excluded.
static CIRCUMFLEX_VOWELS: phf::Set<char> = phf_set! {
    'α', 'η', 'ι', 'υ', 'ω', 'Α', 'Η', 'Ι', 'Υ', 'Ω',
};

/// Fixed accent-removal table used by `strip_accent_only`.
///
/// Maps each precomposed accented vowel the trainer historically recognized
/// to its unaccented counterpart; breathing and iota subscript survive
/// because their precomposed characters are simply absent from the table.
/// This is deliberately a lookup table rather than generic decomposition -
/// the two lenient-comparison strategies must stay distinct.
static ACCENT_FOLD: phf::Map<char, char> = phf_map! {
    // alpha
    'ά' => 'α', 'ὰ' => 'α', 'ᾶ' => 'α',
    // epsilon
    'έ' => 'ε', 'ὲ' => 'ε',
    // eta
    'ή' => 'η', 'ὴ' => 'η', 'ῆ' => 'η',
    // iota
    'ί' => 'ι', 'ὶ' => 'ι', 'ῖ' => 'ι',
    // omicron
    'ό' => 'ο', 'ὸ' => 'ο',
    // upsilon
    'ύ' => 'υ', 'ὺ' => 'υ', 'ῦ' => 'υ',
    // omega
    'ώ' => 'ω', 'ὼ' => 'ω', 'ῶ' => 'ω',
};

/// True if `c` is a Greek vowel letter (base letters only, either case).
pub fn is_greek_vowel(c: char) -> bool {
    GREEK_VOWELS.contains(&c)
}

/// True if `c` can carry an iota subscript.
pub fn takes_iota_subscript(c: char) -> bool {
    IOTA_SUBSCRIPT_VOWELS.contains(&c)
}

/// True if `c` can carry a circumflex.
pub fn takes_circumflex(c: char) -> bool {
    CIRCUMFLEX_VOWELS.contains(&c)
}

/// Look up the unaccented counterpart of a precomposed accented character.
/// Characters absent from the table pass through unchanged.
pub fn fold_accent(c: char) -> char {
    ACCENT_FOLD.get(&c).copied().unwrap_or(c)
}

/// Decompose a single character into its base letter and mark set.
///
/// The base letter keeps its case; decomposing the result of any composition
/// must yield the original base vowel.
pub fn decompose_char(c: char) -> (char, Marks) {
    let mut iter = std::iter::once(c).nfd();
    let base = iter.next().unwrap_or(c);
    let mut marks = Marks::default();
    for mark in iter {
        match mark {
            SMOOTH_BREATHING => marks.breathing = Some(Breathing::Smooth),
            ROUGH_BREATHING => marks.breathing = Some(Breathing::Rough),
            ACUTE => marks.accent = Some(Accent::Acute),
            GRAVE => marks.accent = Some(Accent::Grave),
            CIRCUMFLEX => marks.accent = Some(Accent::Circumflex),
            IOTA_SUBSCRIPT => marks.iota_subscript = true,
            other => marks.extra.push(other),
        }
    }
    (base, marks)
}

/// Reassemble a base letter and mark set in canonical order and recompose
/// to the precomposed character whenever one exists.
pub fn recompose(base: char, marks: &Marks) -> String {
    let mut out = String::new();
    out.push(base);
    if let Some(b) = marks.breathing {
        out.push(b.combining_char());
    }
    // diaeresis and friends sort before the accent in canonical order
    for &m in &marks.extra {
        out.push(m);
    }
    if let Some(a) = marks.accent {
        out.push(a.combining_char());
    }
    if marks.iota_subscript {
        out.push(IOTA_SUBSCRIPT);
    }
    out.nfc().collect()
}
