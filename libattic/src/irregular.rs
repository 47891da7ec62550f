// libattic/src/irregular.rs
//
// Per-(lemma, tense) stem overrides for verbs whose stems no prefix
// alignment can recover: the μι-verbs, οἶδα, and φημί. Consulted before
// every other extraction strategy; a hit only sticks when the override is
// actually a prefix of the target form, otherwise extraction falls back.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::record::{Number, Tense};

/// An override is either one stem for the whole paradigm or a
/// singular/plural pair (οἶδα: οἰ- vs ἰσ-).
#[derive(Debug, Clone, Copy)]
pub enum IrregularStem {
    Uniform(&'static str),
    ByNumber {
        singular: &'static str,
        plural: &'static str,
    },
}

impl IrregularStem {
    /// Pick the stem for a grammatical number; an unknown number defaults
    /// to the singular stem.
    pub fn resolve(&self, number: Option<Number>) -> &'static str {
        match self {
            IrregularStem::Uniform(stem) => stem,
            IrregularStem::ByNumber { singular, plural } => match number {
                Some(Number::Plural) => plural,
                _ => singular,
            },
        }
    }
}

static OVERRIDES: Lazy<HashMap<(&'static str, Tense), IrregularStem>> = Lazy::new(|| {
    use IrregularStem::{ByNumber, Uniform};
    HashMap::from([
        (
            ("οἶδα", Tense::Present),
            ByNumber { singular: "οἰ", plural: "ἰσ" },
        ),
        (("ἵημι", Tense::Present), Uniform("ἱ")),
        (
            ("φημί", Tense::Present),
            ByNumber { singular: "φη", plural: "φα" },
        ),
        (
            ("φημί", Tense::Imperfect),
            ByNumber { singular: "φη", plural: "φα" },
        ),
        (
            ("δίδωμι", Tense::Aorist),
            ByNumber { singular: "δω", plural: "δο" },
        ),
        (
            ("τίθημι", Tense::Aorist),
            ByNumber { singular: "θη", plural: "θε" },
        ),
        (
            ("ἵστημι", Tense::Aorist),
            ByNumber { singular: "στησ", plural: "στη" },
        ),
    ])
});

pub fn lookup(lemma: &str, tense: Tense) -> Option<&'static IrregularStem> {
    Lazy::force(&OVERRIDES)
        .iter()
        .find(|((l, t), _)| *l == lemma && *t == tense)
        .map(|(_, stem)| stem)
}
