// libattic/src/record.rs
//
// Typed paradigm records and the vocabulary shared by the store, the stem
// extractor, and the navigation sequence.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Word class of a paradigm. Closed set; the store rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Noun,
    Adjective,
    Pronoun,
    Verb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    Present,
    Imperfect,
    Future,
    Aorist,
    Perfect,
    Pluperfect,
}

impl Tense {
    /// Position in the drill order (secondary sort key of the navigation
    /// sequence).
    pub fn rank(self) -> u8 {
        match self {
            Tense::Present => 0,
            Tense::Imperfect => 1,
            Tense::Future => 2,
            Tense::Aorist => 3,
            Tense::Perfect => 4,
            Tense::Pluperfect => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Indicative,
    Subjunctive,
    Optative,
    Imperative,
    Infinitive,
}

impl Mood {
    /// Position in the drill order (primary sort key: all indicatives come
    /// before all subjunctives, and so on; infinitives close the cycle).
    pub fn rank(self) -> u8 {
        match self {
            Mood::Indicative => 0,
            Mood::Subjunctive => 1,
            Mood::Optative => 2,
            Mood::Imperative => 3,
            Mood::Infinitive => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Voice {
    Active,
    Middle,
    Passive,
}

impl Voice {
    pub fn rank(self) -> u8 {
        match self {
            Voice::Active => 0,
            Voice::Middle => 1,
            Voice::Passive => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Number {
    Singular,
    Plural,
}

/// Gender column of an article/adjective paradigm. The JSON side stores the
/// three genders as a positional `[masc, fem, neut]` array per slot; the
/// store normalizes that into maps keyed by this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

/// How a verb forms its aorist. `Root` carries the bare root so the
/// extractor can reassemble the augmented stem for finite forms and use the
/// unaugmented root for the infinitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Aorist {
    Regular,
    Root { root: String },
}

/// The conjugation coordinates of one verb paradigm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbInfo {
    pub lemma: String,
    pub tense: Tense,
    pub mood: Mood,
    pub voice: Voice,
    pub aorist: Aorist,
}

/// One paradigm as held by the store. Slot keys are the JSON slot names,
/// flattened to `case_number` style for declined words (`nominative_sg`)
/// and kept as-is for conjugated ones (`1st_sg`, `inf_active`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParadigmRecord {
    Flat {
        category: Category,
        lemma: Option<String>,
        forms: BTreeMap<String, String>,
    },
    Gendered {
        category: Category,
        lemma: Option<String>,
        forms: BTreeMap<Gender, BTreeMap<String, String>>,
    },
    Verb {
        info: VerbInfo,
        forms: BTreeMap<String, String>,
    },
}

impl ParadigmRecord {
    pub fn category(&self) -> Category {
        match self {
            ParadigmRecord::Flat { category, .. } => *category,
            ParadigmRecord::Gendered { category, .. } => *category,
            ParadigmRecord::Verb { .. } => Category::Verb,
        }
    }

    pub fn lemma(&self) -> Option<&str> {
        match self {
            ParadigmRecord::Flat { lemma, .. } => lemma.as_deref(),
            ParadigmRecord::Gendered { lemma, .. } => lemma.as_deref(),
            ParadigmRecord::Verb { info, .. } => Some(&info.lemma),
        }
    }

    pub fn verb_info(&self) -> Option<&VerbInfo> {
        match self {
            ParadigmRecord::Verb { info, .. } => Some(info),
            _ => None,
        }
    }

    /// Every surface form in the paradigm, across genders for gendered
    /// records. These are the siblings the extractor aligns against.
    pub fn sibling_forms(&self) -> Vec<&str> {
        match self {
            ParadigmRecord::Flat { forms, .. } => forms.values().map(String::as_str).collect(),
            ParadigmRecord::Gendered { forms, .. } => forms
                .values()
                .flat_map(|slots| slots.values().map(String::as_str))
                .collect(),
            ParadigmRecord::Verb { forms, .. } => forms.values().map(String::as_str).collect(),
        }
    }

    /// Look up one slot. Gendered records need the gender column.
    pub fn form(&self, slot: &str, gender: Option<Gender>) -> Option<&str> {
        match self {
            ParadigmRecord::Flat { forms, .. } => forms.get(slot).map(String::as_str),
            ParadigmRecord::Verb { forms, .. } => forms.get(slot).map(String::as_str),
            ParadigmRecord::Gendered { forms, .. } => forms
                .get(&gender?)
                .and_then(|slots| slots.get(slot))
                .map(String::as_str),
        }
    }
}

/// What the extractor knows about the word it is splitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionContext {
    Noun,
    Adjective,
    Pronoun,
    Verb {
        lemma: String,
        tense: Tense,
        mood: Mood,
        voice: Voice,
        number: Option<Number>,
    },
}

impl ExtractionContext {
    pub fn category(&self) -> Category {
        match self {
            ExtractionContext::Noun => Category::Noun,
            ExtractionContext::Adjective => Category::Adjective,
            ExtractionContext::Pronoun => Category::Pronoun,
            ExtractionContext::Verb { .. } => Category::Verb,
        }
    }
}

/// A stem/ending split of one surface form. Invariant: `stem + ending`
/// reproduces the original word exactly, accents included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StemSplit {
    pub stem: String,
    pub ending: String,
}

impl StemSplit {
    /// Split `word` after its first `stem_chars` characters.
    pub fn at(word: &str, stem_chars: usize) -> Self {
        let split = word
            .char_indices()
            .nth(stem_chars)
            .map(|(i, _)| i)
            .unwrap_or(word.len());
        StemSplit {
            stem: word[..split].to_string(),
            ending: word[split..].to_string(),
        }
    }

    pub fn word(&self) -> String {
        format!("{}{}", self.stem, self.ending)
    }
}

/// Prefill payload for one answer slot when stem prefilling is enabled:
/// the stem to seed the field with, the ending still owed, and the full
/// expected answer for grading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefillHint {
    pub stem: String,
    pub ending: String,
    pub full_answer: String,
}

impl From<StemSplit> for PrefillHint {
    fn from(split: StemSplit) -> Self {
        let full_answer = split.word();
        PrefillHint {
            stem: split.stem,
            ending: split.ending,
            full_answer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_at_respects_char_boundaries() {
        let s = StemSplit::at("μοῦσα", 4);
        assert_eq!(s.stem, "μοῦσ");
        assert_eq!(s.ending, "α");
        assert_eq!(s.word(), "μοῦσα");
    }

    #[test]
    fn split_past_end_leaves_ending_empty() {
        let s = StemSplit::at("λύω", 10);
        assert_eq!(s.stem, "λύω");
        assert_eq!(s.ending, "");
    }

    #[test]
    fn rank_orders_match_drill_order() {
        assert!(Mood::Indicative.rank() < Mood::Subjunctive.rank());
        assert!(Mood::Imperative.rank() < Mood::Infinitive.rank());
        assert!(Tense::Present.rank() < Tense::Imperfect.rank());
        assert!(Tense::Aorist.rank() < Tense::Perfect.rank());
        assert!(Voice::Active.rank() < Voice::Passive.rank());
    }

    #[test]
    fn serde_names_are_lowercase() {
        assert_eq!(serde_json::to_string(&Tense::Aorist).unwrap(), "\"aorist\"");
        assert_eq!(
            serde_json::from_str::<Mood>("\"infinitive\"").unwrap(),
            Mood::Infinitive
        );
        assert_eq!(
            serde_json::from_str::<Category>("\"noun\"").unwrap(),
            Category::Noun
        );
    }
}
