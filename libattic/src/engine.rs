// libattic/src/engine.rs
//
// Session facade tying the store, the extractor, and the comparators to
// one configuration. Grading goes through here so the `ignore_breathing`
// and prefill flags apply uniformly.

use libhellenic_core::{compare_live, compare_table};
use tracing::debug;

use crate::config::AtticConfig;
use crate::contraction::ContractClass;
use crate::extract::Extractor;
use crate::infinitive;
use crate::record::{Aorist, ExtractionContext, Gender, Mood, PrefillHint};
use crate::sequence::VerbSequence;
use crate::store::ParadigmStore;

pub struct AtticEngine {
    store: ParadigmStore,
    config: AtticConfig,
}

impl AtticEngine {
    pub fn new(store: ParadigmStore, config: AtticConfig) -> Self {
        AtticEngine { store, config }
    }

    pub fn store(&self) -> &ParadigmStore {
        &self.store
    }

    pub fn config(&self) -> &AtticConfig {
        &self.config
    }

    /// Grade one table cell against its reference form.
    pub fn grade_cell(&self, user: &str, reference: &str) -> bool {
        compare_table(user, reference, self.config.core.ignore_breathing)
    }

    /// Grade a free-standing answer field while the user types.
    pub fn grade_live(&self, user: &str, reference: &str) -> bool {
        compare_live(user, reference)
    }

    /// The drill-order navigation sequence for a lemma.
    pub fn sequence(&self, lemma: &str) -> VerbSequence {
        VerbSequence::for_lemma(&self.store, lemma)
    }

    /// Stem prefill for one answer slot, or `None` when prefilling is off
    /// or suppressed for this kind of form.
    pub fn prefill(
        &self,
        key: &str,
        slot: &str,
        gender: Option<Gender>,
        ctx: &ExtractionContext,
    ) -> Option<PrefillHint> {
        if !self.config.core.prefill_stems {
            return None;
        }
        let record = self.store.get(key)?;
        let word = record.form(slot, gender)?;

        if let ExtractionContext::Verb {
            lemma,
            tense,
            mood,
            voice,
            ..
        } = ctx
        {
            if !self.config.prefill_contract_stems && ContractClass::detect(lemma).is_some() {
                debug!(%lemma, "contract stem prefill suppressed");
                return None;
            }
            if self.config.strict_infinitives && *mood == Mood::Infinitive {
                let has_root = record
                    .verb_info()
                    .is_some_and(|info| matches!(info.aorist, Aorist::Root { .. }));
                if !has_root && infinitive::stem_chars(word, *tense, *voice).is_none() {
                    debug!(key, slot, "no infinitive shape, prefill suppressed");
                    return None;
                }
            }
        }

        let extractor = Extractor::new(&self.store);
        Some(extractor.extract_in(Some(record), word, ctx).into())
    }
}
