// libattic/src/sequence.rs
//
// Drill-order navigation over the (tense, mood, voice) cells a lemma has
// in the store. The order is precomputed once: moods first, then tenses,
// then voices, with all infinitive voices of a tense collapsed into one
// stop. Both directions wrap around.

use crate::record::{Mood, Tense, Voice};
use crate::store::ParadigmStore;

#[derive(Debug, Clone)]
pub struct VerbSequence {
    cells: Vec<(Tense, Mood, Voice)>,
    pos: usize,
}

impl VerbSequence {
    pub fn for_lemma(store: &ParadigmStore, lemma: &str) -> Self {
        let mut cells = store.verb_combinations(lemma);
        cells.sort_by_key(|&(t, m, v)| (m.rank(), t.rank(), v.rank()));
        cells.dedup();
        // one stop per infinitive tense, whatever voices the store holds
        cells.dedup_by(|a, b| {
            a.1 == Mood::Infinitive && b.1 == Mood::Infinitive && a.0 == b.0
        });
        VerbSequence { cells, pos: 0 }
    }

    pub fn cells(&self) -> &[(Tense, Mood, Voice)] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn current(&self) -> Option<(Tense, Mood, Voice)> {
        self.cells.get(self.pos).copied()
    }

    /// Step forward, wrapping past the end.
    pub fn advance(&mut self) -> Option<(Tense, Mood, Voice)> {
        if self.cells.is_empty() {
            return None;
        }
        self.pos = (self.pos + 1) % self.cells.len();
        self.current()
    }

    /// Step backward, wrapping past the start.
    pub fn retreat(&mut self) -> Option<(Tense, Mood, Voice)> {
        if self.cells.is_empty() {
            return None;
        }
        self.pos = (self.pos + self.cells.len() - 1) % self.cells.len();
        self.current()
    }

    /// Jump to an arbitrary cell, if the sequence contains it.
    pub fn seek(&mut self, cell: (Tense, Mood, Voice)) -> bool {
        match self.cells.iter().position(|&c| c == cell) {
            Some(i) => {
                self.pos = i;
                true
            }
            None => false,
        }
    }
}
