//! libattic
//!
//! Attic Greek morphology on top of `libhellenic-core`: typed paradigm
//! records and their JSON store, stem/ending extraction with per-tense
//! strategies, vowel-contraction rules, infinitive ending shapes, and the
//! drill-order navigation sequence.
//!
//! The usual entry point is [`AtticEngine`], which binds a loaded
//! [`ParadigmStore`] to an [`AtticConfig`] and exposes grading, prefill,
//! and navigation in one place. The underlying pieces are public for
//! callers that need them individually.

pub mod config;
pub use config::AtticConfig;

pub mod record;
pub use record::{
    Aorist, Category, ExtractionContext, Gender, Mood, Number, ParadigmRecord, PrefillHint,
    StemSplit, Tense, VerbInfo, Voice,
};

pub mod store;
pub use store::ParadigmStore;

pub mod irregular;

pub mod contraction;
pub use contraction::{apply_contraction, uncontract, ContractClass};

pub mod infinitive;

pub mod extract;
pub use extract::Extractor;

pub mod sequence;
pub use sequence::VerbSequence;

pub mod engine;
pub use engine::AtticEngine;
