// Finite-verb splits across the six tenses: augment handling in the
// imperfect and pluperfect, sigmatic aorist and future, reduplicated
// perfect.

mod common;

use common::{store, verb_ctx};
use libattic::{Extractor, Mood, Number, Tense, Voice};

fn split(word: &str, tense: Tense, number: Number) -> (String, String) {
    let store = store();
    let extractor = Extractor::new(&store);
    let s = extractor.extract(
        word,
        &verb_ctx("λύω", tense, Mood::Indicative, Voice::Active, Some(number)),
    );
    (s.stem, s.ending)
}

#[test]
fn imperfect_strips_and_restores_the_augment() {
    assert_eq!(
        split("ἔλυον", Tense::Imperfect, Number::Singular),
        ("ἔλυ".into(), "ον".into())
    );
    assert_eq!(
        split("ἐλύομεν", Tense::Imperfect, Number::Plural),
        ("ἐλύ".into(), "ομεν".into())
    );
    assert_eq!(
        split("ἐλύετε", Tense::Imperfect, Number::Plural),
        ("ἐλύ".into(), "ετε".into())
    );
}

#[test]
fn sigmatic_aorist_keeps_sigma_and_augment() {
    assert_eq!(
        split("ἔλυσα", Tense::Aorist, Number::Singular),
        ("ἔλυσ".into(), "α".into())
    );
    assert_eq!(
        split("ἐλύσαμεν", Tense::Aorist, Number::Plural),
        ("ἐλύσ".into(), "αμεν".into())
    );
}

#[test]
fn future_keeps_sigma() {
    assert_eq!(
        split("λύσω", Tense::Future, Number::Singular),
        ("λύσ".into(), "ω".into())
    );
    assert_eq!(
        split("λύσετε", Tense::Future, Number::Plural),
        ("λύσ".into(), "ετε".into())
    );
}

#[test]
fn perfect_keeps_the_reduplication() {
    assert_eq!(
        split("λέλυκα", Tense::Perfect, Number::Singular),
        ("λέλυκ".into(), "α".into())
    );
    assert_eq!(
        split("λελύκασι", Tense::Perfect, Number::Plural),
        ("λελύκ".into(), "ασι".into())
    );
}

#[test]
fn pluperfect_carries_augment_and_reduplication() {
    assert_eq!(
        split("ἐλελύκη", Tense::Pluperfect, Number::Singular),
        ("ἐλελύκ".into(), "η".into())
    );
    assert_eq!(
        split("ἐλελύκεσαν", Tense::Pluperfect, Number::Plural),
        ("ἐλελύκ".into(), "εσαν".into())
    );
}
