// libattic/src/store.rs
//
// Paradigm store: loads the paradigms JSON into typed records and serves
// lookups for the extractor and the navigation sequence.
//
// JSON layout, per record key (e.g. "luo_pres_ind_act"):
// - "type": noun | adjective | pronoun | article | verb
// - verbs carry "tense"/"mood"/"voice"/"lemma", plus "aorist_type": "root"
//   and "aorist_root" for root aorists
// - declined words nest their slots under "singular"/"plural" objects;
//   the store flattens those to `case_sg` / `case_pl` slot keys
// - articles (and other three-column paradigms) store each slot as a
//   positional [masc, fem, neut] array, normalized here to per-gender maps

use std::collections::BTreeMap;
use std::path::Path;

use ahash::AHashMap;
use anyhow::{bail, Context, Result};
use serde_json::Value;
use tracing::debug;

use crate::record::{
    Aorist, Category, Gender, Mood, ParadigmRecord, Tense, VerbInfo, Voice,
};

const META_KEYS: &[&str] = &["type", "tense", "mood", "voice", "lemma", "aorist_type", "aorist_root"];

#[derive(Debug, Default)]
pub struct ParadigmStore {
    records: AHashMap<String, ParadigmRecord>,
}

impl ParadigmStore {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(json).context("paradigms JSON is not valid JSON")?;
        let map = root
            .as_object()
            .context("paradigms JSON must be an object of records")?;

        let mut records = AHashMap::with_capacity(map.len());
        for (key, value) in map {
            let record = parse_record(value)
                .with_context(|| format!("malformed paradigm record `{key}`"))?;
            records.insert(key.clone(), record);
        }
        debug!(count = records.len(), "loaded paradigm store");
        Ok(ParadigmStore { records })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading paradigms file {}", path.display()))?;
        Self::from_json_str(&json)
    }

    pub fn get(&self, key: &str) -> Option<&ParadigmRecord> {
        self.records.get(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParadigmRecord)> {
        self.records.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The verb paradigm for one exact (lemma, tense, mood, voice) cell.
    pub fn find_verb(
        &self,
        lemma: &str,
        tense: Tense,
        mood: Mood,
        voice: Voice,
    ) -> Option<&ParadigmRecord> {
        self.records.values().find(|r| {
            r.verb_info().is_some_and(|info| {
                info.lemma == lemma
                    && info.tense == tense
                    && info.mood == mood
                    && info.voice == voice
            })
        })
    }

    /// All (tense, mood, voice) cells present for a lemma, unordered and
    /// with duplicates possible; `VerbSequence` sorts and dedups.
    pub fn verb_combinations(&self, lemma: &str) -> Vec<(Tense, Mood, Voice)> {
        self.records
            .values()
            .filter_map(ParadigmRecord::verb_info)
            .filter(|info| info.lemma == lemma)
            .map(|info| (info.tense, info.mood, info.voice))
            .collect()
    }
}

fn parse_record(value: &Value) -> Result<ParadigmRecord> {
    let obj = value.as_object().context("record must be an object")?;
    let kind = obj
        .get("type")
        .and_then(Value::as_str)
        .context("record has no `type` field")?;

    if kind == "verb" {
        return parse_verb(obj);
    }

    let category = match kind {
        "noun" => Category::Noun,
        "adjective" => Category::Adjective,
        // the article drills alongside the pronouns
        "pronoun" | "article" => Category::Pronoun,
        other => bail!("unknown record type `{other}`"),
    };
    let lemma = obj.get("lemma").and_then(Value::as_str).map(str::to_string);

    let mut flat: BTreeMap<String, String> = BTreeMap::new();
    let mut gendered: BTreeMap<Gender, BTreeMap<String, String>> = BTreeMap::new();
    for (key, value) in obj {
        if META_KEYS.contains(&key.as_str()) {
            continue;
        }
        match value {
            Value::String(form) => {
                flat.insert(key.clone(), form.clone());
            }
            Value::Object(section) => {
                let suffix = number_suffix(key)?;
                for (case, cell) in section {
                    let slot = format!("{case}_{suffix}");
                    match cell {
                        Value::String(form) => {
                            flat.insert(slot, form.clone());
                        }
                        Value::Array(columns) => {
                            insert_gendered(&mut gendered, &slot, columns)?;
                        }
                        other => bail!("slot `{slot}` has unsupported value {other}"),
                    }
                }
            }
            Value::Array(columns) => {
                insert_gendered(&mut gendered, key, columns)?;
            }
            other => bail!("slot `{key}` has unsupported value {other}"),
        }
    }

    if !gendered.is_empty() {
        if !flat.is_empty() {
            bail!("record mixes gendered and ungendered slots");
        }
        return Ok(ParadigmRecord::Gendered {
            category,
            lemma,
            forms: gendered,
        });
    }
    Ok(ParadigmRecord::Flat {
        category,
        lemma,
        forms: flat,
    })
}

fn text_field<'a>(obj: &'a serde_json::Map<String, Value>, name: &str) -> Result<&'a str> {
    obj.get(name)
        .and_then(Value::as_str)
        .with_context(|| format!("verb record has no `{name}` field"))
}

fn parse_verb(obj: &serde_json::Map<String, Value>) -> Result<ParadigmRecord> {
    let tense: Tense = serde_json::from_value(Value::String(text_field(obj, "tense")?.into()))
        .context("bad `tense`")?;
    let mood: Mood = serde_json::from_value(Value::String(text_field(obj, "mood")?.into()))
        .context("bad `mood`")?;
    let voice: Voice = serde_json::from_value(Value::String(text_field(obj, "voice")?.into()))
        .context("bad `voice`")?;
    let lemma = text_field(obj, "lemma")?.to_string();

    let aorist = match obj.get("aorist_type").and_then(Value::as_str) {
        Some("root") => {
            let root = text_field(obj, "aorist_root")
                .context("root aorist record has no `aorist_root`")?
                .to_string();
            Aorist::Root { root }
        }
        Some(other) => bail!("unknown aorist_type `{other}`"),
        None => Aorist::Regular,
    };

    let mut forms = BTreeMap::new();
    for (key, value) in obj {
        if META_KEYS.contains(&key.as_str()) {
            continue;
        }
        let form = value
            .as_str()
            .with_context(|| format!("verb slot `{key}` is not a string"))?;
        forms.insert(key.clone(), form.to_string());
    }

    Ok(ParadigmRecord::Verb {
        info: VerbInfo {
            lemma,
            tense,
            mood,
            voice,
            aorist,
        },
        forms,
    })
}

fn number_suffix(section: &str) -> Result<&'static str> {
    match section {
        "singular" => Ok("sg"),
        "plural" => Ok("pl"),
        other => bail!("unknown number section `{other}`"),
    }
}

fn insert_gendered(
    gendered: &mut BTreeMap<Gender, BTreeMap<String, String>>,
    slot: &str,
    columns: &[Value],
) -> Result<()> {
    if columns.len() != 3 {
        bail!("gendered slot `{slot}` must have exactly [masc, fem, neut]");
    }
    for (gender, cell) in [Gender::Masculine, Gender::Feminine, Gender::Neuter]
        .into_iter()
        .zip(columns)
    {
        let form = cell
            .as_str()
            .with_context(|| format!("gendered slot `{slot}` holds a non-string"))?;
        gendered
            .entry(gender)
            .or_default()
            .insert(slot.to_string(), form.to_string());
    }
    Ok(())
}
