// Shared fixture store for the integration tests: a cut-down paradigms
// file covering every extraction strategy.

use libattic::{ExtractionContext, Mood, Number, ParadigmStore, Tense, Voice};

pub const PARADIGMS: &str = r#"{
    "mousa": {
        "type": "noun",
        "lemma": "μοῦσα",
        "singular": {
            "nominative": "μοῦσα", "genitive": "μούσης", "dative": "μούσῃ",
            "accusative": "μοῦσαν", "vocative": "μοῦσα"
        },
        "plural": {
            "nominative": "μοῦσαι", "genitive": "μουσῶν", "dative": "μούσαις",
            "accusative": "μούσας", "vocative": "μοῦσαι"
        }
    },
    "logos": {
        "type": "noun",
        "lemma": "λόγος",
        "singular": {
            "nominative": "λόγος", "genitive": "λόγου", "dative": "λόγῳ",
            "accusative": "λόγον", "vocative": "λόγε"
        },
        "plural": {
            "nominative": "λόγοι", "genitive": "λόγων", "dative": "λόγοις",
            "accusative": "λόγους", "vocative": "λόγοι"
        }
    },
    "article": {
        "type": "article",
        "singular": {
            "nominative": ["ὁ", "ἡ", "τό"],
            "genitive": ["τοῦ", "τῆς", "τοῦ"],
            "dative": ["τῷ", "τῇ", "τῷ"],
            "accusative": ["τόν", "τήν", "τό"]
        },
        "plural": {
            "nominative": ["οἱ", "αἱ", "τά"],
            "genitive": ["τῶν", "τῶν", "τῶν"],
            "dative": ["τοῖς", "ταῖς", "τοῖς"],
            "accusative": ["τούς", "τάς", "τά"]
        }
    },
    "luo_pres_ind_act": {
        "type": "verb", "lemma": "λύω", "tense": "present",
        "mood": "indicative", "voice": "active",
        "1st_sg": "λύω", "2nd_sg": "λύεις", "3rd_sg": "λύει",
        "1st_pl": "λύομεν", "2nd_pl": "λύετε", "3rd_pl": "λύουσι"
    },
    "luo_impf_ind_act": {
        "type": "verb", "lemma": "λύω", "tense": "imperfect",
        "mood": "indicative", "voice": "active",
        "1st_sg": "ἔλυον", "2nd_sg": "ἔλυες", "3rd_sg": "ἔλυε",
        "1st_pl": "ἐλύομεν", "2nd_pl": "ἐλύετε", "3rd_pl": "ἔλυον"
    },
    "luo_fut_ind_act": {
        "type": "verb", "lemma": "λύω", "tense": "future",
        "mood": "indicative", "voice": "active",
        "1st_sg": "λύσω", "2nd_sg": "λύσεις", "3rd_sg": "λύσει",
        "1st_pl": "λύσομεν", "2nd_pl": "λύσετε", "3rd_pl": "λύσουσι"
    },
    "luo_aor_ind_act": {
        "type": "verb", "lemma": "λύω", "tense": "aorist",
        "mood": "indicative", "voice": "active",
        "1st_sg": "ἔλυσα", "2nd_sg": "ἔλυσας", "3rd_sg": "ἔλυσε",
        "1st_pl": "ἐλύσαμεν", "2nd_pl": "ἐλύσατε", "3rd_pl": "ἔλυσαν"
    },
    "luo_perf_ind_act": {
        "type": "verb", "lemma": "λύω", "tense": "perfect",
        "mood": "indicative", "voice": "active",
        "1st_sg": "λέλυκα", "2nd_sg": "λέλυκας", "3rd_sg": "λέλυκε",
        "1st_pl": "λελύκαμεν", "2nd_pl": "λελύκατε", "3rd_pl": "λελύκασι"
    },
    "luo_plpf_ind_act": {
        "type": "verb", "lemma": "λύω", "tense": "pluperfect",
        "mood": "indicative", "voice": "active",
        "1st_sg": "ἐλελύκη", "2nd_sg": "ἐλελύκης", "3rd_sg": "ἐλελύκει",
        "1st_pl": "ἐλελύκεμεν", "2nd_pl": "ἐλελύκετε", "3rd_pl": "ἐλελύκεσαν"
    },
    "luo_pres_inf_act": {
        "type": "verb", "lemma": "λύω", "tense": "present",
        "mood": "infinitive", "voice": "active", "inf_active": "λύειν"
    },
    "luo_pres_inf_mid": {
        "type": "verb", "lemma": "λύω", "tense": "present",
        "mood": "infinitive", "voice": "middle", "inf_middle": "λύεσθαι"
    },
    "luo_fut_inf_act": {
        "type": "verb", "lemma": "λύω", "tense": "future",
        "mood": "infinitive", "voice": "active", "inf_active": "λύσειν"
    },
    "luo_aor_inf_act": {
        "type": "verb", "lemma": "λύω", "tense": "aorist",
        "mood": "infinitive", "voice": "active", "inf_active": "λῦσαι"
    },
    "luo_aor_inf_mid": {
        "type": "verb", "lemma": "λύω", "tense": "aorist",
        "mood": "infinitive", "voice": "middle", "inf_middle": "λύσασθαι"
    },
    "luo_aor_inf_pass": {
        "type": "verb", "lemma": "λύω", "tense": "aorist",
        "mood": "infinitive", "voice": "passive", "inf_passive": "λυθῆναι"
    },
    "luo_perf_inf_act": {
        "type": "verb", "lemma": "λύω", "tense": "perfect",
        "mood": "infinitive", "voice": "active", "inf_active": "λελυκέναι"
    },
    "baino_aor_ind_act": {
        "type": "verb", "lemma": "βαίνω", "tense": "aorist",
        "mood": "indicative", "voice": "active",
        "aorist_type": "root", "aorist_root": "βη",
        "1st_sg": "ἔβην", "2nd_sg": "ἔβης", "3rd_sg": "ἔβη",
        "1st_pl": "ἔβημεν", "2nd_pl": "ἔβητε", "3rd_pl": "ἔβησαν"
    },
    "baino_aor_inf_act": {
        "type": "verb", "lemma": "βαίνω", "tense": "aorist",
        "mood": "infinitive", "voice": "active",
        "aorist_type": "root", "aorist_root": "βη",
        "inf_active": "βῆναι"
    },
    "phileo_pres_ind_act": {
        "type": "verb", "lemma": "φιλέω", "tense": "present",
        "mood": "indicative", "voice": "active",
        "1st_sg": "φιλῶ", "2nd_sg": "φιλεῖς", "3rd_sg": "φιλεῖ",
        "1st_pl": "φιλοῦμεν", "2nd_pl": "φιλεῖτε", "3rd_pl": "φιλοῦσι"
    },
    "timao_pres_ind_act": {
        "type": "verb", "lemma": "τιμάω", "tense": "present",
        "mood": "indicative", "voice": "active",
        "1st_sg": "τιμῶ", "2nd_sg": "τιμᾷς", "3rd_sg": "τιμᾷ",
        "1st_pl": "τιμῶμεν", "2nd_pl": "τιμᾶτε", "3rd_pl": "τιμῶσι"
    },
    "oida_pres_ind_act": {
        "type": "verb", "lemma": "οἶδα", "tense": "present",
        "mood": "indicative", "voice": "active",
        "1st_sg": "οἶδα", "2nd_sg": "οἶσθα", "3rd_sg": "οἶδε",
        "1st_pl": "ἴσμεν", "2nd_pl": "ἴστε", "3rd_pl": "ἴσασι"
    }
}"#;

pub fn store() -> ParadigmStore {
    ParadigmStore::from_json_str(PARADIGMS).expect("fixture paradigms parse")
}

pub fn verb_ctx(
    lemma: &str,
    tense: Tense,
    mood: Mood,
    voice: Voice,
    number: Option<Number>,
) -> ExtractionContext {
    ExtractionContext::Verb {
        lemma: lemma.to_string(),
        tense,
        mood,
        voice,
        number,
    }
}
