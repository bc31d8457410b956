use ictihat_annotate::{score_tone, Dictionary, ToneCategory};

fn indicators() -> Dictionary {
    Dictionary::from_value(&serde_json::json!({
        "dictionary": [],
        "sentiment_indicators": {
            "teknik": ["kanun", "madde", "usul"],
            "sert": ["ceza", "hapis"],
            "aciklayici": ["dolayısıyla", "nedeniyle"],
            "kesin": ["karar verildi", "kesinleşmiş"]
        }
    }))
}

#[test]
fn technical_tone_wins() {
    let report = score_tone("Kanun madde usul gereğince karar verildi", &indicators());
    assert_eq!(report.tone, "Technical");
    assert_eq!(report.scores[&ToneCategory::Technical], 3);
    assert_eq!(report.scores[&ToneCategory::Definitive], 1);
    assert_eq!(report.style, "Operational");
}

#[test]
fn every_category_scores() {
    let d = indicators();
    assert_eq!(score_tone("Ceza hapis cezası verildi", &d).scores[&ToneCategory::Harsh], 3);
    assert!(score_tone("Dolayısıyla nedeniyle karar verildi", &d).scores[&ToneCategory::Explanatory] > 0);
    assert!(score_tone("Karar verildi ve kesinleşmiş", &d).scores[&ToneCategory::Definitive] > 0);
}

#[test]
fn academic_style_above_five_technical_hits() {
    let report = score_tone("Kanun madde usul kanun madde usul kanun", &indicators());
    assert_eq!(report.scores[&ToneCategory::Technical], 7);
    assert_eq!(report.style, "Academic/Technical");
}

#[test]
fn ties_go_to_the_earlier_category() {
    let report = score_tone("kanun ceza", &indicators());
    assert_eq!(report.tone, "Technical");
    let report = score_tone("ceza nedeniyle", &indicators());
    assert_eq!(report.tone, "Harsh");
}

#[test]
fn neutral_when_nothing_hits() {
    let report = score_tone("Bu metinde hiçbir özel kelime yok", &indicators());
    assert_eq!(report.tone, "Neutral");
    assert_eq!(report.scores.len(), 4);
    assert!(report.scores.values().all(|s| *s == 0));
}

#[test]
fn no_indicators_is_no_data() {
    let d = Dictionary::from_value(&serde_json::json!({"dictionary": [], "sentiment_indicators": null}));
    let report = score_tone("Test metni", &d);
    assert_eq!(report.tone, "NoData");
    assert_eq!(report.style, "Unknown");
    assert!(report.scores.is_empty());
}

#[test]
fn empty_indicator_word_counts_zero() {
    let d = Dictionary::from_value(&serde_json::json!({"sentimentIndicators": {"technical": ["", "kanun"]}}));
    let report = score_tone("kanun", &d);
    assert_eq!(report.scores[&ToneCategory::Technical], 1);
}

#[test]
fn builtin_indicators_and_json_keys() {
    let report = score_tone("Mahkeme kararı onama ile kesinleşmiş sayıldı", &Dictionary::builtin());
    assert_eq!(report.tone, "Definitive");
    let v = serde_json::to_value(&report).unwrap();
    assert_eq!(v["scores"]["definitive"], 2);
    assert_eq!(v["scores"]["technical"], 0);
}
