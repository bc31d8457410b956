use ictihat_annotate::{extract_concepts, Dictionary};

fn dict(concepts: &[&str]) -> Dictionary {
    Dictionary::new(concepts.iter().map(|c| c.to_string()).collect(), None)
}

#[test]
fn finds_concepts_case_insensitively() {
    let d = dict(&["Davacı", "Davalı", "Tazminat", "Kıdem Tazminatı"]);
    let found = extract_concepts("Davacı tazminat talep etti", &d);
    assert_eq!(found, vec!["Davacı", "Tazminat"]);
}

#[test]
fn multi_word_concept_and_suffixed_single_word() {
    let d = dict(&["Davacı", "Davalı", "Tazminat", "Kıdem Tazminatı"]);
    let found = extract_concepts("Kıdem Tazminatı ödenmedi", &d);
    assert_eq!(found, vec!["Kıdem Tazminatı"]);
}

#[test]
fn dotted_and_dotless_capitals_fold_correctly() {
    let found = extract_concepts("DAVACI davacı Davacı", &dict(&["Davacı"]));
    assert_eq!(found, vec!["Davacı"]);
    let found = extract_concepts("İHTİYATİ TEDBİR talebi", &dict(&["ihtiyati tedbir"]));
    assert_eq!(found, vec!["ihtiyati tedbir"]);
}

#[test]
fn word_inside_longer_word_is_not_a_match() {
    let d = dict(&["dava", "kasten öldürme"]);
    assert!(extract_concepts("davacının kasten öldürmeye teşebbüs", &d).is_empty());
    assert_eq!(extract_concepts("bu dava, kasten öldürme suçuna ilişkin", &d), vec!["dava", "kasten öldürme"]);
}

#[test]
fn duplicate_dictionary_entries_reported_once() {
    let found = extract_concepts("haksız fiil", &dict(&["haksız fiil", "haksız fiil"]));
    assert_eq!(found, vec!["haksız fiil"]);
}

#[test]
fn empty_dictionary_or_no_hits() {
    assert!(extract_concepts("Test metni", &Dictionary::default()).is_empty());
    assert!(extract_concepts("Bu metinde hiçbir kavram yok", &dict(&["Davacı"])).is_empty());
    assert!(extract_concepts("", &dict(&["Davacı", "  "])).is_empty());
}

#[test]
fn malformed_concepts_value_reads_as_empty() {
    let d = Dictionary::from_value(&serde_json::json!({"concepts": "Davacı"}));
    assert!(d.concepts.is_empty());
    assert!(extract_concepts("Davacı", &d).is_empty());
}
