use ictihat_annotate::{extract_identity, extract_offense_names};

#[test]
fn general_assembly_court_name() {
    let id = extract_identity("Ceza Genel Kurulu 2009/6-163 E., 2009/202 K.");
    assert_eq!(id.court, "Ceza Genel Kurulu");
}

#[test]
fn chamber_and_prefixed_case_number() {
    let id = extract_identity("12. Hukuk Dairesi\nEsas No: 2023/12345");
    assert_eq!(id.chamber.as_deref(), Some("12. Hukuk Dairesi"));
    assert_eq!(id.court, "12. Hukuk Dairesi");
    assert_eq!(id.case_number, "2023/12345");
    assert_eq!(id.case_number_base.as_deref(), Some("2023/12345"));
    assert_eq!(id.case_number_suffix, None);
}

#[test]
fn court_phrase_keeps_leading_words() {
    let id = extract_identity("Yargıtay 3. Ceza Dairesi tarafından incelendi");
    assert_eq!(id.court, "Yargıtay 3. Ceza Dairesi");
    let id = extract_identity("İstanbul Bölge Adliye Mahkemesi 5. Hukuk Dairesi");
    assert_eq!(id.court, "İstanbul Bölge Adliye Mahkemesi 5. Hukuk Dairesi");
    assert_eq!(id.chamber.as_deref(), Some("5. Hukuk Dairesi"));
}

#[test]
fn all_caps_court_header() {
    let id = extract_identity("YARGITAY\nCEZA GENEL KURULU\n2009/6-163 E., 2009/202 K.");
    assert_eq!(id.court, "CEZA GENEL KURULU");
    let id = extract_identity("T.C.\nYARGITAY 12. HUKUK DAİRESİ");
    assert_eq!(id.court, "YARGITAY 12. HUKUK DAİRESİ");
    let id = extract_identity("dosya bozulan Yargıtay 3. Ceza Dairesi kararı");
    assert_eq!(id.court, "Yargıtay 3. Ceza Dairesi");
}

#[test]
fn prefixed_case_and_decision_numbers_on_separate_lines() {
    let id = extract_identity("Esas No: 2023/1\nKarar No: 2023/2");
    assert_eq!(id.case_number, "2023/1");
    assert_eq!(id.case_numbers, Some(vec!["2023/1".to_string()]));
    assert_eq!(id.decision_number, "2023/2");
    assert_eq!(id.decision_numbers, Some(vec!["2023/2".to_string()]));
}

#[test]
fn prefixed_case_and_decision_numbers_on_one_line() {
    let id = extract_identity("Esas No: 2023/1 Karar No: 2023/2");
    assert_eq!(id.case_number, "2023/1");
    assert_eq!(id.decision_number, "2023/2");
    assert_eq!(id.decision_numbers.map(|v| v.len()), Some(1));

    let id = extract_identity("2023/15 Esas No, 2023/40 Karar No");
    assert_eq!(id.case_number, "2023/15");
    assert_eq!(id.decision_number, "2023/40");
}

#[test]
fn several_case_numbers() {
    let id = extract_identity("Ceza Genel Kurulu 2009/6-163 E., 2009/7 E.");
    assert_eq!(id.case_number, "2009/6-163");
    assert_eq!(id.case_numbers, Some(vec!["2009/6-163".to_string(), "2009/7".to_string()]));
}

#[test]
fn several_decision_numbers() {
    let id = extract_identity("2009/6-163 E., 2009/202 K., 2010/50 K.");
    assert_eq!(id.decision_number, "2009/202");
    assert_eq!(id.decision_numbers, Some(vec!["2009/202".to_string(), "2010/50".to_string()]));
    assert_eq!(id.case_numbers, Some(vec!["2009/6-163".to_string()]));
}

#[test]
fn hyphenated_number_splits_into_base_and_suffix() {
    let id = extract_identity("Esas No: 2009/6-163 E.");
    assert_eq!(id.case_number, "2009/6-163");
    assert_eq!(id.case_number_base.as_deref(), Some("2009/6"));
    assert_eq!(id.case_number_suffix.as_deref(), Some("163"));
    assert_eq!(id.case_numbers.map(|v| v.len()), Some(1));
}

#[test]
fn date_and_subject() {
    let id = extract_identity("Tarih: 15.01.2024\nDAVA TÜRÜ : Alacak  \n");
    assert_eq!(id.date, "15.01.2024");
    assert_eq!(id.subject, "Alacak");
    assert_eq!(extract_identity("Konu: Tapu iptali ve tescil").subject, "Tapu iptali ve tescil");
}

#[test]
fn offense_names_before_body_marker() {
    let text = "HIRSIZLIK\nKAMU GÜVENCESİ ALTINDAKİ OTOMOBİLİ ÇALMAK\n5237 S. TÜRK CEZA KANUNU [ Madde 124 ]\nİçtihat Metni başlıyor...\nYAĞMA";
    let names = extract_offense_names(text).expect("offenses");
    assert_eq!(names, vec!["HIRSIZLIK", "KAMU GÜVENCESİ ALTINDAKİ OTOMOBİLİ ÇALMAK"]);
}

#[test]
fn offense_names_skip_statutes_courts_and_short_lines() {
    let text = "T.C.\nAB\nHIRSIZLIK\n5237 S. TÜRK CEZA KANUNU\nYARGITAY 6. CEZA DAİRESİ\n2015/1234 E.\nGEREKÇE\nDOLANDIRICILIK";
    let names = extract_offense_names(text).expect("offenses");
    assert_eq!(names, vec!["HIRSIZLIK"]);
}

#[test]
fn missing_fields_use_sentinels() {
    let id = extract_identity("");
    assert_eq!(id.court, "Undetermined");
    assert_eq!(id.case_number, "NotFound");
    assert_eq!(id.decision_number, "NotFound");
    assert_eq!(id.date, "None");
    assert_eq!(id.subject, "GeneralLegalDispute");
    assert_eq!(id.chamber, None);
    assert_eq!(id.case_numbers, None);
    assert_eq!(id.case_number_base, None);
    assert_eq!(id.offense_names, None);

    let v = serde_json::to_value(&id).unwrap();
    assert_eq!(v["caseNumber"], "NotFound");
    assert!(v["caseNumbers"].is_null());
    assert!(v["offenseNames"].is_null());
}
