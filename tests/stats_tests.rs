use ictihat_annotate::{calculate_statistics, Complexity};

#[test]
fn empty_text_counts_zero_words() {
    let stats = calculate_statistics("", 0);
    assert_eq!(stats.word_count, 0);
    assert_eq!(stats.concept_density, "%0.00");
    assert_eq!(stats.reading_time, 0);
    assert_eq!(stats.complexity, Complexity::Medium);

    assert_eq!(calculate_statistics("   \n\t ", 3).word_count, 0);
}

#[test]
fn density_is_percent_of_words() {
    let stats = calculate_statistics("Bu bir test metnidir", 2);
    assert_eq!(stats.word_count, 4);
    assert_eq!(stats.concept_density, "%50.00");
    assert_eq!(stats.reading_time, 1);

    assert_eq!(calculate_statistics("bir iki üç", 1).concept_density, "%33.33");
}

#[test]
fn reading_time_rounds_up() {
    let text = vec!["kelime"; 151].join(" ");
    assert_eq!(calculate_statistics(&text, 0).reading_time, 2);
    let text = vec!["kelime"; 150].join(" ");
    assert_eq!(calculate_statistics(&text, 0).reading_time, 1);
}

#[test]
fn complexity_threshold() {
    let text = vec!["kelime"; 500].join(" ");
    assert_eq!(calculate_statistics(&text, 0).complexity, Complexity::Medium);
    let text = vec!["kelime"; 501].join("\n");
    assert_eq!(calculate_statistics(&text, 0).complexity, Complexity::High);
}

#[test]
fn serialized_shape() {
    let v = serde_json::to_value(calculate_statistics("Bu bir test metnidir", 2)).unwrap();
    assert_eq!(v["wordCount"], 4);
    assert_eq!(v["conceptDensity"], "%50.00");
    assert_eq!(v["readingTime"], 1);
    assert_eq!(v["complexity"], "Medium");
}
