use ictihat_annotate::structure::{DEFAULT_PART, DEFAULT_SECTION};
use ictihat_annotate::{parse_structure, StructureError};

const PENAL_CODE: &str = "TÜRK CEZA KANUNU
Kanun Numarası : 5237
Kabul Tarihi : 26/9/2004
Yürürlük: 1.6.2005

BİRİNCİ KİTAP - Genel Hükümler
BİRİNCİ BÖLÜM: Temel İlkeler
Birinci Kısım
MADDE 1 - Kanunun amacı
(1) Ceza Kanununun amacı; kişi hak ve özgürlüklerini,
kamu düzen ve güvenliğini korumaktır.
(2) Bu amaçla kanunda;
a) suç ve cezalar,
b) güvenlik tedbirleri
aa) kişiye özgü tedbirler,
bb) müsadere,
düzenlenmiştir.
Madde 2 - Suçta ve cezada kanunilik ilkesi
Kanunun açıkça suç saymadığı bir fiil için kimseye ceza verilemez.
İKİNCİ KİTAP
KISIM A: Özel Hükümler
3. Madde
";

#[test]
fn header_fields() {
    let doc = parse_structure(PENAL_CODE).unwrap();
    assert_eq!(doc.title.as_deref(), Some("TÜRK CEZA KANUNU"));
    assert_eq!(doc.law_number.as_deref(), Some("5237"));
    assert_eq!(doc.adoption_date.as_deref(), Some("26/9/2004"));
    assert_eq!(doc.effective_date.as_deref(), Some("1.6.2005"));
}

#[test]
fn hierarchy_and_continuations() {
    let doc = parse_structure(PENAL_CODE).unwrap();
    assert!(doc.parts.is_empty());
    assert_eq!(doc.books.len(), 2);

    let book = &doc.books[0];
    assert_eq!(book.label, "BİRİNCİ KİTAP");
    assert_eq!(book.title.as_deref(), Some("Genel Hükümler"));
    assert_eq!(book.parts[0].label, "BİRİNCİ BÖLÜM");
    assert_eq!(book.parts[0].title.as_deref(), Some("Temel İlkeler"));

    let section = &book.parts[0].sections[0];
    assert_eq!(section.label, "Birinci Kısım");
    assert_eq!(section.articles.len(), 2);

    let first = &section.articles[0];
    assert_eq!(first.number, "1");
    assert_eq!(first.heading.as_deref(), Some("Kanunun amacı"));
    assert_eq!(first.paragraphs.len(), 2);
    assert_eq!(
        first.paragraphs[0].text.as_deref(),
        Some("Ceza Kanununun amacı; kişi hak ve özgürlüklerini, kamu düzen ve güvenliğini korumaktır.")
    );

    let clauses = &first.paragraphs[1].clauses;
    assert_eq!(clauses.len(), 2);
    assert_eq!(clauses[0].label, "a");
    assert_eq!(clauses[1].sub_clauses.len(), 2);
    assert_eq!(clauses[1].sub_clauses[0].label, "aa");
    assert_eq!(clauses[1].sub_clauses[1].text, "müsadere, düzenlenmiştir.");
}

#[test]
fn free_text_under_article_opens_first_paragraph() {
    let doc = parse_structure(PENAL_CODE).unwrap();
    let second = &doc.books[0].parts[0].sections[0].articles[1];
    assert_eq!(second.number, "2");
    assert_eq!(second.paragraphs.len(), 1);
    assert_eq!(second.paragraphs[0].number, 1);
    assert!(second.paragraphs[0].text.as_deref().unwrap().starts_with("Kanunun açıkça"));
}

#[test]
fn missing_part_is_synthesised_and_empty_article_pruned() {
    let doc = parse_structure(PENAL_CODE).unwrap();
    let book = &doc.books[1];
    assert_eq!(book.label, "İKİNCİ KİTAP");
    assert_eq!(book.parts[0].label, DEFAULT_PART);
    assert_eq!(book.parts[0].sections[0].label, "KISIM A");
    assert_eq!(book.parts[0].sections[0].title.as_deref(), Some("Özel Hükümler"));
    assert!(book.parts[0].sections[0].articles.is_empty());
}

#[test]
fn bare_articles_get_default_containers() {
    let doc = parse_structure("MADDE 5\n1. Birinci fıkra\nb) tek bent\n").unwrap();
    assert!(doc.books.is_empty());
    let part = &doc.parts[0];
    assert_eq!(part.label, DEFAULT_PART);
    assert_eq!(part.sections[0].label, DEFAULT_SECTION);
    let article = &part.sections[0].articles[0];
    assert_eq!(article.heading, None);
    assert_eq!(article.paragraphs[0].text.as_deref(), Some("Birinci fıkra"));
    assert_eq!(article.paragraphs[0].clauses[0].label, "b");
}

#[test]
fn clause_without_paragraph_gets_paragraph_one() {
    let doc = parse_structure("Madde 9\na) ilk bent\n(12) alt bent değil").unwrap();
    let article = &doc.parts[0].sections[0].articles[0];
    assert_eq!(article.paragraphs.len(), 1);
    assert_eq!(article.paragraphs[0].number, 1);
    assert_eq!(article.paragraphs[0].text, None);
    let clause = &article.paragraphs[0].clauses[0];
    assert_eq!(clause.sub_clauses.len(), 1);
    assert_eq!(clause.sub_clauses[0].label, "12");
}

#[test]
fn numbered_title_line() {
    let doc = parse_structure("5237 sayılı Türk Ceza Kanunu\nMADDE 1 - Amaç").unwrap();
    assert_eq!(doc.title.as_deref(), Some("Türk Ceza"));
    assert_eq!(doc.law_number.as_deref(), Some("5237"));
}

#[test]
fn empty_text_is_rejected() {
    assert_eq!(parse_structure("  \n "), Err(StructureError::EmptyText));
}

#[test]
fn serialized_shape() {
    let doc = parse_structure(PENAL_CODE).unwrap();
    let v = serde_json::to_value(&doc).unwrap();
    assert_eq!(v["lawNumber"], "5237");
    assert_eq!(v["books"][0]["parts"][0]["sections"][0]["articles"][0]["paragraphs"][1]["clauses"][1]["subClauses"][0]["label"], "aa");
}
