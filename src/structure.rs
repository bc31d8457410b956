//! Statute text to a Book / Part / Section / Article / Paragraph / Clause /
//! Sub-clause tree.
//!
//! Lines are trimmed and classified one by one. Headings close every deeper
//! level; an article outside any section gets a synthesised `GENEL BÖLÜM` /
//! `GENEL KISIM`, a clause outside any paragraph gets paragraph 1. Lines that
//! match nothing continue the innermost open node.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::text::{fold_case, split_lines, turkish_ci};

const HEADER_SCAN_LINES: usize = 20;
const MAX_DOT_PARAGRAPH: u32 = 50;
const MIN_NUMERIC_SUB_CLAUSE: u32 = 10;

pub const DEFAULT_PART: &str = "GENEL BÖLÜM";
pub const DEFAULT_SECTION: &str = "GENEL KISIM";

const ORDINALS: [&str; 20] = [
    "BİRİNCİ", "İKİNCİ", "ÜÇÜNCÜ", "DÖRDÜNCÜ", "BEŞİNCİ", "ALTINCI", "YEDİNCİ", "SEKİZİNCİ", "DOKUZUNCU", "ONUNCU",
    "ONBİRİNCİ", "ONİKİNCİ", "ONÜÇÜNCÜ", "ONDÖRDÜNCÜ", "ONBEŞİNCİ", "ONALTINCI", "ONYEDİNCİ", "ONSEKİZİNCİ",
    "ONDOKUZUNCU", "YİRMİNCİ",
];
const SECTION_ORDINALS: usize = 10;

const LETTER: &str = "[a-zA-ZçğıöşüÇĞİÖŞÜ]";
const DATE: &str = r"\d{1,2}[./]\d{1,2}[./]\d{4}";

fn ordinal_alternation(count: usize) -> String {
    ORDINALS[..count].iter().map(|o| turkish_ci(o)).collect::<Vec<_>>().join("|")
}

fn heading_re(head: &str) -> Regex {
    Regex::new(&format!(r"^{head}(?:\s*[:-]\s*(?P<title>.+))?$")).unwrap()
}

static BOOK_ORDINAL_RE: Lazy<Regex> =
    Lazy::new(|| heading_re(&format!(r"(?P<ord>{})\s+{}", ordinal_alternation(ORDINALS.len()), turkish_ci("KİTAP"))));
static BOOK_ROMAN_RE: Lazy<Regex> =
    Lazy::new(|| heading_re(&format!(r"{}\s+(?P<roman>(?i:[ivx]+))", turkish_ci("KİTAP"))));
static PART_ORDINAL_RE: Lazy<Regex> =
    Lazy::new(|| heading_re(&format!(r"(?P<ord>{})\s+{}", ordinal_alternation(ORDINALS.len()), turkish_ci("BÖLÜM"))));
static PART_ROMAN_RE: Lazy<Regex> =
    Lazy::new(|| heading_re(&format!(r"{}\s+(?P<roman>(?i:[ivx]+))", turkish_ci("BÖLÜM"))));
static PART_PLAIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^{}\s*[:-]\s*(?P<title>.+)$", turkish_ci("BÖLÜM"))).unwrap());
static SECTION_ORDINAL_RE: Lazy<Regex> =
    Lazy::new(|| heading_re(&format!(r"(?P<ord>{})\s+{}", ordinal_alternation(SECTION_ORDINALS), turkish_ci("KISIM"))));
static SECTION_LETTER_RE: Lazy<Regex> =
    Lazy::new(|| heading_re(&format!(r"{}\s+(?P<letter>[A-Za-z])", turkish_ci("KISIM"))));
static SECTION_PLAIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^{}\s*[:-]\s*(?P<title>.+)$", turkish_ci("KISIM"))).unwrap());

static ARTICLE_RES: Lazy<[Regex; 2]> = Lazy::new(|| {
    let madde = turkish_ci("MADDE");
    [
        heading_re(&format!(r"{madde}\s+(?P<no>\d+)")),
        heading_re(&format!(r"(?P<no>\d+)\.\s*{madde}")),
    ]
});

static PAREN_NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\((?P<no>\d+)\)\s*(?P<text>.+)$").unwrap());
static DOT_NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?P<no>\d+)\.\s+(?P<text>.+)$").unwrap());
static CLAUSE_RES: Lazy<[Regex; 2]> = Lazy::new(|| {
    [
        Regex::new(&format!(r"^(?P<label>{LETTER})\s*\)\s*(?P<text>.+)$")).unwrap(),
        Regex::new(&format!(r"^(?P<label>{LETTER})\.\s+(?P<text>.+)$")).unwrap(),
    ]
});
static DOUBLE_LETTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^(?P<label>{LETTER}{{2}})\s*\)\s*(?P<text>.+)$")).unwrap());

static TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<title>[A-ZÇĞİÖŞÜ][A-ZÇĞİÖŞÜ\s]+KANUNU)").unwrap());
static NUMBERED_TITLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^(?P<no>\d{{4}})\s+{}\s+(?P<title>.+?)(?:\s+{})?$", turkish_ci("sayılı"), turkish_ci("Kanunu")))
        .unwrap()
});
static LAW_NUMBER_RES: Lazy<[Regex; 2]> = Lazy::new(|| {
    [
        Regex::new(&format!(r"(?P<no>\d{{4}})\s+{}", turkish_ci("sayılı"))).unwrap(),
        Regex::new(&format!(r"{}\s*:\s*(?P<no>\d+)", turkish_ci("Kanun Numarası"))).unwrap(),
    ]
});
static ADOPTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"{}[:\s]+(?P<date>{DATE})", turkish_ci("Kabul Tarihi"))).unwrap());
static EFFECTIVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"{}[:\s]+(?P<date>{DATE})", turkish_ci("yürürlük"))).unwrap());

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StructureError {
    #[error("empty statute text")]
    EmptyText,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatuteDocument {
    pub title: Option<String>,
    pub law_number: Option<String>,
    pub adoption_date: Option<String>,
    pub effective_date: Option<String>,
    pub books: Vec<Book>,
    /// Parts that appear before any book heading.
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub label: String,
    pub title: Option<String>,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub label: String,
    pub title: Option<String>,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub label: String,
    pub title: Option<String>,
    pub articles: Vec<Article>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub number: String,
    pub heading: Option<String>,
    pub paragraphs: Vec<Paragraph>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    pub number: u32,
    pub text: Option<String>,
    pub clauses: Vec<Clause>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clause {
    pub label: String,
    pub text: Option<String>,
    pub sub_clauses: Vec<SubClause>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubClause {
    pub label: String,
    pub text: String,
}

/// One classified line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Book { label: String, title: Option<String> },
    Part { label: String, title: Option<String> },
    Section { label: String, title: Option<String> },
    Article { number: String, heading: Option<String> },
    Paragraph { number: u32, text: String },
    Clause { label: String, text: String },
    SubClause { label: String, text: String },
}

fn title_of(caps: &Captures) -> Option<String> {
    caps.name("title").map(|m| m.as_str().trim().to_string()).filter(|t| !t.is_empty())
}

fn ordinal_label(matched: &str) -> String {
    let folded = fold_case(matched);
    ORDINALS
        .iter()
        .find(|o| fold_case(o) == folded)
        .map(|o| o.to_string())
        .unwrap_or_else(|| matched.to_uppercase())
}

pub fn detect_book(line: &str) -> Option<LineKind> {
    if let Some(caps) = BOOK_ORDINAL_RE.captures(line) {
        let label = format!("{} KİTAP", ordinal_label(&caps["ord"]));
        return Some(LineKind::Book { label, title: title_of(&caps) });
    }
    let caps = BOOK_ROMAN_RE.captures(line)?;
    let label = format!("KİTAP {}", caps["roman"].to_ascii_uppercase());
    Some(LineKind::Book { label, title: title_of(&caps) })
}

pub fn detect_part(line: &str) -> Option<LineKind> {
    if let Some(caps) = PART_ORDINAL_RE.captures(line) {
        let label = format!("{} BÖLÜM", ordinal_label(&caps["ord"]));
        return Some(LineKind::Part { label, title: title_of(&caps) });
    }
    if let Some(caps) = PART_ROMAN_RE.captures(line) {
        let label = format!("BÖLÜM {}", caps["roman"].to_ascii_uppercase());
        return Some(LineKind::Part { label, title: title_of(&caps) });
    }
    let caps = PART_PLAIN_RE.captures(line)?;
    Some(LineKind::Part { label: "BÖLÜM".to_string(), title: title_of(&caps) })
}

pub fn detect_section(line: &str) -> Option<LineKind> {
    if let Some(caps) = SECTION_ORDINAL_RE.captures(line) {
        let label = format!("{} Kısım", &caps["ord"]);
        return Some(LineKind::Section { label, title: title_of(&caps) });
    }
    if let Some(caps) = SECTION_LETTER_RE.captures(line) {
        let label = format!("KISIM {}", caps["letter"].to_ascii_uppercase());
        return Some(LineKind::Section { label, title: title_of(&caps) });
    }
    let caps = SECTION_PLAIN_RE.captures(line)?;
    Some(LineKind::Section { label: "KISIM".to_string(), title: title_of(&caps) })
}

pub fn detect_article(line: &str) -> Option<LineKind> {
    ARTICLE_RES.iter().find_map(|re| {
        let caps = re.captures(line)?;
        Some(LineKind::Article { number: caps["no"].to_string(), heading: title_of(&caps) })
    })
}

pub fn detect_paragraph(line: &str) -> Option<LineKind> {
    if let Some(caps) = PAREN_NUMBER_RE.captures(line) {
        let number = caps["no"].parse().ok()?;
        return Some(LineKind::Paragraph { number, text: caps["text"].trim().to_string() });
    }
    let caps = DOT_NUMBER_RE.captures(line)?;
    let number: u32 = caps["no"].parse().ok()?;
    (number <= MAX_DOT_PARAGRAPH).then(|| LineKind::Paragraph { number, text: caps["text"].trim().to_string() })
}

pub fn detect_clause(line: &str) -> Option<LineKind> {
    CLAUSE_RES.iter().find_map(|re| {
        let caps = re.captures(line)?;
        Some(LineKind::Clause { label: fold_case(&caps["label"]), text: caps["text"].trim().to_string() })
    })
}

pub fn detect_sub_clause(line: &str) -> Option<LineKind> {
    if let Some(caps) = DOUBLE_LETTER_RE.captures(line) {
        return Some(LineKind::SubClause { label: fold_case(&caps["label"]), text: caps["text"].trim().to_string() });
    }
    let caps = PAREN_NUMBER_RE.captures(line)?;
    let number: u32 = caps["no"].parse().ok()?;
    (number > MIN_NUMERIC_SUB_CLAUSE)
        .then(|| LineKind::SubClause { label: number.to_string(), text: caps["text"].trim().to_string() })
}

fn append_text(slot: &mut Option<String>, line: &str) {
    match slot {
        Some(text) if !text.is_empty() => {
            text.push(' ');
            text.push_str(line);
        }
        _ => *slot = Some(line.to_string()),
    }
}

#[derive(Default)]
struct Builder {
    doc: StatuteDocument,
    book_open: bool,
    part_open: bool,
    section_open: bool,
    article_open: bool,
    paragraph_open: bool,
    clause_open: bool,
}

impl Builder {
    fn parts(&mut self) -> &mut Vec<Part> {
        match self.doc.books.last_mut() {
            Some(book) if self.book_open => &mut book.parts,
            _ => &mut self.doc.parts,
        }
    }

    fn section(&mut self) -> Option<&mut Section> {
        if !self.section_open {
            return None;
        }
        self.parts().last_mut()?.sections.last_mut()
    }

    fn article(&mut self) -> Option<&mut Article> {
        if !self.article_open {
            return None;
        }
        self.section()?.articles.last_mut()
    }

    fn paragraph(&mut self) -> Option<&mut Paragraph> {
        if !self.paragraph_open {
            return None;
        }
        self.article()?.paragraphs.last_mut()
    }

    fn clause(&mut self) -> Option<&mut Clause> {
        if !self.clause_open {
            return None;
        }
        self.paragraph()?.clauses.last_mut()
    }

    fn open_book(&mut self, label: String, title: Option<String>) {
        self.doc.books.push(Book { label, title, parts: Vec::new() });
        self.book_open = true;
        self.part_open = false;
        self.section_open = false;
        self.article_open = false;
        self.paragraph_open = false;
        self.clause_open = false;
    }

    fn open_part(&mut self, label: String, title: Option<String>) {
        self.parts().push(Part { label, title, sections: Vec::new() });
        self.part_open = true;
        self.section_open = false;
        self.article_open = false;
        self.paragraph_open = false;
        self.clause_open = false;
    }

    fn open_section(&mut self, label: String, title: Option<String>) {
        if !self.part_open {
            self.open_part(DEFAULT_PART.to_string(), None);
        }
        if let Some(part) = self.parts().last_mut() {
            part.sections.push(Section { label, title, articles: Vec::new() });
        }
        self.section_open = true;
        self.article_open = false;
        self.paragraph_open = false;
        self.clause_open = false;
    }

    fn open_article(&mut self, number: String, heading: Option<String>) {
        if !self.section_open {
            self.open_section(DEFAULT_SECTION.to_string(), None);
        }
        if let Some(section) = self.section() {
            section.articles.push(Article { number, heading, paragraphs: Vec::new() });
        }
        self.article_open = true;
        self.paragraph_open = false;
        self.clause_open = false;
    }

    fn open_paragraph(&mut self, number: u32, text: Option<String>) {
        if let Some(article) = self.article() {
            article.paragraphs.push(Paragraph { number, text, clauses: Vec::new() });
            self.paragraph_open = true;
            self.clause_open = false;
        }
    }

    fn open_clause(&mut self, label: String, text: String) {
        if !self.paragraph_open {
            self.open_paragraph(1, None);
        }
        if let Some(paragraph) = self.paragraph() {
            paragraph.clauses.push(Clause { label, text: Some(text), sub_clauses: Vec::new() });
            self.clause_open = true;
        }
    }

    fn continue_text(&mut self, line: &str) {
        if let Some(clause) = self.clause() {
            match clause.sub_clauses.last_mut() {
                Some(sub) => {
                    sub.text.push(' ');
                    sub.text.push_str(line);
                }
                None => append_text(&mut clause.text, line),
            }
        } else if let Some(paragraph) = self.paragraph() {
            append_text(&mut paragraph.text, line);
        } else if self.article_open {
            self.open_paragraph(1, Some(line.to_string()));
        }
    }

    fn feed(&mut self, line: &str) {
        if let Some(LineKind::Book { label, title }) = detect_book(line) {
            return self.open_book(label, title);
        }
        if let Some(LineKind::Part { label, title }) = detect_part(line) {
            return self.open_part(label, title);
        }
        if let Some(LineKind::Section { label, title }) = detect_section(line) {
            return self.open_section(label, title);
        }
        if let Some(LineKind::Article { number, heading }) = detect_article(line) {
            return self.open_article(number, heading);
        }
        if !self.article_open {
            return;
        }
        if self.clause_open {
            if let Some(LineKind::SubClause { label, text }) = detect_sub_clause(line) {
                if let Some(clause) = self.clause() {
                    clause.sub_clauses.push(SubClause { label, text });
                }
                return;
            }
        }
        if let Some(LineKind::Paragraph { number, text }) = detect_paragraph(line) {
            return self.open_paragraph(number, Some(text));
        }
        if let Some(LineKind::Clause { label, text }) = detect_clause(line) {
            return self.open_clause(label, text);
        }
        self.continue_text(line);
    }
}

fn scan_header(doc: &mut StatuteDocument, lines: &[&str]) {
    for line in lines.iter().take(HEADER_SCAN_LINES) {
        if doc.title.is_none() {
            if let Some(caps) = TITLE_RE.captures(line) {
                doc.title = Some(caps["title"].trim().to_string());
            } else if let Some(caps) = NUMBERED_TITLE_RE.captures(line) {
                doc.title = Some(caps["title"].trim().to_string());
                doc.law_number.get_or_insert_with(|| caps["no"].to_string());
            }
        }
        if doc.law_number.is_none() {
            doc.law_number = LAW_NUMBER_RES.iter().find_map(|re| re.captures(line).map(|caps| caps["no"].to_string()));
        }
        if doc.adoption_date.is_none() {
            doc.adoption_date = ADOPTION_RE.captures(line).map(|caps| caps["date"].to_string());
        }
        if doc.effective_date.is_none() {
            doc.effective_date = EFFECTIVE_RE.captures(line).map(|caps| caps["date"].to_string());
        }
    }
}

fn prune(parts: &mut [Part]) {
    for part in parts {
        for section in &mut part.sections {
            for article in &mut section.articles {
                for paragraph in &mut article.paragraphs {
                    for clause in &mut paragraph.clauses {
                        clause.sub_clauses.retain(|s| !s.text.trim().is_empty());
                    }
                    paragraph.clauses.retain(|c| c.text.is_some() || !c.sub_clauses.is_empty());
                }
                article.paragraphs.retain(|p| p.text.is_some() || !p.clauses.is_empty());
            }
            section.articles.retain(|a| a.heading.is_some() || !a.paragraphs.is_empty());
        }
    }
}

pub fn parse_structure(text: &str) -> Result<StatuteDocument, StructureError> {
    if text.trim().is_empty() {
        return Err(StructureError::EmptyText);
    }
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<&str> = split_lines(&normalized).into_iter().map(str::trim).collect();

    let mut builder = Builder::default();
    scan_header(&mut builder.doc, &lines);
    for line in lines.iter().filter(|l| !l.is_empty()) {
        builder.feed(line);
    }

    let mut doc = builder.doc;
    for book in &mut doc.books {
        prune(&mut book.parts);
    }
    prune(&mut doc.parts);
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turkish_ci_pairs_dotted_and_dotless_i() {
        let re = Regex::new(&format!("^{}$", turkish_ci("KİTAP"))).unwrap();
        assert!(re.is_match("KİTAP"));
        assert!(re.is_match("Kitap"));
        assert!(re.is_match("kitap"));
    }

    #[test]
    fn dot_number_above_limit_is_not_a_paragraph() {
        assert!(detect_paragraph("51. bir metin").is_none());
        assert_eq!(detect_paragraph("3. bir metin"), Some(LineKind::Paragraph { number: 3, text: "bir metin".into() }));
    }

    #[test]
    fn section_ordinal_keeps_written_form() {
        assert_eq!(
            detect_section("Birinci Kısım: Temel İlkeler"),
            Some(LineKind::Section { label: "Birinci Kısım".into(), title: Some("Temel İlkeler".into()) })
        );
    }
}
