//! Decision header metadata: court, chamber, case and decision numbers,
//! date, subject and offense names.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::text::{fold_case, is_turkish_upper, split_lines, turkish_ci};

pub const UNDETERMINED: &str = "Undetermined";
pub const NOT_FOUND: &str = "NotFound";
pub const NO_DATE: &str = "None";
pub const DEFAULT_SUBJECT: &str = "GeneralLegalDispute";

const MIN_OFFENSE_CHARS: usize = 3;

const FILE_NO: &str = r"\d{4}/\d+(?:-\d+)?";
const UPPER: &str = "A-ZÇĞİÖŞÜÂÎÛ";
const LOWER: &str = "a-zçğıöşüâîû";

// One line of capitalised or all-caps words and ordinals, ending in a court
// marker in either spelling.
static COURT_RE: Lazy<Regex> = Lazy::new(|| {
    let word = format!(r"(?:\d+\.|[{UPPER}][{LOWER}]*|[{UPPER}]+)");
    let marker = [
        format!("{}[ \t]+(?:{}|{})", turkish_ci("Genel"), turkish_ci("Kurulu"), turkish_ci("Kurul")),
        format!("{}[ \t]+{}", turkish_ci("İstinaf"), turkish_ci("Dairesi")),
        turkish_ci("Dairesi"),
        format!(
            "{}[ \t]+(?:{}|{})[ \t]+{}",
            turkish_ci("Bölge"),
            turkish_ci("Adliye"),
            turkish_ci("İdare"),
            turkish_ci("Mahkemesi")
        ),
        turkish_ci("Mahkemesi"),
    ]
    .join("|");
    Regex::new(&format!(r"\b(?:{word}[ \t]+)+(?:{marker})\b")).unwrap()
});
static CHAMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+\.[ \t]*(?i:hukuk|ceza)[ \t]*(?i:da[iİ]res[iİ])").unwrap()
});

/// `Esas No: 2023/1` / `2023/1 E.` and the `Karar` / `K.` counterparts.
struct FileNumberGrammar {
    prefixed: Regex,
    suffixed: Regex,
}

impl FileNumberGrammar {
    fn new(word: &str, initial: char) -> Self {
        let word = turkish_ci(word);
        let prefixed = Regex::new(&format!(r"{word}[ \t]*(?i:no)[ \t]*:?\s*(?P<no>{FILE_NO})")).unwrap();
        let suffixed = Regex::new(&format!(
            r"(?P<no>{FILE_NO})[ \t]*(?:(?i:{initial})\.|(?P<named>{word}[ \t]*(?i:no)[ \t]*:?))"
        ))
        .unwrap();
        Self { prefixed, suffixed }
    }

    /// Numbers carrying the marker before or after them, in text order.
    fn numbers(&self, text: &str) -> Vec<String> {
        let mut hits: Vec<(usize, &str)> = self
            .prefixed
            .captures_iter(text)
            .filter_map(|caps| caps.name("no"))
            .map(|m| (m.start(), m.as_str()))
            .collect();
        for caps in self.suffixed.captures_iter(text) {
            let (Some(whole), Some(no)) = (caps.get(0), caps.name("no")) else { continue };
            // `2023/1 Karar No: 2023/2`: the marker opens the next number
            if caps.name("named").is_some()
                && text[whole.end()..].trim_start_matches([' ', '\t']).starts_with(|c: char| c.is_ascii_digit())
            {
                continue;
            }
            if !hits.iter().any(|(start, _)| *start == no.start()) {
                hits.push((no.start(), no.as_str()));
            }
        }
        hits.sort_by_key(|(start, _)| *start);
        hits.into_iter().map(|(_, no)| no.to_string()).collect()
    }
}

static CASE_NO: Lazy<FileNumberGrammar> = Lazy::new(|| FileNumberGrammar::new("esas", 'e'));
static DECISION_NO: Lazy<FileNumberGrammar> = Lazy::new(|| FileNumberGrammar::new("karar", 'k'));
static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{1,2}\.\d{1,2}\.\d{4}").unwrap());
static SUBJECT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i:dava[ \t]+türü|konu)[ \t]*:[ \t]*(?P<subject>[^\n]+)").unwrap());

static BODY_MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i:[iİ]çt[iİ]hat)\s+(?i:metn[iİ])|GEREKÇE|KARAR|TÜRK\s+MİLLETİ\s+ADINA").unwrap()
});
// matched against folded lines
static STATUTE_LIKE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}\s*s").unwrap());
static CHAMBER_LIKE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s*(?:hukuk|ceza)\s*dairesi").unwrap());
static FILE_NO_LIKE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}/\d+").unwrap());
static COURT_LIKE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"genel\s+kurulu?|dairesi|mahkemesi").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRecord {
    pub court: String,
    pub chamber: Option<String>,
    pub case_number: String,
    pub case_numbers: Option<Vec<String>>,
    pub case_number_base: Option<String>,
    pub case_number_suffix: Option<String>,
    pub decision_number: String,
    pub decision_numbers: Option<Vec<String>>,
    pub decision_number_base: Option<String>,
    pub decision_number_suffix: Option<String>,
    pub date: String,
    pub subject: String,
    pub offense_names: Option<Vec<String>>,
}

struct FileNumber {
    primary: String,
    all: Option<Vec<String>>,
    base: Option<String>,
    suffix: Option<String>,
}

impl FileNumber {
    fn from_list(list: Vec<String>) -> Self {
        let Some(first) = list.first().cloned() else {
            return FileNumber { primary: NOT_FOUND.to_string(), all: None, base: None, suffix: None };
        };
        let (base, suffix) = match first.split_once('-') {
            Some((b, s)) => (b.to_string(), Some(s.to_string())),
            None => (first.clone(), None),
        };
        FileNumber { primary: first, all: Some(list), base: Some(base), suffix }
    }
}

fn looks_like_offense(line: &str) -> bool {
    if line.chars().count() < MIN_OFFENSE_CHARS {
        return false;
    }
    if !line.chars().all(|c| is_turkish_upper(c) || c.is_whitespace()) {
        return false;
    }
    let folded = fold_case(line);
    !(STATUTE_LIKE_RE.is_match(&folded)
        || CHAMBER_LIKE_RE.is_match(&folded)
        || FILE_NO_LIKE_RE.is_match(&folded)
        || COURT_LIKE_RE.is_match(&folded))
}

/// All-caps lines of the header, i.e. the text before the first body marker
/// (the whole text when there is none).
pub fn extract_offense_names(text: &str) -> Option<Vec<String>> {
    let header = match BODY_MARKER_RE.find(text) {
        Some(m) => &text[..m.start()],
        None => text,
    };
    let names: Vec<String> = split_lines(header)
        .into_iter()
        .map(str::trim)
        .filter(|line| looks_like_offense(line))
        .map(str::to_string)
        .collect();
    if names.is_empty() { None } else { Some(names) }
}

pub fn extract_identity(text: &str) -> IdentityRecord {
    let court = COURT_RE.find(text).map(|m| m.as_str().trim().to_string());
    let chamber = CHAMBER_RE.find(text).map(|m| m.as_str().to_string());
    let case = FileNumber::from_list(CASE_NO.numbers(text));
    let decision = FileNumber::from_list(DECISION_NO.numbers(text));
    let date = DATE_RE.find(text).map(|m| m.as_str().to_string());
    let subject = SUBJECT_RE
        .captures(text)
        .map(|caps| caps["subject"].trim().to_string())
        .filter(|s| !s.is_empty());

    IdentityRecord {
        court: court.unwrap_or_else(|| UNDETERMINED.to_string()),
        chamber,
        case_number: case.primary,
        case_numbers: case.all,
        case_number_base: case.base,
        case_number_suffix: case.suffix,
        decision_number: decision.primary,
        decision_numbers: decision.all,
        decision_number_base: decision.base,
        decision_number_suffix: decision.suffix,
        date: date.unwrap_or_else(|| NO_DATE.to_string()),
        subject: subject.unwrap_or_else(|| DEFAULT_SUBJECT.to_string()),
        offense_names: extract_offense_names(text),
    }
}
