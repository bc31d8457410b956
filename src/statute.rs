//! Statute citations: `5237 S. TÜRK CEZA KANUNU [ Madde 124 ]` and friends.
//!
//! Every line is tried against three full-form grammars in priority order
//! (bracketed article, plain article, no article); the first that yields a
//! usable law name wins. Short codes such as `TCK m.124` are scanned on every
//! line on top of that. Citations are merged per (law, repealed status).

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::text::{ellipsize, fold_case, split_lines};

const ARTICLE_CONTEXT_CHARS: usize = 120;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleCitation {
    pub article_number: String,
    pub context: String,
    pub line_number: usize,
    pub line_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatuteReference {
    pub law_number: Option<String>,
    pub law_name: Option<String>,
    pub is_repealed: bool,
    pub repeal_note: Option<String>,
    pub articles: Vec<ArticleCitation>,
}

/// Which grammar produced a citation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CitationForm {
    Bracketed,
    Plain,
    NoArticle,
    ShortCode,
}

/// One citation found on one line, before merging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineCitation {
    pub form: CitationForm,
    pub law_number: Option<String>,
    pub law_name: String,
    pub repeal_note: Option<String>,
    pub article: Option<String>,
}

// <no> S. <NAME IN CAPS> [(MÜLGA)]
const PREFIX: &str = r"^\s*(?P<no>\d+)\s+(?i:s)\.\s+(?P<name>[A-ZÇĞİÖŞÜÂÎÛ][A-ZÇĞİÖŞÜÂÎÛ\s.]*?)(?:\s+\((?P<tag>(?i:mülga))\))?";

static BRACKETED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"{PREFIX}\s+\[\s*(?i:madde)\s+(?P<art>\d+)\s*\]\s*$")).unwrap()
});
static PLAIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"{PREFIX}\s+(?:(?i:madde)\s+(?P<art>\d+)|(?i:m)\.\s*(?P<art_alt>\d+))\s*$")).unwrap()
});
static NO_ARTICLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(&format!(r"{PREFIX}\s*$")).unwrap());

// matched against the case-folded line
static SHORT_CODE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(tmk|tbk|tck|iik|hmk|cmk|ttk|işk|dmk)\s*(?:m\.|madde)\s*(\d+)").unwrap()
});

fn canonical_code(folded: &str) -> &'static str {
    match folded {
        "tmk" => "TMK",
        "tbk" => "TBK",
        "tck" => "TCK",
        "iik" => "İİK",
        "hmk" => "HMK",
        "cmk" => "CMK",
        "ttk" => "TTK",
        "işk" => "İşK",
        _ => "DMK",
    }
}

fn clean_law_name(raw: &str) -> String {
    raw.trim().trim_end_matches('.').trim_end().to_string()
}

fn citation_from(form: CitationForm, caps: &Captures) -> Option<LineCitation> {
    let law_name = clean_law_name(caps.name("name")?.as_str());
    if law_name.chars().count() < 2 {
        return None;
    }
    let article = caps
        .name("art")
        .or_else(|| caps.name("art_alt"))
        .map(|m| m.as_str().to_string());
    Some(LineCitation {
        form,
        law_number: caps.name("no").map(|m| m.as_str().to_string()),
        law_name,
        repeal_note: caps.name("tag").map(|m| m.as_str().to_string()),
        article,
    })
}

/// Try the full-form grammars on one line, in priority order.
pub fn match_full_form(line: &str) -> Option<LineCitation> {
    let grammars: [(CitationForm, &Regex); 3] = [
        (CitationForm::Bracketed, &BRACKETED_RE),
        (CitationForm::Plain, &PLAIN_RE),
        (CitationForm::NoArticle, &NO_ARTICLE_RE),
    ];
    grammars
        .iter()
        .find_map(|(form, re)| re.captures(line).and_then(|caps| citation_from(*form, &caps)))
}

/// All short-code citations on one line (`TCK m.124`, `HMK Madde 5`).
pub fn match_short_codes(line: &str) -> Vec<LineCitation> {
    let folded = fold_case(line);
    SHORT_CODE_RE
        .captures_iter(&folded)
        .map(|caps| LineCitation {
            form: CitationForm::ShortCode,
            law_number: None,
            law_name: canonical_code(&caps[1]).to_string(),
            repeal_note: None,
            article: Some(caps[2].to_string()),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum LawKey {
    Number(String),
    Name(String),
}

/// Ordered accumulator of statute references: at most one entry per
/// (law, repealed status), each article kept once.
#[derive(Debug, Default)]
pub struct StatuteSet {
    refs: Vec<StatuteReference>,
    index: HashMap<(LawKey, bool), usize>,
}

impl StatuteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one citation found on `line` (1-based `line_number`).
    pub fn add(&mut self, citation: &LineCitation, line: &str, line_number: usize) {
        let name = clean_law_name(&citation.law_name);
        let number = citation.law_number.as_deref().map(str::trim).filter(|n| !n.is_empty());
        let key = match number {
            Some(n) => LawKey::Number(n.to_string()),
            None => LawKey::Name(fold_case(&name)),
        };
        let repealed = citation.repeal_note.is_some();

        let idx = match self.index.get(&(key.clone(), repealed)) {
            Some(&i) => i,
            None => {
                self.refs.push(StatuteReference {
                    law_number: number.map(str::to_string),
                    law_name: if name.is_empty() { None } else { Some(name) },
                    is_repealed: repealed,
                    repeal_note: citation.repeal_note.clone(),
                    articles: Vec::new(),
                });
                self.index.insert((key, repealed), self.refs.len() - 1);
                self.refs.len() - 1
            }
        };
        let law = &mut self.refs[idx];

        if let Some(note) = &citation.repeal_note {
            if law.repeal_note.is_none() {
                law.is_repealed = true;
                law.repeal_note = Some(note.clone());
            }
        }

        if let Some(article) = &citation.article {
            if !law.articles.iter().any(|a| &a.article_number == article) {
                let trimmed = line.trim();
                law.articles.push(ArticleCitation {
                    article_number: article.clone(),
                    context: ellipsize(trimmed, ARTICLE_CONTEXT_CHARS),
                    line_number,
                    line_text: trimmed.to_string(),
                });
            }
        }
    }

    pub fn into_vec(self) -> Vec<StatuteReference> {
        self.refs
    }
}

/// Extract and merge every statute citation in `text`, line by line.
pub fn parse_statutes(text: &str) -> Vec<StatuteReference> {
    let mut set = StatuteSet::new();
    if text.is_empty() {
        return set.into_vec();
    }
    for (i, line) in split_lines(text).into_iter().enumerate() {
        let line_number = i + 1;
        if let Some(citation) = match_full_form(line) {
            set.add(&citation, line, line_number);
        }
        for citation in match_short_codes(line) {
            set.add(&citation, line, line_number);
        }
    }
    set.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grammar_priority_prefers_brackets() {
        let c = match_full_form("5237 S. TÜRK CEZA KANUNU [ Madde 124 ]").unwrap();
        assert_eq!(c.form, CitationForm::Bracketed);
        assert_eq!(c.article.as_deref(), Some("124"));
    }

    #[test]
    fn plain_form_accepts_m_dot() {
        let c = match_full_form("5271 S. CEZA MUHAKEMESİ KANUNU m. 309").unwrap();
        assert_eq!(c.form, CitationForm::Plain);
        assert_eq!(c.article.as_deref(), Some("309"));
        assert_eq!(c.law_name, "CEZA MUHAKEMESİ KANUNU");
    }

    #[test]
    fn one_letter_name_is_rejected() {
        assert!(match_full_form("5237 S. A [ Madde 1 ]").is_none());
    }

    #[test]
    fn short_codes_are_canonicalised() {
        let found = match_short_codes("tck m.124 ve İİK Madde 89");
        let names: Vec<&str> = found.iter().map(|c| c.law_name.as_str()).collect();
        assert_eq!(names, vec!["TCK", "İİK"]);
    }
}
