//! Plaintiffs, defendants, their counsel, and claim sentences.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::text::{ellipsize, fold_case, split_lines};

const PARTY_CONTEXT_CHARS: usize = 150;
const MIN_NAME_CHARS: usize = 2;
const MAX_NAME_CHARS: usize = 40;
const MIN_CLAIM_CHARS: usize = 10;
const MAX_CLAIM_CHARS: usize = 300;

// A run of capitalised words on one line. Stops at the first lowercase word,
// punctuation, apostrophe (possessive suffix) or line end.
const NAME: &str = r"[A-ZÇĞİÖŞÜÂÎÛ][A-Za-zÇĞİÖŞÜÂÎÛçğıöşüâîû]*(?:[ \t]+[A-ZÇĞİÖŞÜÂÎÛ][A-Za-zÇĞİÖŞÜÂÎÛçğıöşüâîû]*)*";
const AV_TITLE: &str = r"(?:Av\.?[ \t]+)?";

static PLAINTIFF_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"\b(?i:davac[ıi](?:lar)?)[ \t]+(?P<name>{NAME})")).unwrap());
static DEFENDANT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"\b(?i:daval[ıi](?:lar)?)[ \t]+(?P<name>{NAME})")).unwrap());

static REPRESENTATIVE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        format!(
            r"\b(?i:davac[ıi]|daval[ıi]|san[ıi]k|şüphel[iİ]|müdde[iİ]umum[iİ]|müdde[iİ])[ \t]+(?i:vek[iİ]l[iİ])[ \t]+{AV_TITLE}(?P<name>{NAME})"
        ),
        format!(r"\b(?i:müdaf[iİ][iİ]?)[ \t]+{AV_TITLE}(?P<name>{NAME})"),
        format!(r"\b(?i:vek[iİ]l[iİ])[ \t]+{AV_TITLE}(?P<name>{NAME})"),
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static CLAIM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[^.]*?\b(?i:talep|[iİ]stek|[iİ]dd[iİ]a|d[iİ]lekçe|başvuru)\s+(?i:edilen|ettiği|etti|edilmesi|edilmesine|edilmesini)[^.]*\.",
    )
    .unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub name: String,
    pub line_number: usize,
    pub context: String,
    pub line_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RepresentativeRole {
    PlaintiffCounsel,
    DefendantCounsel,
    Defender,
    GenericCounsel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Representative {
    pub name: String,
    pub role: RepresentativeRole,
    pub line_number: usize,
    pub context: String,
    pub line_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimType {
    Claim,
    Allegation,
    Petition,
    Application,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    pub text: String,
    #[serde(rename = "type")]
    pub claim_type: ClaimType,
    pub line_number: usize,
    pub context: String,
    pub line_text: String,
}

/// Empty categories are `None`, never an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyReport {
    pub plaintiffs: Option<Vec<Party>>,
    pub defendants: Option<Vec<Party>>,
    pub representatives: Option<Vec<Representative>>,
    pub claims: Option<Vec<Claim>>,
}

/// Cut a captured name before a `Vekil`/`Vekili`/`Vekilleri` word, which ends it.
fn cut_at_counsel(name: &str) -> &str {
    let mut end = name.len();
    let mut offset = 0;
    for word in name.split([' ', '\t']) {
        if matches!(fold_case(word).as_str(), "vekil" | "vekili" | "vekilleri") {
            end = offset;
            break;
        }
        offset += word.len() + 1;
    }
    name[..end].trim_end()
}

fn acceptable_name(name: &str) -> bool {
    let len = name.chars().count();
    if !(MIN_NAME_CHARS..=MAX_NAME_CHARS).contains(&len) {
        return false;
    }
    let folded = fold_case(name);
    folded != "av"
}

fn classify_role(folded_line: &str) -> RepresentativeRole {
    if folded_line.contains("davacı vekili") {
        RepresentativeRole::PlaintiffCounsel
    } else if folded_line.contains("davalı vekili") {
        RepresentativeRole::DefendantCounsel
    } else if folded_line.contains("sanık vekili") || folded_line.contains("müdafi") {
        RepresentativeRole::Defender
    } else {
        RepresentativeRole::GenericCounsel
    }
}

fn classify_claim(folded_claim: &str) -> ClaimType {
    if folded_claim.contains("iddia") {
        ClaimType::Allegation
    } else if folded_claim.contains("dilekçe") {
        ClaimType::Petition
    } else if folded_claim.contains("başvuru") {
        ClaimType::Application
    } else {
        ClaimType::Claim
    }
}

fn none_if_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() { None } else { Some(items) }
}

#[derive(Default)]
struct Collector {
    plaintiffs: Vec<Party>,
    defendants: Vec<Party>,
    representatives: Vec<Representative>,
    claims: Vec<Claim>,
    seen_plaintiffs: HashSet<String>,
    seen_defendants: HashSet<String>,
    seen_representatives: HashSet<(String, RepresentativeRole)>,
    seen_claims: HashSet<String>,
}

impl Collector {
    fn parties(re: &Regex, line: &str, line_number: usize, out: &mut Vec<Party>, seen: &mut HashSet<String>) {
        for caps in re.captures_iter(line) {
            let name = cut_at_counsel(caps["name"].trim());
            if !acceptable_name(name) {
                continue;
            }
            if seen.insert(fold_case(name)) {
                out.push(Party {
                    name: name.to_string(),
                    line_number,
                    context: ellipsize(line, PARTY_CONTEXT_CHARS),
                    line_text: line.to_string(),
                });
            }
        }
    }

    fn representatives(&mut self, line: &str, line_number: usize) {
        let role = classify_role(&fold_case(line));
        for re in REPRESENTATIVE_RES.iter() {
            for caps in re.captures_iter(line) {
                let name = cut_at_counsel(caps["name"].trim());
                if !acceptable_name(name) {
                    continue;
                }
                if self.seen_representatives.insert((fold_case(name), role)) {
                    self.representatives.push(Representative {
                        name: name.to_string(),
                        role,
                        line_number,
                        context: ellipsize(line, PARTY_CONTEXT_CHARS),
                        line_text: line.to_string(),
                    });
                }
            }
        }
    }

    fn claims(&mut self, line: &str, line_number: usize) {
        for m in CLAIM_RE.find_iter(line) {
            let text = m.as_str().trim();
            let len = text.chars().count();
            if !(MIN_CLAIM_CHARS..=MAX_CLAIM_CHARS).contains(&len) {
                continue;
            }
            let folded = fold_case(text);
            let claim_type = classify_claim(&folded);
            if self.seen_claims.insert(folded) {
                self.claims.push(Claim {
                    text: text.to_string(),
                    claim_type,
                    line_number,
                    context: ellipsize(line, PARTY_CONTEXT_CHARS),
                    line_text: line.to_string(),
                });
            }
        }
    }
}

/// Extract parties, representatives and claims, one line at a time.
pub fn extract_parties(text: &str) -> PartyReport {
    let mut c = Collector::default();
    for (i, raw) in split_lines(text).into_iter().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let line_number = i + 1;
        Collector::parties(&PLAINTIFF_RE, line, line_number, &mut c.plaintiffs, &mut c.seen_plaintiffs);
        Collector::parties(&DEFENDANT_RE, line, line_number, &mut c.defendants, &mut c.seen_defendants);
        c.representatives(line, line_number);
        c.claims(line, line_number);
    }
    PartyReport {
        plaintiffs: none_if_empty(c.plaintiffs),
        defendants: none_if_empty(c.defendants),
        representatives: none_if_empty(c.representatives),
        claims: none_if_empty(c.claims),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_stops_at_lowercase_word_and_suffix() {
        let caps = PLAINTIFF_RE.captures("Davacı Ahmet Yılmaz'ın dava açtığı").unwrap();
        assert_eq!(&caps["name"], "Ahmet Yılmaz");
        let caps = PLAINTIFF_RE.captures("DAVACI Ayşe Kara vekili ile geldi").unwrap();
        assert_eq!(&caps["name"], "Ayşe Kara");
    }

    #[test]
    fn counsel_keyword_is_not_a_name() {
        assert!(PLAINTIFF_RE.captures("Davacı vekili duruşmaya geldi").is_none());
        assert!(!acceptable_name(cut_at_counsel("VEKİLİ AV")));
        assert!(!acceptable_name("Av"));
    }

    #[test]
    fn counsel_word_ends_the_name() {
        assert_eq!(cut_at_counsel("Ahmet Yılmaz Vekili Av"), "Ahmet Yılmaz");
        assert_eq!(cut_at_counsel("Ayşe\tKara VEKİLLERİ"), "Ayşe\tKara");
        assert_eq!(cut_at_counsel("Vekili Av"), "");
        assert_eq!(cut_at_counsel("Ali Vekiloğlu"), "Ali Vekiloğlu");
    }

    #[test]
    fn role_classification_order() {
        assert_eq!(classify_role("davacı vekili av. ali"), RepresentativeRole::PlaintiffCounsel);
        assert_eq!(classify_role("sanık müdafi av. can"), RepresentativeRole::Defender);
        assert_eq!(classify_role("vekili av. can"), RepresentativeRole::GenericCounsel);
    }
}
