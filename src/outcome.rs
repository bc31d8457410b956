//! Legal-outcome flags (reversal, affirmance, acquittal, ...) with first-match
//! evidence.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::text::{ellipsize, fold_case, split_lines};

const EVIDENCE_CONTEXT_CHARS: usize = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OutcomeFlag {
    /// Suspended pronouncement of judgment.
    #[serde(rename = "hagb")]
    Hagb,
    #[serde(rename = "bozma_karari")]
    Reversal,
    #[serde(rename = "onama_karari")]
    Affirmance,
    #[serde(rename = "red_karari")]
    Rejection,
    #[serde(rename = "kabul_karari")]
    Acceptance,
    #[serde(rename = "beraat_karari")]
    Acquittal,
    #[serde(rename = "zamanasimi")]
    LimitationPeriod,
    #[serde(rename = "yetkisizlik")]
    LackOfVenue,
    #[serde(rename = "gorevsizlik")]
    LackOfJurisdiction,
    /// Lis pendens.
    #[serde(rename = "derdestlik")]
    Pendency,
}

impl OutcomeFlag {
    pub const ALL: [OutcomeFlag; 10] = [
        OutcomeFlag::Hagb,
        OutcomeFlag::Reversal,
        OutcomeFlag::Affirmance,
        OutcomeFlag::Rejection,
        OutcomeFlag::Acceptance,
        OutcomeFlag::Acquittal,
        OutcomeFlag::LimitationPeriod,
        OutcomeFlag::LackOfVenue,
        OutcomeFlag::LackOfJurisdiction,
        OutcomeFlag::Pendency,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            OutcomeFlag::Hagb => "hagb",
            OutcomeFlag::Reversal => "bozma_karari",
            OutcomeFlag::Affirmance => "onama_karari",
            OutcomeFlag::Rejection => "red_karari",
            OutcomeFlag::Acceptance => "kabul_karari",
            OutcomeFlag::Acquittal => "beraat_karari",
            OutcomeFlag::LimitationPeriod => "zamanasimi",
            OutcomeFlag::LackOfVenue => "yetkisizlik",
            OutcomeFlag::LackOfJurisdiction => "gorevsizlik",
            OutcomeFlag::Pendency => "derdestlik",
        }
    }

    /// Patterns in declaration order, written in case-folded Turkish.
    fn pattern_sources(&self) -> &'static [&'static str] {
        match self {
            OutcomeFlag::Hagb => &[
                r"hükmün\s+açıklanmasının\s+geri\s+bırakılması",
                r"\bhagb\b",
                r"h\.\s*a\.\s*g\.\s*b\.",
            ],
            OutcomeFlag::Reversal => &[r"bozma", r"bozulması", r"bozuldu", r"bozulmasına", r"bozma\s+kararı"],
            OutcomeFlag::Affirmance => &[r"onama", r"onandı", r"onandığı", r"onandığına", r"onama\s+kararı"],
            OutcomeFlag::Rejection => &[r"\bred\b", r"reddedildi", r"reddi", r"reddedilmesi", r"red\s+kararı"],
            OutcomeFlag::Acceptance => &[r"\bkabul\b", r"kabul\s+edildi", r"kabulüne", r"kabul\s+kararı"],
            OutcomeFlag::Acquittal => &[r"beraat", r"beraatine", r"beraat\s+kararı"],
            OutcomeFlag::LimitationPeriod => &[r"zamanaşımı", r"zamanaşımına\s+uğradı", r"zamanaşımı\s+itirazı"],
            OutcomeFlag::LackOfVenue => &[r"yetkisizlik", r"yetkisiz", r"yetkisizlik\s+kararı"],
            OutcomeFlag::LackOfJurisdiction => &[r"görevsizlik", r"görevsiz", r"görevsizlik\s+kararı"],
            OutcomeFlag::Pendency => &[r"derdestlik", r"derdest", r"derdestlik\s+kararı"],
        }
    }
}

static FLAG_PATTERNS: Lazy<Vec<(OutcomeFlag, Vec<Regex>)>> = Lazy::new(|| {
    OutcomeFlag::ALL
        .iter()
        .map(|flag| {
            let patterns = flag.pattern_sources().iter().map(|p| Regex::new(p).unwrap()).collect();
            (*flag, patterns)
        })
        .collect()
});

/// Where a flag was first seen. All optional fields are `None` when `found`
/// is false.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evidence {
    pub found: bool,
    pub context: Option<String>,
    pub line_no: Option<usize>,
    pub line_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeReport {
    pub flags: BTreeMap<OutcomeFlag, bool>,
    pub details: BTreeMap<OutcomeFlag, Evidence>,
}

impl OutcomeReport {
    pub fn is_set(&self, flag: OutcomeFlag) -> bool {
        self.flags.get(&flag).copied().unwrap_or(false)
    }

    pub fn evidence(&self, flag: OutcomeFlag) -> Option<&Evidence> {
        self.details.get(&flag)
    }

    pub fn active(&self) -> Vec<OutcomeFlag> {
        self.flags.iter().filter(|(_, on)| **on).map(|(f, _)| *f).collect()
    }
}

/// Scan `lines` top to bottom; on each line try `patterns` in order against
/// the case-folded line. The first hit becomes the evidence.
pub fn find_pattern(lines: &[&str], patterns: &[Regex]) -> Evidence {
    for (i, line) in lines.iter().enumerate() {
        let folded = fold_case(line);
        if patterns.iter().any(|re| re.is_match(&folded)) {
            let trimmed = line.trim();
            return Evidence {
                found: true,
                context: Some(ellipsize(trimmed, EVIDENCE_CONTEXT_CHARS)),
                line_no: Some(i + 1),
                line_text: Some(trimmed.to_string()),
            };
        }
    }
    Evidence::default()
}

/// Detect all ten outcome flags independently.
pub fn detect_outcomes(text: &str) -> OutcomeReport {
    let lines = split_lines(text);
    let mut flags = BTreeMap::new();
    let mut details = BTreeMap::new();
    for (flag, patterns) in FLAG_PATTERNS.iter() {
        let evidence = find_pattern(&lines, patterns);
        flags.insert(*flag, evidence.found);
        details.insert(*flag, evidence);
    }
    OutcomeReport { flags, details }
}
