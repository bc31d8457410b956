//! Tone scoring by indicator-word frequency.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dictionary::{Dictionary, ToneCategory};
use crate::text::fold_case;

/// Technical-score threshold above which the style is academic.
const ACADEMIC_THRESHOLD: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneReport {
    pub tone: String,
    pub scores: BTreeMap<ToneCategory, u32>,
    pub style: String,
}

impl ToneReport {
    fn no_data() -> Self {
        Self { tone: "NoData".to_string(), scores: BTreeMap::new(), style: "Unknown".to_string() }
    }
}

fn count_occurrences(folded_text: &str, word: &str) -> u32 {
    let needle = fold_case(word);
    if needle.is_empty() {
        return 0;
    }
    folded_text.matches(needle.as_str()).count() as u32
}

pub fn score_tone(text: &str, dictionary: &Dictionary) -> ToneReport {
    let Some(indicators) = dictionary.sentiment_indicators.as_ref() else {
        return ToneReport::no_data();
    };
    let folded = fold_case(text);

    let mut scores = BTreeMap::new();
    for category in ToneCategory::ALL {
        let score = indicators.words_for(category).iter().map(|w| count_occurrences(&folded, w)).sum();
        scores.insert(category, score);
    }

    // strict comparison keeps the earliest category on ties
    let mut dominant = ToneCategory::ALL[0];
    for category in ToneCategory::ALL {
        if scores[&category] > scores[&dominant] {
            dominant = category;
        }
    }
    let tone = if scores[&dominant] > 0 { dominant.label().to_string() } else { "Neutral".to_string() };
    let style = if scores[&ToneCategory::Technical] > ACADEMIC_THRESHOLD {
        "Academic/Technical"
    } else {
        "Operational"
    };

    ToneReport { tone, scores, style: style.to_string() }
}
