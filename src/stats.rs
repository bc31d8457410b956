//! Word count, concept density, reading time and complexity.

use serde::{Deserialize, Serialize};

const WORDS_PER_MINUTE: usize = 150;
const HIGH_COMPLEXITY_WORDS: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Complexity {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStatistics {
    pub word_count: usize,
    /// `"%12.34"`: concepts per hundred words.
    pub concept_density: String,
    /// Minutes, rounded up.
    pub reading_time: usize,
    pub complexity: Complexity,
}

pub fn calculate_statistics(text: &str, concept_count: usize) -> TextStatistics {
    let word_count = text.split_whitespace().count();
    let density = if word_count > 0 { concept_count as f64 / word_count as f64 * 100.0 } else { 0.0 };
    TextStatistics {
        word_count,
        concept_density: format!("%{:.2}", density),
        reading_time: word_count.div_ceil(WORDS_PER_MINUTE),
        complexity: if word_count > HIGH_COMPLEXITY_WORDS { Complexity::High } else { Complexity::Medium },
    }
}
