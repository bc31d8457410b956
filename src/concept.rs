//! Dictionary concept matching with Turkish-aware word boundaries.

use std::collections::HashSet;

use crate::dictionary::Dictionary;
use crate::text::{fold_case, is_turkish_letter};

/// True when `term` (already folded) occurs in `haystack` (already folded)
/// with a non-letter, or the text edge, on both sides.
fn occurs_bounded(haystack: &str, term: &str) -> bool {
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(term) {
        let start = from + pos;
        let end = start + term.len();
        let before_ok = haystack[..start].chars().next_back().map_or(true, |c| !is_turkish_letter(c));
        let after_ok = haystack[end..].chars().next().map_or(true, |c| !is_turkish_letter(c));
        if before_ok && after_ok {
            return true;
        }
        // step one char so overlapping occurrences are still tried
        from = start + haystack[start..].chars().next().map_or(1, char::len_utf8);
    }
    false
}

/// Concepts from `dictionary` present in `text`, case-insensitively, in
/// dictionary order and without duplicates.
pub fn extract_concepts(text: &str, dictionary: &Dictionary) -> Vec<String> {
    if dictionary.concepts.is_empty() {
        return Vec::new();
    }
    let folded_text = fold_case(text);
    let mut seen: HashSet<&str> = HashSet::new();
    let mut found = Vec::new();
    for concept in &dictionary.concepts {
        let term = fold_case(concept.trim());
        if term.is_empty() || seen.contains(concept.as_str()) {
            continue;
        }
        if occurs_bounded(&folded_text, &term) {
            seen.insert(concept.as_str());
            found.push(concept.clone());
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_rejects_turkish_letter_neighbours() {
        assert!(!occurs_bounded("davacının", "davacı"));
        assert!(!occurs_bounded("şdava", "dava"));
        assert!(occurs_bounded("(dava)", "dava"));
        assert!(occurs_bounded("dava-2", "dava"));
    }

    #[test]
    fn later_occurrence_is_found_after_rejected_one() {
        assert!(occurs_bounded("davacılar ve davacı", "davacı"));
    }
}
