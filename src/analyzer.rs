//! Runs every extractor over one decision text and assembles the record.

use std::path::Path;

use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::concept::extract_concepts;
use crate::dictionary::{Dictionary, DictionaryStore};
use crate::identity::{extract_identity, IdentityRecord};
use crate::io::sha256_hex;
use crate::outcome::{detect_outcomes, OutcomeReport};
use crate::party::{extract_parties, PartyReport};
use crate::stats::{calculate_statistics, TextStatistics};
use crate::statute::{parse_statutes, StatuteReference};
use crate::tone::{score_tone, ToneReport};

pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationRecord {
    pub identity: IdentityRecord,
    pub tone: ToneReport,
    pub statutes: Vec<StatuteReference>,
    pub outcomes: OutcomeReport,
    pub parties: PartyReport,
    pub concepts: Vec<String>,
    pub statistics: TextStatistics,
    pub analyzed_at: String,
}

impl AnnotationRecord {
    /// SHA-256 of the record's JSON without `analyzedAt`, stable across runs
    /// for the same text and dictionary.
    pub fn fingerprint(&self) -> Result<String, serde_json::Error> {
        let mut value = serde_json::to_value(self)?;
        if let Some(obj) = value.as_object_mut() {
            obj.remove("analyzedAt");
        }
        Ok(sha256_hex(value.to_string().as_bytes()))
    }

    /// The record as written to disk: its JSON plus `docId`, `source` and
    /// `fingerprint`.
    pub fn to_document(&self, doc_id: &str, source: &Path) -> Result<Value, serde_json::Error> {
        let fingerprint = self.fingerprint()?;
        let mut value = serde_json::to_value(self)?;
        if let Value::Object(obj) = &mut value {
            obj.insert("docId".to_string(), Value::from(doc_id));
            obj.insert("source".to_string(), serde_json::to_value(source)?);
            obj.insert("fingerprint".to_string(), Value::from(fingerprint));
        }
        Ok(value)
    }
}

pub struct Analyzer<'a> {
    store: &'a DictionaryStore,
}

impl<'a> Analyzer<'a> {
    pub fn new(store: &'a DictionaryStore) -> Self {
        Self { store }
    }

    /// The dictionary is read once, so a concurrent `replace` on the store
    /// never splits one analysis across two dictionaries.
    pub fn analyze(&self, text: &str) -> Option<AnnotationRecord> {
        let dictionary = self.store.snapshot();
        analyze_with(text, &dictionary)
    }
}

/// Analyze with the process-wide dictionary.
pub fn analyze(text: &str) -> Option<AnnotationRecord> {
    Analyzer::new(DictionaryStore::global()).analyze(text)
}

/// `None` when the text is blank.
pub fn analyze_with(text: &str, dictionary: &Dictionary) -> Option<AnnotationRecord> {
    if text.trim().is_empty() {
        return None;
    }
    let concepts = extract_concepts(text, dictionary);
    let statistics = calculate_statistics(text, concepts.len());
    Some(AnnotationRecord {
        identity: extract_identity(text),
        tone: score_tone(text, dictionary),
        statutes: parse_statutes(text),
        outcomes: detect_outcomes(text),
        parties: extract_parties(text),
        concepts,
        statistics,
        analyzed_at: Local::now().format(TIMESTAMP_FORMAT).to_string(),
    })
}
