//! Concept dictionary and tone indicator lists, plus the process-wide store
//! the analyzer snapshots from.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// The four tone buckets, in tie-breaking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneCategory {
    Technical,
    Harsh,
    Explanatory,
    Definitive,
}

impl ToneCategory {
    pub const ALL: [ToneCategory; 4] = [
        ToneCategory::Technical,
        ToneCategory::Harsh,
        ToneCategory::Explanatory,
        ToneCategory::Definitive,
    ];

    /// Accepts English keys and the Turkish keys (`teknik`, `sert`, ...).
    pub fn from_key(key: &str) -> Option<Self> {
        match crate::text::fold_case(key.trim()).as_str() {
            "technical" | "teknik" => Some(ToneCategory::Technical),
            "harsh" | "sert" => Some(ToneCategory::Harsh),
            "explanatory" | "aciklayici" | "açıklayıcı" => Some(ToneCategory::Explanatory),
            "definitive" | "kesin" => Some(ToneCategory::Definitive),
            _ => None,
        }
    }

    /// Title-cased label used as the `tone` value.
    pub fn label(&self) -> &'static str {
        match self {
            ToneCategory::Technical => "Technical",
            ToneCategory::Harsh => "Harsh",
            ToneCategory::Explanatory => "Explanatory",
            ToneCategory::Definitive => "Definitive",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SentimentIndicators(pub BTreeMap<ToneCategory, Vec<String>>);

impl SentimentIndicators {
    /// Indicator words shipped with the tool; used whenever a dictionary file
    /// does not bring its own.
    pub fn builtin() -> Self {
        let mut map = BTreeMap::new();
        map.insert(
            ToneCategory::Technical,
            words(&["kanun", "madde", "usul", "esas", "hüküm", "fıkra", "bent", "mevzuat", "içtihat"]),
        );
        map.insert(
            ToneCategory::Harsh,
            words(&["ceza", "hapis", "ağırlaştırılmış", "zorla", "ihlal", "suç", "kasıt", "kusur"]),
        );
        map.insert(
            ToneCategory::Explanatory,
            words(&["dolayısıyla", "nedeniyle", "gereğince", "binaen", "açıklanan", "hükmün", "gerekçeli"]),
        );
        map.insert(
            ToneCategory::Definitive,
            words(&["karar verildi", "kesinleşmiş", "onama", "red", "kabul", "hüküm kuruldu"]),
        );
        SentimentIndicators(map)
    }

    pub fn words_for(&self, category: ToneCategory) -> &[String] {
        self.0.get(&category).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Lenient read of `{category: [word, ...]}`. Unknown categories and
    /// non-string words are dropped; anything but an object yields `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let mut map: BTreeMap<ToneCategory, Vec<String>> = BTreeMap::new();
        for (key, list) in obj {
            let Some(category) = ToneCategory::from_key(key) else { continue };
            let entry = map.entry(category).or_default();
            if let Some(items) = list.as_array() {
                entry.extend(items.iter().filter_map(|w| w.as_str()).map(str::to_string));
            }
        }
        Some(SentimentIndicators(map))
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

/// Concept terms plus tone indicators. Replaced wholesale, never edited in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct Dictionary {
    pub concepts: Vec<String>,
    #[serde(rename = "sentimentIndicators")]
    pub sentiment_indicators: Option<SentimentIndicators>,
}

impl From<Value> for Dictionary {
    fn from(value: Value) -> Self {
        Dictionary::from_value(&value)
    }
}

impl Dictionary {
    pub fn new(concepts: Vec<String>, sentiment_indicators: Option<SentimentIndicators>) -> Self {
        Self { concepts, sentiment_indicators }
    }

    /// No concepts, built-in tone indicators.
    pub fn builtin() -> Self {
        Self { concepts: Vec::new(), sentiment_indicators: Some(SentimentIndicators::builtin()) }
    }

    /// Configuration interface. Never fails: a `concepts` value that is not a
    /// list reads as no concepts, an indicator value that is not an object
    /// reads as "not loaded".
    pub fn from_value(value: &Value) -> Self {
        let concepts = value
            .get("concepts")
            .or_else(|| value.get("dictionary"))
            .and_then(|c| c.as_array())
            .map(|items| items.iter().filter_map(|w| w.as_str()).map(str::to_string).collect())
            .unwrap_or_default();
        let sentiment_indicators = value
            .get("sentimentIndicators")
            .or_else(|| value.get("sentiment_indicators"))
            .and_then(SentimentIndicators::from_value);
        Self { concepts, sentiment_indicators }
    }

    /// Category-grouped dictionary file (`{"Ceza Hukuku": ["Kasten", ...], ...}`),
    /// flattened in key order, with the built-in indicators.
    pub fn from_categories(categories: &serde_json::Map<String, Value>) -> Self {
        let concepts = categories
            .values()
            .filter_map(|v| v.as_array())
            .flat_map(|items| items.iter().filter_map(|w| w.as_str()).map(str::to_string))
            .collect();
        Self { concepts, sentiment_indicators: Some(SentimentIndicators::builtin()) }
    }
}

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("Failed to read dictionary: {0}")]
    Read(String),
    #[error("Failed to parse dictionary: {0}")]
    Parse(String),
}

/// Load a dictionary file. `.yaml`/`.yml` files are read as YAML, anything
/// else as JSON. Files without indicator lists get the built-in ones.
pub fn load_dictionary(path: &Path) -> Result<Dictionary, DictionaryError> {
    let raw = std::fs::read_to_string(path).map_err(|e| DictionaryError::Read(e.to_string()))?;
    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"))
        .unwrap_or(false);
    let value: Value = if is_yaml {
        serde_yaml::from_str(&raw).map_err(|e| DictionaryError::Parse(e.to_string()))?
    } else {
        serde_json::from_str(&raw).map_err(|e| DictionaryError::Parse(e.to_string()))?
    };

    let mut dict = match &value {
        Value::Object(obj) if obj.contains_key("concepts") || obj.contains_key("dictionary") => {
            Dictionary::from_value(&value)
        }
        Value::Object(obj) => Dictionary::from_categories(obj),
        Value::Array(items) => Dictionary::new(
            items.iter().filter_map(|w| w.as_str()).map(str::to_string).collect(),
            None,
        ),
        _ => return Err(DictionaryError::Parse("expected an object or a list of concepts".into())),
    };
    if dict.sentiment_indicators.is_none() {
        dict.sentiment_indicators = Some(SentimentIndicators::builtin());
    }
    Ok(dict)
}

/// Holder of the current dictionary. Readers take an `Arc` snapshot and keep
/// using it even if the dictionary is replaced meanwhile.
#[derive(Debug, Default)]
pub struct DictionaryStore {
    current: RwLock<Arc<Dictionary>>,
}

static GLOBAL_STORE: Lazy<DictionaryStore> = Lazy::new(DictionaryStore::default);

impl DictionaryStore {
    pub fn new(dictionary: Dictionary) -> Self {
        Self { current: RwLock::new(Arc::new(dictionary)) }
    }

    /// The process-wide store used by [`crate::analyze`].
    pub fn global() -> &'static DictionaryStore {
        &GLOBAL_STORE
    }

    pub fn replace(&self, dictionary: Dictionary) {
        *self.current.write() = Arc::new(dictionary);
    }

    pub fn snapshot(&self) -> Arc<Dictionary> {
        Arc::clone(&self.current.read())
    }
}

/// Replace the process-wide dictionary.
pub fn set_dictionary(dictionary: Dictionary) {
    DictionaryStore::global().replace(dictionary);
}

/// Snapshot of the process-wide dictionary.
pub fn current_dictionary() -> Arc<Dictionary> {
    DictionaryStore::global().snapshot()
}
