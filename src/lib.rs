//! Annotation of Turkish court decisions: statute references, outcome flags,
//! parties and claims, dictionary concepts, tone, statistics and header
//! metadata, assembled into one serializable record per text.

pub mod analyzer;
pub mod concept;
pub mod config;
pub mod dictionary;
pub mod identity;
pub mod io;
pub mod outcome;
pub mod party;
pub mod stats;
pub mod statute;
pub mod structure;
pub mod text;
pub mod tone;

pub use analyzer::{analyze, analyze_with, AnnotationRecord, Analyzer};
pub use concept::extract_concepts;
pub use config::{validate_config, ConfigError, RunConfig};
pub use dictionary::{
    current_dictionary, load_dictionary, set_dictionary, Dictionary, DictionaryError, DictionaryStore,
    SentimentIndicators, ToneCategory,
};
pub use identity::{extract_identity, extract_offense_names, IdentityRecord};
pub use io::{doc_id_for, emit_record, enumerate_inputs, sha256_hex, EmitError, EnumerateError};
pub use outcome::{detect_outcomes, Evidence, OutcomeFlag, OutcomeReport};
pub use party::{extract_parties, Claim, ClaimType, Party, PartyReport, Representative, RepresentativeRole};
pub use stats::{calculate_statistics, Complexity, TextStatistics};
pub use statute::{parse_statutes, ArticleCitation, StatuteReference};
pub use structure::{parse_structure, StatuteDocument, StructureError};
pub use tone::{score_tone, ToneReport};
