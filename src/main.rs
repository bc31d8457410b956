use std::collections::HashSet;
use std::path::{Path, PathBuf};

use ictihat_annotate::config::{RunConfig, DEFAULT_CONFIG_FILE, DEFAULT_INPUT_GLOB, DEFAULT_OUTPUT_DIR};
use ictihat_annotate::{
    analyze, doc_id_for, emit_record, enumerate_inputs, load_dictionary, parse_structure, set_dictionary,
    validate_config, Dictionary, EnumerateError,
};

fn flag_value(args: &[String], name: &str) -> Option<String> {
    let pos = args.iter().position(|a| a == name)?;
    args.get(pos + 1).filter(|v| !v.starts_with("--")).cloned()
}

fn fail(value: serde_json::Value, code: i32) -> ! {
    eprintln!("{}", value);
    std::process::exit(code);
}

fn main() {
    // Simple CLI flags parsing
    let args: Vec<String> = std::env::args().collect();
    let pretty = args.iter().any(|a| a == "--pretty");
    let structure_mode = args.iter().any(|a| a == "--structure");
    let config_flag = flag_value(&args, "--config");

    // 1) Read and validate the run file. Without --config a missing default
    // file means built-in defaults.
    let config_path = PathBuf::from(config_flag.clone().unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string()));
    let config: Option<RunConfig> = if config_flag.is_none() && !config_path.exists() {
        eprintln!(
            "{}",
            serde_json::json!({
                "tool":"load_config",
                "file": config_path,
                "status":"default"
            })
        );
        None
    } else {
        match validate_config(&config_path) {
            Ok(c) => Some(c),
            Err(e) => fail(
                serde_json::json!({
                    "tool":"load_config",
                    "file": config_path,
                    "error": e.to_string(),
                    "error_code": 3
                }),
                3,
            ),
        }
    };

    let input_glob = flag_value(&args, "--input")
        .or_else(|| config.as_ref().map(|c| c.input_glob()))
        .unwrap_or_else(|| DEFAULT_INPUT_GLOB.to_string());
    let output_dir = flag_value(&args, "--out")
        .or_else(|| config.as_ref().map(|c| c.output_dir()))
        .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string());
    let dictionary_path = flag_value(&args, "--dictionary")
        .map(PathBuf::from)
        .or_else(|| config.as_ref().and_then(|c| c.dictionary_path()));

    if let Some(c) = &config {
        eprintln!(
            "{}",
            serde_json::json!({
                "tool":"load_config",
                "file": config_path,
                "id": c.id,
                "status":"ok",
                "input_glob": input_glob,
                "output_dir": output_dir
            })
        );
    }

    // 2) Dictionary into the process-wide store
    match &dictionary_path {
        Some(path) => match load_dictionary(path) {
            Ok(dict) => {
                eprintln!(
                    "{}",
                    serde_json::json!({
                        "tool":"load_dictionary",
                        "file": path,
                        "concepts": dict.concepts.len(),
                        "indicators": dict.sentiment_indicators.is_some()
                    })
                );
                set_dictionary(dict);
            }
            Err(e) => fail(
                serde_json::json!({
                    "tool":"load_dictionary",
                    "file": path,
                    "error": e.to_string(),
                    "error_code": 4
                }),
                4,
            ),
        },
        None => {
            eprintln!("{}", serde_json::json!({"tool":"load_dictionary", "status":"builtin"}));
            set_dictionary(Dictionary::builtin());
        }
    }

    // 3) Enumerate inputs
    let files = match enumerate_inputs(&input_glob) {
        Ok(files) => files,
        Err(EnumerateError::NoFilesFound { guidance }) => {
            eprintln!(
                "{}",
                serde_json::json!({
                    "tool":"enumerate_inputs",
                    "pattern": input_glob,
                    "error":"NoFilesFound",
                    "error_code":1
                })
            );
            eprintln!("{}", guidance);
            std::process::exit(1);
        }
    };
    eprintln!("{}", serde_json::json!({"tool":"enumerate_inputs", "count": files.len()}));

    // 4) Analyze and emit, one record per file
    let mut used_doc_ids: HashSet<String> = HashSet::new();
    let outdir = Path::new(&output_dir);
    for file in files {
        let raw = match std::fs::read_to_string(&file) {
            Ok(raw) => raw,
            Err(e) => fail(
                serde_json::json!({
                    "tool":"analyze",
                    "file": file,
                    "error": e.to_string(),
                    "error_code": 1
                }),
                1,
            ),
        };
        let text = raw.replace("\r\n", "\n");
        let doc_id = doc_id_for(&file, &mut used_doc_ids);

        let record = if structure_mode {
            match parse_structure(&text) {
                Ok(doc) => {
                    eprintln!(
                        "{}",
                        serde_json::json!({
                            "tool":"analyze",
                            "file": file,
                            "mode":"structure",
                            "title": doc.title,
                            "books": doc.books.len(),
                            "parts": doc.parts.len()
                        })
                    );
                    match serde_json::to_value(&doc) {
                        Ok(statute) => serde_json::json!({"docId": doc_id, "source": file, "statute": statute}),
                        Err(e) => fail(
                            serde_json::json!({
                                "tool":"emit_record",
                                "file": file,
                                "error": e.to_string(),
                                "error_code": 6
                            }),
                            6,
                        ),
                    }
                }
                Err(_) => {
                    eprintln!("{}", serde_json::json!({"tool":"analyze", "file": file, "status":"empty"}));
                    continue;
                }
            }
        } else {
            let Some(record) = analyze(&text) else {
                eprintln!("{}", serde_json::json!({"tool":"analyze", "file": file, "status":"empty"}));
                continue;
            };
            let document = match record.to_document(&doc_id, &file) {
                Ok(document) => document,
                Err(e) => fail(
                    serde_json::json!({
                        "tool":"emit_record",
                        "file": file,
                        "error": e.to_string(),
                        "error_code": 6
                    }),
                    6,
                ),
            };
            eprintln!(
                "{}",
                serde_json::json!({
                    "tool":"analyze",
                    "file": file,
                    "statutes": record.statutes.len(),
                    "outcomes": record.outcomes.active(),
                    "concepts": record.concepts.len(),
                    "tone": record.tone.tone,
                    "fingerprint": document["fingerprint"]
                })
            );
            document
        };

        match emit_record(&record, outdir, &doc_id, pretty) {
            Ok(path) => {
                eprintln!(
                    "{}",
                    serde_json::json!({
                        "tool":"emit_record",
                        "file": file,
                        "json_path": path
                    })
                );
            }
            Err(e) => fail(
                serde_json::json!({
                    "tool":"emit_record",
                    "file": file,
                    "error": e.to_string(),
                    "error_code": 6
                }),
                6,
            ),
        }
    }
}
