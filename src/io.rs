use std::collections::HashSet;
use std::path::{Path, PathBuf};

use globwalk::GlobWalkerBuilder;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnumerateError {
    #[error("NoFilesFound")]
    NoFilesFound { guidance: String },
}

/// Enumerate input text files with a glob pattern (e.g. "./input/**/*.txt").
/// Returns a sorted list of paths.
pub fn enumerate_inputs(glob_pattern: &str) -> Result<Vec<PathBuf>, EnumerateError> {
    let root = if Path::new(glob_pattern).is_absolute() { "/" } else { "." };
    let pattern = glob_pattern.trim_start_matches("./");
    let mut paths: Vec<PathBuf> = GlobWalkerBuilder::from_patterns(root, &[pattern])
        .case_insensitive(false)
        .follow_links(false)
        .build()
        .map_err(|_| EnumerateError::NoFilesFound { guidance: folder_guidance(glob_pattern) })?
        .filter_map(|e| e.ok())
        .map(|e| e.path().to_path_buf())
        .collect();

    paths.sort();
    paths.retain(|p| p.is_file());

    if paths.is_empty() {
        return Err(EnumerateError::NoFilesFound { guidance: folder_guidance(glob_pattern) });
    }

    Ok(paths)
}

fn folder_guidance(glob_pattern: &str) -> String {
    format!(
        r#"No decision texts match {glob_pattern}
Suggested layout:
  ./input/yargitay/...
  ./input/danistay/...
  ./input/bam/...
Example: put extracted UTF-8 text at ./input/yargitay/2009-6-163.txt"#
    )
}

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("WriteFailed: {0}")]
    WriteFailed(String),
}

/// Atomically write `<outdir>/<doc_id>.json`: temp file first, then rename.
pub fn emit_record<T: Serialize>(record: &T, outdir: &Path, doc_id: &str, pretty: bool) -> Result<PathBuf, EmitError> {
    std::fs::create_dir_all(outdir).map_err(|e| EmitError::WriteFailed(e.to_string()))?;
    let path = outdir.join(format!("{}.json", doc_id));
    let tmp = path.with_extension(format!("json.tmp.{}", std::process::id()));

    let bytes = if pretty { serde_json::to_vec_pretty(record) } else { serde_json::to_vec(record) }
        .map_err(|e| EmitError::WriteFailed(e.to_string()))?;
    std::fs::write(&tmp, bytes).map_err(|e| EmitError::WriteFailed(e.to_string()))?;
    std::fs::rename(&tmp, &path).map_err(|e| EmitError::WriteFailed(e.to_string()))?;

    Ok(path)
}

/// Lowercase hex SHA-256 of `bytes`.
pub fn sha256_hex(bytes: &[u8]) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let out = hasher.finalize();
    out.iter().map(|b| format!("{:02x}", b)).collect()
}

fn ascii_fold(c: char) -> Option<char> {
    match c {
        'ç' | 'Ç' => Some('c'),
        'ğ' | 'Ğ' => Some('g'),
        'ı' | 'I' | 'İ' | 'i' | 'î' | 'Î' => Some('i'),
        'ö' | 'Ö' => Some('o'),
        'ş' | 'Ş' => Some('s'),
        'ü' | 'Ü' | 'û' | 'Û' => Some('u'),
        'â' | 'Â' => Some('a'),
        c if c.is_ascii_alphanumeric() => Some(c.to_ascii_lowercase()),
        _ => None,
    }
}

pub fn slugify(base: &str) -> String {
    let mut slug = String::with_capacity(base.len());
    let mut prev_dash = true;
    for ch in base.chars() {
        match ascii_fold(ch) {
            Some(c) => {
                slug.push(c);
                prev_dash = false;
            }
            None if !prev_dash => {
                slug.push('-');
                prev_dash = true;
            }
            None => {}
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() { "doc".to_string() } else { slug.to_string() }
}

/// Slug of the file stem, suffixed `-1`, `-2`, ... until unused.
pub fn doc_id_for(path: &Path, used: &mut HashSet<String>) -> String {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("doc");
    let slug = slugify(stem);
    if used.insert(slug.clone()) {
        return slug;
    }
    let mut i = 1;
    loop {
        let candidate = format!("{}-{}", slug, i);
        if used.insert(candidate.clone()) {
            return candidate;
        }
        i += 1;
    }
}
