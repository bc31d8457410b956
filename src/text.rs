//! Line handling and Turkish-aware case folding shared by every extractor.

/// Split text into lines on `\n`, dropping a trailing `\r` from each line.
/// Line numbers reported by the extractors are the 1-based index into this.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l)).collect()
}

/// Lowercase with Turkish dotted/dotless i rules, one char in, one char out.
pub fn fold_case(s: &str) -> String {
    s.chars().map(fold_char).collect()
}

fn fold_char(c: char) -> char {
    match c {
        'I' => 'ı',
        'İ' => 'i',
        c if c.is_ascii() => c.to_ascii_lowercase(),
        c => {
            let mut lower = c.to_lowercase();
            match (lower.next(), lower.next()) {
                (Some(l), None) => l,
                // multi-char expansions would shift offsets; keep the char as is
                _ => c,
            }
        }
    }
}

/// Letters of the extended Latin alphabet used in Turkish legal text.
pub fn is_turkish_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
        || matches!(
            c,
            'ç' | 'ğ' | 'ı' | 'ö' | 'ş' | 'ü' | 'â' | 'î' | 'û' | 'Ç' | 'Ğ' | 'İ' | 'Ö' | 'Ş' | 'Ü' | 'Â' | 'Î' | 'Û'
        )
}

pub fn is_turkish_upper(c: char) -> bool {
    c.is_ascii_uppercase() || matches!(c, 'Ç' | 'Ğ' | 'İ' | 'Ö' | 'Ş' | 'Ü' | 'Â' | 'Î' | 'Û')
}

pub fn is_turkish_lower(c: char) -> bool {
    c.is_ascii_lowercase() || matches!(c, 'ç' | 'ğ' | 'ı' | 'ö' | 'ş' | 'ü' | 'â' | 'î' | 'û')
}

/// First `max_chars` chars of `s`, with "..." appended when `s` is longer.
pub fn ellipsize(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &s[..cut]),
        None => s.to_string(),
    }
}

/// Case-insensitive pattern for a Turkish word; `(?i)` alone does not pair
/// dotted and dotless i with their capitals.
pub fn turkish_ci(word: &str) -> String {
    let mut out = String::from("(?i:");
    for c in word.chars() {
        match c {
            'İ' | 'i' => out.push_str("[İi]"),
            'I' | 'ı' => out.push_str("[Iı]"),
            c if c.is_whitespace() => out.push_str(r"\s+"),
            c => out.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }
    out.push(')');
    out
}
