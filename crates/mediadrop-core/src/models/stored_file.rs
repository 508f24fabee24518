use super::Category;
use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

const MAX_BASE_BYTES: usize = 100;
const MAX_EXTENSION_BYTES: usize = 32;
const FALLBACK_BASE: &str = "file";
/// Exclusive upper bound of the random disambiguator (53 bits).
const RANDOM_SUFFIX_BOUND: u64 = 1 << 53;

/// Generated name of a stored file: `<base>-<millis>-<random><ext>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFilename {
    pub base: String,
    pub timestamp_ms: i64,
    pub random: u64,
    pub extension: String,
}

impl StoredFilename {
    /// Build a unique stored name from the client-supplied filename.
    pub fn generate(original: &str) -> Self {
        let random = rand::rng().random_range(0..RANDOM_SUFFIX_BOUND);
        Self::with_token(original, Utc::now().timestamp_millis(), random)
    }

    /// Build a stored name with an explicit uniqueness token.
    pub fn with_token(original: &str, timestamp_ms: i64, random: u64) -> Self {
        let (base, extension) = split_extension(final_component(original));
        StoredFilename {
            base: sanitize_base(base),
            timestamp_ms,
            random,
            extension: sanitize_extension(extension),
        }
    }

    pub fn as_string(&self) -> String {
        format!(
            "{}-{}-{}{}",
            self.base, self.timestamp_ms, self.random, self.extension
        )
    }
}

impl std::fmt::Display for StoredFilename {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_string())
    }
}

/// Strip any directory components, treating both `/` and `\` as separators.
fn final_component(name: &str) -> &str {
    name.rsplit(['/', '\\']).next().unwrap_or(name)
}

/// Split a basename into `(base, ext)` where `ext` keeps its leading dot.
/// A dot in first position marks a hidden file, not an extension.
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) if idx > 0 => name.split_at(idx),
        _ => (name, ""),
    }
}

fn is_safe_char(c: char) -> bool {
    c.is_alphanumeric() || c == '.' || c == '-' || c == '_'
}

fn truncate_to_bytes(value: &mut String, max: usize) {
    if value.len() > max {
        let mut cut = max;
        while !value.is_char_boundary(cut) {
            cut -= 1;
        }
        value.truncate(cut);
    }
}

fn sanitize_base(base: &str) -> String {
    let mut sanitized = String::with_capacity(base.len());
    let mut previous_dot = false;
    for c in base.chars() {
        let c = if is_safe_char(c) { c } else { '_' };
        // No `..` may survive into a stored name.
        if c == '.' && previous_dot {
            sanitized.push('_');
            previous_dot = false;
            continue;
        }
        previous_dot = c == '.';
        sanitized.push(c);
    }
    truncate_to_bytes(&mut sanitized, MAX_BASE_BYTES);

    if sanitized.is_empty() {
        FALLBACK_BASE.to_string()
    } else {
        sanitized
    }
}

fn sanitize_extension(extension: &str) -> String {
    let mut sanitized: String = extension
        .char_indices()
        .map(|(i, c)| if i == 0 || (is_safe_char(c) && c != '.') { c } else { '_' })
        .collect();
    truncate_to_bytes(&mut sanitized, MAX_EXTENSION_BYTES);
    sanitized
}

/// Body of a successful upload response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub filename: String,
    pub url: String,
}

impl UploadResponse {
    pub fn new(category: Category, filename: String) -> Self {
        UploadResponse {
            message: category.upload_message().to_string(),
            url: category.file_url(&filename),
            filename,
        }
    }
}
