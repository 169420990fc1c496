use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::LazyLock;

use anyhow::Result;
use bcrypt::{DEFAULT_COST, hash, verify};
use chrono::{SecondsFormat, Utc};
use rand::{Rng, distr::Alphanumeric};
use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern is valid")
});

pub const MIN_PASSWORD_LENGTH: usize = 8;

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// At least eight characters with an uppercase letter, a lowercase letter,
/// a digit and a symbol (underscore counts as a symbol).
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| c == '_' || !c.is_alphanumeric())
}

pub fn hash_password(password: &str) -> Result<String> {
    Ok(hash(password, DEFAULT_COST)?)
}

pub fn verify_password(password: &str, hashed: &str) -> Result<bool> {
    Ok(verify(password, hashed)?)
}

/// Turns an uploaded file name into one that will not collide with earlier
/// uploads: `<stem>_<timestamp>_<random>.<ext>`.
pub fn unique_filename(original: &str) -> String {
    let path = Path::new(original);
    let stem: String = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let stem = if stem.is_empty() { "file".to_string() } else { stem };

    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect();
    let timestamp = Utc::now().format("%Y%m%d%H%M%S");

    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if !ext.is_empty() => format!(
            "{}_{}_{}.{}",
            stem,
            timestamp,
            suffix,
            ext.to_ascii_lowercase()
        ),
        _ => format!("{}_{}_{}", stem, timestamp, suffix),
    }
}

/// Appends a timestamped line to `path`, creating the file when missing.
/// Existing content is never truncated.
pub fn log_message(path: impl AsRef<Path>, message: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(
        file,
        "[{}] {}",
        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        message
    )
}
