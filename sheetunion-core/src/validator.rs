//! Readiness check for the generate action
//!
//! The action is available once a source file and a sheet are selected and the
//! output file name looks like `name.ext`. Only the part before the first usable
//! dot is checked for characters that are illegal in file names; the extension
//! may be anything except a line break.

use crate::error::OutputNameError;
use regex::Regex;
use std::sync::OnceLock;

static OUTPUT_NAME_PATTERN: OnceLock<Regex> = OnceLock::new();

const ILLEGAL_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|', '\r', '\n'];

fn output_name_pattern() -> &'static Regex {
    OUTPUT_NAME_PATTERN.get_or_init(|| {
        Regex::new(r#"^[^\\/:*?"<>|\r\n]+\..+?$"#).expect("output name pattern is valid")
    })
}

/// Decide whether the generate action may run.
///
/// Never fails: every combination of inputs yields a boolean.
pub fn is_ready(source_present: bool, sheet_present: bool, output_name: &str) -> bool {
    source_present && sheet_present && is_valid_output_name(output_name)
}

/// Check an output file name after trimming surrounding whitespace
pub fn is_valid_output_name(output_name: &str) -> bool {
    output_name_pattern().is_match(output_name.trim())
}

/// Like [`is_valid_output_name`], but explains the rejection.
///
/// Returns the trimmed name on success.
pub fn validate_output_name(output_name: &str) -> Result<&str, OutputNameError> {
    let trimmed = output_name.trim();
    if output_name_pattern().is_match(trimmed) {
        return Ok(trimmed);
    }
    if trimmed.is_empty() {
        return Err(OutputNameError::Empty);
    }
    match trimmed.chars().find(|c| ILLEGAL_CHARS.contains(c)) {
        Some(ch) => Err(OutputNameError::IllegalCharacter {
            name: trimmed.to_string(),
            ch,
        }),
        None => Err(OutputNameError::MissingExtension(trimmed.to_string())),
    }
}
