use anyhow::{anyhow, Result};
use isolang::Language;

/// Language utilities for view-language handling
///
/// A block is displayed either in its source language or in a translation
/// identified by an ISO 639 code. The sentinel `"source"` selects the
/// untranslated text; everything else is matched exactly after lowercasing,
/// with no further normalization of the code.
/// The view sentinel meaning "show the untranslated source text"
pub const SOURCE_VIEW: &str = "source";

/// Whether a view code selects the source text
pub fn is_source_view(code: &str) -> bool {
    code.trim().eq_ignore_ascii_case(SOURCE_VIEW)
}

/// Lowercase a view code for use as a cache key.
///
/// Cache keys are exact-match on the lowercased code; `"FR"` and `"fr"` are
/// the same key, `"fr"` and `"fra"` are not.
pub fn normalize_view_code(code: &str) -> String {
    code.trim().to_lowercase()
}

/// Validate that a code is a real ISO 639-1 (2-letter) or ISO 639-3
/// (3-letter) language code
pub fn validate_language_code(code: &str) -> Result<()> {
    let normalized = normalize_view_code(code);

    if normalized.len() == 2 && Language::from_639_1(&normalized).is_some() {
        return Ok(());
    }
    if normalized.len() == 3 && Language::from_639_3(&normalized).is_some() {
        return Ok(());
    }

    Err(anyhow!("Invalid language code: {}", code))
}

/// Get the English language name for a code, for display in a language picker
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized = normalize_view_code(code);

    let lang = if normalized.len() == 2 {
        Language::from_639_1(&normalized)
    } else {
        Language::from_639_3(&normalized)
    };

    lang.map(|l| l.to_name().to_string())
        .ok_or_else(|| anyhow!("Failed to get language from code: {}", code))
}
