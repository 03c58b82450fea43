//! Text to `f64` conversion and the end-to-end check used by both adapters.

use std::borrow::Cow;

use crate::classify::{Classification, classify};
use crate::error::{ClassifyError, Result};

/// Parse `raw` as an IEEE double.
///
/// Surrounding whitespace is ignored. Anything `f64::from_str` accepts is
/// valid, including signs, exponents, `inf` and `nan`. A single `_` may
/// separate two digits (`1_000`, `1_0.5e1_0`). Empty input is an
/// [`ClassifyError::InvalidNumber`], not a missing one.
pub fn parse_number(raw: &str) -> Result<f64> {
    strip_digit_separators(raw.trim())
        .and_then(|text| text.parse::<f64>().ok())
        .ok_or_else(|| ClassifyError::invalid_number(raw))
}

/// Remove `_` digit separators. `None` when an underscore is not flanked by
/// ASCII digits on both sides.
fn strip_digit_separators(text: &str) -> Option<Cow<'_, str>> {
    if !text.contains('_') {
        return Some(Cow::Borrowed(text));
    }
    let bytes = text.as_bytes();
    let mut stripped = String::with_capacity(text.len());
    for (i, ch) in text.char_indices() {
        if ch != '_' {
            stripped.push(ch);
            continue;
        }
        let before = i.checked_sub(1).and_then(|j| bytes.get(j));
        let after = bytes.get(i + 1);
        match (before, after) {
            (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => {}
            _ => return None,
        }
    }
    Some(Cow::Owned(stripped))
}

/// Classify an optional raw input.
///
/// `None` means the caller received no value at all.
pub fn check_input(raw: Option<&str>) -> Result<Classification> {
    let raw = raw.ok_or(ClassifyError::MissingInput)?;
    let value = parse_number(raw)?;
    let classification = classify(value);
    tracing::trace!(input = raw, sign = %classification.sign(), "classified input");
    Ok(classification)
}
