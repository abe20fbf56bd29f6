//! Phone normalization engine for the Angolan numbering plan (country
//! code 244, 9-digit subscriber numbers starting with 9).
//!
//! Accepts the formats users actually paste — local digits, `244…`,
//! `00244…`, with any spacing or punctuation — and produces canonical
//! E.164 values, or a [`NormalizeError`] code the UI can localize.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::{E164Phone, NormalizeError};

/// Normalize one free-form input to an Angolan E.164 number.
///
/// Non-digit characters are stripped before matching, so
/// `"923 456 789"`, `"(+244) 923-456-789"`, and `"00244923456789"` all
/// converge on `+244923456789`.
pub fn normalize_phone(input: &str) -> Result<E164Phone, NormalizeError> {
    if input.is_empty() {
        return Err(NormalizeError::EmptyInput);
    }

    let digits: String = input.chars().filter(char::is_ascii_digit).collect();

    let e164 = if digits.starts_with("00244") {
        if digits.len() != 14 {
            return Err(NormalizeError::InvalidLengthInternational);
        }
        format!("+{}", &digits[2..])
    } else if digits.starts_with("244") {
        if digits.len() != 12 {
            return Err(NormalizeError::InvalidLengthWithCountry);
        }
        format!("+{digits}")
    } else if digits.len() == 9 && digits.starts_with('9') {
        format!("+244{digits}")
    } else {
        return Err(NormalizeError::InvalidFormat);
    };

    // Safety net behind the branches above: it still catches a 12-digit
    // `244…` number whose subscriber part does not start with 9.
    if e164.len() != 13 || !e164.starts_with("+2449") {
        return Err(NormalizeError::FinalValidationFailed);
    }

    Ok(E164Phone::from_normalized(e164))
}

/// Strip the `+244` prefix for local display. The inverse of
/// [`normalize_phone`] for Angolan numbers; anything else passes through.
pub fn format_for_display(e164: &str) -> &str {
    e164.strip_prefix("+244").unwrap_or(e164)
}

/// Split pasted multi-line or delimited text into candidate numbers.
///
/// Separators are newlines, commas, and semicolons (runs collapse);
/// tokens are trimmed and empties dropped. Order is preserved.
pub fn parse_bulk_input(raw: &str) -> Vec<&str> {
    raw.split(|c: char| matches!(c, '\n' | '\r' | ',' | ';'))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// One input that failed normalization, with its reason.
pub struct InvalidPhone {
    /// The original input string, untouched.
    pub phone: String,
    /// Failure code; serializes as its snake_case name.
    pub error: NormalizeError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
/// Outcome of validating a batch of raw phone inputs.
pub struct BulkReport {
    /// Unique normalized numbers, in first-seen order.
    pub valid: Vec<E164Phone>,
    /// Every input that failed, in input order, with its reason.
    pub invalid: Vec<InvalidPhone>,
    /// Inputs that normalized to an E.164 value already present in
    /// `valid`. Silently absorbed: not re-added, not treated as invalid.
    pub duplicates: usize,
}

/// Run every input through [`normalize_phone`] and partition the results.
pub fn validate_and_normalize_phones<I, S>(inputs: I) -> BulkReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut report = BulkReport::default();

    for raw in inputs {
        let raw = raw.as_ref();
        match normalize_phone(raw) {
            Ok(phone) => {
                if seen.insert(phone.clone()) {
                    report.valid.push(phone);
                } else {
                    report.duplicates += 1;
                }
            }
            Err(error) => report.invalid.push(InvalidPhone {
                phone: raw.to_owned(),
                error,
            }),
        }
    }

    report
}
