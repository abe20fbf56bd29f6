use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidPhoneNumber { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error, Serialize)]
#[serde(rename_all = "snake_case")]
/// Why an input could not be normalized to an Angolan E.164 number.
///
/// This is a closed enumeration: calling UIs branch on the stable
/// snake_case code (also the serialized form) to pick localized messages.
pub enum NormalizeError {
    /// The input string was empty.
    #[error("phone number must not be empty")]
    EmptyInput,

    /// Started with the `244` country code but was not 12 digits long.
    #[error("numbers with the 244 country code must be exactly 12 digits")]
    InvalidLengthWithCountry,

    /// Started with the `00244` dialing prefix but was not 14 digits long.
    #[error("numbers with the 00244 dialing prefix must be exactly 14 digits")]
    InvalidLengthInternational,

    /// Did not match any recognized Angolan number shape.
    #[error("unrecognized phone number format")]
    InvalidFormat,

    /// The normalized value failed the final `+2449…`/13-char check.
    #[error("normalized number failed the final E.164 check")]
    FinalValidationFailed,
}

impl NormalizeError {
    /// Stable machine-readable code for this failure.
    pub fn code(self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::InvalidLengthWithCountry => "invalid_length_with_country",
            Self::InvalidLengthInternational => "invalid_length_international",
            Self::InvalidFormat => "invalid_format",
            Self::FinalValidationFailed => "final_validation_failed",
        }
    }
}
