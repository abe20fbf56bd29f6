//! Message segmentation engine: encoding classification and SMS segment
//! counting.
//!
//! This never fails: composition UIs call it on every keystroke, so an
//! over-long message is an expected transient state reported through
//! [`SegmentInfo::is_valid`], not an error.

mod alphabet;

use serde::Serialize;

/// Default cap on segments per message; sends above it are blocked.
pub const DEFAULT_MAX_SEGMENTS: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
/// Character repertoire an SMS must be transmitted in.
pub enum Encoding {
    #[serde(rename = "GSM7")]
    Gsm7,
    #[serde(rename = "UCS2")]
    Ucs2,
}

impl Encoding {
    /// Character budget of a message that fits in one segment.
    pub const fn single_segment_limit(self) -> u32 {
        match self {
            Self::Gsm7 => 160,
            Self::Ucs2 => 70,
        }
    }

    /// Per-segment budget once the message is concatenated (the UDH
    /// header eats part of each segment).
    pub const fn concatenated_segment_limit(self) -> u32 {
        match self {
            Self::Gsm7 => 153,
            Self::Ucs2 => 67,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Result of segmenting one message.
pub struct SegmentInfo {
    /// Encoding required to represent the text losslessly.
    pub encoding: Encoding,
    /// Number of physical SMS parts; `0` only for the empty message.
    pub segments: u32,
    /// Effective character budget per segment for this encoding/mode.
    pub per_segment_limit: u32,
    /// Effective character count (extended GSM characters count double).
    pub total_chars: u32,
    /// Whether `segments` is within the allowed maximum.
    pub is_valid: bool,
    /// Populated iff `is_valid` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// True iff every character of `text` is in the GSM 03.38 basic or
/// extended repertoire, i.e. the message can be sent as GSM7.
pub fn is_gsm_compatible(text: &str) -> bool {
    text.chars()
        .all(|c| alphabet::is_basic(c) || alphabet::is_extended(c))
}

/// Segment `text` with the default cap of [`DEFAULT_MAX_SEGMENTS`].
pub fn calculate_segments(text: &str) -> SegmentInfo {
    calculate_segments_with_cap(text, DEFAULT_MAX_SEGMENTS)
}

/// Segment `text`, flagging the result invalid when it needs more than
/// `max_segments` parts.
pub fn calculate_segments_with_cap(text: &str, max_segments: u32) -> SegmentInfo {
    if text.is_empty() {
        return SegmentInfo {
            encoding: Encoding::Gsm7,
            segments: 0,
            per_segment_limit: Encoding::Gsm7.single_segment_limit(),
            total_chars: 0,
            is_valid: true,
            reason: None,
        };
    }

    let encoding = if is_gsm_compatible(text) {
        Encoding::Gsm7
    } else {
        Encoding::Ucs2
    };

    let total_chars: u32 = match encoding {
        Encoding::Gsm7 => text
            .chars()
            .map(|c| if alphabet::is_extended(c) { 2 } else { 1 })
            .sum(),
        // UCS-2 billing counts UTF-16 code units, so astral characters
        // (most emoji) already count as two.
        Encoding::Ucs2 => text.chars().map(|c| c.len_utf16() as u32).sum(),
    };

    let single = encoding.single_segment_limit();
    let concatenated = encoding.concatenated_segment_limit();
    let (segments, per_segment_limit) = if total_chars <= single {
        (1, single)
    } else {
        (total_chars.div_ceil(concatenated), concatenated)
    };

    let is_valid = segments <= max_segments;
    let reason = if is_valid {
        None
    } else {
        Some(format!(
            "message requires {segments} segments (max {max_segments})"
        ))
    };

    SegmentInfo {
        encoding,
        segments,
        per_segment_limit,
        total_chars,
        is_valid,
        reason,
    }
}
