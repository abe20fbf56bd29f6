//! Core engines for an SMS marketing platform targeting the Angolan
//! market: message segmentation (GSM7/UCS2), per-contact template
//! rendering with campaign credit estimation, and phone number
//! normalization to E.164.
//!
//! Everything here is a pure function over input strings — no I/O, no
//! shared state — so the engines are safe to call from any number of
//! threads and cheap enough to run on every keystroke. Gateway HTTP
//! calls and persistence live in the surrounding application, which
//! consumes the structured results these functions return.
//!
//! ```rust
//! use smsao::{Encoding, calculate_segments, normalize_phone};
//!
//! let info = calculate_segments("Olá! Promoção válida até sexta.");
//! assert_eq!(info.encoding, Encoding::Ucs2);
//! assert_eq!(info.segments, 1);
//!
//! let phone = normalize_phone("923 456 789")?;
//! assert_eq!(phone.as_str(), "+244923456789");
//! assert_eq!(phone.local(), "923456789");
//! # Ok::<(), smsao::NormalizeError>(())
//! ```
#![forbid(unsafe_code)]

pub mod campaign;
pub mod domain;
pub mod phone;
pub mod segment;

pub use campaign::{CampaignEstimate, EncodingTotals, estimate_campaign, merge_template};
pub use domain::{Contact, E164Phone, NormalizeError, PhoneNumber, ValidationError};
pub use phone::{
    BulkReport, InvalidPhone, format_for_display, normalize_phone, parse_bulk_input,
    validate_and_normalize_phones,
};
pub use segment::{
    DEFAULT_MAX_SEGMENTS, Encoding, SegmentInfo, calculate_segments, calculate_segments_with_cap,
    is_gsm_compatible,
};

#[cfg(test)]
mod tests {
    use super::*;

    // The composition pipeline as the UI drives it: parse pasted
    // recipients, normalize, render per contact, and price the send.
    #[test]
    fn end_to_end_campaign_preview() {
        let report =
            validate_and_normalize_phones(parse_bulk_input("923456789\n912345678;bad,923456789"));
        assert_eq!(report.valid.len(), 2);
        assert_eq!(report.invalid.len(), 1);
        assert_eq!(report.duplicates, 1);

        let contacts: Vec<Contact> = report
            .valid
            .iter()
            .map(|phone| Contact::named("Cliente").with_field("phone", phone.as_str()))
            .collect();

        let estimate = estimate_campaign(
            "Olá {{name}}, o seu número {{phone}} foi registado.",
            &contacts,
            DEFAULT_MAX_SEGMENTS,
        );
        assert_eq!(estimate.valid_targets, 2);
        assert_eq!(estimate.invalid_targets, 0);
        assert_eq!(estimate.total_credits, 2);
        // "Olá" carries a non-GSM character, so both messages bill as UCS-2.
        assert_eq!(estimate.segments_by_encoding.ucs2, 2);
    }
}
