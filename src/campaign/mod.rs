//! Campaign layer: per-contact template rendering and credit estimation.
//!
//! The UI shows "this campaign will cost N credits across M recipients,
//! with K skipped for length" before the user commits to a send; this
//! module computes those numbers without touching the network.

mod template;

pub use template::merge_template;

use serde::Serialize;

use crate::domain::Contact;
use crate::segment::{Encoding, calculate_segments_with_cap};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
/// Credited segment totals split by encoding.
pub struct EncodingTotals {
    pub gsm7: u64,
    pub ucs2: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Cost preview for one campaign over a contact list.
pub struct CampaignEstimate {
    /// Sum of segment counts over valid targets; one segment = one credit.
    pub total_credits: u64,
    /// Contacts whose rendered message fits within the segment cap.
    pub valid_targets: usize,
    /// Contacts whose rendered message exceeds the cap; they are skipped
    /// at send time and contribute nothing to `total_credits`.
    pub invalid_targets: usize,
    /// Breakdown of the credited segments by encoding.
    pub segments_by_encoding: EncodingTotals,
}

/// Render `template` for every contact, segment each message, and
/// accumulate the campaign-wide cost preview.
///
/// `valid_targets + invalid_targets` always equals `contacts.len()`, and
/// `total_credits` equals `segments_by_encoding.gsm7 + ….ucs2`.
pub fn estimate_campaign(
    template: &str,
    contacts: &[Contact],
    max_segments: u32,
) -> CampaignEstimate {
    let mut estimate = CampaignEstimate::default();

    for contact in contacts {
        let message = merge_template(template, contact);
        let info = calculate_segments_with_cap(&message, max_segments);
        if info.is_valid {
            estimate.valid_targets += 1;
            estimate.total_credits += u64::from(info.segments);
            match info.encoding {
                Encoding::Gsm7 => estimate.segments_by_encoding.gsm7 += u64::from(info.segments),
                Encoding::Ucs2 => estimate.segments_by_encoding.ucs2 += u64::from(info.segments),
            }
        } else {
            estimate.invalid_targets += 1;
        }
    }

    estimate
}
