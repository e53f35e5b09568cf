//! Send cost and segmentation statistics.
//!
//! `estimate` is the single entry point the CLI and library callers
//! share. It never fails: missing pricing, zero recipients, or an absent
//! text all degrade to zero-valued fields rather than errors, so the
//! result can always be rendered.

use crate::models::{Encoding, MessageDraft, MessageStats, PricingRecord};
use crate::operations::charset::extended_char_count;

/// Character ceiling past which the advisory is raised.
const TOO_LONG_THRESHOLD: usize = 1600;
/// Advisory attached to texts longer than the ceiling.
const TOO_LONG_ADVISORY: &str = "Max characters count 1600 exceed.";

/// Caller-tunable knobs for an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimateOptions {
    /// Number of recipients the send fans out to.
    pub recipients: u32,
    /// The carrier handles multi-part splitting; segments keep their full
    /// single-segment capacity in the math here.
    pub carrier_segmentation: bool,
}

impl Default for EstimateOptions {
    /// One recipient, in-house segmentation accounting.
    fn default() -> Self {
        Self {
            recipients: 1,
            carrier_segmentation: false,
        }
    }
}

/// Compute billing statistics for one send.
///
/// The character count is measured in UTF-16 code units, the unit UCS-2
/// payloads are billed in; GSM-7 adds one slot per extended character.
/// A text that no longer fits one segment is divided by the reduced
/// multi-segment capacity, unless `carrier_segmentation` leaves the
/// split to the carrier. Any attachment switches billing to a single
/// MMS unit, ignoring the SMS segment count.
#[must_use]
pub fn estimate(
    draft: &MessageDraft,
    pricing: Option<&PricingRecord>,
    opts: &EstimateOptions,
) -> MessageStats {
    let text = draft.text.as_deref().unwrap_or("");

    let ext_count = match draft.encoding {
        Encoding::Gsm7 => extended_char_count(text),
        Encoding::Ucs2 => 0,
    };
    let characters = text.encode_utf16().count() + ext_count;

    let mut capacity = draft.encoding.single_segment_capacity();
    if characters > capacity && !opts.carrier_segmentation {
        capacity = draft.encoding.multi_segment_capacity();
    }

    // 0 characters is 0 segments, not 1.
    let sms_count = characters.div_ceil(capacity);
    let mms_count = usize::from(!draft.attachments.is_empty());

    let calculated_credits = match pricing {
        Some(p) if opts.recipients > 0 => {
            let billed_sms = if mms_count > 0 { 0 } else { sms_count };
            f64::from(opts.recipients)
                * (billed_sms as f64 * p.sms_cost + mms_count as f64 * p.mms_cost)
        }
        _ => 0.0,
    };

    let too_long_warning =
        (characters > TOO_LONG_THRESHOLD).then(|| TOO_LONG_ADVISORY.to_string());

    MessageStats {
        calculated_credits,
        characters,
        sms_count,
        mms_count,
        too_long_warning,
    }
}
