use serde::{Deserialize, Serialize};

use crate::models::attachment::Attachment;

/// Character encoding a message will be submitted with.
///
/// The caller decides the encoding (typically: UCS-2 whenever the text
/// contains characters outside the GSM default alphabet); the estimator
/// only prices it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// 7-bit GSM default alphabet. Extended characters are sent as an
    /// escape pair and count as two characters for segmentation.
    #[default]
    Gsm7,
    /// 16-bit UCS-2. Covers all characters at a lower per-segment
    /// capacity.
    Ucs2,
}

impl Encoding {
    /// Payload capacity in characters when the message fits one segment.
    #[must_use]
    pub fn single_segment_capacity(self) -> usize {
        match self {
            Encoding::Gsm7 => 160,
            Encoding::Ucs2 => 70,
        }
    }

    /// Per-segment capacity once a message splits and every segment
    /// spends payload on a concatenation header.
    #[must_use]
    pub fn multi_segment_capacity(self) -> usize {
        match self {
            Encoding::Gsm7 => 153,
            Encoding::Ucs2 => 67,
        }
    }
}

/// The message-shaped inputs of an estimate: text, encoding, attachments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageDraft {
    /// Message body. `None` is a media-only send and counts zero
    /// characters.
    pub text: Option<String>,
    /// Encoding the message will be submitted with.
    pub encoding: Encoding,
    /// Attached media. Any attachment bills the send as one MMS unit.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl MessageDraft {
    /// Draft with a text body and no attachments.
    #[must_use]
    pub fn text(text: impl Into<String>, encoding: Encoding) -> Self {
        Self {
            text: Some(text.into()),
            encoding,
            attachments: Vec::new(),
        }
    }

    /// Replace the attachment list.
    #[must_use]
    pub fn with_attachments(mut self, attachments: Vec<Attachment>) -> Self {
        self.attachments = attachments;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacities_per_encoding() {
        assert_eq!(Encoding::Gsm7.single_segment_capacity(), 160);
        assert_eq!(Encoding::Gsm7.multi_segment_capacity(), 153);
        assert_eq!(Encoding::Ucs2.single_segment_capacity(), 70);
        assert_eq!(Encoding::Ucs2.multi_segment_capacity(), 67);
    }

    #[test]
    fn text_draft_has_no_attachments() {
        let draft = MessageDraft::text("hi", Encoding::Gsm7);
        assert_eq!(draft.text.as_deref(), Some("hi"));
        assert!(draft.attachments.is_empty());
    }

    #[test]
    fn with_attachments_replaces_list() {
        let draft = MessageDraft::text("hi", Encoding::Gsm7)
            .with_attachments(vec![Attachment::image()]);
        assert_eq!(draft.attachments.len(), 1);
    }
}
