use serde::{Deserialize, Serialize};

/// Kind of media item attached to a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// Opaque media item attached to a message.
///
/// Billing only looks at presence: any attachment turns the whole send
/// into a single MMS unit. Content is never inspected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// What kind of media this is.
    pub kind: MediaKind,
    /// Display name, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Attachment {
    #[must_use]
    pub fn image() -> Self {
        Self {
            kind: MediaKind::Image,
            name: None,
        }
    }

    #[must_use]
    pub fn video() -> Self {
        Self {
            kind: MediaKind::Video,
            name: None,
        }
    }

    #[must_use]
    pub fn named(kind: MediaKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: Some(name.into()),
        }
    }
}
