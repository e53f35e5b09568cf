use serde::Serialize;

/// Billing statistics for a single send.
///
/// Constructed fresh per estimate; carries no identity beyond the call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageStats {
    /// Total credit cost across all recipients.
    pub calculated_credits: f64,
    /// Effective character count, including the extended-set surcharge.
    pub characters: usize,
    /// Number of SMS segments the text occupies.
    pub sms_count: usize,
    /// 1 when any attachment is present, else 0.
    pub mms_count: usize,
    /// Advisory set when the text exceeds the 1600-character ceiling.
    /// Informational only; it never changes cost or segment math.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub too_long_warning: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_is_omitted_from_json_when_absent() {
        let stats = MessageStats {
            calculated_credits: 1.0,
            characters: 5,
            sms_count: 1,
            mms_count: 0,
            too_long_warning: None,
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(!json.contains("too_long_warning"));
        assert!(json.contains("\"characters\":5"));
    }
}
