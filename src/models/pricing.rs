use serde::{Deserialize, Serialize};

/// Per-unit message costs for a sender identity.
///
/// Costs are expressed in credits: one unit is a single SMS segment or a
/// single MMS. Records come from the config sender table or inline CLI
/// flags and are immutable for the duration of a call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingRecord {
    /// Credits charged per SMS segment.
    pub sms_cost: f64,
    /// Credits charged per MMS unit.
    pub mms_cost: f64,
}

impl PricingRecord {
    #[must_use]
    pub fn new(sms_cost: f64, mms_cost: f64) -> Self {
        Self { sms_cost, mms_cost }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pricing_record_new_sets_costs() {
        let p = PricingRecord::new(1.5, 4.0);
        assert_eq!(p.sms_cost, 1.5);
        assert_eq!(p.mms_cost, 4.0);
    }

    #[test]
    fn pricing_record_toml_round_trip() {
        let p = PricingRecord::new(0.8, 2.5);
        let text = toml::to_string(&p).unwrap();
        let back: PricingRecord = toml::from_str(&text).unwrap();
        assert_eq!(back, p);
    }
}
