use crate::model::display::FeePattern;
use serde_json::Value;

pub(crate) const RTA_FEES: &str = "rta_fees";
pub(crate) const TRAINING_RATES: &str = "training_rates";
pub(crate) const REGULAR_COURSE_FEES: &str = "regular_course_fees";
pub(crate) const SUNDAY_NIGHT_SHIFT_FEES: &str = "sunday_night_shift_fees";
pub(crate) const NORMAL_FEE: &str = "normal_fee";
pub(crate) const SUNDAY_FEE: &str = "sunday_fee";

/// Keys owned by a dedicated renderer, checked in classification order.
pub(crate) const RTA_KEYS: [&str; 2] = [RTA_FEES, TRAINING_RATES];
pub(crate) const NESTED_KEYS: [&str; 2] = [REGULAR_COURSE_FEES, SUNDAY_NIGHT_SHIFT_FEES];
pub(crate) const SIMPLE_KEYS: [&str; 2] = [NORMAL_FEE, SUNDAY_FEE];

/// Classifies a course fee record by key presence.
///
/// The first matching rule wins: RTA keys, then nested fee containers, then
/// simple fee keys. A key counts as present even when its value is `null`.
/// Anything that is not a JSON object, and any object matching no rule, is
/// `Unknown`.
pub fn detect_fee_pattern(fee: &Value) -> FeePattern {
    let Some(record) = fee.as_object() else {
        return FeePattern::Unknown;
    };
    let has_any = |keys: &[&str]| keys.iter().any(|key| record.contains_key(*key));

    if has_any(&RTA_KEYS) {
        FeePattern::Rta
    } else if has_any(&NESTED_KEYS) {
        FeePattern::Nested
    } else if has_any(&SIMPLE_KEYS) {
        FeePattern::Simple
    } else {
        FeePattern::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rta_keys_win_over_simple_keys() {
        let fee = json!({ "rta_fees": [], "normal_fee": "x" });
        assert_eq!(detect_fee_pattern(&fee), FeePattern::Rta);
    }

    #[test]
    fn training_rates_alone_is_rta() {
        let fee = json!({ "training_rates": { "manual": 45 } });
        assert_eq!(detect_fee_pattern(&fee), FeePattern::Rta);
    }

    #[test]
    fn nested_keys_win_over_simple_keys() {
        let fee = json!({ "sunday_night_shift_fees": { "total": 900 }, "sunday_fee": "AED 1" });
        assert_eq!(detect_fee_pattern(&fee), FeePattern::Nested);
    }

    #[test]
    fn simple_keys() {
        assert_eq!(
            detect_fee_pattern(&json!({ "normal_fee": "AED 1,200" })),
            FeePattern::Simple
        );
        assert_eq!(
            detect_fee_pattern(&json!({ "sunday_fee": null })),
            FeePattern::Simple
        );
    }

    #[test]
    fn empty_null_and_non_objects_are_unknown() {
        for fee in [
            json!({}),
            Value::Null,
            json!("normal_fee"),
            json!(12),
            json!([{ "rta_fees": [] }]),
            json!({ "shift_fee": "AED 300" }),
        ] {
            assert_eq!(detect_fee_pattern(&fee), FeePattern::Unknown, "{fee}");
        }
    }

    #[test]
    fn repeated_calls_agree() {
        let fee = json!({ "category": "Basic", "regular_course_fees": { "total": 1 } });
        let first = detect_fee_pattern(&fee);
        for _ in 0..10 {
            assert_eq!(detect_fee_pattern(&fee), first);
        }
    }
}
