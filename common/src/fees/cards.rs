use super::format::{format_amount, format_currency, format_field_label, value_amount, value_text};
use super::pattern::{
    detect_fee_pattern, NORMAL_FEE, REGULAR_COURSE_FEES, RTA_FEES, SUNDAY_FEE,
    SUNDAY_NIGHT_SHIFT_FEES, TRAINING_RATES,
};
use super::render::{fields_except, object_fields, remaining_fields};
use crate::model::display::{
    CourseFeeCard, FeeBlock, FeePattern, LabeledTotal, LabeledValue, NestedCard, RtaCard,
    RtaFeeLine, SimpleCard, UnknownCard,
};
use serde_json::{Map, Value};

/// Labels for the entries of an array `total`, by position. Upstream data
/// lists package totals from the longest package down; nothing in the
/// stored record says so explicitly.
const NESTED_TOTAL_LABELS: [&str; 3] = ["20 hours", "15 hours", "10 hours"];

const SCALAR_TOTAL_LABEL: &str = "Total";

const SIMPLE_FIELDS: [&str; 8] = [
    "category",
    "eligibility",
    "hours",
    "duration",
    NORMAL_FEE,
    SUNDAY_FEE,
    "shift_fee",
    "notes",
];

const NESTED_FIELDS: [&str; 8] = [
    "category",
    "min_age",
    "road_training",
    "internal_training",
    "total_hours",
    REGULAR_COURSE_FEES,
    SUNDAY_NIGHT_SHIFT_FEES,
    "notes",
];

const FEE_BLOCK_FIELDS: [&str; 2] = ["hourly", "total"];

const RTA_FIELDS: [&str; 4] = ["category", TRAINING_RATES, RTA_FEES, "notes"];

/// Label of the `index`-th entry of a nested fee block's `total` array.
pub fn nested_total_label(index: usize) -> String {
    NESTED_TOTAL_LABELS
        .get(index)
        .map_or_else(|| format!("Option {}", index + 1), |label| label.to_string())
}

/// Classifies a course fee record and extracts the card for its shape.
pub fn build_course_fee_card(fee: &Value) -> CourseFeeCard {
    match (detect_fee_pattern(fee), fee.as_object()) {
        (FeePattern::Simple, Some(record)) => CourseFeeCard::Simple(simple_card(record)),
        (FeePattern::Nested, Some(record)) => CourseFeeCard::Nested(nested_card(record)),
        (FeePattern::Rta, Some(record)) => CourseFeeCard::Rta(rta_card(record)),
        _ => CourseFeeCard::Unknown(unknown_card(fee)),
    }
}

pub fn build_course_fee_cards(fees: &[Value]) -> Vec<CourseFeeCard> {
    fees.iter().map(build_course_fee_card).collect()
}

fn present<'a>(record: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    record.get(key).filter(|value| !value.is_null())
}

fn text_field(record: &Map<String, Value>, key: &str) -> Option<String> {
    present(record, key).map(value_text)
}

fn currency_field(record: &Map<String, Value>, key: &str) -> Option<String> {
    present(record, key).map(format_currency)
}

fn simple_card(record: &Map<String, Value>) -> SimpleCard {
    SimpleCard {
        category: text_field(record, "category"),
        eligibility: text_field(record, "eligibility"),
        hours: text_field(record, "hours"),
        duration: text_field(record, "duration"),
        normal_fee: currency_field(record, NORMAL_FEE),
        sunday_fee: currency_field(record, SUNDAY_FEE),
        shift_fee: currency_field(record, "shift_fee"),
        notes: text_field(record, "notes"),
        extra: remaining_fields(record, &SIMPLE_FIELDS),
    }
}

fn nested_card(record: &Map<String, Value>) -> NestedCard {
    NestedCard {
        category: text_field(record, "category"),
        min_age: text_field(record, "min_age"),
        road_training: text_field(record, "road_training"),
        internal_training: text_field(record, "internal_training"),
        total_hours: text_field(record, "total_hours"),
        regular: present(record, REGULAR_COURSE_FEES).map(fee_block),
        sunday_night_shift: present(record, SUNDAY_NIGHT_SHIFT_FEES).map(fee_block),
        notes: text_field(record, "notes"),
        extra: remaining_fields(record, &NESTED_FIELDS),
    }
}

/// Reads `{ hourly?, total }`. A bare number or array where an object was
/// expected is taken as the `total` itself. Any other key of the block is
/// kept in `extra`.
fn fee_block(value: &Value) -> FeeBlock {
    let Some(block) = value.as_object() else {
        return FeeBlock {
            totals: labeled_totals(value),
            ..FeeBlock::default()
        };
    };
    let hourly = present(block, "hourly");

    FeeBlock {
        hourly: hourly.and_then(value_amount),
        hourly_display: hourly.map(format_currency),
        totals: present(block, "total").map(labeled_totals).unwrap_or_default(),
        extra: fields_except(block, &FEE_BLOCK_FIELDS),
    }
}

fn labeled_totals(total: &Value) -> Vec<LabeledTotal> {
    match total {
        Value::Null => Vec::new(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| labeled_total(nested_total_label(index), item))
            .collect(),
        scalar => vec![labeled_total(SCALAR_TOTAL_LABEL.to_string(), scalar)],
    }
}

fn labeled_total(label: String, value: &Value) -> LabeledTotal {
    LabeledTotal {
        label,
        amount: value_amount(value),
        display: format_currency(value),
    }
}

fn rta_card(record: &Map<String, Value>) -> RtaCard {
    let rta_fees = rta_fee_lines(present(record, RTA_FEES));
    let rta_total = rta_fees.iter().fold(0.0, |total, line| total + line.amount);

    RtaCard {
        category: text_field(record, "category"),
        training_rates: training_rates(present(record, TRAINING_RATES)),
        rta_fees,
        rta_total,
        rta_total_display: format_amount(rta_total),
        notes: text_field(record, "notes"),
        extra: remaining_fields(record, &RTA_FIELDS),
    }
}

fn training_rates(rates: Option<&Value>) -> Vec<LabeledValue> {
    let Some(rates) = rates.and_then(Value::as_object) else {
        return Vec::new();
    };
    rates
        .iter()
        .filter(|(_, rate)| !rate.is_null())
        .map(|(name, rate)| LabeledValue {
            label: format_field_label(name),
            value: format_currency(rate),
        })
        .collect()
}

/// Lines of the `rta_fees` list. An entry without a usable amount counts as zero.
fn rta_fee_lines(fees: Option<&Value>) -> Vec<RtaFeeLine> {
    let Some(fees) = fees.and_then(Value::as_array) else {
        return Vec::new();
    };
    fees.iter()
        .filter_map(Value::as_object)
        .map(|entry| {
            let amount_value = present(entry, "amount");
            let amount = amount_value.and_then(value_amount).unwrap_or(0.0);
            RtaFeeLine {
                fee_type: text_field(entry, "type").unwrap_or_default(),
                amount,
                display: amount_value.map_or_else(|| format_amount(amount), format_currency),
            }
        })
        .collect()
}

fn unknown_card(fee: &Value) -> UnknownCard {
    UnknownCard {
        raw: serde_json::to_string_pretty(fee).unwrap_or_else(|_| fee.to_string()),
        fields: fee.as_object().map(object_fields).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::display::FieldValue;
    use serde_json::json;

    #[test]
    fn positional_labels_fall_back_to_options() {
        assert_eq!(nested_total_label(0), "20 hours");
        assert_eq!(nested_total_label(2), "10 hours");
        assert_eq!(nested_total_label(3), "Option 4");
    }

    #[test]
    fn nested_totals_are_labelled_by_position() {
        let fee = json!({
            "category": "Basic",
            "min_age": 18,
            "regular_course_fees": { "hourly": 50, "total": [1000, 800, 600] }
        });
        let CourseFeeCard::Nested(card) = build_course_fee_card(&fee) else {
            panic!("expected a nested card");
        };
        assert_eq!(card.category.as_deref(), Some("Basic"));
        assert_eq!(card.min_age.as_deref(), Some("18"));
        assert!(card.sunday_night_shift.is_none());

        let regular = card.regular.unwrap();
        assert_eq!(regular.hourly, Some(50.0));
        assert_eq!(regular.hourly_display.as_deref(), Some("AED 50.00"));
        let rows: Vec<_> = regular
            .totals
            .iter()
            .map(|t| (t.label.as_str(), t.amount))
            .collect();
        assert_eq!(
            rows,
            [
                ("20 hours", Some(1000.0)),
                ("15 hours", Some(800.0)),
                ("10 hours", Some(600.0)),
            ]
        );
        assert_eq!(regular.totals[0].display, "AED 1,000.00");
        assert!(card.extra.is_empty());
    }

    #[test]
    fn nested_card_extracts_training_fields_and_notes() {
        let fee = json!({
            "category": "Heavy Truck",
            "min_age": 21,
            "road_training": "30 hours",
            "internal_training": "10 hours",
            "total_hours": 40,
            "notes": "Sunday classes on request",
            "instructor_language": "Urdu",
            "regular_course_fees": { "hourly": 95, "total": 3800, "vat": "incl" },
        });
        let CourseFeeCard::Nested(card) = build_course_fee_card(&fee) else {
            panic!("expected a nested card");
        };
        assert_eq!(card.road_training.as_deref(), Some("30 hours"));
        assert_eq!(card.internal_training.as_deref(), Some("10 hours"));
        assert_eq!(card.total_hours.as_deref(), Some("40"));
        assert_eq!(card.notes.as_deref(), Some("Sunday classes on request"));

        let extra: Vec<_> = card.extra.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(extra, ["instructor_language"]);

        let regular = card.regular.unwrap();
        assert_eq!(regular.totals[0].display, "AED 3,800.00");
        assert_eq!(regular.extra.len(), 1);
        assert_eq!(regular.extra[0].label, "Vat");
        assert_eq!(regular.extra[0].value, FieldValue::Text("incl".to_string()));
    }

    #[test]
    fn nested_scalar_and_long_totals() {
        let fee = json!({
            "sunday_night_shift_fees": { "total": 2100 },
            "regular_course_fees": { "total": [1, 2, 3, 4, "AED 5"] },
        });
        let CourseFeeCard::Nested(card) = build_course_fee_card(&fee) else {
            panic!("expected a nested card");
        };
        let sunday = card.sunday_night_shift.unwrap();
        assert_eq!(sunday.totals.len(), 1);
        assert_eq!(sunday.totals[0].label, "Total");
        assert_eq!(sunday.totals[0].display, "AED 2,100.00");
        assert_eq!(sunday.hourly, None);
        assert!(sunday.extra.is_empty());

        let regular = card.regular.unwrap();
        assert_eq!(regular.totals[3].label, "Option 4");
        assert_eq!(regular.totals[4].label, "Option 5");
        assert_eq!(regular.totals[4].display, "AED 5");
        assert_eq!(regular.totals[4].amount, Some(5.0));
    }

    #[test]
    fn rta_total_is_the_sum_of_amounts() {
        let fee = json!({
            "category": "Motorcycle",
            "training_rates": { "per_hour": 60, "weekend_rate": null },
            "rta_fees": [{ "type": "A", "amount": 100 }, { "type": "B", "amount": 250 }],
        });
        let CourseFeeCard::Rta(card) = build_course_fee_card(&fee) else {
            panic!("expected an rta card");
        };
        assert_eq!(card.rta_total, 350.0);
        assert_eq!(card.rta_total_display, "AED 350.00");
        assert_eq!(card.rta_fees[1].fee_type, "B");
        assert_eq!(
            card.training_rates,
            vec![LabeledValue {
                label: "Per Hour".to_string(),
                value: "AED 60.00".to_string(),
            }]
        );
    }

    #[test]
    fn rta_total_of_empty_or_missing_list_is_zero() {
        for fee in [json!({ "rta_fees": [] }), json!({ "training_rates": {} })] {
            let CourseFeeCard::Rta(card) = build_course_fee_card(&fee) else {
                panic!("expected an rta card");
            };
            assert_eq!(card.rta_total, 0.0);
            assert!(card.rta_total.is_sign_positive());
            assert_eq!(card.rta_total_display, "AED 0.00");
        }
    }

    #[test]
    fn empty_rta_total_serializes_as_plain_zero() {
        for fee in [json!({ "rta_fees": [] }), json!({ "training_rates": { "manual": 45 } })] {
            let encoded = serde_json::to_string(&build_course_fee_card(&fee)).unwrap();
            assert!(!encoded.contains("-0.0"), "{encoded}");
            assert!(encoded.contains(r#""rta_total":0.0"#), "{encoded}");
        }
    }

    #[test]
    fn rta_lines_tolerate_bad_amounts() {
        let fee = json!({
            "rta_fees": [
                { "type": "File opening", "amount": "AED 200" },
                { "type": "Eye test" },
                { "type": "Stamp", "amount": "waived" },
                "not an entry",
            ]
        });
        let CourseFeeCard::Rta(card) = build_course_fee_card(&fee) else {
            panic!("expected an rta card");
        };
        assert_eq!(card.rta_fees.len(), 3);
        assert_eq!(card.rta_total, 200.0);
        assert_eq!(card.rta_fees[1].display, "AED 0.00");
        assert_eq!(card.rta_fees[2].display, "waived");
    }

    #[test]
    fn simple_card_keeps_preformatted_fees_and_extras() {
        let fee = json!({
            "eligibility": "18+",
            "hours": 20,
            "normal_fee": "AED 1,200",
            "shift_fee": 300,
            "notes": "Includes theory",
            "transmission": ["manual", "automatic"],
            "category": "Light vehicle",
        });
        let CourseFeeCard::Simple(card) = build_course_fee_card(&fee) else {
            panic!("expected a simple card");
        };
        assert_eq!(card.normal_fee.as_deref(), Some("AED 1,200"));
        assert_eq!(card.shift_fee.as_deref(), Some("AED 300.00"));
        assert_eq!(card.sunday_fee, None);
        assert_eq!(card.hours.as_deref(), Some("20"));
        assert_eq!(card.notes.as_deref(), Some("Includes theory"));
        assert_eq!(card.category.as_deref(), Some("Light vehicle"));
        assert_eq!(card.extra.len(), 1);
        assert_eq!(card.extra[0].label, "Transmission");
        assert_eq!(
            card.extra[0].value,
            FieldValue::Chips(vec!["manual".to_string(), "automatic".to_string()])
        );
    }

    #[test]
    fn unknown_records_are_dumped_not_dropped() {
        let fee = json!({ "package": "Golden", "notes": "call us" });
        let card = build_course_fee_card(&fee);
        assert_eq!(card.pattern(), FeePattern::Unknown);
        let CourseFeeCard::Unknown(card) = card else {
            unreachable!();
        };
        assert!(card.raw.contains("\"package\": \"Golden\""));
        assert_eq!(card.fields.len(), 2);

        let CourseFeeCard::Unknown(card) = build_course_fee_card(&Value::Null) else {
            panic!("expected an unknown card");
        };
        assert_eq!(card.raw, "null");
        assert!(card.fields.is_empty());
    }

    #[test]
    fn cards_keep_input_order() {
        let fees = vec![json!({ "rta_fees": [] }), json!({}), json!({ "normal_fee": "x" })];
        let patterns: Vec<_> = build_course_fee_cards(&fees)
            .iter()
            .map(CourseFeeCard::pattern)
            .collect();
        assert_eq!(
            patterns,
            [FeePattern::Rta, FeePattern::Unknown, FeePattern::Simple]
        );
    }
}
