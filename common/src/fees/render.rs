use super::format::{format_field_label, value_text};
use super::pattern::{NESTED_KEYS, RTA_KEYS};
use super::priority::sort_fields_by_priority;
use crate::model::display::{FieldEntry, FieldValue, LabeledValue};
use serde_json::{Map, Value};

/// Keys shown by the card itself. Includes every container key the detector
/// classifies on, so the generic renderer never shows them twice.
const SKIPPED_KEYS: [&str; 6] = [
    "notes",
    "category",
    NESTED_KEYS[0],
    NESTED_KEYS[1],
    RTA_KEYS[0],
    RTA_KEYS[1],
];

/// Renders one field of a fee record generically.
///
/// Returns `None` for `null` values and for keys the dedicated card
/// renderers own.
pub fn render_field(key: &str, value: &Value) -> Option<FieldEntry> {
    if SKIPPED_KEYS.contains(&key) {
        return None;
    }
    Some(FieldEntry {
        key: key.to_string(),
        label: format_field_label(key),
        value: render_value(value)?,
    })
}

/// Renders an arbitrary JSON value. Only `null` renders as nothing.
///
/// Array items and object values that are themselves arrays or objects are
/// shown as compact JSON.
pub fn render_value(value: &Value) -> Option<FieldValue> {
    match value {
        Value::Null => None,
        Value::Array(items) => Some(FieldValue::Chips(
            items
                .iter()
                .filter(|item| !item.is_null())
                .map(value_text)
                .collect(),
        )),
        Value::Object(entries) => Some(FieldValue::Pairs(
            entries
                .iter()
                .filter(|(_, inner)| !inner.is_null())
                .map(|(key, inner)| LabeledValue {
                    label: format_field_label(key),
                    value: value_text(inner),
                })
                .collect(),
        )),
        scalar => Some(FieldValue::Text(value_text(scalar))),
    }
}

/// Renders every key of `record` not listed in `consumed`, highest priority first.
pub(crate) fn remaining_fields(record: &Map<String, Value>, consumed: &[&str]) -> Vec<FieldEntry> {
    let keys = record
        .keys()
        .filter(|key| !consumed.contains(&key.as_str()))
        .cloned()
        .collect();

    sort_fields_by_priority(keys)
        .iter()
        .filter_map(|key| render_field(key, &record[key]))
        .collect()
}

/// Renders every key of `record`, highest priority first, without the
/// card skip-list. Used where no dedicated renderer shows `notes` or `category`.
pub(crate) fn object_fields(record: &Map<String, Value>) -> Vec<FieldEntry> {
    sort_fields_by_priority(record.keys().cloned().collect())
        .into_iter()
        .filter_map(|key| {
            let value = render_value(&record[&key])?;
            Some(FieldEntry {
                label: format_field_label(&key),
                key,
                value,
            })
        })
        .collect()
}

/// `object_fields` over every key of `record` not listed in `consumed`.
pub(crate) fn fields_except(record: &Map<String, Value>, consumed: &[&str]) -> Vec<FieldEntry> {
    let rest: Map<String, Value> = record
        .iter()
        .filter(|(key, _)| !consumed.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    object_fields(&rest)
}
