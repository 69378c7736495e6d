use std::cmp::Reverse;

/// Priority given to keys missing from the table.
const DEFAULT_PRIORITY: u8 = 50;

const FIELD_PRIORITIES: [(&str, u8); 12] = [
    ("category", 100),
    ("eligibility", 95),
    ("min_age", 92),
    ("hours", 90),
    ("duration", 85),
    ("road_training", 75),
    ("internal_training", 75),
    ("total_hours", 70),
    ("normal_fee", 60),
    ("sunday_fee", 58),
    ("shift_fee", 55),
    ("notes", 10),
];

pub fn field_priority(field: &str) -> u8 {
    FIELD_PRIORITIES
        .iter()
        .find(|(key, _)| *key == field)
        .map_or(DEFAULT_PRIORITY, |(_, priority)| *priority)
}

/// Orders field names by descending priority. Fields with equal priority
/// keep their input order.
pub fn sort_fields_by_priority(mut fields: Vec<String>) -> Vec<String> {
    fields.sort_by_key(|field| Reverse(field_priority(field)));
    fields
}
