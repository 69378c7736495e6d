use super::cards::build_course_fee_cards;
use super::format::format_field_label;
use super::other_fees::build_other_fees_table;
use super::render::{object_fields, render_value};
use crate::model::detail::DetailRecord;
use crate::model::display::{DetailView, FieldEntry};
use serde_json::Value;

/// Renders one free-form detail section.
///
/// Objects give one entry per key, priority ordered. Any other non-null
/// value becomes a single entry named after the section.
pub fn render_blob(section: &str, blob: &Value) -> Vec<FieldEntry> {
    match blob {
        Value::Object(record) => object_fields(record),
        other => render_value(other)
            .map(|value| FieldEntry {
                key: section.to_string(),
                label: format_field_label(section),
                value,
            })
            .into_iter()
            .collect(),
    }
}

pub fn build_detail_view(record: &DetailRecord) -> DetailView {
    DetailView {
        branch_id: record.branch_id.clone(),
        license_category_id: record.license_category_id.clone(),
        documents: render_blob("documents_required", &record.documents_required),
        course: render_blob("course_details", &record.course_details),
        lectures: render_blob("lecture_details", &record.lecture_details),
        course_fees: build_course_fee_cards(&record.fees.course_fees),
        other_fees: build_other_fees_table(&record.fees.other_fees),
    }
}
