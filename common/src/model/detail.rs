use crate::model::other_fee::OtherFee;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The fee section of a detail record.
///
/// `course_fees` entries have no fixed schema: each one is classified
/// structurally by `fees::detect_fee_pattern` before it is rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeesPayload {
    #[serde(default)]
    pub course_fees: Vec<Value>,
    #[serde(default)]
    pub other_fees: Vec<OtherFee>,
}

/// Everything a branch publishes for one license category.
///
/// The document, course and lecture sections are free-form JSON blobs kept
/// exactly as they are stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailRecord {
    pub branch_id: String,
    pub license_category_id: String,
    #[serde(default)]
    pub documents_required: Value,
    #[serde(default)]
    pub course_details: Value,
    #[serde(default)]
    pub lecture_details: Value,
    #[serde(default)]
    pub fees: FeesPayload,
}
