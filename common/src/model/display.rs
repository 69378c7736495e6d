//! Display-ready structures produced by the `fees` module.
//!
//! These are what the backend returns from `/api/fees/render` and from the
//! detail view endpoint, and what the frontend turns into HTML. Amounts are
//! kept next to their formatted text so consumers never re-parse strings.

use serde::{Deserialize, Serialize};

/// The structural shape a course fee record was classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeePattern {
    Simple,
    Nested,
    Rta,
    Unknown,
}

impl FeePattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeePattern::Simple => "simple",
            FeePattern::Nested => "nested",
            FeePattern::Rta => "rta",
            FeePattern::Unknown => "unknown",
        }
    }
}

/// A label and its already formatted value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledValue {
    pub label: String,
    pub value: String,
}

/// How a single dynamic field is shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum FieldValue {
    /// A string, number or other scalar rendered inline.
    Text(String),
    /// An array rendered as a row of short chips.
    Chips(Vec<String>),
    /// An object rendered as a label/value list.
    Pairs(Vec<LabeledValue>),
}

/// A rendered field: the raw key, its human label and its value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldEntry {
    pub key: String,
    pub label: String,
    pub value: FieldValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimpleCard {
    pub category: Option<String>,
    pub eligibility: Option<String>,
    pub hours: Option<String>,
    pub duration: Option<String>,
    pub normal_fee: Option<String>,
    pub sunday_fee: Option<String>,
    pub shift_fee: Option<String>,
    pub notes: Option<String>,
    pub extra: Vec<FieldEntry>,
}

/// One total of a nested fee block, e.g. `"20 hours" -> AED 1,000.00`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledTotal {
    pub label: String,
    /// `None` when the stored total carries no numeric value at all.
    pub amount: Option<f64>,
    pub display: String,
}

/// The contents of `regular_course_fees` or `sunday_night_shift_fees`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeBlock {
    pub hourly: Option<f64>,
    pub hourly_display: Option<String>,
    pub totals: Vec<LabeledTotal>,
    /// Keys of the block other than `hourly` and `total`.
    #[serde(default)]
    pub extra: Vec<FieldEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NestedCard {
    pub category: Option<String>,
    pub min_age: Option<String>,
    pub road_training: Option<String>,
    pub internal_training: Option<String>,
    pub total_hours: Option<String>,
    pub regular: Option<FeeBlock>,
    pub sunday_night_shift: Option<FeeBlock>,
    pub notes: Option<String>,
    pub extra: Vec<FieldEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RtaFeeLine {
    pub fee_type: String,
    pub amount: f64,
    pub display: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RtaCard {
    pub category: Option<String>,
    pub training_rates: Vec<LabeledValue>,
    pub rta_fees: Vec<RtaFeeLine>,
    pub rta_total: f64,
    pub rta_total_display: String,
    pub notes: Option<String>,
    pub extra: Vec<FieldEntry>,
}

/// Fallback for records matching no known shape: a raw dump plus whatever
/// the generic renderer can show.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnknownCard {
    pub raw: String,
    pub fields: Vec<FieldEntry>,
}

/// A rendered course fee record, tagged with the pattern it was classified as.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "pattern", rename_all = "lowercase")]
pub enum CourseFeeCard {
    Simple(SimpleCard),
    Nested(NestedCard),
    Rta(RtaCard),
    Unknown(UnknownCard),
}

impl CourseFeeCard {
    pub fn pattern(&self) -> FeePattern {
        match self {
            CourseFeeCard::Simple(_) => FeePattern::Simple,
            CourseFeeCard::Nested(_) => FeePattern::Nested,
            CourseFeeCard::Rta(_) => FeePattern::Rta,
            CourseFeeCard::Unknown(_) => FeePattern::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherFeesRow {
    pub fee_type: String,
    pub cells: Vec<String>,
}

/// The other-fees table. `columns` are the raw keys of the first row,
/// `headers` their labels; every row has one cell per column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherFeesTable {
    pub columns: Vec<String>,
    pub headers: Vec<String>,
    pub rows: Vec<OtherFeesRow>,
}

/// A fully rendered detail record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailView {
    pub branch_id: String,
    pub license_category_id: String,
    pub documents: Vec<FieldEntry>,
    pub course: Vec<FieldEntry>,
    pub lectures: Vec<FieldEntry>,
    pub course_fees: Vec<CourseFeeCard>,
    pub other_fees: Option<OtherFeesTable>,
}
