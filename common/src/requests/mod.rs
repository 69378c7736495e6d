use crate::model::display::{CourseFeeCard, OtherFeesTable};
use serde::{Deserialize, Serialize};

/// Response of `POST /api/fees/render`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFeesResponse {
    pub course_fees: Vec<CourseFeeCard>,
    pub other_fees: Option<OtherFeesTable>,
}
