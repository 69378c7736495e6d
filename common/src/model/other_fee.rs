use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A one-off charge outside the course fees (registration, RTA stamps, eye test...).
///
/// Apart from `type` the row carries arbitrary columns. Column order is the
/// order the keys appear in the stored JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherFee {
    #[serde(rename = "type", default)]
    pub fee_type: String,
    #[serde(flatten)]
    pub columns: Map<String, Value>,
}
