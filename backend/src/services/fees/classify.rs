use actix_web::{web, HttpResponse};
use common::fees::detect_fee_pattern;
use common::model::display::FeePattern;
use serde_json::Value;

/// Actix web handler for the `POST /api/fees/classify` endpoint.
///
/// # Arguments
/// * `payload` - A JSON array of course fee records of any shape.
///
/// # Returns
/// `200 OK` with one `FeePattern` per record. Malformed JSON is rejected by
/// the extractor with `400 Bad Request`.
pub(crate) async fn process(payload: web::Json<Vec<Value>>) -> HttpResponse {
    let patterns: Vec<FeePattern> = payload.iter().map(detect_fee_pattern).collect();
    HttpResponse::Ok().json(patterns)
}
