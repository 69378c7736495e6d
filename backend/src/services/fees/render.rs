use actix_web::{web, HttpResponse};
use common::fees::{build_course_fee_cards, build_other_fees_table};
use common::model::detail::FeesPayload;
use common::requests::RenderFeesResponse;
use log::debug;

/// Actix web handler for the `POST /api/fees/render` endpoint.
///
/// # Arguments
/// * `payload` - A `FeesPayload` with `course_fees` and `other_fees`, both optional.
///
/// # Returns
/// `200 OK` with a `RenderFeesResponse`.
pub(crate) async fn process(payload: web::Json<FeesPayload>) -> HttpResponse {
    let fees = payload.into_inner();
    debug!(
        "Rendering {} course fees and {} other fees",
        fees.course_fees.len(),
        fees.other_fees.len()
    );

    HttpResponse::Ok().json(RenderFeesResponse {
        course_fees: build_course_fee_cards(&fees.course_fees),
        other_fees: build_other_fees_table(&fees.other_fees),
    })
}
