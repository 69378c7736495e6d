//! # Fee Rendering Service
//!
//! Stateless endpoints exposing the fee classifier to callers that hold fee
//! records themselves (the admin tools preview a record before saving it).
//!
//! - `POST /api/fees/classify`: a JSON array of course fee records in, the
//!   pattern of each (`simple`, `nested`, `rta` or `unknown`) out, in order.
//! - `POST /api/fees/render`: a fees payload (`course_fees` and
//!   `other_fees`) in, the rendered cards and other-fees table out.

mod classify;
mod render;

use actix_web::web::{post, scope};
use actix_web::Scope;

/// The base path for all fee rendering endpoints.
const API_PATH: &str = "/api/fees";

/// Configures and returns the Actix `Scope` for the fee rendering routes.
///
/// # Registered Routes:
///
/// *   **`POST /classify`**:
///     - **Handler**: `classify::process`
///     - **Description**: Expects a JSON array of course fee records and returns
///       a JSON array with the `FeePattern` of each one, in the same order.
///
/// *   **`POST /render`**:
///     - **Handler**: `render::process`
///     - **Description**: Expects a `FeesPayload` and returns a
///       `RenderFeesResponse` with one `CourseFeeCard` per course fee and the
///       other-fees table (or `null` when there are no other fees).
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/classify", post().to(classify::process))
        .route("/render", post().to(render::process))
}

#[cfg(test)]
mod tests {
    use crate::services::configure;
    use actix_web::{test, App};
    use common::model::display::{CourseFeeCard, FeePattern};
    use common::requests::RenderFeesResponse;
    use serde_json::json;

    #[actix_web::test]
    async fn classify_returns_one_pattern_per_record() {
        let app = test::init_service(App::new().configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/fees/classify")
            .set_json(json!([
                { "rta_fees": [], "normal_fee": "x" },
                { "regular_course_fees": { "total": 1 } },
                { "sunday_fee": "AED 1" },
                {},
                null
            ]))
            .to_request();
        let patterns: Vec<FeePattern> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            patterns,
            [
                FeePattern::Rta,
                FeePattern::Nested,
                FeePattern::Simple,
                FeePattern::Unknown,
                FeePattern::Unknown
            ]
        );
    }

    #[actix_web::test]
    async fn render_returns_cards_and_table() {
        let app = test::init_service(App::new().configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/api/fees/render")
            .set_json(json!({
                "course_fees": [{ "normal_fee": 1200, "hours": "20 hours" }]
            }))
            .to_request();
        let rendered: RenderFeesResponse = test::call_and_read_body_json(&app, req).await;
        let CourseFeeCard::Simple(card) = &rendered.course_fees[0] else {
            panic!("expected a simple card");
        };
        assert_eq!(card.normal_fee.as_deref(), Some("AED 1,200.00"));
        assert!(rendered.other_fees.is_none());
    }
}
