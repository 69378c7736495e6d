//! # Detail Record Service
//!
//! Serves the per-branch, per-license-category detail records: the documents
//! a learner must bring, the course and lecture details, and the fees.
//!
//! ## Routes
//! - `GET /api/details/{branch_id}/{category_id}`: the record as stored.
//! - `GET /api/details/{branch_id}/{category_id}/view`: the record rendered
//!   into a `DetailView` (classified fee cards, other-fees table, sections).
//! - `GET /api/details/{branch_id}/{category_id}/other_fees.csv`: the
//!   other-fees table as a CSV download.
//! - `POST /api/details/save`: inserts or replaces a record.

mod get;
mod other_fees_csv;
mod save;
mod view;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

/// The base path for all detail-record endpoints.
const API_PATH: &str = "/api/details";

/// Configures and returns the Actix `Scope` for all detail-record routes.
///
/// # Registered Routes:
///
/// *   **`POST /save`**:
///     - **Handler**: `save::process`
///     - **Description**: Inserts or replaces a `DetailRecord`, keyed by its
///       `branch_id` and `license_category_id`. Blank ids are rejected with
///       `400 Bad Request`.
///
/// *   **`GET /{branch_id}/{category_id}`**:
///     - **Handler**: `get::process`
///     - **Description**: Returns the stored record as JSON, or `404 Not Found`.
///
/// *   **`GET /{branch_id}/{category_id}/view`**:
///     - **Handler**: `view::process`
///     - **Description**: Returns the record rendered into a `DetailView`: every
///       course fee classified into its card, the other-fees table and the
///       documents, course and lecture sections.
///
/// *   **`GET /{branch_id}/{category_id}/other_fees.csv`**:
///     - **Handler**: `other_fees_csv::process`
///     - **Description**: Downloads the other-fees table as CSV, with the same
///       cell text the UI table shows.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/save", post().to(save::process))
        .route("/{branch_id}/{category_id}", get().to(get::process))
        .route("/{branch_id}/{category_id}/view", get().to(view::process))
        .route(
            "/{branch_id}/{category_id}/other_fees.csv",
            get().to(other_fees_csv::process),
        )
}

#[cfg(test)]
mod tests {
    use crate::services::{configure, testing::config_in};
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use common::model::detail::DetailRecord;
    use common::model::display::{CourseFeeCard, DetailView};
    use serde_json::json;

    fn sample_record() -> serde_json::Value {
        json!({
            "branch_id": "al-barsha",
            "license_category_id": "light",
            "documents_required": ["Emirates ID", "Eye test"],
            "course_details": { "transmission": "automatic" },
            "fees": {
                "course_fees": [
                    { "category": "Basic", "regular_course_fees": { "hourly": 50, "total": [1000, 800, 600] } },
                    { "rta_fees": [{ "type": "File opening", "amount": 100 }, { "type": "Road test", "amount": 250 }] }
                ],
                "other_fees": [
                    { "type": "Registration", "amount": 200, "notes": "one time" },
                    { "type": "Eye test", "amount": 150.5 }
                ]
            }
        })
    }

    #[actix_web::test]
    async fn saved_record_is_served_raw_and_rendered() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config_in(&dir)))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/details/save")
            .set_json(sample_record())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri("/api/details/al-barsha/light")
            .to_request();
        let record: DetailRecord = test::call_and_read_body_json(&app, req).await;
        assert_eq!(record.fees.course_fees.len(), 2);
        assert_eq!(record.fees.other_fees[0].fee_type, "Registration");

        let req = test::TestRequest::get()
            .uri("/api/details/al-barsha/light/view")
            .to_request();
        let view: DetailView = test::call_and_read_body_json(&app, req).await;
        assert!(matches!(view.course_fees[0], CourseFeeCard::Nested(_)));
        let CourseFeeCard::Rta(rta) = &view.course_fees[1] else {
            panic!("second card should be rta");
        };
        assert_eq!(rta.rta_total, 350.0);
        assert_eq!(view.other_fees.unwrap().headers, ["Amount", "Notes"]);
    }

    #[actix_web::test]
    async fn other_fees_export_as_csv() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config_in(&dir)))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/details/save")
            .set_json(sample_record())
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get()
            .uri("/api/details/al-barsha/light/other_fees.csv")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        let text = std::str::from_utf8(&body).unwrap();
        assert_eq!(
            text,
            "Type,Amount,Notes\nRegistration,AED 200.00,one time\nEye test,AED 150.50,-\n"
        );
    }

    #[actix_web::test]
    async fn missing_record_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config_in(&dir)))
                .configure(configure),
        )
        .await;

        for uri in ["/api/details/none/light", "/api/details/none/light/view"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
        }
    }

    #[actix_web::test]
    async fn blank_ids_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(config_in(&dir)))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/details/save")
            .set_json(json!({ "branch_id": "  ", "license_category_id": "light" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
