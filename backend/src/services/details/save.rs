use crate::config::Config;
use crate::db;
use crate::error::ServiceError;
use actix_web::{web, HttpResponse};
use common::model::detail::DetailRecord;
use log::info;

/// Actix web handler for the `POST /api/details/save` endpoint.
///
/// # Arguments
/// * `payload` - The `DetailRecord` to store, as JSON.
/// * `config` - The shared `Config`, used to locate the database.
///
/// # Returns
/// - `200 OK` once the record is stored.
/// - `400 Bad Request` when `branch_id` or `license_category_id` is blank.
pub(crate) async fn process(
    payload: web::Json<DetailRecord>,
    config: web::Data<Config>,
) -> Result<HttpResponse, ServiceError> {
    let record = payload.into_inner();
    if record.branch_id.trim().is_empty() || record.license_category_id.trim().is_empty() {
        return Err(ServiceError::InvalidPayload(
            "branch_id and license_category_id must not be empty".to_string(),
        ));
    }

    info!(
        "Saving detail record for branch {}, category {} ({} course fees)",
        record.branch_id,
        record.license_category_id,
        record.fees.course_fees.len()
    );

    let database_path = config.database_path.clone();
    db::run_blocking(move || {
        let conn = db::open(&database_path)?;
        db::save_detail(&conn, &record)
    })
    .await?;

    Ok(HttpResponse::Ok().body("Detail record saved"))
}
