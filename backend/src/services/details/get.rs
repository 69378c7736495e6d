use crate::config::Config;
use crate::db;
use crate::error::ServiceError;
use actix_web::{web, HttpResponse};
use common::model::detail::DetailRecord;
use log::warn;

/// Actix web handler for the `GET /api/details/{branch_id}/{category_id}` endpoint.
///
/// # Arguments
/// * `path` - The branch id and license category id, extracted from the URL path.
/// * `config` - The shared `Config`, used to locate the database.
///
/// # Returns
/// - `200 OK` with the `DetailRecord` as a JSON payload on success.
/// - `404 Not Found` when no record exists for the pair.
/// - `500 Internal Server Error` when the database or the stored JSON fails.
pub(crate) async fn process(
    path: web::Path<(String, String)>,
    config: web::Data<Config>,
) -> Result<HttpResponse, ServiceError> {
    let (branch_id, category_id) = path.into_inner();
    let record = load_detail(&config, branch_id, category_id).await?;
    Ok(HttpResponse::Ok().json(record))
}

/// Loads a detail record, turning a missing row into `ServiceError::NotFound`.
pub(crate) async fn load_detail(
    config: &Config,
    branch_id: String,
    category_id: String,
) -> Result<DetailRecord, ServiceError> {
    let database_path = config.database_path.clone();
    let (branch, category) = (branch_id.clone(), category_id.clone());
    let record = db::run_blocking(move || {
        let conn = db::open(&database_path)?;
        db::fetch_detail(&conn, &branch, &category)
    })
    .await?;

    record.ok_or_else(|| {
        warn!("No detail record for branch {branch_id}, category {category_id}");
        ServiceError::NotFound {
            branch_id,
            category_id,
        }
    })
}
