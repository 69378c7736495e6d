use super::get::load_detail;
use crate::config::Config;
use crate::error::ServiceError;
use actix_web::{web, HttpResponse};
use common::fees::build_detail_view;

/// Actix web handler for the `GET /api/details/{branch_id}/{category_id}/view` endpoint.
///
/// Loads the same record as the raw endpoint and renders it with
/// `build_detail_view`, classifying every course fee into its card.
///
/// # Arguments
/// * `path` - The branch id and license category id, extracted from the URL path.
/// * `config` - The shared `Config`, used to locate the database.
///
/// # Returns
/// - `200 OK` with the `DetailView` as a JSON payload on success.
/// - `404 Not Found` when no record exists for the pair.
pub(crate) async fn process(
    path: web::Path<(String, String)>,
    config: web::Data<Config>,
) -> Result<HttpResponse, ServiceError> {
    let (branch_id, category_id) = path.into_inner();
    let record = load_detail(&config, branch_id, category_id).await?;
    Ok(HttpResponse::Ok().json(build_detail_view(&record)))
}
