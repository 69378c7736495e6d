use super::get::load_detail;
use crate::config::Config;
use crate::error::ServiceError;
use actix_web::{web, HttpResponse};
use common::fees::build_other_fees_table;
use common::model::display::OtherFeesTable;

const TYPE_HEADER: &str = "Type";

/// Actix web handler for the `GET /api/details/{branch_id}/{category_id}/other_fees.csv` endpoint.
///
/// The cells are the same display strings the UI table shows. A record
/// without other fees exports the `Type` header alone.
///
/// # Arguments
/// * `path` - The branch id and license category id, extracted from the URL path.
/// * `config` - The shared `Config`, used to locate the database.
///
/// # Returns
/// - `200 OK` with a `text/csv` attachment on success.
/// - `404 Not Found` when no record exists for the pair.
pub(crate) async fn process(
    path: web::Path<(String, String)>,
    config: web::Data<Config>,
) -> Result<HttpResponse, ServiceError> {
    let (branch_id, category_id) = path.into_inner();
    let record = load_detail(&config, branch_id.clone(), category_id.clone()).await?;
    let csv = write_csv(build_other_fees_table(&record.fees.other_fees).as_ref())?;

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"other_fees_{branch_id}_{category_id}.csv\""),
        ))
        .body(csv))
}

fn write_csv(table: Option<&OtherFeesTable>) -> Result<Vec<u8>, ServiceError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    match table {
        Some(table) => {
            writer.write_record(
                std::iter::once(TYPE_HEADER).chain(table.headers.iter().map(String::as_str)),
            )?;
            for row in &table.rows {
                writer.write_record(
                    std::iter::once(row.fee_type.as_str())
                        .chain(row.cells.iter().map(String::as_str)),
                )?;
            }
        }
        None => writer.write_record([TYPE_HEADER])?,
    }

    writer
        .into_inner()
        .map_err(|e| ServiceError::Csv(e.into_error().into()))
}
