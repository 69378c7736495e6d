//! SQLite storage of detail records.
//!
//! Every call opens its own connection on the configured file, the way the
//! handlers are driven: one short-lived connection per request, run on the
//! blocking pool through `run_blocking`. Detail blobs and fees are stored as
//! JSON text and decoded into `DetailRecord` on the way out.

use crate::error::ServiceError;
use common::model::detail::DetailRecord;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS details (
        branch_id           TEXT NOT NULL,
        license_category_id TEXT NOT NULL,
        documents_required  TEXT NOT NULL DEFAULT 'null',
        course_details      TEXT NOT NULL DEFAULT 'null',
        lecture_details     TEXT NOT NULL DEFAULT 'null',
        fees                TEXT NOT NULL DEFAULT '{}',
        PRIMARY KEY (branch_id, license_category_id)
    );
";

pub fn open(path: &Path) -> Result<Connection, ServiceError> {
    Ok(Connection::open(path)?)
}

pub fn init_schema(conn: &Connection) -> Result<(), ServiceError> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

pub fn fetch_detail(
    conn: &Connection,
    branch_id: &str,
    category_id: &str,
) -> Result<Option<DetailRecord>, ServiceError> {
    let row = conn
        .query_row(
            "SELECT documents_required, course_details, lecture_details, fees
             FROM details WHERE branch_id = ?1 AND license_category_id = ?2",
            params![branch_id, category_id],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                ))
            },
        )
        .optional()?;

    let Some((documents, course, lectures, fees)) = row else {
        return Ok(None);
    };

    Ok(Some(DetailRecord {
        branch_id: branch_id.to_string(),
        license_category_id: category_id.to_string(),
        documents_required: serde_json::from_str(&documents)?,
        course_details: serde_json::from_str(&course)?,
        lecture_details: serde_json::from_str(&lectures)?,
        fees: serde_json::from_str(&fees)?,
    }))
}

/// Inserts the record or replaces the one stored under the same branch and category.
pub fn save_detail(conn: &Connection, record: &DetailRecord) -> Result<(), ServiceError> {
    conn.execute(
        "INSERT OR REPLACE INTO details
            (branch_id, license_category_id, documents_required, course_details, lecture_details, fees)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            record.branch_id,
            record.license_category_id,
            serde_json::to_string(&record.documents_required)?,
            serde_json::to_string(&record.course_details)?,
            serde_json::to_string(&record.lecture_details)?,
            serde_json::to_string(&record.fees)?,
        ],
    )?;
    Ok(())
}

/// Runs database work on the blocking thread pool.
pub async fn run_blocking<T, F>(task: F) -> Result<T, ServiceError>
where
    F: FnOnce() -> Result<T, ServiceError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| ServiceError::Blocking(e.to_string()))?
}
