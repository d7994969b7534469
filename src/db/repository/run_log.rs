use rusqlite::{params, Connection};

use crate::db::DatabaseError;

/// One row per migration run, written after the reconciliation report is final.
#[derive(Debug, Clone)]
pub struct RunLogEntry {
    pub run_id: String,
    pub started_at: String,
    pub finished_at: String,
    pub dry_run: bool,
    pub complete: bool,
    pub report_json: String,
}

pub fn insert_run_log(conn: &Connection, entry: &RunLogEntry) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO migration_runs (run_id, started_at, finished_at, dry_run, complete, report_json)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            entry.run_id,
            entry.started_at,
            entry.finished_at,
            entry.dry_run,
            entry.complete,
            entry.report_json,
        ],
    )?;
    Ok(())
}

pub fn get_latest_run_log(conn: &Connection) -> Result<Option<RunLogEntry>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT run_id, started_at, finished_at, dry_run, complete, report_json
         FROM migration_runs ORDER BY finished_at DESC LIMIT 1",
    )?;

    let result = stmt.query_row([], |row| {
        Ok(RunLogEntry {
            run_id: row.get(0)?,
            started_at: row.get(1)?,
            finished_at: row.get(2)?,
            dry_run: row.get(3)?,
            complete: row.get(4)?,
            report_json: row.get(5)?,
        })
    });

    match result {
        Ok(entry) => Ok(Some(entry)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn count_run_logs(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row("SELECT COUNT(*) FROM migration_runs", [], |row| row.get(0))?;
    Ok(count)
}
