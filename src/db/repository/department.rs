use rusqlite::{params, Connection};

use crate::db::DatabaseError;
use crate::models::Department;

pub fn insert_department(conn: &Connection, dept: &Department) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO departments (id, name, description) VALUES (?1, ?2, ?3)",
        params![dept.id, dept.name, dept.description],
    )?;
    Ok(())
}

pub fn get_department(conn: &Connection, id: &str) -> Result<Option<Department>, DatabaseError> {
    let mut stmt =
        conn.prepare("SELECT id, name, description FROM departments WHERE id = ?1")?;

    let result = stmt.query_row(params![id], |row| {
        Ok(Department {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
        })
    });

    match result {
        Ok(dept) => Ok(Some(dept)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn list_department_ids(conn: &Connection) -> Result<Vec<String>, DatabaseError> {
    let mut stmt = conn.prepare("SELECT id FROM departments")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

pub fn count_departments(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row("SELECT COUNT(*) FROM departments", [], |row| row.get(0))?;
    Ok(count)
}
