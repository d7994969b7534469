use rusqlite::{params, Connection};

use crate::db::DatabaseError;
use crate::models::Doctor;

pub fn insert_doctor(conn: &Connection, doctor: &Doctor) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO doctors (id, name, department, specialization, fee, phone, email, active)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            doctor.id,
            doctor.name,
            doctor.department,
            doctor.specialization,
            doctor.fee,
            doctor.phone,
            doctor.email,
            doctor.active,
        ],
    )?;
    Ok(())
}

pub fn get_doctor(conn: &Connection, id: &str) -> Result<Option<Doctor>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, department, specialization, fee, phone, email, active
         FROM doctors WHERE id = ?1",
    )?;

    let result = stmt.query_row(params![id], |row| {
        Ok(Doctor {
            id: row.get(0)?,
            name: row.get(1)?,
            department: row.get(2)?,
            specialization: row.get(3)?,
            fee: row.get(4)?,
            phone: row.get(5)?,
            email: row.get(6)?,
            active: row.get(7)?,
        })
    });

    match result {
        Ok(doctor) => Ok(Some(doctor)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn list_doctor_ids(conn: &Connection) -> Result<Vec<String>, DatabaseError> {
    let mut stmt = conn.prepare("SELECT id FROM doctors")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

pub fn count_doctors(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row("SELECT COUNT(*) FROM doctors", [], |row| row.get(0))?;
    Ok(count)
}
