use rusqlite::{params, Connection};

use crate::db::DatabaseError;
use crate::models::Bed;

pub fn insert_bed(conn: &Connection, bed: &Bed) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO beds (bed_number, department, room_type, status, patient_id, daily_rate)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            bed.bed_number,
            bed.department,
            bed.room_type.as_str(),
            bed.status.as_str(),
            bed.patient_id,
            bed.daily_rate,
        ],
    )?;
    Ok(())
}

pub fn get_bed(conn: &Connection, bed_number: &str) -> Result<Option<Bed>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT bed_number, department, room_type, status, patient_id, daily_rate
         FROM beds WHERE bed_number = ?1",
    )?;

    let result = stmt.query_row(params![bed_number], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, Option<String>>(4)?,
            row.get::<_, f64>(5)?,
        ))
    });

    match result {
        Ok((bed_number, department, room_type, status, patient_id, daily_rate)) => Ok(Some(Bed {
            bed_number,
            department,
            room_type: room_type.parse()?,
            status: status.parse()?,
            patient_id,
            daily_rate,
        })),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn get_all_beds(conn: &Connection) -> Result<Vec<Bed>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT bed_number, department, room_type, status, patient_id, daily_rate FROM beds",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, Option<String>>(4)?,
            row.get::<_, f64>(5)?,
        ))
    })?;

    let mut beds = Vec::new();
    for row in rows {
        let (bed_number, department, room_type, status, patient_id, daily_rate) = row?;
        beds.push(Bed {
            bed_number,
            department,
            room_type: room_type.parse()?,
            status: status.parse()?,
            patient_id,
            daily_rate,
        });
    }
    Ok(beds)
}

pub fn list_bed_numbers(conn: &Connection) -> Result<Vec<String>, DatabaseError> {
    let mut stmt = conn.prepare("SELECT bed_number FROM beds")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

pub fn count_beds(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row("SELECT COUNT(*) FROM beds", [], |row| row.get(0))?;
    Ok(count)
}
