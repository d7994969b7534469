use rusqlite::{params, Connection};

use crate::db::DatabaseError;
use crate::models::Patient;

pub fn insert_patient(conn: &Connection, patient: &Patient) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO patients (id, patient_code, name, age, gender, phone, address,
         medical_history, active)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            patient.id,
            patient.patient_code,
            patient.name,
            patient.age,
            patient.gender.as_str(),
            patient.phone,
            patient.address,
            patient.medical_history,
            patient.active,
        ],
    )?;
    Ok(())
}

pub fn get_patient(conn: &Connection, id: &str) -> Result<Option<Patient>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, patient_code, name, age, gender, phone, address, medical_history, active
         FROM patients WHERE id = ?1",
    )?;

    let result = stmt.query_row(params![id], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, i64>(3)?,
            row.get::<_, String>(4)?,
            row.get::<_, Option<String>>(5)?,
            row.get::<_, Option<String>>(6)?,
            row.get::<_, Option<String>>(7)?,
            row.get::<_, bool>(8)?,
        ))
    });

    match result {
        Ok((id, patient_code, name, age, gender, phone, address, medical_history, active)) => {
            Ok(Some(Patient {
                id,
                patient_code,
                name,
                age,
                gender: gender.parse()?,
                phone,
                address,
                medical_history,
                active,
            }))
        }
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn get_all_patients(conn: &Connection) -> Result<Vec<Patient>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, patient_code, name, age, gender, phone, address, medical_history, active
         FROM patients",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, i64>(3)?,
            row.get::<_, String>(4)?,
            row.get::<_, Option<String>>(5)?,
            row.get::<_, Option<String>>(6)?,
            row.get::<_, Option<String>>(7)?,
            row.get::<_, bool>(8)?,
        ))
    })?;

    let mut patients = Vec::new();
    for row in rows {
        let (id, patient_code, name, age, gender, phone, address, medical_history, active) = row?;
        patients.push(Patient {
            id,
            patient_code,
            name,
            age,
            gender: gender.parse()?,
            phone,
            address,
            medical_history,
            active,
        });
    }
    Ok(patients)
}

pub fn list_patient_ids(conn: &Connection) -> Result<Vec<String>, DatabaseError> {
    let mut stmt = conn.prepare("SELECT id FROM patients")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

pub fn count_patients(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row("SELECT COUNT(*) FROM patients", [], |row| row.get(0))?;
    Ok(count)
}
