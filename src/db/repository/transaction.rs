use chrono::NaiveDate;
use rusqlite::{params, Connection};

use crate::db::DatabaseError;
use crate::models::Transaction;

pub fn insert_transaction(conn: &Connection, txn: &Transaction) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO transactions (id, patient_id, doctor_id, transaction_type, payment_mode,
         amount, department, transaction_date)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            txn.id,
            txn.patient_id,
            txn.doctor_id,
            txn.transaction_type.as_str(),
            txn.payment_mode.as_str(),
            txn.amount,
            txn.department,
            txn.transaction_date.to_string(),
        ],
    )?;
    Ok(())
}

pub fn get_transaction(conn: &Connection, id: &str) -> Result<Option<Transaction>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, patient_id, doctor_id, transaction_type, payment_mode, amount,
         department, transaction_date
         FROM transactions WHERE id = ?1",
    )?;

    let result = stmt.query_row(params![id], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, Option<String>>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, String>(4)?,
            row.get::<_, f64>(5)?,
            row.get::<_, Option<String>>(6)?,
            row.get::<_, String>(7)?,
        ))
    });

    match result {
        Ok(raw) => Ok(Some(transaction_from_row(raw)?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn get_all_transactions(conn: &Connection) -> Result<Vec<Transaction>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, patient_id, doctor_id, transaction_type, payment_mode, amount,
         department, transaction_date
         FROM transactions",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, Option<String>>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, String>(4)?,
            row.get::<_, f64>(5)?,
            row.get::<_, Option<String>>(6)?,
            row.get::<_, String>(7)?,
        ))
    })?;

    let mut txns = Vec::new();
    for row in rows {
        txns.push(transaction_from_row(row?)?);
    }
    Ok(txns)
}

type TransactionRow = (
    String,
    String,
    Option<String>,
    String,
    String,
    f64,
    Option<String>,
    String,
);

fn transaction_from_row(row: TransactionRow) -> Result<Transaction, DatabaseError> {
    let (id, patient_id, doctor_id, transaction_type, payment_mode, amount, department, date) =
        row;
    Ok(Transaction {
        id,
        patient_id,
        doctor_id,
        transaction_type: transaction_type.parse()?,
        payment_mode: payment_mode.parse()?,
        amount,
        department,
        transaction_date: NaiveDate::parse_from_str(&date, "%Y-%m-%d").unwrap_or_default(),
    })
}

pub fn list_transaction_ids(conn: &Connection) -> Result<Vec<String>, DatabaseError> {
    let mut stmt = conn.prepare("SELECT id FROM transactions")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

pub fn count_transactions(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row("SELECT COUNT(*) FROM transactions", [], |row| row.get(0))?;
    Ok(count)
}
