use sqlx::SqliteConnection;

use crate::domain::{BillRecord, NewBillRecord};

/// Create the `bill_records` table if it is not there yet. Safe to run on every startup.
pub async fn ensure_schema(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bill_records (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            consumer_name   TEXT NOT NULL,
            industry_name   TEXT NOT NULL,
            contact_detail  TEXT NOT NULL,
            bill_month      TEXT NOT NULL,
            net_consumption REAL NOT NULL,
            total_amount    REAL NOT NULL,
            savings         REAL NOT NULL
        )
        "#,
    )
    .execute(&mut *conn)
    .await
    .map(|_| ())
}

/// Insert one entry, computing its savings, and return the assigned id.
pub async fn insert_bill_record(
    conn: &mut SqliteConnection,
    record: &NewBillRecord,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO bill_records
            (consumer_name, industry_name, contact_detail, bill_month, net_consumption, total_amount, savings)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&record.consumer_name)
    .bind(&record.industry_name)
    .bind(&record.contact_detail)
    .bind(&record.bill_month)
    .bind(record.net_consumption)
    .bind(record.total_amount)
    .bind(record.savings())
    .execute(&mut *conn)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Fetch every stored bill in insertion order.
pub async fn list_bill_records(conn: &mut SqliteConnection) -> Result<Vec<BillRecord>, sqlx::Error> {
    sqlx::query_as::<_, BillRecord>(
        r#"
        SELECT
            id,
            consumer_name,
            industry_name,
            contact_detail,
            bill_month,
            net_consumption,
            total_amount,
            savings
        FROM bill_records
        ORDER BY id
        "#,
    )
    .fetch_all(&mut *conn)
    .await
}
