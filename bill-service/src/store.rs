use bill_client::{
    db,
    domain::{BillRecord, NewBillRecord},
};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteConnection},
    ConnectOptions, Connection,
};

#[async_trait::async_trait]
pub trait BillStore: Send + Sync {
    /// Persist one entry and return its id.
    async fn insert(&self, record: &NewBillRecord) -> Result<i64, sqlx::Error>;

    /// All stored entries, ascending by id.
    async fn list(&self) -> Result<Vec<BillRecord>, sqlx::Error>;
}

/// SQLite-file store. Every call opens its own connection and closes it before returning;
/// on an error path the dropped connection is closed by its destructor.
#[derive(Debug, Clone)]
pub struct SqliteBillStore {
    options: SqliteConnectOptions,
}

impl SqliteBillStore {
    /// Open (creating if needed) the database file and make sure the table exists.
    pub async fn open(path: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let store = Self { options };

        let mut conn = store.connect().await?;
        db::ensure_schema(&mut conn).await?;
        conn.close().await?;

        tracing::info!(path, "bill storage ready");
        Ok(store)
    }

    async fn connect(&self) -> Result<SqliteConnection, sqlx::Error> {
        self.options.connect().await
    }
}

#[async_trait::async_trait]
impl BillStore for SqliteBillStore {
    async fn insert(&self, record: &NewBillRecord) -> Result<i64, sqlx::Error> {
        let mut conn = self.connect().await?;
        let id = db::insert_bill_record(&mut conn, record).await?;
        conn.close().await?;
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<BillRecord>, sqlx::Error> {
        let mut conn = self.connect().await?;
        let rows = db::list_bill_records(&mut conn).await?;
        conn.close().await?;
        Ok(rows)
    }
}
