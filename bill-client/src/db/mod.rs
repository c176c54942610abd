pub mod bill_queries;

pub use bill_queries::{ensure_schema, insert_bill_record, list_bill_records};
