pub mod bill_record;

pub use bill_record::{round_cents, BillRecord, NewBillRecord, SAVINGS_RATE};
