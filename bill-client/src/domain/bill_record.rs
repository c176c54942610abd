/// Fraction of the billed total reported back as savings.
pub const SAVINGS_RATE: f64 = 0.03;

/// Round to two decimal places the way a decimal printout would.
///
/// Goes through the exact decimal expansion of the binary value, so
/// `1000.0 * 0.03` (stored as `30.000000000000004`) comes back as `30.0`.
pub fn round_cents(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// A persisted bill row.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BillRecord {
    pub id: i64,
    pub consumer_name: String,
    pub industry_name: String,
    pub contact_detail: String,
    pub bill_month: String,
    pub net_consumption: f64,
    pub total_amount: f64,
    pub savings: f64,
}

/// A validated bill entry that has not been stored yet.
///
/// Savings are not a field: they are always derived from `total_amount`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NewBillRecord {
    pub consumer_name: String,
    pub industry_name: String,
    pub contact_detail: String,
    pub bill_month: String,
    pub net_consumption: f64,
    pub total_amount: f64,
}

impl NewBillRecord {
    pub fn savings(&self) -> f64 {
        round_cents(self.total_amount * SAVINGS_RATE)
    }
}
