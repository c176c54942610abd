use bill_client::domain::NewBillRecord;
use serde_json::{Map, Value};

use crate::error::BillError;

/// Request keys in payload order. Note the capitalised `Industry_name`.
pub const CONSUMER_NAME: &str = "consumer_name";
pub const INDUSTRY_NAME: &str = "Industry_name";
pub const CONTACT_DETAIL: &str = "contact_detail";
pub const BILL_MONTH: &str = "bill_month";
pub const NET_CONSUMPTION: &str = "net_consumption";
pub const TOTAL_AMOUNT: &str = "total_amount";

const REQUIRED_FIELDS: [&str; 6] = [
    CONSUMER_NAME,
    INDUSTRY_NAME,
    CONTACT_DETAIL,
    BILL_MONTH,
    NET_CONSUMPTION,
    TOTAL_AMOUNT,
];

/// Turn a raw `/manual-save` body into a bill entry.
///
/// Rules, checked in this order:
/// - the body must be a non-empty JSON object;
/// - every required field must be present and truthy (`0`, `""`, `null`, `false`,
///   `[]` and `{}` all count as missing);
/// - text fields must be JSON strings;
/// - numeric fields must be JSON numbers or strings holding a finite number.
pub fn parse_submission(body: &[u8]) -> Result<NewBillRecord, BillError> {
    let payload: Value = serde_json::from_slice(body).map_err(|_| BillError::MalformedInput)?;
    let fields = match payload {
        Value::Object(map) if !map.is_empty() => map,
        _ => return Err(BillError::MalformedInput),
    };

    if !REQUIRED_FIELDS
        .iter()
        .all(|key| fields.get(*key).is_some_and(is_truthy))
    {
        return Err(BillError::MissingField);
    }

    let consumer_name = text_field(&fields, CONSUMER_NAME)?;
    let industry_name = text_field(&fields, INDUSTRY_NAME)?;
    let contact_detail = text_field(&fields, CONTACT_DETAIL)?;
    let bill_month = text_field(&fields, BILL_MONTH)?;
    let total_amount = numeric_field(&fields, TOTAL_AMOUNT)?;
    let net_consumption = numeric_field(&fields, NET_CONSUMPTION)?;

    Ok(NewBillRecord {
        consumer_name,
        industry_name,
        contact_detail,
        bill_month,
        net_consumption,
        total_amount,
    })
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn text_field(fields: &Map<String, Value>, key: &str) -> Result<String, BillError> {
    match fields.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(BillError::MalformedInput),
    }
}

fn numeric_field(fields: &Map<String, Value>, key: &str) -> Result<f64, BillError> {
    let parsed = match fields.get(key) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed
        .filter(|f| f.is_finite())
        .ok_or(BillError::InvalidNumeric)
}
