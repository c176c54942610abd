pub mod config;
pub mod error;
pub mod http;
pub mod metrics_server;
pub mod observability;
pub mod store;
pub mod validate;

pub use error::BillError;
pub use http::{router, AppState};
