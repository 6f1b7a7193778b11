//! Typed resource handles
//!
//! Each handle borrows the client's [`RequestExecutor`] and maps its methods
//! onto rows of the [operation table](crate::operations). Handles hold no
//! state of their own.

mod invoices;
mod refunds;
mod tailored_invoices;
mod transactions;

#[cfg(test)]
mod tests;

pub use invoices::Invoices;
pub use refunds::Refunds;
pub use tailored_invoices::TailoredInvoices;
pub use transactions::Transactions;

use crate::client::RequestExecutor;
use crate::operations::Operation;
use crate::types::{options, CallOptions};
use crate::Result;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Run an operation on behalf of a resource handle
async fn run<T: DeserializeOwned>(
    executor: &RequestExecutor,
    operation: &Operation,
    ids: &[&str],
    fields: Map<String, Value>,
    options: Option<&CallOptions>,
) -> Result<T> {
    executor
        .execute(operation, ids, fields, options::as_slice(options))
        .await
}

/// Body with a single named field
fn single_field(name: &str, value: impl Into<Value>) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert(name.to_string(), value.into());
    fields
}
