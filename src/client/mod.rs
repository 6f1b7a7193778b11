//! ProcessOut API client
//!
//! [`ProcessOut`] owns the configuration and a [`RequestExecutor`]; the
//! resource handles returned by [`ProcessOut::invoices`] and friends borrow
//! it and pick a row of the [operation table](crate::operations).
//!
//! # Examples
//!
//! ```no_run
//! use processout::{CallOptions, ClientConfig, ProcessOut};
//!
//! # async fn example() -> processout::Result<()> {
//! let client = ProcessOut::new(ClientConfig::new("proj_xxx", "key_xxx"))?;
//!
//! let invoice = client
//!     .invoices()
//!     .find("inv_123", Some(&CallOptions::new().with_expand("transaction")))
//!     .await?;
//! println!("{} {} {}", invoice.name, invoice.amount, invoice.currency);
//!
//! // Any operation can also be reached by name
//! let raw = client
//!     .call("transactions.find", &["tr_456"], Default::default(), None)
//!     .await?;
//! println!("{}", raw["status"]);
//! # Ok(())
//! # }
//! ```

mod executor;


pub use executor::RequestExecutor;

use crate::operations;
use crate::resources::{Invoices, Refunds, TailoredInvoices, Transactions};
use crate::types::{options, CallOptions, ClientConfig};
use crate::{ProcessOutError, Result};
use serde_json::{Map, Value};

/// Client for the ProcessOut API
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ProcessOut {
    executor: RequestExecutor,
}

impl ProcessOut {
    /// Create a new client
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            executor: RequestExecutor::new(config)?,
        })
    }

    /// Create a client from `PROCESSOUT_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Configuration of this client
    pub fn config(&self) -> &ClientConfig {
        self.executor.config()
    }

    /// Executor shared by every resource handle
    pub fn executor(&self) -> &RequestExecutor {
        &self.executor
    }

    /// Invoice operations
    pub fn invoices(&self) -> Invoices<'_> {
        Invoices::new(&self.executor)
    }

    /// Tailored invoice operations
    pub fn tailored_invoices(&self) -> TailoredInvoices<'_> {
        TailoredInvoices::new(&self.executor)
    }

    /// Refund operations
    pub fn refunds(&self) -> Refunds<'_> {
        Refunds::new(&self.executor)
    }

    /// Transaction operations
    pub fn transactions(&self) -> Transactions<'_> {
        Transactions::new(&self.executor)
    }

    /// Run any operation of the table by name, returning the raw payload
    ///
    /// Payload-less operations return `Value::Null`.
    pub async fn call(
        &self,
        name: &str,
        ids: &[&str],
        fields: Map<String, Value>,
        options: Option<&CallOptions>,
    ) -> Result<Value> {
        let operation = operations::lookup(name)
            .ok_or_else(|| ProcessOutError::config(format!("Unknown operation: {}", name)))?;

        self.executor
            .execute(operation, ids, fields, options::as_slice(options))
            .await
    }
}
