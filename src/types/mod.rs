//! Core types for the ProcessOut API
//!
//! This module defines the data structures exchanged with the API: the
//! resource payloads, the uniform response [`Envelope`], per-call
//! [`CallOptions`] and the client-wide [`ClientConfig`].
//!
//! # Architecture
//!
//! - [`config`] - Client configuration (host, version, credentials)
//! - [`options`] - Per-call options (expand, filter, pagination, headers)
//! - [`envelope`] - The `{success, message, error_type, <payload>}` wrapper
//! - [`invoice`] - Invoices and tailored invoices
//! - [`transaction`] - Transactions and refunds
//! - [`customer`] - Customers and customer actions
//! - [`constants`] - Hosts, versions and header names
//!
//! # Examples
//!
//! ```
//! use processout::types::{CallOptions, ClientConfig, Invoice};
//! use std::time::Duration;
//!
//! # fn example() -> processout::Result<()> {
//! let config = ClientConfig::new("proj_xxx", "key_xxx")
//!     .with_timeout(Duration::from_secs(30));
//! config.validate()?;
//!
//! let invoice = Invoice::new("Order #42", "10.00", "USD")
//!     .with_return_url("https://shop.example/thanks");
//!
//! let options = CallOptions::new()
//!     .with_expand("transaction")
//!     .with_random_idempotency_key();
//! # let _ = (invoice, options);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod customer;
pub mod envelope;
pub mod invoice;
pub mod options;
pub mod transaction;

use serde::{Deserialize, Deserializer};

/// Decode a `null` field as the type's default value
///
/// `#[serde(default)]` only covers absent fields; the API also sends
/// explicit nulls for unset strings and flags.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Re-export commonly used types
pub use config::ClientConfig;
pub use constants::{headers, DEFAULT_API_VERSION, DEFAULT_HOST};
pub use customer::{Customer, CustomerAction};
pub use envelope::Envelope;
pub use invoice::{Invoice, TailoredInvoice};
pub use options::CallOptions;
pub use transaction::{Refund, Transaction};
