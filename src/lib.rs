//! # ProcessOut Rust bindings
//!
//! An async, **type-safe** client for the ProcessOut payment API: invoices,
//! tailored invoices, refunds and transactions.
//!
//! ## Features
//!
//! - 🧾 **Typed resources**: invoices, tailored invoices, refunds, transactions, customers
//! - 📋 **Data-driven operations**: every endpoint is one row of a declarative table
//! - 🔁 **Idempotent writes**: forward caller-supplied (or random UUID) idempotency keys
//! - 🔍 **Expand, filter, paginate**: per-call [`CallOptions`]
//! - 🔒 **Classified errors**: transport, decode and API failures are distinct variants
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use processout::{CallOptions, ClientConfig, Invoice, ProcessOut};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ProcessOut::new(ClientConfig::new("proj_xxx", "key_xxx"))?;
//!
//!     // Create an invoice
//!     let invoice = client
//!         .invoices()
//!         .create(
//!             &Invoice::new("Order #42", "10.00", "USD"),
//!             Some(&CallOptions::new().with_random_idempotency_key()),
//!         )
//!         .await?;
//!
//!     // Redirect the customer to the checkout page
//!     println!("Pay at {:?}", invoice.url);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust,no_run
//! use processout::{ApiErrorKind, ProcessOut, ProcessOutError};
//!
//! # async fn example(client: ProcessOut) {
//! match client.invoices().find("inv_123", None).await {
//!     Ok(invoice) => println!("{}", invoice.name),
//!     Err(e) if e.api_kind() == Some(ApiErrorKind::NotFound) => eprintln!("No such invoice"),
//!     Err(ProcessOutError::Api { code, message, .. }) => eprintln!("{}: {}", code, message),
//!     Err(e) => eprintln!("Request failed: {}", e),
//! }
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **`types`**: Resource payloads, envelope, call options and configuration
//! - **`operations`**: The table of `(method, path, fields, payload)` rows
//! - **`client`**: [`ProcessOut`] and the [`RequestExecutor`] every call goes through
//! - **`resources`**: Typed handles (`client.invoices()`, ...)
//! - **`error`**: [`ProcessOutError`] and the crate [`Result`]
//!
//! Logging goes through `tracing`; install a subscriber in your application
//! to see request traces.

pub mod client;
pub mod error;
pub mod operations;
pub mod resources;
pub mod types;

// Re-exports for convenience
pub use client::{ProcessOut, RequestExecutor};
pub use error::{ApiErrorKind, ProcessOutError, Result};
pub use types::*;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
