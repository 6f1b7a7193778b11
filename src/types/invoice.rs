//! Invoice and tailored invoice types

use super::customer::Customer;
use super::transaction::Transaction;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::str::FromStr;

/// An invoice: a one-off payment request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Invoice {
    /// ID of the invoice
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: String,
    /// Project to which the invoice belongs
    pub project: Option<Value>,
    /// Transaction generated by the invoice
    pub transaction: Option<Box<Transaction>>,
    /// Customer linked to the invoice, if any
    pub customer: Option<Customer>,
    /// Subscription to which the invoice is linked, if any
    pub subscription: Option<Value>,
    /// URL to which the customer may be redirected to pay
    pub url: Option<String>,
    /// Name of the invoice
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    /// Amount to be paid, as a decimal string
    #[serde(deserialize_with = "super::null_as_default")]
    pub amount: String,
    /// Currency of the invoice
    #[serde(deserialize_with = "super::null_as_default")]
    pub currency: String,
    /// Arbitrary key-value metadata
    pub metadata: Option<HashMap<String, String>>,
    /// Request the customer's email during checkout
    #[serde(deserialize_with = "super::null_as_default")]
    pub request_email: bool,
    /// Request the shipping address during checkout
    #[serde(deserialize_with = "super::null_as_default")]
    pub request_shipping: bool,
    /// Where the customer is redirected after paying
    pub return_url: Option<String>,
    /// Where the customer is redirected after cancelling
    pub cancel_url: Option<String>,
    /// Whether the invoice lives in the sandbox environment
    #[serde(deserialize_with = "super::null_as_default")]
    pub sandbox: bool,
    /// Creation date
    pub created_at: Option<DateTime<Utc>>,
}

impl Invoice {
    /// Create an invoice ready to be sent to `invoices().create()`
    pub fn new(
        name: impl Into<String>,
        amount: impl Into<String>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            currency: currency.into(),
            ..Default::default()
        }
    }

    /// Set the return URL
    pub fn with_return_url(mut self, url: impl Into<String>) -> Self {
        self.return_url = Some(url.into());
        self
    }

    /// Set the cancel URL
    pub fn with_cancel_url(mut self, url: impl Into<String>) -> Self {
        self.cancel_url = Some(url.into());
        self
    }

    /// Add a metadata entry
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Parse the amount as a decimal
    pub fn amount_decimal(&self) -> crate::Result<Decimal> {
        parse_amount(&self.amount)
    }
}

/// A reusable invoice template
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TailoredInvoice {
    /// ID of the tailored invoice
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: String,
    /// Name of the tailored invoice
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    /// Amount of generated invoices, as a decimal string
    #[serde(deserialize_with = "super::null_as_default")]
    pub amount: String,
    /// Currency of generated invoices
    #[serde(deserialize_with = "super::null_as_default")]
    pub currency: String,
    /// Arbitrary key-value metadata
    pub metadata: Option<HashMap<String, String>>,
    /// Request the customer's email during checkout
    #[serde(deserialize_with = "super::null_as_default")]
    pub request_email: bool,
    /// Request the shipping address during checkout
    #[serde(deserialize_with = "super::null_as_default")]
    pub request_shipping: bool,
    /// Where the customer is redirected after paying
    pub return_url: Option<String>,
    /// Where the customer is redirected after cancelling
    pub cancel_url: Option<String>,
    /// Custom value, can be anything
    pub custom: Option<String>,
    /// Creation date
    pub created_at: Option<DateTime<Utc>>,
}

impl TailoredInvoice {
    /// Create a tailored invoice ready to be sent to `tailored_invoices().create()`
    pub fn new(
        name: impl Into<String>,
        amount: impl Into<String>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            currency: currency.into(),
            ..Default::default()
        }
    }

    /// Set the custom value
    pub fn with_custom(mut self, custom: impl Into<String>) -> Self {
        self.custom = Some(custom.into());
        self
    }

    /// Parse the amount as a decimal
    pub fn amount_decimal(&self) -> crate::Result<Decimal> {
        parse_amount(&self.amount)
    }
}

pub(crate) fn parse_amount(amount: &str) -> crate::Result<Decimal> {
    Decimal::from_str(amount).map_err(|e| {
        crate::ProcessOutError::decode(format!("invalid amount {:?}: {}", amount, e), None)
    })
}
