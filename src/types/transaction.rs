//! Transaction and refund types

use super::invoice::parse_amount;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A payment attempt
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    /// ID of the transaction
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: String,
    /// Status of the transaction
    #[serde(deserialize_with = "super::null_as_default")]
    pub status: String,
    /// Fee taken on the transaction, as a decimal string
    pub fee: Option<String>,
    /// Whether the transaction lives in the sandbox environment
    #[serde(deserialize_with = "super::null_as_default")]
    pub sandbox: bool,
    /// Creation date
    pub created_at: Option<DateTime<Utc>>,
}

/// A refund applied to a transaction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Refund {
    /// ID of the refund
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: String,
    /// Transaction to which the refund is applied
    pub transaction: Option<Box<Transaction>>,
    /// Either `customer_request`, `duplicate` or `fraud`
    pub reason: Option<String>,
    /// Custom details regarding the refund
    pub information: Option<String>,
    /// Amount to refund; at most what is still available on the transaction
    #[serde(deserialize_with = "super::null_as_default")]
    pub amount: String,
    /// Arbitrary key-value metadata
    pub metadata: Option<HashMap<String, String>>,
    /// Whether the refund lives in the sandbox environment
    #[serde(deserialize_with = "super::null_as_default")]
    pub sandbox: bool,
    /// Creation date
    pub created_at: Option<DateTime<Utc>>,
}

impl Refund {
    /// Create a refund of `amount` with the given reason
    pub fn new(amount: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            reason: Some(reason.into()),
            ..Default::default()
        }
    }

    /// Set the refund details
    pub fn with_information(mut self, information: impl Into<String>) -> Self {
        self.information = Some(information.into());
        self
    }

    /// Parse the amount as a decimal
    pub fn amount_decimal(&self) -> crate::Result<Decimal> {
        parse_amount(&self.amount)
    }
}
