//! Customer types returned by invoice sub-resources

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// A customer attached to an invoice
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    /// ID of the customer
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: String,
    /// Email of the customer
    pub email: Option<String>,
    /// First name of the customer
    pub first_name: Option<String>,
    /// Last name of the customer
    pub last_name: Option<String>,
    /// First line of the address
    pub address1: Option<String>,
    /// Second line of the address
    pub address2: Option<String>,
    /// City
    pub city: Option<String>,
    /// State or region
    pub state: Option<String>,
    /// ZIP or postal code
    pub zip: Option<String>,
    /// ISO country code
    pub country_code: Option<String>,
    /// Arbitrary key-value metadata
    pub metadata: Option<HashMap<String, String>>,
    /// Whether the customer lives in the sandbox environment
    #[serde(deserialize_with = "super::null_as_default")]
    pub sandbox: bool,
    /// Creation date
    pub created_at: Option<DateTime<Utc>>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Action the customer must take to continue a payment on a gateway
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerAction {
    /// Kind of action, e.g. `redirect` or `url`
    #[serde(rename = "type", deserialize_with = "super::null_as_default")]
    pub action_type: String,
    /// Value associated with the action, e.g. a URL
    #[serde(deserialize_with = "super::null_as_default")]
    pub value: String,
}
