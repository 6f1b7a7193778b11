//! Declarative table of API operations
//!
//! Each row names one resource operation and carries everything the
//! executor needs to run it: HTTP method, path template, the resource fields
//! sent in the body, where the payload lives in the response and whether the
//! pagination cursors are forwarded.

use crate::Result;
use http::Method;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use serde_json::{Map, Value};

/// Characters left as-is in a path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Placeholder for an identifier in a path template
const PLACEHOLDER: &str = "{}";

/// Where the payload sits in a response envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadShape {
    /// No payload
    None,
    /// A single object under the given key
    Single(&'static str),
    /// An array of objects under the given key
    List(&'static str),
}

impl PayloadShape {
    /// Envelope key holding the payload
    pub fn key(&self) -> Option<&'static str> {
        match *self {
            Self::None => None,
            Self::Single(key) | Self::List(key) => Some(key),
        }
    }
}

/// One API operation
#[derive(Debug, Clone)]
pub struct Operation {
    /// Operation name, `<resource>.<action>`
    pub name: &'static str,
    /// HTTP method
    pub method: Method,
    /// Path template; each `{}` takes one identifier
    pub path: &'static str,
    /// Resource fields sent in the body
    pub fields: &'static [&'static str],
    /// Payload location in the response
    pub payload: PayloadShape,
    /// Whether pagination cursors are sent
    pub paginated: bool,
}

impl Operation {
    /// Number of identifiers the path template takes
    pub fn arity(&self) -> usize {
        self.path.matches(PLACEHOLDER).count()
    }

    /// Render the path with percent-encoded identifiers
    ///
    /// # Panics
    ///
    /// Panics when the number of identifiers does not match the template.
    pub fn render_path(&self, ids: &[&str]) -> String {
        assert_eq!(
            ids.len(),
            self.arity(),
            "operation {} takes {} identifier(s), got {}",
            self.name,
            self.arity(),
            ids.len()
        );

        let mut parts = self.path.split(PLACEHOLDER);
        let mut path = String::from(parts.next().unwrap_or_default());
        for (id, rest) in ids.iter().zip(parts) {
            path.extend(utf8_percent_encode(id, PATH_SEGMENT));
            path.push_str(rest);
        }
        path
    }

    /// Pick this operation's body fields out of a serialized resource
    ///
    /// Listed fields missing from the resource are sent as `null`.
    pub fn select_fields<S: Serialize>(&self, resource: &S) -> Result<Map<String, Value>> {
        let mut source = match serde_json::to_value(resource)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        Ok(self
            .fields
            .iter()
            .map(|field| {
                let value = source.remove(*field).unwrap_or(Value::Null);
                (field.to_string(), value)
            })
            .collect())
    }
}

const INVOICE_FIELDS: &[&str] = &[
    "name",
    "amount",
    "currency",
    "metadata",
    "request_email",
    "request_shipping",
    "return_url",
    "cancel_url",
];

const TAILORED_INVOICE_FIELDS: &[&str] = &[
    "name",
    "amount",
    "currency",
    "metadata",
    "request_email",
    "request_shipping",
    "return_url",
    "cancel_url",
    "custom",
];

const REFUND_FIELDS: &[&str] = &["amount", "metadata", "reason", "information"];

macro_rules! operation {
    ($name:expr, $method:ident, $path:expr, $fields:expr, $payload:expr, $paginated:expr) => {
        Operation {
            name: $name,
            method: Method::$method,
            path: $path,
            fields: $fields,
            payload: $payload,
            paginated: $paginated,
        }
    };
}

pub const INVOICES_AUTHORIZE: Operation = operation!(
    "invoices.authorize",
    POST,
    "/invoices/{}/authorize",
    &["source"],
    PayloadShape::None,
    false
);
pub const INVOICES_CAPTURE: Operation = operation!(
    "invoices.capture",
    POST,
    "/invoices/{}/capture",
    &["source"],
    PayloadShape::None,
    false
);
pub const INVOICES_CUSTOMER: Operation = operation!(
    "invoices.customer",
    GET,
    "/invoices/{}/customers",
    &[],
    PayloadShape::Single("customer"),
    false
);
pub const INVOICES_ASSIGN_CUSTOMER: Operation = operation!(
    "invoices.assign_customer",
    POST,
    "/invoices/{}/customers",
    &["customer_id"],
    PayloadShape::Single("customer"),
    false
);
pub const INVOICES_CUSTOMER_ACTION: Operation = operation!(
    "invoices.customer_action",
    GET,
    "/invoices/{}/gateway-configurations/{}/customer-action",
    &[],
    PayloadShape::Single("customer_action"),
    false
);
pub const INVOICES_TRANSACTION: Operation = operation!(
    "invoices.transaction",
    GET,
    "/invoices/{}/transactions",
    &[],
    PayloadShape::Single("transaction"),
    false
);
pub const INVOICES_VOID: Operation = operation!(
    "invoices.void",
    POST,
    "/invoices/{}/void",
    &[],
    PayloadShape::None,
    false
);
pub const INVOICES_ALL: Operation = operation!(
    "invoices.all",
    GET,
    "/invoices",
    &[],
    PayloadShape::List("invoices"),
    true
);
pub const INVOICES_CREATE: Operation = operation!(
    "invoices.create",
    POST,
    "/invoices",
    INVOICE_FIELDS,
    PayloadShape::Single("invoice"),
    false
);
pub const INVOICES_FIND: Operation = operation!(
    "invoices.find",
    GET,
    "/invoices/{}",
    &[],
    PayloadShape::Single("invoice"),
    false
);

pub const TAILORED_INVOICES_INVOICE: Operation = operation!(
    "tailored_invoices.invoice",
    POST,
    "/tailored-invoices/{}/invoices",
    &[],
    PayloadShape::Single("invoice"),
    false
);
pub const TAILORED_INVOICES_ALL: Operation = operation!(
    "tailored_invoices.all",
    GET,
    "/tailored-invoices",
    &[],
    PayloadShape::List("tailored_invoices"),
    true
);
pub const TAILORED_INVOICES_CREATE: Operation = operation!(
    "tailored_invoices.create",
    POST,
    "/tailored-invoices",
    TAILORED_INVOICE_FIELDS,
    PayloadShape::Single("tailored_invoice"),
    false
);
pub const TAILORED_INVOICES_FIND: Operation = operation!(
    "tailored_invoices.find",
    GET,
    "/tailored-invoices/{}",
    &[],
    PayloadShape::Single("tailored_invoice"),
    false
);
pub const TAILORED_INVOICES_SAVE: Operation = operation!(
    "tailored_invoices.save",
    PUT,
    "/tailored-invoices/{}",
    TAILORED_INVOICE_FIELDS,
    PayloadShape::Single("tailored_invoice"),
    false
);
pub const TAILORED_INVOICES_DELETE: Operation = operation!(
    "tailored_invoices.delete",
    DELETE,
    "/tailored-invoices/{}",
    &[],
    PayloadShape::None,
    false
);

pub const REFUNDS_FIND: Operation = operation!(
    "refunds.find",
    GET,
    "/transactions/{}/refunds/{}",
    &[],
    PayloadShape::Single("refund"),
    true
);
pub const REFUNDS_APPLY: Operation = operation!(
    "refunds.apply",
    POST,
    "/transactions/{}/refunds",
    REFUND_FIELDS,
    PayloadShape::None,
    true
);
pub const REFUNDS_ALL: Operation = operation!(
    "refunds.all",
    GET,
    "/transactions/{}/refunds",
    &[],
    PayloadShape::List("refunds"),
    true
);

pub const TRANSACTIONS_ALL: Operation = operation!(
    "transactions.all",
    GET,
    "/transactions",
    &[],
    PayloadShape::List("transactions"),
    true
);
pub const TRANSACTIONS_FIND: Operation = operation!(
    "transactions.find",
    GET,
    "/transactions/{}",
    &[],
    PayloadShape::Single("transaction"),
    false
);

/// Every operation the client knows about
pub static OPERATIONS: &[Operation] = &[
    INVOICES_AUTHORIZE,
    INVOICES_CAPTURE,
    INVOICES_CUSTOMER,
    INVOICES_ASSIGN_CUSTOMER,
    INVOICES_CUSTOMER_ACTION,
    INVOICES_TRANSACTION,
    INVOICES_VOID,
    INVOICES_ALL,
    INVOICES_CREATE,
    INVOICES_FIND,
    TAILORED_INVOICES_INVOICE,
    TAILORED_INVOICES_ALL,
    TAILORED_INVOICES_CREATE,
    TAILORED_INVOICES_FIND,
    TAILORED_INVOICES_SAVE,
    TAILORED_INVOICES_DELETE,
    REFUNDS_FIND,
    REFUNDS_APPLY,
    REFUNDS_ALL,
    TRANSACTIONS_ALL,
    TRANSACTIONS_FIND,
];

/// Look an operation up by name
pub fn lookup(name: &str) -> Option<&'static Operation> {
    OPERATIONS.iter().find(|op| op.name == name)
}
