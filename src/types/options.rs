//! Per-call options

use serde_json::{Map, Value};
use std::borrow::Cow;

/// Optional configuration for a single API call
///
/// Expansion, filtering and pagination are sent in the request body; the
/// idempotency key and logging flag travel as headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallOptions {
    /// Related fields the server should inline in the response
    pub expand: Vec<String>,
    /// Server-side filter expression
    pub filter: Option<String>,
    /// Page size
    pub limit: Option<u64>,
    /// Page number
    pub page: Option<u64>,
    /// Cursor: return items before this ID
    pub end_before: Option<String>,
    /// Cursor: return items after this ID
    pub start_after: Option<String>,
    /// Forwarded as the `Idempotency-Key` header when non-empty
    pub idempotency_key: Option<String>,
    /// Sends `Disable-Logging: true` when set
    pub disable_logging: bool,
}

impl CallOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field path to expand
    pub fn with_expand(mut self, field: impl Into<String>) -> Self {
        self.expand.push(field.into());
        self
    }

    /// Set the filter expression
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Set the page size
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the page number
    pub fn with_page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    /// Return items created before the given ID
    pub fn with_end_before(mut self, id: impl Into<String>) -> Self {
        self.end_before = Some(id.into());
        self
    }

    /// Return items created after the given ID
    pub fn with_start_after(mut self, id: impl Into<String>) -> Self {
        self.start_after = Some(id.into());
        self
    }

    /// Set the idempotency key
    pub fn with_idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }

    /// Use a freshly generated UUID v4 as idempotency key
    pub fn with_random_idempotency_key(self) -> Self {
        self.with_idempotency_key(uuid::Uuid::new_v4().to_string())
    }

    /// Ask the server not to log this request
    pub fn with_disable_logging(mut self) -> Self {
        self.disable_logging = true;
        self
    }

    /// Idempotency key to send, if any
    pub fn idempotency_header(&self) -> Option<&str> {
        self.idempotency_key.as_deref().filter(|key| !key.is_empty())
    }

    /// Write the body fields carried by these options into `body`
    ///
    /// `expand` and `filter` are always present (`null` when empty); the
    /// pagination cursors only for paginated operations. Cursors are
    /// independent: the server decides which combinations are valid.
    pub fn write_body_fields(&self, body: &mut Map<String, Value>, paginated: bool) {
        let expand = if self.expand.is_empty() {
            Value::Null
        } else {
            Value::from(self.expand.clone())
        };
        body.insert("expand".to_string(), expand);
        body.insert("filter".to_string(), Value::from(self.filter.clone()));

        if paginated {
            body.insert("limit".to_string(), Value::from(self.limit));
            body.insert("page".to_string(), Value::from(self.page));
            body.insert("end_before".to_string(), Value::from(self.end_before.clone()));
            body.insert(
                "start_after".to_string(),
                Value::from(self.start_after.clone()),
            );
        }
    }
}

/// Resolve a call's options slice to a single value
///
/// # Panics
///
/// Panics when more than one options value is supplied. That is a misuse of
/// the call contract, not a runtime condition.
pub fn resolve(options: &[CallOptions]) -> Cow<'_, CallOptions> {
    match options {
        [] => Cow::Owned(CallOptions::default()),
        [single] => Cow::Borrowed(single),
        _ => panic!("The options parameter should only be provided once."),
    }
}

/// View an optional options reference as a slice of zero or one values
pub(crate) fn as_slice(options: Option<&CallOptions>) -> &[CallOptions] {
    match options {
        Some(options) => std::slice::from_ref(options),
        None => &[],
    }
}
