//! Uniform response envelope

use crate::{ProcessOutError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Every API response: a success flag, an error description and a payload
/// stored under a resource-specific key
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    /// Whether the call succeeded
    pub success: bool,
    /// Human-readable message, set on failure
    pub message: String,
    /// Machine-readable error type, set on failure
    pub error_type: String,
    /// Decoded payload; only present when `success` is true
    pub payload: Option<T>,
}

#[derive(Deserialize)]
struct RawEnvelope {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error_type: Option<String>,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Decode a response body, extracting the payload stored under `key`
    ///
    /// With `key` set to `None` the payload is decoded from `null`, which is
    /// what payload-less operations (`T = ()`) expect. A missing key decodes
    /// the same way, so a required payload that is absent is a decode error.
    pub fn decode(body: &[u8], key: Option<&str>, status: Option<u16>) -> Result<Self> {
        let raw: RawEnvelope = serde_json::from_slice(body)
            .map_err(|e| ProcessOutError::decode(format!("invalid envelope: {}", e), status))?;

        let RawEnvelope {
            success,
            message,
            error_type,
            mut fields,
        } = raw;

        let payload = if success {
            let value = key
                .and_then(|key| fields.remove(key))
                .unwrap_or(Value::Null);
            let payload = serde_json::from_value(value).map_err(|e| {
                ProcessOutError::decode(
                    format!("invalid `{}` payload: {}", key.unwrap_or("<none>"), e),
                    status,
                )
            })?;
            Some(payload)
        } else {
            None
        };

        Ok(Self {
            success,
            message: message.unwrap_or_default(),
            error_type: error_type.unwrap_or_default(),
            payload,
        })
    }

    /// Unwrap the payload, or turn a failed envelope into an API error
    pub fn into_result(self, status: Option<u16>) -> Result<T> {
        if !self.success {
            return Err(ProcessOutError::api(self.error_type, self.message, status));
        }

        self.payload
            .ok_or_else(|| ProcessOutError::decode("missing payload", status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: String,
    }

    #[test]
    fn test_decode_single_payload() {
        let body = json!({"success": true, "item": {"id": "it_1"}}).to_string();
        let envelope = Envelope::<Item>::decode(body.as_bytes(), Some("item"), Some(200)).unwrap();
        assert!(envelope.success);
        assert_eq!(
            envelope.into_result(Some(200)).unwrap(),
            Item {
                id: "it_1".to_string()
            }
        );
    }

    #[test]
    fn test_decode_list_payload() {
        let body = json!({"success": true, "items": [{"id": "a"}, {"id": "b"}]}).to_string();
        let items = Envelope::<Vec<Item>>::decode(body.as_bytes(), Some("items"), None)
            .unwrap()
            .into_result(None)
            .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].id, "b");
    }

    #[test]
    fn test_decode_without_payload() {
        let body = json!({"success": true}).to_string();
        let envelope = Envelope::<()>::decode(body.as_bytes(), None, None).unwrap();
        assert!(envelope.into_result(None).is_ok());
    }

    #[test]
    fn test_failure_ignores_payload() {
        let body = json!({
            "success": false,
            "message": "invalid currency",
            "error_type": "invoice.invalid_currency",
            "invoice": "not an object"
        })
        .to_string();

        let envelope = Envelope::<Item>::decode(body.as_bytes(), Some("invoice"), Some(400)).unwrap();
        assert!(envelope.payload.is_none());

        let err = envelope.into_result(Some(400)).unwrap_err();
        match err {
            ProcessOutError::Api {
                code,
                message,
                status,
            } => {
                assert_eq!(code, "invoice.invalid_currency");
                assert_eq!(message, "invalid currency");
                assert_eq!(status, Some(400));
            }
            other => panic!("Expected Api error, got: {:?}", other),
        }
    }

    #[test]
    fn test_null_message_and_error_type() {
        let body = r#"{"success": false, "message": null, "error_type": null}"#;
        let envelope = Envelope::<()>::decode(body.as_bytes(), None, None).unwrap();
        assert_eq!(envelope.message, "");
        assert_eq!(envelope.error_type, "");
    }

    #[test]
    fn test_missing_required_payload_is_decode_error() {
        let body = json!({"success": true}).to_string();
        let err = Envelope::<Item>::decode(body.as_bytes(), Some("item"), Some(200)).unwrap_err();
        assert!(err.is_decode());
        assert!(err.to_string().contains("`item`"));
    }

    #[test]
    fn test_invalid_json_is_decode_error() {
        let err = Envelope::<Item>::decode(b"<html>bad gateway</html>", Some("item"), Some(502))
            .unwrap_err();
        assert!(err.is_decode());
        assert_eq!(err.status(), Some(502));
    }

    #[test]
    fn test_missing_success_flag_is_decode_error() {
        let body = json!({"item": {"id": "it_1"}}).to_string();
        let err = Envelope::<Item>::decode(body.as_bytes(), Some("item"), None).unwrap_err();
        assert!(err.is_decode());
    }
}
