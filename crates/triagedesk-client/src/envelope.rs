use crate::error::{Error, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use triagedesk_types::{Message, Statistics};

/// Every backend response carries a boolean `success`; `false` is an
/// application-level failure regardless of HTTP status.
#[derive(Debug, Deserialize)]
struct StatusEnvelope {
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListPayload {
    pub messages: Vec<Message>,
}

#[derive(Debug, Deserialize)]
pub struct StatsPayload {
    pub statistics: Statistics,
}

/// Decode a response body into its payload, checking `success` first so a
/// failure envelope (which omits payload fields) reports as `Api`, not as
/// a decode error.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    decode_ack(body)?;
    Ok(serde_json::from_str::<T>(body)?)
}

/// Decode a payload-less acknowledgement (`update_status`, `submit_message`)
pub fn decode_ack(body: &str) -> Result<()> {
    let status: StatusEnvelope = serde_json::from_str(body)?;
    if !status.success {
        return Err(Error::Api(
            status.error.unwrap_or_else(|| "request failed".to_string()),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success_list() {
        let body = r#"{"success": true, "messages": [], "count": 0}"#;
        let payload: ListPayload = decode(body).unwrap();
        assert!(payload.messages.is_empty());
    }

    #[test]
    fn test_decode_failure_is_api_error() {
        // A failure envelope has no payload fields; it must classify as
        // Api, not Malformed
        let body = r#"{"success": false, "error": "AI processor not initialized"}"#;
        let err = decode::<ListPayload>(body).unwrap_err();
        match err {
            Error::Api(msg) => assert_eq!(msg, "AI processor not initialized"),
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_failure_without_message() {
        let err = decode_ack(r#"{"success": false}"#).unwrap_err();
        match err {
            Error::Api(msg) => assert_eq!(msg, "request failed"),
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_garbage_is_malformed() {
        let err = decode_ack("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(err.is_transport());
        assert!(matches!(err, Error::Malformed(_)));
    }

    #[test]
    fn test_decode_statistics() {
        let body = r#"{
            "success": true,
            "statistics": {
                "total_messages": 3,
                "by_status": {"pending": 1, "assigned": 1, "resolved": 1},
                "by_urgency": {"CRITICAL": 2, "LOW": 1},
                "by_location": {"riverside": 3}
            }
        }"#;
        let payload: StatsPayload = decode(body).unwrap();
        assert_eq!(payload.statistics.total_messages, 3);
        assert_eq!(
            payload
                .statistics
                .urgency_count(triagedesk_types::UrgencyLevel::Critical),
            2
        );
    }
}
