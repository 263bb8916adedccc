//! Uniform status envelope returned by every JSON endpoint.

use serde::{Deserialize, Serialize};

/// Outcome marker of the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "Error")]
    Error,
}

/// `{"status": "OK"|"Error", "error"?: string, "alias"?: string}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self {
            status: Status::Ok,
            error: None,
            alias: None,
        }
    }

    pub fn ok_with_alias(alias: impl Into<String>) -> Self {
        Self {
            alias: Some(alias.into()),
            ..Self::ok()
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            error: Some(message.into()),
            alias: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_omits_empty_fields() {
        let value = serde_json::to_value(StatusResponse::ok()).unwrap();
        assert_eq!(value, json!({ "status": "OK" }));
    }

    #[test]
    fn test_ok_with_alias() {
        let value = serde_json::to_value(StatusResponse::ok_with_alias("google")).unwrap();
        assert_eq!(value, json!({ "status": "OK", "alias": "google" }));
    }

    #[test]
    fn test_error() {
        let value = serde_json::to_value(StatusResponse::error("not found")).unwrap();
        assert_eq!(value, json!({ "status": "Error", "error": "not found" }));
    }
}
