//! JSON envelope used by the HTTP endpoints.
//!
//! Every response carries `ret` (1 on success, 0 on failure), a human
//! readable `msg`, and an optional `data` payload.

use serde::{Deserialize, Serialize};

/// Response envelope `{ ret, msg, data }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub ret: i32,
    pub msg: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying a payload.
    pub fn ok(msg: impl Into<String>, data: T) -> Self {
        Self {
            ret: 1,
            msg: msg.into(),
            data: Some(data),
        }
    }

    /// Successful response with `data: null`.
    pub fn empty(msg: impl Into<String>) -> Self {
        Self {
            ret: 1,
            msg: msg.into(),
            data: None,
        }
    }

    /// Failed response with `data: null`.
    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            ret: 0,
            msg: msg.into(),
            data: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.ret == 1
    }
}

/// Payload of `GET /app/api/v0/health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthData {
    pub version: String,
    /// Cache backend state: "ok", "error" or "disabled"
    pub redis: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_response_serializes_null_data() {
        let resp: ApiResponse<()> = ApiResponse::empty("pong");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json, serde_json::json!({"ret": 1, "msg": "pong", "data": null}));
    }

    #[test]
    fn test_health_response_shape() {
        let resp = ApiResponse::ok(
            "ok",
            HealthData {
                version: "0.1.0".to_string(),
                redis: "disabled".to_string(),
            },
        );
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["ret"], 1);
        assert_eq!(json["data"]["version"], "0.1.0");
        assert_eq!(json["data"]["redis"], "disabled");
    }

    #[test]
    fn test_error_response() {
        let resp: ApiResponse<HealthData> = ApiResponse::error("unavailable");
        assert!(!resp.is_ok());
        assert!(resp.data.is_none());
    }
}
