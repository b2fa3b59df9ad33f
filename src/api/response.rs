// Copyright (c) 2026 Uplink Contributors.
// Licensed under the MIT license.

//! API response types
//!
//! [`ApiResponse`] is the transient per-call view the client hands to
//! callbacks. [`ApiBody`] is the conventional body shape the server speaks:
//! `{ "code": 200, "messages": [ { "Saved": "Your changes were saved" } ] }`.

use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Error;

/// Body codes at or above this value lock the user out
pub const LOCKOUT_CODE_FLOOR: i64 = 400;

/// Conventional JSON body returned by the server
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiBody {
    /// Application-level status code, independent of the HTTP status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    /// Message entries; each entry maps a title to a body
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<serde_json::Map<String, serde_json::Value>>,
}

impl ApiBody {
    /// Check whether the application-level code demands a lockout
    ///
    /// A missing code counts as a failure; servers that follow the
    /// convention always echo one on POST responses.
    pub fn code_locks_out(&self) -> bool {
        match self.code {
            Some(code) => code >= LOCKOUT_CODE_FLOOR,
            None => true,
        }
    }

    /// First key/value pair of each message entry
    ///
    /// Entries carry a single pair by convention; any extra pairs in an
    /// entry are ignored.
    pub fn message_pairs(&self) -> impl Iterator<Item = (&str, String)> {
        self.messages.iter().filter_map(|entry| {
            entry.iter().next().map(|(title, body)| {
                let body = match body {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (title.as_str(), body)
            })
        })
    }
}

/// Completed HTTP exchange as seen by callbacks
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// Response status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw response body
    pub body: Bytes,
    /// Final URL the exchange resolved to
    pub url: Url,
    /// Method of the originating request
    pub method: Method,
    /// Whether the transaction fully completed
    ///
    /// Always true for responses built from a completed transport exchange;
    /// distinguishes completed-but-failed responses from in-flight failures.
    pub ready: bool,
}

impl ApiResponse {
    /// Create a new response
    pub fn new(
        status: StatusCode,
        headers: HeaderMap,
        body: Bytes,
        url: Url,
        method: Method,
    ) -> Self {
        Self {
            status,
            headers,
            body,
            url,
            method,
            ready: true,
        }
    }

    /// Check if status is success (2xx)
    pub fn ok(&self) -> bool {
        self.status.is_success()
    }

    /// Get status code as u16
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Get body as text, lossy conversion
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Parse the body as the conventional shape
    ///
    /// Returns `None` for an empty body or a body that is not valid JSON of
    /// the expected shape.
    pub fn json_body(&self) -> Option<ApiBody> {
        if self.body.is_empty() {
            return None;
        }
        serde_json::from_slice(&self.body).ok()
    }

    /// Check if this request was a POST
    pub fn is_post(&self) -> bool {
        self.method == Method::POST
    }
}

/// What went wrong with a call, as delivered to the error callback
#[derive(Debug)]
pub enum CallFailure {
    /// The exchange completed but the response was rejected (bad status or
    /// application-level lockout)
    Response(ApiResponse),
    /// The exchange never completed (network failure, unreachable host)
    Transport(Error),
}

impl CallFailure {
    /// HTTP status code, if a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            CallFailure::Response(res) => Some(res.status_code()),
            CallFailure::Transport(_) => None,
        }
    }

    /// Check if this failure happened below the HTTP layer
    pub fn is_transport(&self) -> bool {
        matches!(self, CallFailure::Transport(_))
    }

    /// The rejected response, if one was received
    pub fn response(&self) -> Option<&ApiResponse> {
        match self {
            CallFailure::Response(res) => Some(res),
            CallFailure::Transport(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with_body(status: StatusCode, body: &str) -> ApiResponse {
        ApiResponse::new(
            status,
            HeaderMap::new(),
            Bytes::from(body.to_string()),
            Url::parse("http://localhost/api").unwrap(),
            Method::POST,
        )
    }

    #[test]
    fn test_body_parse() {
        let res = response_with_body(
            StatusCode::OK,
            r#"{"code":200,"messages":[{"Saved":"Your changes were saved"}]}"#,
        );
        let body = res.json_body().unwrap();
        assert_eq!(body.code, Some(200));
        assert!(!body.code_locks_out());

        let pairs: Vec<_> = body.message_pairs().collect();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0, "Saved");
        assert_eq!(pairs[0].1, "Your changes were saved");
    }

    #[test]
    fn test_missing_code_locks_out() {
        let res = response_with_body(StatusCode::OK, r#"{"messages":[]}"#);
        assert!(res.json_body().unwrap().code_locks_out());
    }

    #[test]
    fn test_error_code_locks_out() {
        let res = response_with_body(StatusCode::OK, r#"{"code":422}"#);
        assert!(res.json_body().unwrap().code_locks_out());
    }

    #[test]
    fn test_empty_body_is_none() {
        let res = response_with_body(StatusCode::OK, "");
        assert!(res.json_body().is_none());
        assert!(res.ok());
        assert_eq!(res.status_code(), 200);
    }

    #[test]
    fn test_non_json_body_is_none() {
        let res = response_with_body(StatusCode::OK, "<html>oops</html>");
        assert!(res.json_body().is_none());
    }

    #[test]
    fn test_non_string_message_value() {
        let res = response_with_body(StatusCode::OK, r#"{"code":200,"messages":[{"Count":3}]}"#);
        let body = res.json_body().unwrap();
        let pairs: Vec<_> = body.message_pairs().collect();
        assert_eq!(pairs[0].1, "3");
    }

    #[test]
    fn test_failure_status() {
        let res = response_with_body(StatusCode::NOT_FOUND, "");
        let failure = CallFailure::Response(res);
        assert_eq!(failure.status(), Some(404));
        assert!(!failure.is_transport());
        assert!(failure.response().is_some());
    }
}
