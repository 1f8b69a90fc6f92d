//! JSON reply shapes produced by the College of Lore server.
//!
//! The server answers failures with `{"status": 404, "error": "CONTENT_NOT_FOUND"}`
//! (optionally with a `message`) and successes with `{"status": 200, "data": ...}`.
//! Anything else is passed through untouched.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error codes the server puts in the `error` field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ErrorCode {
    MalformedRequest,
    Unauthorized,
    Forbidden,
    ContentNotFound,
    InternalServerError,
    CorruptData,
    ServiceUnavailable,
    Conflict,
    ExpiredSignature,
    InvalidSignature,
    InvalidToken,
    NoAuth,
    NoAuthCookie,
    ExpiredAuthCookie,
    FailedLogin,
    /// A code this client does not know yet, kept verbatim.
    Unknown(String),
}

impl ErrorCode {
    pub fn as_str(&self) -> &str {
        match self {
            ErrorCode::MalformedRequest => "MALFORMED_REQUEST",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::ContentNotFound => "CONTENT_NOT_FOUND",
            ErrorCode::InternalServerError => "INTERNAL_SERVER_ERROR",
            ErrorCode::CorruptData => "CORRUPT_DATA",
            // Spelled the way the server sends it.
            ErrorCode::ServiceUnavailable => "SERVICE_UNAVILABLE",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::ExpiredSignature => "EXPIRED SIGNATURE",
            ErrorCode::InvalidSignature => "INVALID_SIGNATURE",
            ErrorCode::InvalidToken => "INVALID_TOKEN",
            ErrorCode::NoAuth => "NO_AUTH",
            ErrorCode::NoAuthCookie => "NO_AUTHCOOKIE",
            ErrorCode::ExpiredAuthCookie => "EXPIRED_AUTHCOOKIE",
            ErrorCode::FailedLogin => "FAILED_LOGIN",
            ErrorCode::Unknown(code) => code,
        }
    }
}

impl From<String> for ErrorCode {
    fn from(code: String) -> Self {
        match code.as_str() {
            "MALFORMED_REQUEST" => ErrorCode::MalformedRequest,
            "UNAUTHORIZED" => ErrorCode::Unauthorized,
            "FORBIDDEN" => ErrorCode::Forbidden,
            "CONTENT_NOT_FOUND" => ErrorCode::ContentNotFound,
            "INTERNAL_SERVER_ERROR" => ErrorCode::InternalServerError,
            "CORRUPT_DATA" => ErrorCode::CorruptData,
            "SERVICE_UNAVILABLE" | "SERVICE_UNAVAILABLE" => ErrorCode::ServiceUnavailable,
            "CONFLICT" => ErrorCode::Conflict,
            "EXPIRED SIGNATURE" | "EXPIRED_SIGNATURE" => ErrorCode::ExpiredSignature,
            "INVALID_SIGNATURE" => ErrorCode::InvalidSignature,
            "INVALID_TOKEN" => ErrorCode::InvalidToken,
            "NO_AUTH" => ErrorCode::NoAuth,
            "NO_AUTHCOOKIE" => ErrorCode::NoAuthCookie,
            "EXPIRED_AUTHCOOKIE" => ErrorCode::ExpiredAuthCookie,
            "FAILED_LOGIN" => ErrorCode::FailedLogin,
            _ => ErrorCode::Unknown(code),
        }
    }
}

impl From<ErrorCode> for String {
    fn from(code: ErrorCode) -> Self {
        match code {
            ErrorCode::Unknown(code) => code,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure reply: `{"status", "error", "message"?}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReply {
    pub status: u16,
    pub error: ErrorCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorReply {
    /// Text to show the user: the server's own message if it sent one,
    /// otherwise the canned message for the status code.
    pub fn user_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| status_message(self.status).to_string())
    }
}

/// Data envelope: `{"status"?, "data"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    pub data: Value,
}

/// A parsed JSON reply, classified by shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerReply {
    Data(DataReply),
    Error(ErrorReply),
    /// JSON that matches neither envelope.
    Other(Value),
}

impl ServerReply {
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return ServerReply::Other(value.clone());
        };

        if object.get("error").is_some_and(Value::is_string) {
            if let Ok(reply) = serde_json::from_value::<ErrorReply>(value.clone()) {
                return ServerReply::Error(reply);
            }
        }

        if object.contains_key("data") {
            if let Ok(reply) = serde_json::from_value::<DataReply>(value.clone()) {
                return ServerReply::Data(reply);
            }
        }

        ServerReply::Other(value.clone())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ServerReply::Error(_))
    }
}

/// Message the server's error pages show for a status code.
pub fn status_message(status: u16) -> &'static str {
    match status {
        400 => {
            "You seem to be speaking a dialect of some exotic language, that our scribes sadly cannot understand. Maybe you can try again in Common or Elvish?"
        }
        401 => {
            "Maybe we can help you find the scrolls you seek, but first let me ask: Who are you?"
        }
        403 => "The knowledge you seek is forbidden!",
        404 => {
            "Sadly, we do not have the scrolls you seek. Maybe if you stumble upon them during your travels, you can donate them to the college?"
        }
        410 => {
            "The college has the scrolls you are looking for but sadly they are half burnt and barely readable. We will dispose of them as soon as possible."
        }
        500 => {
            "When trying to fetch the Lore you requested, one of our students actually managed to collapse the whole corridor! We will try to get him out of there and bring you your scrolls as soon as possible. Maybe you'll find other stories interesting in the meantime?"
        }
        503 => "The college is currently closed for maintenance. We will open up again shortly",
        _ => "Something very unexpected happened.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classifies_error_reply() {
        let reply = ServerReply::from_value(&json!({ "status": 400, "error": "FAILED_LOGIN" }));
        assert_eq!(
            reply,
            ServerReply::Error(ErrorReply {
                status: 400,
                error: ErrorCode::FailedLogin,
                message: None,
            })
        );
        assert!(reply.is_error());
    }

    #[test]
    fn test_error_reply_keeps_server_message() {
        let reply = ServerReply::from_value(&json!({
            "status": 409,
            "error": "CONFLICT",
            "message": "The request has been cancelled"
        }));
        let ServerReply::Error(err) = reply else {
            panic!("expected error reply");
        };
        assert_eq!(err.error, ErrorCode::Conflict);
        assert_eq!(err.user_message(), "The request has been cancelled");
    }

    #[test]
    fn test_error_reply_falls_back_to_status_message() {
        let err = ErrorReply {
            status: 403,
            error: ErrorCode::Forbidden,
            message: None,
        };
        assert_eq!(err.user_message(), "The knowledge you seek is forbidden!");
    }

    #[test]
    fn test_classifies_data_reply() {
        let reply = ServerReply::from_value(&json!({ "status": 200, "data": "6554b1" }));
        assert_eq!(
            reply,
            ServerReply::Data(DataReply {
                status: Some(200),
                data: json!("6554b1"),
            })
        );
    }

    #[test]
    fn test_other_json_passes_through() {
        let value = json!({ "ok": true });
        assert_eq!(ServerReply::from_value(&value), ServerReply::Other(value));
        assert_eq!(
            ServerReply::from_value(&json!([1, 2])),
            ServerReply::Other(json!([1, 2]))
        );
    }

    #[test]
    fn test_error_code_wire_spellings() {
        let code: ErrorCode = serde_json::from_value(json!("SERVICE_UNAVILABLE")).unwrap();
        assert_eq!(code, ErrorCode::ServiceUnavailable);

        let code: ErrorCode = serde_json::from_value(json!("EXPIRED SIGNATURE")).unwrap();
        assert_eq!(code, ErrorCode::ExpiredSignature);
        assert_eq!(serde_json::to_value(&code).unwrap(), json!("EXPIRED SIGNATURE"));

        let code: ErrorCode = serde_json::from_value(json!("DRAGONS")).unwrap();
        assert_eq!(code, ErrorCode::Unknown("DRAGONS".to_string()));
        assert_eq!(code.to_string(), "DRAGONS");
    }

    #[test]
    fn test_unlisted_status_gets_generic_message() {
        assert_eq!(status_message(418), "Something very unexpected happened.");
    }
}
