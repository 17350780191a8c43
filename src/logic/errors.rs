use anyhow::Error;

use crate::api::ApiError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    ConnectionRefused,
    Timeout,
    Unauthorized, // HTTP 401/403
    NotFound,     // HTTP 404
    ServerError,  // HTTP 500+
    NetworkError, // DNS, routing, etc.
    Other,
}

/// HTTP status carried by an error, if the server answered at all
pub fn status_code(error: &Error) -> Option<u16> {
    if let Some(ApiError::Status { status, .. }) = error.downcast_ref::<ApiError>() {
        return Some(*status);
    }
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<reqwest::Error>())
        .and_then(|e| e.status())
        .map(|s| s.as_u16())
}

/// Classify an error based on its type and error chain
pub fn classify_error(error: &Error) -> ErrorType {
    if let Some(status) = status_code(error) {
        return match status {
            401 | 403 => ErrorType::Unauthorized,
            404 => ErrorType::NotFound,
            500..=599 => ErrorType::ServerError,
            _ => ErrorType::Other,
        };
    }

    let error_msg = format!("{:#}", error).to_lowercase();

    if error_msg.contains("connection refused") {
        return ErrorType::ConnectionRefused;
    }
    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        return ErrorType::Timeout;
    }
    if error_msg.contains("dns") || error_msg.contains("network") {
        return ErrorType::NetworkError;
    }

    ErrorType::Other
}

/// Format error message for tech-savvy audience - show raw error details
pub fn format_error_message(error: &Error) -> String {
    if let Some(api_error) = error.downcast_ref::<ApiError>() {
        return api_error.to_string();
    }

    match classify_error(error) {
        ErrorType::ConnectionRefused => return "Cannot reach the server (connection refused)".to_string(),
        ErrorType::Timeout => return "The server took too long to answer".to_string(),
        _ => {}
    }

    // Walk the error chain to find reqwest::Error (most informative for network errors)
    for cause in error.chain() {
        if let Some(reqwest_err) = cause.downcast_ref::<reqwest::Error>() {
            return reqwest_err.to_string();
        }
    }

    // Otherwise the deepest (root cause) error
    error.root_cause().to_string()
}
