//! Error mapping for hosted-backend responses
//!
//! PostgREST answers `{message, code, details, hint}`, the auth service
//! `{error_description}` / `{msg}` / `{error}`, storage `{message, error}`.

use serde::Deserialize;

use crate::domain::DomainError;

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    details: Option<String>,
}

/// Build a `DomainError::Backend` from a non-success status and raw body
pub fn map_status_error(status: u16, body: &[u8]) -> DomainError {
    let parsed: ErrorBody = serde_json::from_slice(body).unwrap_or_default();
    let message = [parsed.message, parsed.error_description, parsed.msg, parsed.error, parsed.details]
        .into_iter()
        .flatten()
        .map(|m| m.trim().to_string())
        .find(|m| !m.is_empty())
        .unwrap_or_else(|| fallback_message(status, body));
    DomainError::backend(status, message)
}

fn fallback_message(status: u16, body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        format!("HTTP {}", status)
    } else {
        format!("HTTP {}: {}", status, text.chars().take(200).collect::<String>())
    }
}

pub fn map_transport_error(err: reqwest::Error) -> DomainError {
    DomainError::Transport(err.to_string())
}

pub fn map_decode_error(err: serde_json::Error) -> DomainError {
    DomainError::Decode(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postgrest_body() {
        let body = br#"{"code":"PGRST200","details":"Searched for a foreign key","hint":null,"message":"Could not find a relationship between 'items' and 'profiles'"}"#;
        let err = map_status_error(400, body);
        assert_eq!(
            err,
            DomainError::backend(400, "Could not find a relationship between 'items' and 'profiles'")
        );
    }

    #[test]
    fn test_auth_body() {
        let body = br#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#;
        assert_eq!(map_status_error(400, body).user_message(), "Invalid login credentials");
        let body = br#"{"code":422,"msg":"User already registered"}"#;
        assert_eq!(map_status_error(422, body).user_message(), "User already registered");
    }

    #[test]
    fn test_non_json_body() {
        assert_eq!(map_status_error(502, b"").user_message(), "HTTP 502");
        assert_eq!(map_status_error(502, b"Bad Gateway").user_message(), "HTTP 502: Bad Gateway");
    }
}
