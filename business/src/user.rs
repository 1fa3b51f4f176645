//! Wire models for the Stack Exchange `/users` listing.
//!
//! Only the two attributes this app renders are deserialized; everything
//! else in the payload is ignored. `has_more` and the rest of the response
//! metadata are deliberately not consulted.

use serde::Deserialize;
use thiserror::Error;

/// One user record as rendered by the list screen.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct UserItem {
    pub display_name: String,
    /// Avatar URI. Absent for some accounts; rows render without an avatar.
    #[serde(default)]
    pub profile_image: Option<String>,
}

impl UserItem {
    pub fn new(display_name: impl Into<String>, profile_image: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            profile_image: Some(profile_image.into()),
        }
    }
}

/// Envelope of the `/users` response.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UsersResponse {
    pub items: Vec<UserItem>,
}

/// Failure while fetching a page of users.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("API returned status: {0}")]
    Status(u16),
    #[error("failed to decode users response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("request failed: {0}")]
    Transport(String),
}

/// Decodes a `/users` response body, treating non-200 statuses as failures.
pub fn decode_users_response(status: u16, bytes: &[u8]) -> Result<Vec<UserItem>, FetchError> {
    if status != 200 {
        return Err(FetchError::Status(status));
    }
    let response: UsersResponse = serde_json::from_slice(bytes)?;
    Ok(response.items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let body = serde_json::json!({
            "items": [
                {
                    "display_name": "Jon Skeet",
                    "profile_image": "https://example.com/jon.png",
                    "reputation": 1_400_000,
                    "badge_counts": { "gold": 800 }
                }
            ],
            "has_more": true,
            "quota_remaining": 299
        });
        let items = decode_users_response(200, body.to_string().as_bytes()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].display_name, "Jon Skeet");
        assert_eq!(
            items[0].profile_image.as_deref(),
            Some("https://example.com/jon.png")
        );
    }

    #[test]
    fn test_decode_allows_missing_profile_image() {
        let body = r#"{ "items": [ { "display_name": "anon" } ] }"#;
        let items = decode_users_response(200, body.as_bytes()).unwrap();
        assert_eq!(items[0].profile_image, None);
    }

    #[test]
    fn test_decode_rejects_error_status() {
        let err = decode_users_response(502, b"").unwrap_err();
        assert!(matches!(err, FetchError::Status(502)));
        assert_eq!(err.to_string(), "API returned status: 502");
    }

    #[test]
    fn test_decode_rejects_malformed_body() {
        let err = decode_users_response(200, b"not json").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
