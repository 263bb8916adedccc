//! DTOs for the save endpoint.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use validator::{Validate, ValidationError};

/// Allowed characters for caller-chosen aliases. Empty means "generate one".
static ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]*$").expect("alias regex is valid"));

/// Path segments owned by fixed routes. `GET /url` never reaches the
/// redirect handler, so these cannot be used as aliases.
pub const RESERVED_ALIASES: &[&str] = &["url"];

fn validate_not_reserved(alias: &str) -> Result<(), ValidationError> {
    if RESERVED_ALIASES.contains(&alias) {
        return Err(ValidationError::new("reserved"));
    }
    Ok(())
}

/// Request to bind a URL to an alias.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    /// Destination URL (required, must parse as an absolute URL).
    #[serde(default)]
    #[validate(length(min = 1), url)]
    pub url: String,

    /// Optional caller-chosen alias; omitted or empty lets the store generate one.
    #[validate(
        length(max = 64),
        regex(path = *ALIAS_REGEX),
        custom(function = "validate_not_reserved")
    )]
    pub alias: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(url: &str, alias: Option<&str>) -> SaveRequest {
        SaveRequest {
            url: url.to_string(),
            alias: alias.map(str::to_string),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request("https://google.com", Some("google")).validate().is_ok());
        assert!(request("https://google.com", None).validate().is_ok());
        assert!(request("https://google.com", Some("")).validate().is_ok());
        assert!(request("https://google.com", Some("My_Link-2")).validate().is_ok());
    }

    #[test]
    fn test_empty_url_rejected() {
        let errors = request("", None).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("url"));
    }

    #[test]
    fn test_invalid_url_rejected() {
        assert!(request("not-a-url", None).validate().is_err());
    }

    #[test]
    fn test_alias_charset() {
        assert!(request("https://google.com", Some("has space")).validate().is_err());
        assert!(request("https://google.com", Some("slash/alias")).validate().is_err());
    }

    #[test]
    fn test_reserved_alias_rejected() {
        let errors = request("https://google.com", Some("url")).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("alias"));

        assert!(request("https://google.com", Some("URL")).validate().is_ok());
        assert!(request("https://google.com", Some("urls")).validate().is_ok());
    }

    #[test]
    fn test_alias_too_long() {
        let alias = "a".repeat(65);
        assert!(request("https://google.com", Some(&alias)).validate().is_err());
    }

    #[test]
    fn test_deserialize_without_alias() {
        let req: SaveRequest = serde_json::from_str(r#"{"url": "https://google.com"}"#).unwrap();
        assert_eq!(req.url, "https://google.com");
        assert!(req.alias.is_none());
    }
}
