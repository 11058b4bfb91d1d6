// file: src/utils/validation.rs
// description: data validation utilities and helpers
// reference: input validation patterns

use crate::error::{FetchError, Result};

pub struct Validator;

impl Validator {
    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(FetchError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    pub fn validate_search_terms(terms: &[String]) -> Result<()> {
        if terms.is_empty() {
            return Err(FetchError::Validation(
                "At least one search term is required".to_string(),
            ));
        }

        if let Some(pos) = terms.iter().position(|t| t.trim().is_empty()) {
            return Err(FetchError::Validation(format!(
                "Search term #{} is blank",
                pos + 1
            )));
        }

        Ok(())
    }

    /// Present and not just whitespace.
    pub fn non_blank(value: Option<&str>) -> Option<&str> {
        value.map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        if text.chars().count() <= max_chars {
            text.to_string()
        } else {
            let head: String = text.chars().take(max_chars).collect();
            format!("{}...", head)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(Validator::validate_url("https://cults3d.com/graphql").is_ok());
        assert!(Validator::validate_url("http://127.0.0.1:8080").is_ok());
        assert!(Validator::validate_url("cults3d.com").is_err());
        assert!(Validator::validate_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_search_terms() {
        assert!(Validator::validate_search_terms(&["dnd".to_string()]).is_ok());
        assert!(Validator::validate_search_terms(&[]).is_err());
        assert!(
            Validator::validate_search_terms(&["anime".to_string(), "\t".to_string()]).is_err()
        );
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(Validator::non_blank(Some(" x ")), Some("x"));
        assert_eq!(Validator::non_blank(Some("   ")), None);
        assert_eq!(Validator::non_blank(None), None);
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(Validator::truncate_text("short", 10), "short");
        assert_eq!(
            Validator::truncate_text("this is a very long text", 10),
            "this is a ..."
        );
        assert_eq!(Validator::truncate_text("ééééé", 2), "éé...");
    }
}
