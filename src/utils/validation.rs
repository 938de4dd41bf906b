use crate::utils::error::{FetchError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Parses `url_str` and checks it is an absolute http(s) URL.
pub fn validate_url(url_str: &str) -> Result<Url> {
    if url_str.trim().is_empty() {
        return Err(FetchError::InvalidTarget {
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(FetchError::InvalidTarget {
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(FetchError::InvalidTarget {
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_targets(targets: &[&str]) -> Result<()> {
    for target in targets {
        validate_url(target)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("https://example.com/data.json").is_ok());
        assert!(validate_url("http://127.0.0.1:8080/a").is_ok());
        assert!(validate_url("").is_err());
        assert!(validate_url("   ").is_err());
        assert!(validate_url("not a url").is_err());
        assert!(validate_url("ftp://example.com/data.json").is_err());
    }

    #[test]
    fn test_validate_targets_reports_first_bad_entry() {
        let err = validate_targets(&["https://example.com/a", "ftp://example.com/b"]).unwrap_err();
        match err {
            FetchError::InvalidTarget { value, reason } => {
                assert_eq!(value, "ftp://example.com/b");
                assert!(reason.contains("ftp"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_validate_targets_accepts_empty_list() {
        assert!(validate_targets(&[]).is_ok());
    }
}
