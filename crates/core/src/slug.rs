//! Slug generation and content-field validation.
//!
//! Every content resource is addressed publicly by a URL-safe slug derived
//! from its title (or name). The slug is only recomputed on update when the
//! title changes and the caller did not supply an explicit slug.

use crate::error::CoreError;

/// Generate a URL-safe slug from a title.
///
/// Converts to lowercase, replaces spaces and special characters with hyphens,
/// collapses consecutive hyphens, and trims leading/trailing hyphens.
pub fn generate_slug(title: &str) -> String {
    let slug: String = title
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c
            } else {
                '-'
            }
        })
        .collect();

    // Collapse consecutive hyphens.
    let mut result = String::with_capacity(slug.len());
    let mut prev_hyphen = false;
    for c in slug.chars() {
        if c == '-' {
            if !prev_hyphen {
                result.push('-');
            }
            prev_hyphen = true;
        } else {
            result.push(c);
            prev_hyphen = false;
        }
    }

    // Trim leading/trailing hyphens.
    result.trim_matches('-').to_string()
}

/// Validate a title (non-empty, <= 200 chars).
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title must not be empty".into()));
    }
    if title.len() > 200 {
        return Err(CoreError::Validation(
            "Title must be at most 200 characters".into(),
        ));
    }
    Ok(())
}

/// Validate a slug (non-empty, only lowercase alphanumeric + hyphens).
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("Slug must not be empty".into()));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(CoreError::Validation(
            "Slug must contain only lowercase alphanumeric characters and hyphens".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_title() {
        assert_eq!(generate_slug("Line Follower Robot"), "line-follower-robot");
    }

    #[test]
    fn special_characters_collapse() {
        assert_eq!(generate_slug("SaaS QR-Code  Generator!"), "saas-qr-code-generator");
    }

    #[test]
    fn leading_trailing_trimmed() {
        assert_eq!(generate_slug("  Smart Scales  "), "smart-scales");
    }

    #[test]
    fn already_a_slug() {
        assert_eq!(generate_slug("smart-scales"), "smart-scales");
    }

    #[test]
    fn empty_title_rejected() {
        assert!(validate_title("   ").is_err());
    }

    #[test]
    fn valid_slug_accepted() {
        assert!(validate_slug("line-follower-robot").is_ok());
    }

    #[test]
    fn uppercase_slug_rejected() {
        assert!(validate_slug("Line-Follower").is_err());
    }

    #[test]
    fn empty_slug_rejected() {
        assert!(validate_slug("").is_err());
    }
}
