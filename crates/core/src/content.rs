//! Validation limits for bilingual content records.

use crate::error::CoreError;

/// Maximum length of a news title, in characters.
pub const MAX_TITLE_CHARS: usize = 120;

/// Maximum length of a news body, in characters. Matches the ceiling the
/// admin form enforces.
pub const MAX_BODY_CHARS: usize = 250;

/// Maximum number of images attached to a single news post.
pub const MAX_MEDIA_PER_POST: usize = 10;

/// Validate a news title: non-empty after trimming, within the length cap.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Title must not be empty".into()));
    }
    if trimmed.chars().count() > MAX_TITLE_CHARS {
        return Err(CoreError::Validation(format!(
            "Title must be at most {MAX_TITLE_CHARS} characters"
        )));
    }
    Ok(())
}

/// Validate a news body: non-empty after trimming, within the length cap.
pub fn validate_body(body: &str) -> Result<(), CoreError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Body must not be empty".into()));
    }
    if trimmed.chars().count() > MAX_BODY_CHARS {
        return Err(CoreError::Validation(format!(
            "Body must be at most {MAX_BODY_CHARS} characters"
        )));
    }
    Ok(())
}

/// Validate the number of attached media files.
pub fn validate_media_count(count: usize) -> Result<(), CoreError> {
    if count > MAX_MEDIA_PER_POST {
        return Err(CoreError::Validation(format!(
            "At most {MAX_MEDIA_PER_POST} images per post, got {count}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_title_rejected() {
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
    }

    #[test]
    fn title_length_cap_is_in_characters_not_bytes() {
        // 120 multi-byte characters are fine; 121 are not.
        let ok: String = "æ".repeat(MAX_TITLE_CHARS);
        assert!(validate_title(&ok).is_ok());
        let too_long: String = "æ".repeat(MAX_TITLE_CHARS + 1);
        assert!(validate_title(&too_long).is_err());
    }

    #[test]
    fn body_cap_enforced() {
        let ok = "x".repeat(MAX_BODY_CHARS);
        assert!(validate_body(&ok).is_ok());
        let too_long = "x".repeat(MAX_BODY_CHARS + 1);
        assert!(validate_body(&too_long).is_err());
    }

    #[test]
    fn media_count_cap() {
        assert!(validate_media_count(0).is_ok());
        assert!(validate_media_count(MAX_MEDIA_PER_POST).is_ok());
        assert!(validate_media_count(MAX_MEDIA_PER_POST + 1).is_err());
    }
}
