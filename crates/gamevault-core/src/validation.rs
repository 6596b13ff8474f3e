//! # Validation Module
//!
//! Input validation utilities for GameVault.
//!
//! Validation runs at the API boundary, before business logic and before
//! any state is mutated. The database constraints (NOT NULL, CHECK, foreign
//! keys) back these checks up as a second layer.
//!
//! ## Usage
//! ```rust
//! use gamevault_core::validation::{validate_price_cents, validate_quantity};
//!
//! validate_price_cents(1099).unwrap();
//! validate_quantity(5).unwrap();
//! ```

use crate::error::ValidationError;
use crate::{ALLOWED_BANNER_EXTENSIONS, IMAGE_CONTENT_TYPE_PREFIX, MAX_ITEM_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a game title.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use gamevault_core::validation::validate_title;
///
/// assert!(validate_title("Half-Life 3").is_ok());
/// assert!(validate_title("").is_err());
/// ```
pub fn validate_title(title: &str) -> ValidationResult<()> {
    let title = title.trim();

    if title.is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    if title.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "title".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a UUID string format.
///
/// ## Example
/// ```rust
/// use gamevault_core::validation::validate_uuid;
///
/// assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_uuid("not-a-uuid").is_err());
/// ```
pub fn validate_uuid(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free games)
///
/// ## Example
/// ```rust
/// use gamevault_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(1099).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a line item quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// Banner Upload Validators
// =============================================================================

/// Validates that an uploaded payload is non-empty.
pub fn validate_payload_non_empty(len: usize) -> ValidationResult<()> {
    if len == 0 {
        return Err(ValidationError::Required {
            field: "file".to_string(),
        });
    }

    Ok(())
}

/// Validates the declared content type of a banner upload.
///
/// The declared media type must begin with `image/`.
pub fn validate_image_content_type(content_type: &str) -> ValidationResult<()> {
    if !content_type.starts_with(IMAGE_CONTENT_TYPE_PREFIX) {
        return Err(ValidationError::InvalidFormat {
            field: "file".to_string(),
            reason: "content type must be an image".to_string(),
        });
    }

    Ok(())
}

/// Extracts and validates the file extension of a banner upload.
///
/// ## Rules
/// - Extension is taken from the last `.` of the filename, lowercased
/// - Must be one of `.jpg`, `.jpeg`, `.png`, `.gif`
///
/// ## Returns
/// The normalized (lowercase, dot-prefixed) extension.
///
/// ## Example
/// ```rust
/// use gamevault_core::validation::validate_banner_extension;
///
/// assert_eq!(validate_banner_extension("cover.PNG").unwrap(), ".png");
/// assert!(validate_banner_extension("cover.bmp").is_err());
/// assert!(validate_banner_extension("cover").is_err());
/// ```
pub fn validate_banner_extension(filename: &str) -> ValidationResult<String> {
    let extension = filename
        .rfind('.')
        .map(|idx| filename[idx..].to_lowercase())
        .unwrap_or_default();

    if !ALLOWED_BANNER_EXTENSIONS.contains(&extension.as_str()) {
        return Err(ValidationError::NotAllowed {
            field: "file extension".to_string(),
            allowed: ALLOWED_BANNER_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        });
    }

    Ok(extension)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_title() {
        assert!(validate_title("Half-Life 3").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
        assert!(validate_title(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_uuid() {
        assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_uuid("").is_err());
        assert!(validate_uuid("not-a-uuid").is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(1099).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_payload_non_empty() {
        assert!(validate_payload_non_empty(1).is_ok());
        assert!(validate_payload_non_empty(0).is_err());
    }

    #[test]
    fn test_validate_image_content_type() {
        assert!(validate_image_content_type("image/png").is_ok());
        assert!(validate_image_content_type("image/jpeg").is_ok());

        assert!(validate_image_content_type("application/pdf").is_err());
        assert!(validate_image_content_type("text/plain").is_err());
    }

    #[test]
    fn test_validate_banner_extension() {
        assert_eq!(validate_banner_extension("a.jpg").unwrap(), ".jpg");
        assert_eq!(validate_banner_extension("a.jpeg").unwrap(), ".jpeg");
        assert_eq!(validate_banner_extension("a.png").unwrap(), ".png");
        assert_eq!(validate_banner_extension("a.gif").unwrap(), ".gif");
        // Case-insensitive on the extension
        assert_eq!(validate_banner_extension("COVER.PNG").unwrap(), ".png");

        assert!(validate_banner_extension("a.bmp").is_err());
        assert!(validate_banner_extension("a.svg").is_err());
        assert!(validate_banner_extension("no-extension").is_err());
        assert!(validate_banner_extension("").is_err());
    }
}
