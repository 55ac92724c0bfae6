//! Result type alias for Tabmask

use super::errors::TabmaskError;

/// Result type alias for Tabmask operations
///
/// # Examples
///
/// ```
/// use tabmask::domain::result::Result;
/// use tabmask::domain::errors::TabmaskError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(TabmaskError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, TabmaskError>;
