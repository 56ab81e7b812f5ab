//! Result type alias for Sieve

use super::errors::SieveError;

/// Result type alias for Sieve operations
///
/// # Examples
///
/// ```
/// use sieve::domain::result::Result;
/// use sieve::domain::errors::SieveError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(SieveError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, SieveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(SieveError::Validation("test error".to_string()));
        assert!(result.is_err());
    }
}
