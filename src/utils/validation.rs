//! Argument guards
//!
//! Pass-through validation for required arguments. Each guard returns its
//! input unchanged on success so calls can be chained while building values.
//! A missing argument and an empty one are reported as distinct errors.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use thiserror::Error;

/// Failure raised by the argument guards
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// A required argument was not supplied
    #[error("null argument: {0}")]
    NullArgument(String),
    /// A required collection or string was supplied but empty
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl ArgumentError {
    /// The message the caller attached to the guard
    pub fn message(&self) -> &str {
        match self {
            ArgumentError::NullArgument(message) | ArgumentError::InvalidArgument(message) => {
                message
            }
        }
    }
}

/// Ensures an optional argument is present
///
/// # Arguments
/// - `reference` - The argument to check
/// - `message` - Message carried by the error on failure
///
/// # Returns
/// The contained value, unchanged
///
/// # Errors
/// `ArgumentError::NullArgument` when `reference` is `None`.
pub fn check_not_null<T>(reference: Option<T>, message: &str) -> Result<T, ArgumentError> {
    reference.ok_or_else(|| ArgumentError::NullArgument(message.to_string()))
}

/// Collections that can report whether they hold any items
pub trait Emptiable {
    /// Returns `true` when the collection holds no items
    fn is_empty(&self) -> bool;
}

impl<C: Emptiable + ?Sized> Emptiable for &C {
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }
}

macro_rules! impl_emptiable {
    ($($ty:ty => [$($generics:tt)*]),* $(,)?) => {
        $(
            impl<$($generics)*> Emptiable for $ty {
                fn is_empty(&self) -> bool {
                    self.len() == 0
                }
            }
        )*
    };
}

impl_emptiable! {
    [T] => [T],
    Vec<T> => [T],
    VecDeque<T> => [T],
    HashSet<T, S> => [T, S],
    BTreeSet<T> => [T],
    HashMap<K, V, S> => [K, V, S],
    BTreeMap<K, V> => [K, V],
}

/// Ensures a collection is present and holds at least one item
///
/// # Errors
/// - `ArgumentError::NullArgument` when `reference` is `None`
/// - `ArgumentError::InvalidArgument` when the collection is empty
pub fn check_not_empty<C: Emptiable>(
    reference: Option<C>,
    message: &str,
) -> Result<C, ArgumentError> {
    let reference = check_not_null(reference, message)?;
    if Emptiable::is_empty(&reference) {
        return Err(ArgumentError::InvalidArgument(message.to_string()));
    }
    Ok(reference)
}

/// Ensures a string is present and non-empty
///
/// Only emptiness is rejected; a string of whitespace passes.
///
/// # Errors
/// - `ArgumentError::NullArgument` when `reference` is `None`
/// - `ArgumentError::InvalidArgument` when the string is empty
pub fn check_not_blank<S: AsRef<str>>(
    reference: Option<S>,
    message: &str,
) -> Result<S, ArgumentError> {
    let reference = check_not_null(reference, message)?;
    if reference.as_ref().is_empty() {
        return Err(ArgumentError::InvalidArgument(message.to_string()));
    }
    Ok(reference)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_not_null_passes_value_through() {
        assert_eq!(check_not_null(Some(5), "count == null"), Ok(5));
    }

    #[test]
    fn test_check_not_null_reports_message() {
        let err = check_not_null::<u8>(None, "source == null").unwrap_err();
        assert_eq!(err, ArgumentError::NullArgument("source == null".to_string()));
        assert_eq!(err.to_string(), "null argument: source == null");
    }

    #[test]
    fn test_check_not_empty_on_borrowed_slice() {
        let values = [1, 2, 3];
        let checked = check_not_empty(Some(&values[..]), "values").unwrap();
        assert_eq!(checked, &[1, 2, 3]);
    }

    #[test]
    fn test_check_not_empty_rejects_empty_map() {
        let map: std::collections::HashMap<u8, u8> = std::collections::HashMap::new();
        assert!(matches!(
            check_not_empty(Some(map), "map"),
            Err(ArgumentError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_check_not_blank_allows_whitespace() {
        assert_eq!(check_not_blank(Some("  "), "query"), Ok("  "));
    }

    #[test]
    fn test_check_not_blank_rejects_empty() {
        let err = check_not_blank(Some(String::new()), "query").unwrap_err();
        assert_eq!(err.message(), "query");
        assert!(matches!(err, ArgumentError::InvalidArgument(_)));
    }
}
