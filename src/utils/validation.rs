//! Argument presence checks
//!
//! Every check works over an ordered slice of `Option` values. The macros at
//! the bottom accept `Option` expressions of mixed types and forward to the
//! same functions.

use crate::error::ArgumentError;

/// True when every value is absent. An empty slice is vacuously all-absent.
pub fn are_null<T>(values: &[Option<T>]) -> bool {
    values.iter().all(Option::is_none)
}

/// True when every value is present. An empty slice is vacuously all-present.
pub fn are_not_null<T>(values: &[Option<T>]) -> bool {
    values.iter().all(Option::is_some)
}

/// Fail at the first absent value, reporting its index.
///
/// # Errors
/// Returns [`ArgumentError::NullArgument`] whose message is the decimal index
/// of the first `None`.
///
/// # Examples
/// ```
/// use utilbelt::utils::validation::require_non_null;
///
/// assert!(require_non_null(&[Some(1), Some(2)]).is_ok());
/// let err = require_non_null(&[Some(1), None, Some(3)]).unwrap_err();
/// assert_eq!(err.to_string(), "ArgumentError: 1");
/// ```
pub fn require_non_null<T>(values: &[Option<T>]) -> crate::Result<()> {
    if let Some(index) = values.iter().position(Option::is_none) {
        log::debug!("absent value at argument index {}", index);
        return Err(ArgumentError::NullArgument { index }.into());
    }
    Ok(())
}

/// Fail unless at least one value is present.
///
/// An empty slice has zero present values and therefore fails.
pub fn require_any_non_null<T>(values: &[Option<T>]) -> crate::Result<()> {
    if values.iter().filter(|v| v.is_some()).count() == 0 {
        log::debug!("all {} arguments are absent", values.len());
        return Err(ArgumentError::AllNull.into());
    }
    Ok(())
}

/// Push `value` onto `list` if it is present and hand the list back for chaining.
pub fn add_not_null<T>(list: &mut Vec<T>, value: Option<T>) -> &mut Vec<T> {
    if let Some(value) = value {
        list.push(value);
    }
    list
}

/// Reduce an optional argument of any type to its presence.
#[doc(hidden)]
pub fn presence<T>(value: &Option<T>) -> Option<()> {
    value.as_ref().map(|_| ())
}

/// Variadic form of [`are_null`](crate::utils::validation::are_null).
#[macro_export]
macro_rules! are_null {
    ($($value:expr),* $(,)?) => {
        $crate::utils::validation::are_null::<()>(&[$($crate::utils::validation::presence(&$value)),*])
    };
}

/// Variadic form of [`are_not_null`](crate::utils::validation::are_not_null).
#[macro_export]
macro_rules! are_not_null {
    ($($value:expr),* $(,)?) => {
        $crate::utils::validation::are_not_null::<()>(&[$($crate::utils::validation::presence(&$value)),*])
    };
}

/// Variadic form of [`require_non_null`](crate::utils::validation::require_non_null).
#[macro_export]
macro_rules! require_non_null {
    ($($value:expr),* $(,)?) => {
        $crate::utils::validation::require_non_null::<()>(&[$($crate::utils::validation::presence(&$value)),*])
    };
}

/// Variadic form of [`require_any_non_null`](crate::utils::validation::require_any_non_null).
#[macro_export]
macro_rules! require_any_non_null {
    ($($value:expr),* $(,)?) => {
        $crate::utils::validation::require_any_non_null::<()>(&[$($crate::utils::validation::presence(&$value)),*])
    };
}
