//! Error types for designpatterns-rs.
//!
//! The C++ catalogue signals failure with `std::runtime_error` and
//! `std::invalid_argument` throws scattered through the pattern classes.
//! Those collapse here into a single `thiserror`-derived enum, with the
//! `ensure!` and `fail!` convenience macros standing in for the ad-hoc
//! `if (...) throw ...` guards.
//!
//! Every error is local and synchronous: operations either complete before
//! returning or surface one of these variants immediately. Nothing is
//! retried or swallowed internally.

use thiserror::Error;

/// The top-level error type used throughout designpatterns-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// An operation was attempted before its required setup, e.g. executing
    /// a query before the connection was established.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// An invariant check after an operation failed.
    #[error("postcondition not satisfied: {0}")]
    Postcondition(String),

    /// Malformed input, e.g. an unrecognised type discriminator passed to a
    /// factory, or triangle sides that violate the triangle inequality.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A registry lookup missed. Lookup misses are surfaced explicitly —
    /// never as a null-like default silently treated as success.
    #[error("no entry registered under key `{key}`")]
    NotFound {
        /// The key that was looked up.
        key: String,
    },
}

/// Shorthand `Result` type used throughout designpatterns-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Guard a precondition.
///
/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use dp_core::ensure;
/// fn positive(x: f64) -> dp_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Guard a postcondition.
///
/// Returns `Err(Error::Postcondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use dp_core::ensure_post;
/// fn halve(x: u32) -> dp_core::errors::Result<u32> {
///     let half = x / 2;
///     ensure_post!(half * 2 == x, "{x} is not evenly divisible");
///     Ok(half)
/// }
/// assert!(halve(4).is_ok());
/// assert!(halve(5).is_err());
/// ```
#[macro_export]
macro_rules! ensure_post {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Postcondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Bail out with a runtime error.
///
/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use dp_core::fail;
/// fn always_err() -> dp_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
