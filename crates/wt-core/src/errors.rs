//! Error types for worktime-rs.
//!
//! A single `thiserror`-derived enum covers caller mistakes, upstream
//! outages, guard trips inside the walkers, and configuration problems.
//! The `ensure!` and `fail!` macros defined here are the shorthand used for
//! precondition checks and internal failures.

use thiserror::Error;

/// The top-level error type used throughout worktime-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Missing, negative, non-numeric, or otherwise malformed request input.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// A holiday key was not an exact `YYYY-MM-DD` date.
    #[error("date error: {0}")]
    Date(String),

    /// The holiday source could not be reached or returned garbage.
    #[error("holiday source unavailable: {0}")]
    UpstreamUnavailable(String),

    /// A walk scanned more consecutive non-working days than allowed.
    #[error("no working day within {limit} days of {from}")]
    LookaheadExceeded {
        /// Civil date the scan started from.
        from: String,
        /// The configured lookahead limit.
        limit: u32,
    },

    /// Settings could not be loaded or violate their invariants.
    #[error("configuration error: {0}")]
    Config(String),

    /// Anything else; always a defect.
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Public error name reported to callers.
    ///
    /// Internal state never leaks through this name: every defect collapses
    /// to `InternalServerError`.
    pub fn code(&self) -> &'static str {
        if self.is_client_error() {
            "InvalidParameters"
        } else {
            "InternalServerError"
        }
    }

    /// Return `true` if the caller can fix this error by changing the request.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::InvalidParameters(_))
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Error::Config(err.to_string())
    }
}

/// Shorthand `Result` type used throughout worktime-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidParameters(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use wt_core::{ensure, errors::Error};
/// fn non_negative(x: f64) -> wt_core::errors::Result<f64> {
///     ensure!(x >= 0.0, "quantity must be non-negative, got {x}");
///     Ok(x)
/// }
/// assert!(non_negative(1.0).is_ok());
/// assert!(matches!(non_negative(-1.0), Err(Error::InvalidParameters(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidParameters(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Internal(...))` immediately.
///
/// # Example
/// ```
/// use wt_core::{fail, errors::Error};
/// fn always_err() -> wt_core::errors::Result<()> {
///     fail!("walker left the working window");
/// }
/// assert!(matches!(always_err(), Err(Error::Internal(_))));
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Internal(format!($($msg)*)))
    };
}
