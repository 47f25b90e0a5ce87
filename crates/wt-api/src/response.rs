//! Response bodies and status mapping.

use serde::{Deserialize, Serialize};
use wt_core::{DayCount, Error, Hours};
use wt_engine::CalculationMethod;

/// Basic success body: the resulting UTC instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicResponse {
    /// `YYYY-MM-DDTHH:MM:SS.mmmZ`.
    pub date: String,
}

/// Advanced success body with bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedResponse {
    /// `YYYY-MM-DDTHH:MM:SS.mmmZ`.
    pub date: String,
    /// Working days requested.
    pub working_days_added: DayCount,
    /// Working hours requested, terms summed.
    pub working_hours_added: Hours,
    /// Weekend days crossed.
    pub weekends_skipped: u32,
    /// Holidays crossed.
    pub holidays_skipped: u32,
    /// `"iterative"` or `"optimized"`.
    pub calculation_method: CalculationMethod,
}

/// Error body: a public error name and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// `InvalidParameters` or `InternalServerError`.
    pub error: String,
    /// What went wrong. Internal details are never included.
    pub message: String,
}

impl From<&Error> for ErrorResponse {
    fn from(err: &Error) -> Self {
        let message = match err {
            Error::InvalidParameters(msg) => msg.clone(),
            _ => "internal server error".to_string(),
        };
        Self {
            error: err.code().to_string(),
            message,
        }
    }
}

/// HTTP status for `err`: 400 for caller mistakes, 503 otherwise.
pub fn http_status(err: &Error) -> u16 {
    if err.is_client_error() {
        400
    } else {
        503
    }
}
