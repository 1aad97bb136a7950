use chrono::NaiveDate;
use thiserror::Error;

use crate::model::id::{EmployeeId, RequestId};

/// Every recoverable failure a registry operation can report. Nothing in
/// here is fatal to the process; the shell renders these as status lines.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeaveError {
    #[error("employee {0} not found")]
    EmployeeNotFound(EmployeeId),

    #[error("employee {0} already exists")]
    EmployeeExists(EmployeeId),

    #[error("leave request {0} not found")]
    RequestNotFound(RequestId),

    #[error("leave request {0} already approved")]
    AlreadyApproved(RequestId),

    #[error("insufficient leave balance: requested {requested} days, {available} available")]
    InsufficientBalance { requested: i64, available: i64 },

    #[error("end date {end} is before start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
}
