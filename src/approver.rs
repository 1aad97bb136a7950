use tracing::info;

use crate::error::LeaveError;
use crate::model::leave_request::LeaveRequest;

/// Capability that can transition a pending leave request to approved.
///
/// The registry invokes every registered capability during an approval, so
/// richer policies (multi-level sign-off, conditional rules) slot in as
/// further implementations without touching the registry itself.
pub trait LeaveApprover {
    /// Name quoted in confirmations and log lines.
    fn name(&self) -> &'static str;

    /// Approve `request` if it is still pending. A non-pending request is
    /// reported back as [`LeaveError::AlreadyApproved`]; the caller treats
    /// that as non-fatal.
    fn approve(&self, request: &mut LeaveRequest) -> Result<(), LeaveError>;
}

/// Stock approver: signs off on any pending request.
pub struct Manager;

impl LeaveApprover for Manager {
    fn name(&self) -> &'static str {
        "Manager"
    }

    fn approve(&self, request: &mut LeaveRequest) -> Result<(), LeaveError> {
        if !request.is_pending() {
            return Err(LeaveError::AlreadyApproved(request.id));
        }
        request.approve();
        info!(
            request_id = %request.id,
            employee_id = %request.employee_id,
            "leave request approved by Manager"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::id::{EmployeeId, RequestId};
    use crate::model::leave_request::{LeaveStatus, LeaveType};
    use chrono::NaiveDate;

    fn pending_request() -> LeaveRequest {
        LeaveRequest::new(
            RequestId::from(1),
            EmployeeId::from(42),
            LeaveType::Annual,
            NaiveDate::from_ymd_opt(2026, 2, 2).unwrap(),
            NaiveDate::from_ymd_opt(2026, 2, 4).unwrap(),
        )
    }

    #[test]
    fn manager_approves_pending_request() {
        let mut request = pending_request();
        assert_eq!(Manager.approve(&mut request), Ok(()));
        assert_eq!(request.status, LeaveStatus::Approved);
    }

    #[test]
    fn manager_refuses_already_approved_request() {
        let mut request = pending_request();
        request.approve();
        assert_eq!(
            Manager.approve(&mut request),
            Err(LeaveError::AlreadyApproved(request.id))
        );
    }
}
