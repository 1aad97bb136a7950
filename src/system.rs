use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};

use crate::approver::{LeaveApprover, Manager};
use crate::error::LeaveError;
use crate::model::employee::Employee;
use crate::model::id::{EmployeeId, RequestId};
use crate::model::leave_request::{LeaveRequest, LeaveType};

/// Snapshot returned by [`LeaveSystem::leave_history`]: the employee's
/// current balance plus their requests in submission order.
#[derive(Debug, Clone, Serialize)]
pub struct LeaveHistory {
    pub employee_id: EmployeeId,
    pub name: String,
    pub leave_balance: i64,
    pub requests: Vec<LeaveRequest>,
}

/// In-memory leave registry. Owns every employee, every leave request, and
/// the approver capabilities; all four operations run synchronously on the
/// owning thread (`&mut self` makes the single-actor assumption explicit).
pub struct LeaveSystem {
    employees: BTreeMap<EmployeeId, Employee>,
    requests: Vec<LeaveRequest>,
    approvers: Vec<Box<dyn LeaveApprover>>,
    next_request_id: u64,
}

impl Default for LeaveSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl LeaveSystem {
    /// An empty registry with the stock [`Manager`] approver registered.
    pub fn new() -> Self {
        Self {
            employees: BTreeMap::new(),
            requests: Vec::new(),
            approvers: vec![Box::new(Manager)],
            next_request_id: 1,
        }
    }

    /// Registers a further approver capability. Every registered capability
    /// is invoked on each approval, in registration order.
    pub fn register_approver(&mut self, approver: Box<dyn LeaveApprover>) {
        self.approvers.push(approver);
    }

    /// Adds an employee with an opening leave balance. Employee ids are
    /// unique keys; re-adding an existing id is rejected.
    pub fn add_employee(
        &mut self,
        id: EmployeeId,
        name: String,
        leave_balance: i64,
    ) -> Result<(), LeaveError> {
        if self.employees.contains_key(&id) {
            warn!(employee_id = %id, "refusing to add duplicate employee");
            return Err(LeaveError::EmployeeExists(id));
        }
        info!(employee_id = %id, name = %name, leave_balance, "employee added");
        self.employees.insert(
            id,
            Employee {
                id,
                name,
                leave_balance,
            },
        );
        Ok(())
    }

    /// Submits a leave request for the inclusive date range. On success the
    /// employee's balance is decremented by the requested days and the
    /// allocated [`RequestId`] is returned; on failure nothing is mutated.
    pub fn request_leave(
        &mut self,
        employee_id: EmployeeId,
        leave_type: LeaveType,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<RequestId, LeaveError> {
        let Some(employee) = self.employees.get_mut(&employee_id) else {
            warn!(employee_id = %employee_id, "leave requested for unknown employee");
            return Err(LeaveError::EmployeeNotFound(employee_id));
        };

        if end_date < start_date {
            return Err(LeaveError::EndBeforeStart {
                start: start_date,
                end: end_date,
            });
        }

        let id = RequestId::from(self.next_request_id);
        let request = LeaveRequest::new(id, employee_id, leave_type, start_date, end_date);
        let requested = request.requested_days();

        if employee.leave_balance < requested {
            warn!(
                employee_id = %employee_id,
                requested,
                available = employee.leave_balance,
                "insufficient leave balance"
            );
            return Err(LeaveError::InsufficientBalance {
                requested,
                available: employee.leave_balance,
            });
        }

        employee.leave_balance -= requested;
        info!(
            request_id = %id,
            employee_id = %employee_id,
            leave_type = %leave_type,
            requested,
            balance = employee.leave_balance,
            "leave request submitted"
        );
        self.next_request_id += 1;
        self.requests.push(request);
        Ok(id)
    }

    /// Runs every registered approver against the pending request with this
    /// id and returns the names of those that approved. An approver refusal
    /// is logged and skipped; a missing or already-approved request fails
    /// the operation as a whole.
    pub fn approve_leave(&mut self, request_id: RequestId) -> Result<Vec<String>, LeaveError> {
        let Some(request) = self.requests.iter_mut().find(|r| r.id == request_id) else {
            warn!(request_id = %request_id, "leave request not found");
            return Err(LeaveError::RequestNotFound(request_id));
        };
        if !request.is_pending() {
            warn!(request_id = %request_id, "leave request already approved");
            return Err(LeaveError::AlreadyApproved(request_id));
        }

        let mut approved_by = Vec::with_capacity(self.approvers.len());
        for approver in &self.approvers {
            match approver.approve(request) {
                Ok(()) => approved_by.push(approver.name().to_string()),
                Err(error) => warn!(
                    request_id = %request_id,
                    approver = approver.name(),
                    %error,
                    "approver did not approve"
                ),
            }
        }
        Ok(approved_by)
    }

    /// Balance and per-employee request history, in submission order.
    pub fn leave_history(&self, employee_id: EmployeeId) -> Result<LeaveHistory, LeaveError> {
        let employee = self
            .employees
            .get(&employee_id)
            .ok_or(LeaveError::EmployeeNotFound(employee_id))?;
        let requests = self
            .requests
            .iter()
            .filter(|r| r.employee_id == employee_id)
            .cloned()
            .collect();
        Ok(LeaveHistory {
            employee_id,
            name: employee.name.clone(),
            leave_balance: employee.leave_balance,
            requests,
        })
    }

    pub fn employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.get(&id)
    }

    pub fn request(&self, id: RequestId) -> Option<&LeaveRequest> {
        self.requests.iter().find(|r| r.id == id)
    }
}
