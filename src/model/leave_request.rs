use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use super::id::{EmployeeId, RequestId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LeaveType {
    Annual,
    Sick,
    Unpaid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: RequestId,
    pub employee_id: EmployeeId,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: LeaveStatus,
}

impl LeaveRequest {
    pub fn new(
        id: RequestId,
        employee_id: EmployeeId,
        leave_type: LeaveType,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            employee_id,
            leave_type,
            start_date,
            end_date,
            status: LeaveStatus::Pending,
        }
    }

    /// Whole days covered by the request, both endpoints inclusive.
    pub fn requested_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    pub fn approve(&mut self) {
        self.status = LeaveStatus::Approved;
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, LeaveStatus::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn leave_type_and_status_lowercase_forms() {
        // serde
        let lt: LeaveType = serde_json::from_str("\"annual\"").unwrap();
        assert!(matches!(lt, LeaveType::Annual));
        let vlt = serde_json::to_value(LeaveType::Unpaid).unwrap();
        assert_eq!(vlt, serde_json::json!("unpaid"));

        let vst = serde_json::to_value(LeaveStatus::Pending).unwrap();
        assert_eq!(vst, serde_json::json!("pending"));

        // strum
        assert_eq!(LeaveStatus::Approved.to_string(), "approved");
        assert!(matches!("Sick".parse::<LeaveType>(), Ok(LeaveType::Sick)));
        assert!("vacation".parse::<LeaveType>().is_err());
    }

    #[test]
    fn requested_days_counts_both_endpoints() {
        let request = LeaveRequest::new(
            RequestId::from(1),
            EmployeeId::from(1),
            LeaveType::Annual,
            date(2026, 3, 2),
            date(2026, 3, 6),
        );
        assert_eq!(request.requested_days(), 5);
    }

    #[test]
    fn single_day_request_is_one_day() {
        let request = LeaveRequest::new(
            RequestId::from(1),
            EmployeeId::from(1),
            LeaveType::Sick,
            date(2026, 3, 2),
            date(2026, 3, 2),
        );
        assert_eq!(request.requested_days(), 1);
    }

    #[test]
    fn approve_transitions_out_of_pending() {
        let mut request = LeaveRequest::new(
            RequestId::from(7),
            EmployeeId::from(1),
            LeaveType::Annual,
            date(2026, 1, 1),
            date(2026, 1, 2),
        );
        assert!(request.is_pending());
        request.approve();
        assert!(!request.is_pending());
        assert_eq!(request.status, LeaveStatus::Approved);
    }
}
