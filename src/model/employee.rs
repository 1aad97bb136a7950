use serde::{Deserialize, Serialize};

use super::id::EmployeeId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub leave_balance: i64,
}
