use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// Identifier of an employee record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, From,
)]
#[display(fmt = "{}", _0)]
#[serde(transparent)]
pub struct EmployeeId(u64);

/// Identifier of a leave request, allocated by the registry from a
/// monotonic counter. Distinct from [`EmployeeId`] so the two can never be
/// mixed up at a call site.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, From,
)]
#[display(fmt = "{}", _0)]
#[serde(transparent)]
pub struct RequestId(u64);
