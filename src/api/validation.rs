use super::ApiError;
use crate::domain::EmployeeId;

/// Parses the `{id}` path segment of the employee routes.
pub fn parse_employee_id(raw: &str) -> Result<EmployeeId, ApiError> {
    raw.parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .map(EmployeeId::new)
        .ok_or_else(|| ApiError::validation("Invalid employee ID"))
}
