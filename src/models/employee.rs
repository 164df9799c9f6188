use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{DepartmentId, EmployeeId, LocationId, Pagination};

/// Everything about an employee except the storage-assigned id.
///
/// Optional attributes are `None` when absent; an empty string is never a
/// stored value (see [`EmployeeRecord::normalized`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub name: String,
    pub email: String,
    pub corporate_email: String,
    #[serde(default)]
    pub department_id: Option<DepartmentId>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub location_id: Option<LocationId>,
    #[serde(default)]
    pub time_at_company: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub generation: Option<String>,
    #[serde(default)]
    pub response_date: Option<NaiveDate>,
    #[serde(default)]
    pub position_interest: Option<i32>,
    #[serde(default)]
    pub position_interest_comments: Option<String>,
    #[serde(default)]
    pub contribution: Option<i32>,
    #[serde(default)]
    pub contribution_comments: Option<String>,
    #[serde(default)]
    pub learning_development: Option<i32>,
    #[serde(default)]
    pub learning_development_comments: Option<String>,
    #[serde(default)]
    pub feedback: Option<i32>,
    #[serde(default)]
    pub feedback_comments: Option<String>,
    #[serde(default)]
    pub manager_interaction: Option<i32>,
    #[serde(default)]
    pub manager_interaction_comments: Option<String>,
    #[serde(default)]
    pub career_clarity: Option<i32>,
    #[serde(default)]
    pub career_clarity_comments: Option<String>,
    #[serde(default)]
    pub retention_expectation: Option<i32>,
    #[serde(default)]
    pub retention_expectation_comments: Option<String>,
    #[serde(default)]
    pub enps: Option<i32>,
    #[serde(default)]
    pub enps_comments: Option<String>,
    #[serde(default)]
    pub open_enps: Option<String>,
}

impl EmployeeRecord {
    /// Turns every `Some("")` optional text field into `None`.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        for field in [
            &mut self.position,
            &mut self.role,
            &mut self.time_at_company,
            &mut self.gender,
            &mut self.generation,
            &mut self.position_interest_comments,
            &mut self.contribution_comments,
            &mut self.learning_development_comments,
            &mut self.feedback_comments,
            &mut self.manager_interaction_comments,
            &mut self.career_clarity_comments,
            &mut self.retention_expectation_comments,
            &mut self.enps_comments,
            &mut self.open_enps,
        ] {
            if field.as_deref() == Some("") {
                *field = None;
            }
        }
        self
    }

    /// Returns the name of the first required field that is blank.
    #[must_use]
    pub fn missing_required_field(&self) -> Option<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("corporateEmail", &self.corporate_email),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    #[serde(flatten)]
    pub record: EmployeeRecord,
}

impl Employee {
    #[must_use]
    pub const fn new(id: EmployeeId, record: EmployeeRecord) -> Self {
        Self { id, record }
    }
}

/// One page of the employee listing, in its wire shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePage {
    pub employees: Vec<Employee>,
    pub total_count: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

impl EmployeePage {
    #[must_use]
    pub const fn new(employees: Vec<Employee>, total_count: u64, pagination: Pagination) -> Self {
        Self {
            employees,
            total_count,
            page: pagination.page(),
            page_size: pagination.page_size(),
            total_pages: pagination.total_pages(total_count),
        }
    }
}
