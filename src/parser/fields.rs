//! Field-level parsing for survey export rows.
//!
//! Columns are positional (see [`crate::constants::columns`]). Values are used
//! exactly as read: no trimming, no case folding.

use chrono::NaiveDate;
use csv::StringRecord;
use thiserror::Error;

use crate::constants::columns;
use crate::constants::import::RESPONSE_DATE_FORMAT;
use crate::domain::{DepartmentId, LocationId};
use crate::models::EmployeeRecord;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("error parsing response date {value:?}: expected DD/MM/YYYY")]
    ResponseDate { value: String },
}

impl FieldError {
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::ResponseDate { .. } => "response_date",
        }
    }
}

/// Empty means absent.
#[must_use]
pub fn parse_optional_string(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Empty or non-numeric means absent; the parse failure is not reported.
#[must_use]
pub fn parse_optional_int(raw: &str) -> Option<i32> {
    raw.parse().ok()
}

/// `DD/MM/YYYY`. Empty is absent, anything else unparseable is an error.
pub fn parse_response_date(raw: &str) -> Result<Option<NaiveDate>, FieldError> {
    if raw.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(raw, RESPONSE_DATE_FORMAT)
        .map(Some)
        .map_err(|_| FieldError::ResponseDate {
            value: raw.to_string(),
        })
}

fn column(record: &StringRecord, index: usize) -> &str {
    record.get(index).unwrap_or_default()
}

fn optional_string(record: &StringRecord, index: usize) -> Option<String> {
    parse_optional_string(column(record, index))
}

fn optional_int(record: &StringRecord, index: usize) -> Option<i32> {
    parse_optional_int(column(record, index))
}

/// Builds the employee for one data row once its department and location
/// have been resolved.
pub fn employee_from_record(
    record: &StringRecord,
    department_id: DepartmentId,
    location_id: LocationId,
) -> Result<EmployeeRecord, FieldError> {
    let response_date = parse_response_date(column(record, columns::RESPONSE_DATE))?;

    Ok(EmployeeRecord {
        name: column(record, columns::NAME).to_string(),
        email: column(record, columns::EMAIL).to_string(),
        corporate_email: column(record, columns::CORPORATE_EMAIL).to_string(),
        department_id: Some(department_id),
        position: optional_string(record, columns::POSITION),
        role: optional_string(record, columns::ROLE),
        location_id: Some(location_id),
        time_at_company: optional_string(record, columns::TIME_AT_COMPANY),
        gender: optional_string(record, columns::GENDER),
        generation: optional_string(record, columns::GENERATION),
        response_date,
        position_interest: optional_int(record, columns::POSITION_INTEREST),
        position_interest_comments: optional_string(record, columns::POSITION_INTEREST + 1),
        contribution: optional_int(record, columns::CONTRIBUTION),
        contribution_comments: optional_string(record, columns::CONTRIBUTION + 1),
        learning_development: optional_int(record, columns::LEARNING_DEVELOPMENT),
        learning_development_comments: optional_string(
            record,
            columns::LEARNING_DEVELOPMENT + 1,
        ),
        feedback: optional_int(record, columns::FEEDBACK),
        feedback_comments: optional_string(record, columns::FEEDBACK + 1),
        manager_interaction: optional_int(record, columns::MANAGER_INTERACTION),
        manager_interaction_comments: optional_string(record, columns::MANAGER_INTERACTION + 1),
        career_clarity: optional_int(record, columns::CAREER_CLARITY),
        career_clarity_comments: optional_string(record, columns::CAREER_CLARITY + 1),
        retention_expectation: optional_int(record, columns::RETENTION_EXPECTATION),
        retention_expectation_comments: optional_string(
            record,
            columns::RETENTION_EXPECTATION + 1,
        ),
        enps: optional_int(record, columns::ENPS),
        enps_comments: optional_string(record, columns::ENPS + 1),
        open_enps: optional_string(record, columns::OPEN_ENPS),
    })
}
