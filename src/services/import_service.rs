//! Domain service for the employee survey CSV import.
//!
//! Rows are processed in file order and the run stops at the first failing
//! row. Rows persisted before the failure stay persisted.

use crate::db::repositories::RepositoryError;
use crate::models::LevelArityError;
use crate::parser::FieldError;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Stage of the per-row pipeline that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportStep {
    ReadRecord,
    ResolveDepartment,
    ResolveLocation,
    ParseFields,
    PersistEmployee,
}

impl fmt::Display for ImportStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::ReadRecord => "error reading record",
            Self::ResolveDepartment => "error creating department",
            Self::ResolveLocation => "error creating location",
            Self::ParseFields => "error creating employee from record",
            Self::PersistEmployee => "error creating employee in repository",
        };
        f.write_str(msg)
    }
}

#[derive(Debug, Error)]
pub enum RecordError {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Department(#[from] LevelArityError),
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to open file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file is empty")]
    EmptyFile,

    #[error("failed to read header: {0}")]
    Header(#[source] csv::Error),

    #[error("record {record}: expected at least {expected} columns, got {found}")]
    MissingColumns {
        record: usize,
        expected: usize,
        found: usize,
    },

    /// `record` is the 1-based data row, not counting the header.
    #[error("record {record}: {step}: {source}")]
    Record {
        record: usize,
        step: ImportStep,
        #[source]
        source: RecordError,
    },
}

impl ImportError {
    pub(crate) fn record(record: usize, step: ImportStep, source: impl Into<RecordError>) -> Self {
        Self::Record {
            record,
            step,
            source: source.into(),
        }
    }

    #[must_use]
    pub const fn step(&self) -> Option<ImportStep> {
        match self {
            Self::Record { step, .. } => Some(*step),
            _ => None,
        }
    }
}

/// Rows created by one successful run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub employees_created: usize,
    pub departments_created: usize,
    pub locations_created: usize,
}

#[async_trait::async_trait]
pub trait ImportService: Send + Sync {
    /// Reads and imports the CSV file at `path`.
    async fn import_file(&self, path: &Path) -> Result<ImportSummary, ImportError>;

    /// Imports CSV content already in memory.
    async fn import_bytes(&self, data: &[u8]) -> Result<ImportSummary, ImportError>;
}
