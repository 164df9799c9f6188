//! Get-or-create import of survey rows into employees, departments and
//! locations.

use crate::constants::columns;
use crate::constants::import::RECORD_BUFFER;
use crate::db::repositories::{DepartmentRepository, EmployeeRepository, LocationRepository};
use crate::domain::{DepartmentId, LocationId, Lookup};
use crate::models::DepartmentLevels;
use crate::parser::employee_from_record;
use crate::services::import_service::{
    ImportError, ImportService, ImportStep, ImportSummary, RecordError,
};
use async_trait::async_trait;
use csv::{ReaderBuilder, StringRecord};
use std::collections::HashMap;
use std::io::{Cursor, Read};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

pub struct CsvImportService {
    employees: Arc<dyn EmployeeRepository>,
    departments: Arc<dyn DepartmentRepository>,
    locations: Arc<dyn LocationRepository>,
    delimiter: u8,
}

/// Natural keys already resolved during the current run.
#[derive(Default)]
struct ImportRun {
    departments: HashMap<DepartmentLevels, DepartmentId>,
    locations: HashMap<String, LocationId>,
    summary: ImportSummary,
}

impl CsvImportService {
    #[must_use]
    pub fn new(
        employees: Arc<dyn EmployeeRepository>,
        departments: Arc<dyn DepartmentRepository>,
        locations: Arc<dyn LocationRepository>,
        delimiter: u8,
    ) -> Self {
        Self {
            employees,
            departments,
            locations,
            delimiter,
        }
    }

    async fn department_id(
        &self,
        run: &mut ImportRun,
        record: &StringRecord,
    ) -> Result<DepartmentId, RecordError> {
        let levels: Vec<String> = columns::DEPARTMENT_LEVELS
            .map(|i| record.get(i).unwrap_or_default().to_string())
            .collect();
        let levels = DepartmentLevels::try_from(levels)?;

        if let Some(id) = run.departments.get(&levels) {
            return Ok(*id);
        }

        let id = match self.departments.find_by_levels(&levels).await? {
            Lookup::Found(department) => department.id,
            Lookup::NotFound => {
                let id = self.departments.create(&levels).await?;
                run.summary.departments_created += 1;
                id
            }
        };

        run.departments.insert(levels, id);
        Ok(id)
    }

    async fn location_id(
        &self,
        run: &mut ImportRun,
        record: &StringRecord,
    ) -> Result<LocationId, RecordError> {
        let name = record.get(columns::LOCATION).unwrap_or_default();

        if let Some(id) = run.locations.get(name) {
            return Ok(*id);
        }

        let id = match self.locations.find_by_name(name).await? {
            Lookup::Found(location) => location.id,
            Lookup::NotFound => {
                let id = self.locations.create(name).await?;
                run.summary.locations_created += 1;
                id
            }
        };

        run.locations.insert(name.to_string(), id);
        Ok(id)
    }

    async fn import_record(
        &self,
        run: &mut ImportRun,
        number: usize,
        record: &StringRecord,
    ) -> Result<(), ImportError> {
        if record.len() < columns::REQUIRED {
            return Err(ImportError::MissingColumns {
                record: number,
                expected: columns::REQUIRED,
                found: record.len(),
            });
        }

        let department_id = self
            .department_id(run, record)
            .await
            .map_err(|e| ImportError::record(number, ImportStep::ResolveDepartment, e))?;

        let location_id = self
            .location_id(run, record)
            .await
            .map_err(|e| ImportError::record(number, ImportStep::ResolveLocation, e))?;

        let employee = employee_from_record(record, department_id, location_id)
            .map_err(|e| ImportError::record(number, ImportStep::ParseFields, e))?;

        let created = self
            .employees
            .create(employee)
            .await
            .map_err(|e| ImportError::record(number, ImportStep::PersistEmployee, e))?;

        run.summary.employees_created += 1;
        debug!(record = number, employee_id = %created.id, "Imported employee");
        Ok(())
    }

    /// Drives the per-row pipeline over records arriving from [`spawn_reader`].
    async fn import_records(
        &self,
        mut records: mpsc::Receiver<csv::Result<StringRecord>>,
    ) -> Result<ImportSummary, ImportError> {
        match records.recv().await {
            Some(Ok(_header)) => {}
            Some(Err(source)) => return Err(ImportError::Header(source)),
            None => return Err(ImportError::EmptyFile),
        }

        let mut run = ImportRun::default();
        let mut number = 0;

        while let Some(result) = records.recv().await {
            number += 1;
            let record =
                result.map_err(|e| ImportError::record(number, ImportStep::ReadRecord, e))?;

            self.import_record(&mut run, number, &record).await?;
        }

        info!(
            employees = run.summary.employees_created,
            departments = run.summary.departments_created,
            locations = run.summary.locations_created,
            "Employee import finished"
        );

        Ok(run.summary)
    }
}

/// Parses `source` on the blocking pool and streams records, header first.
///
/// The reader stops after the first parse error, or once the receiver is
/// dropped.
fn spawn_reader<R>(source: R, delimiter: u8) -> mpsc::Receiver<csv::Result<StringRecord>>
where
    R: Read + Send + 'static,
{
    let (tx, rx) = mpsc::channel(RECORD_BUFFER);

    tokio::task::spawn_blocking(move || {
        let reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(source);

        for result in reader.into_records() {
            let failed = result.is_err();
            if tx.blocking_send(result).is_err() || failed {
                break;
            }
        }
    });

    rx
}

#[async_trait]
impl ImportService for CsvImportService {
    async fn import_file(&self, path: &Path) -> Result<ImportSummary, ImportError> {
        info!(path = %path.display(), "Starting employee import");

        let file = tokio::fs::File::open(path)
            .await
            .map_err(|source| ImportError::Open {
                path: path.to_path_buf(),
                source,
            })?
            .into_std()
            .await;

        self.import_records(spawn_reader(file, self.delimiter)).await
    }

    async fn import_bytes(&self, data: &[u8]) -> Result<ImportSummary, ImportError> {
        let source = Cursor::new(data.to_vec());
        self.import_records(spawn_reader(source, self.delimiter)).await
    }
}
