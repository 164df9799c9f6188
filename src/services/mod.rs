pub mod auth_service;
pub mod auth_service_impl;
pub use auth_service::{AuthError, AuthService, Claims};
pub use auth_service_impl::JwtAuthService;

pub mod department_service;
pub use department_service::{DepartmentError, DepartmentService, RepositoryDepartmentService};

pub mod employee_service;
pub mod employee_service_impl;
pub use employee_service::{EmployeeError, EmployeeService};
pub use employee_service_impl::CachedEmployeeService;

pub mod import_service;
pub mod import_service_impl;
pub use import_service::{ImportError, ImportService, ImportStep, ImportSummary, RecordError};
pub use import_service_impl::CsvImportService;
