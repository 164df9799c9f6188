pub mod department;
pub mod employee;
pub mod location;

pub use department::{Department, DepartmentLevels, LevelArityError, NewDepartment};
pub use employee::{Employee, EmployeePage, EmployeeRecord};
pub use location::Location;
