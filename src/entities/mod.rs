pub mod prelude;

pub mod departments;
pub mod employees;
pub mod locations;
