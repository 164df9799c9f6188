pub mod fields;

pub use fields::{
    FieldError, employee_from_record, parse_optional_int, parse_optional_string,
    parse_response_date,
};
