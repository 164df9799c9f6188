pub mod listing {
    use std::time::Duration;

    /// Base key of the employee listing; page keys are `employees:page:{p}:size:{s}`.
    pub const EMPLOYEES_CACHE_KEY: &str = "employees";

    pub const CACHE_TTL: Duration = Duration::from_secs(5 * 60);

    pub const DEFAULT_PAGE: u64 = 1;

    pub const DEFAULT_PAGE_SIZE: u64 = 10;

    pub const MAX_PAGE_SIZE: u64 = 100;

    pub const MEMORY_CACHE_MAX_ENTRIES: usize = 10_000;
}

pub mod import {

    pub const DEFAULT_SOURCE_PATH: &str = "data/employees.csv";

    pub const DEFAULT_DELIMITER: char = ';';

    pub const RESPONSE_DATE_FORMAT: &str = "%d/%m/%Y";

    pub const DEPARTMENT_LEVELS: usize = 5;

    /// Parsed records buffered between the CSV reader thread and the importer.
    pub const RECORD_BUFFER: usize = 64;
}

/// Fixed column positions of the employee survey export.
pub mod columns {
    use std::ops::Range;

    pub const NAME: usize = 0;
    pub const EMAIL: usize = 1;
    pub const CORPORATE_EMAIL: usize = 2;
    pub const POSITION: usize = 4;
    pub const ROLE: usize = 5;
    pub const LOCATION: usize = 6;
    pub const TIME_AT_COMPANY: usize = 7;
    pub const GENDER: usize = 8;
    pub const GENERATION: usize = 9;
    pub const DEPARTMENT_LEVELS: Range<usize> = 10..15;
    pub const RESPONSE_DATE: usize = 15;
    pub const POSITION_INTEREST: usize = 16;
    pub const CONTRIBUTION: usize = 18;
    pub const LEARNING_DEVELOPMENT: usize = 20;
    pub const FEEDBACK: usize = 22;
    pub const MANAGER_INTERACTION: usize = 24;
    pub const CAREER_CLARITY: usize = 26;
    pub const RETENTION_EXPECTATION: usize = 28;
    pub const ENPS: usize = 30;
    pub const OPEN_ENPS: usize = 32;

    /// Every column up to and including the eNPS comment must be present.
    pub const REQUIRED: usize = 32;
}

pub mod auth {

    pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 24 * 60;

    pub const DEFAULT_ISSUER: &str = "pinpeople";

    /// Placeholder secret shipped in the defaults; never accepted at startup.
    pub const DEFAULT_JWT_SECRET: &str = "change-me";
}
