//! Domain primitives shared by the storage, cache and service layers.
//!
//! Entity identifiers are newtypes so an employee id can never be handed to a
//! department lookup by mistake. Lookups return [`Lookup`] so that "no such
//! row" is a value, not an error string to be sniffed.

pub mod pagination;

pub use pagination::{Pagination, page_offset};

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Returns the underlying i32 value.
            #[must_use]
            pub const fn value(&self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self::new(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

entity_id!(
    /// Storage-assigned identifier of an employee row.
    EmployeeId
);

entity_id!(
    /// Storage-assigned identifier of a department row.
    DepartmentId
);

entity_id!(
    /// Storage-assigned identifier of a location row.
    LocationId
);

/// Outcome of a lookup by identity or natural key.
///
/// Backend failures travel separately in the surrounding `Result`, so a
/// repository call yields one of `Ok(Found)`, `Ok(NotFound)` or `Err(_)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::NotFound, Self::Found)
    }
}
