use serde::{Deserialize, Serialize};

use crate::domain::LocationId;

/// A workplace location, identified naturally by its exact name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
}
