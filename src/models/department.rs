use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::import::DEPARTMENT_LEVELS;
use crate::domain::DepartmentId;

/// The five-level organisational path that identifies a department.
///
/// Two departments are the same iff all five levels are equal byte for byte;
/// no trimming or case folding is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DepartmentLevels([String; DEPARTMENT_LEVELS]);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid department data: expected {DEPARTMENT_LEVELS} levels, got {0}")]
pub struct LevelArityError(pub usize);

impl DepartmentLevels {
    #[must_use]
    pub const fn new(levels: [String; DEPARTMENT_LEVELS]) -> Self {
        Self(levels)
    }

    #[must_use]
    pub const fn as_array(&self) -> &[String; DEPARTMENT_LEVELS] {
        &self.0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn level(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }
}

impl TryFrom<Vec<String>> for DepartmentLevels {
    type Error = LevelArityError;

    fn try_from(levels: Vec<String>) -> Result<Self, Self::Error> {
        let count = levels.len();
        <[String; DEPARTMENT_LEVELS]>::try_from(levels)
            .map(Self)
            .map_err(|_| LevelArityError(count))
    }
}

impl<'a> TryFrom<&'a [&'a str]> for DepartmentLevels {
    type Error = LevelArityError;

    fn try_from(levels: &'a [&'a str]) -> Result<Self, Self::Error> {
        levels
            .iter()
            .map(|level| (*level).to_string())
            .collect::<Vec<_>>()
            .try_into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: DepartmentId,
    pub company_level0: String,
    pub company_level1: String,
    pub company_level2: String,
    pub company_level3: String,
    pub company_level4: String,
}

impl Department {
    #[must_use]
    pub fn from_levels(id: DepartmentId, levels: DepartmentLevels) -> Self {
        let [company_level0, company_level1, company_level2, company_level3, company_level4] =
            levels.0;
        Self {
            id,
            company_level0,
            company_level1,
            company_level2,
            company_level3,
            company_level4,
        }
    }

    #[must_use]
    pub fn levels(&self) -> DepartmentLevels {
        DepartmentLevels([
            self.company_level0.clone(),
            self.company_level1.clone(),
            self.company_level2.clone(),
            self.company_level3.clone(),
            self.company_level4.clone(),
        ])
    }
}

/// Request body for creating a department directly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDepartment {
    #[serde(default)]
    pub company_level0: String,
    #[serde(default)]
    pub company_level1: String,
    #[serde(default)]
    pub company_level2: String,
    #[serde(default)]
    pub company_level3: String,
    #[serde(default)]
    pub company_level4: String,
}

impl From<NewDepartment> for DepartmentLevels {
    fn from(d: NewDepartment) -> Self {
        Self([
            d.company_level0,
            d.company_level1,
            d.company_level2,
            d.company_level3,
            d.company_level4,
        ])
    }
}
