use crate::db::repositories::{DepartmentRepository, RepositoryResult};
use crate::domain::{DepartmentId, Lookup};
use crate::entities::{departments, prelude::*};
use crate::models::{Department, DepartmentLevels};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::info;

pub struct SeaOrmDepartmentRepository {
    conn: DatabaseConnection,
}

impl SeaOrmDepartmentRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(m: departments::Model) -> Department {
        Department {
            id: DepartmentId::new(m.id),
            company_level0: m.company_level0,
            company_level1: m.company_level1,
            company_level2: m.company_level2,
            company_level3: m.company_level3,
            company_level4: m.company_level4,
        }
    }
}

#[async_trait::async_trait]
impl DepartmentRepository for SeaOrmDepartmentRepository {
    async fn create(&self, levels: &DepartmentLevels) -> RepositoryResult<DepartmentId> {
        let [l0, l1, l2, l3, l4] = levels.as_array();

        let active_model = departments::ActiveModel {
            company_level0: Set(l0.clone()),
            company_level1: Set(l1.clone()),
            company_level2: Set(l2.clone()),
            company_level3: Set(l3.clone()),
            company_level4: Set(l4.clone()),
            ..Default::default()
        };

        let res = Departments::insert(active_model).exec(&self.conn).await?;
        info!(department_id = res.last_insert_id, levels = ?levels.as_slice(), "Created department");
        Ok(DepartmentId::new(res.last_insert_id))
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Department>> {
        let rows = Departments::find()
            .order_by_asc(departments::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    async fn find_by_levels(
        &self,
        levels: &DepartmentLevels,
    ) -> RepositoryResult<Lookup<Department>> {
        let [l0, l1, l2, l3, l4] = levels.as_array();

        let row = Departments::find()
            .filter(departments::Column::CompanyLevel0.eq(l0.as_str()))
            .filter(departments::Column::CompanyLevel1.eq(l1.as_str()))
            .filter(departments::Column::CompanyLevel2.eq(l2.as_str()))
            .filter(departments::Column::CompanyLevel3.eq(l3.as_str()))
            .filter(departments::Column::CompanyLevel4.eq(l4.as_str()))
            .order_by_asc(departments::Column::Id)
            .one(&self.conn)
            .await?;

        Ok(row.map(Self::map_model).into())
    }
}
