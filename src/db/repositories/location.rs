use crate::db::repositories::{LocationRepository, RepositoryResult};
use crate::domain::{LocationId, Lookup};
use crate::entities::{locations, prelude::*};
use crate::models::Location;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::info;

pub struct SeaOrmLocationRepository {
    conn: DatabaseConnection,
}

impl SeaOrmLocationRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl LocationRepository for SeaOrmLocationRepository {
    async fn create(&self, name: &str) -> RepositoryResult<LocationId> {
        let active_model = locations::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        };

        let res = Locations::insert(active_model).exec(&self.conn).await?;
        info!(location_id = res.last_insert_id, name, "Created location");
        Ok(LocationId::new(res.last_insert_id))
    }

    async fn find_by_name(&self, name: &str) -> RepositoryResult<Lookup<Location>> {
        let row = Locations::find()
            .filter(locations::Column::Name.eq(name))
            .order_by_asc(locations::Column::Id)
            .one(&self.conn)
            .await?;

        Ok(row
            .map(|m| Location {
                id: LocationId::new(m.id),
                name: m.name,
            })
            .into())
    }
}
