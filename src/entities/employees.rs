use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub corporate_email: String,
    pub department_id: Option<i32>,
    pub position: Option<String>,
    pub role: Option<String>,
    pub location_id: Option<i32>,
    pub time_at_company: Option<String>,
    pub gender: Option<String>,
    pub generation: Option<String>,
    pub response_date: Option<Date>,
    pub position_interest: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub position_interest_comments: Option<String>,
    pub contribution: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub contribution_comments: Option<String>,
    pub learning_development: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub learning_development_comments: Option<String>,
    pub feedback: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub feedback_comments: Option<String>,
    pub manager_interaction: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub manager_interaction_comments: Option<String>,
    pub career_clarity: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub career_clarity_comments: Option<String>,
    pub retention_expectation: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub retention_expectation_comments: Option<String>,
    pub enps: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub enps_comments: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub open_enps: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::departments::Entity",
        from = "Column::DepartmentId",
        to = "super::departments::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Departments,
    #[sea_orm(
        belongs_to = "super::locations::Entity",
        from = "Column::LocationId",
        to = "super::locations::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Locations,
}

impl Related<super::departments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Departments.def()
    }
}

impl Related<super::locations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Locations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
