use sea_orm::{entity::prelude::*, InsertResult, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, resource::{ListedResource, Resource}, timestamp};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "assignments")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub due_date: DateTime,
    pub status: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Body of `POST /api/assignments`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAssignment {
    pub title: String,
    pub description: String,
    pub due_date: String,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String { "pending".into() }

impl Resource for Entity {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Input = NewAssignment;

    const LABEL: &'static str = "Assignment";

    fn to_active_model(input: NewAssignment, created_at: DateTime) -> Result<ActiveModel, ModelError> {
        let due_date = timestamp::parse_local("dueDate", &input.due_date)?;
        Ok(ActiveModel {
            id: NotSet,
            title: Set(input.title),
            description: Set(input.description),
            due_date: Set(due_date),
            status: Set(input.status),
            created_at: Set(created_at),
        })
    }

    fn inserted_id(result: InsertResult<ActiveModel>) -> i32 { result.last_insert_id }
}

impl ListedResource for Entity {
    fn sort_column() -> Column { Column::DueDate }
    fn id_column() -> Column { Column::Id }
}
