use sea_orm::{entity::prelude::*, InsertResult, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, resource::{ListedResource, Resource}};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub status: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub title: String,
    pub description: String,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String { "ongoing".into() }

impl Resource for Entity {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Input = NewProject;

    const LABEL: &'static str = "Project";

    fn to_active_model(input: NewProject, created_at: DateTime) -> Result<ActiveModel, ModelError> {
        Ok(ActiveModel {
            id: NotSet,
            title: Set(input.title),
            description: Set(input.description),
            status: Set(input.status),
            created_at: Set(created_at),
        })
    }

    fn inserted_id(result: InsertResult<ActiveModel>) -> i32 { result.last_insert_id }
}

impl ListedResource for Entity {
    fn sort_column() -> Column { Column::CreatedAt }
    fn id_column() -> Column { Column::Id }
}
