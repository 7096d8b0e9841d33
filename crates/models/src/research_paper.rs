use sea_orm::{entity::prelude::*, InsertResult, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, resource::{ListedResource, Resource}};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "research_papers")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    // `abstract` is reserved in Rust
    #[sea_orm(column_name = "abstract", column_type = "Text")]
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub authors: String,
    pub status: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewResearchPaper {
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub authors: String,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String { "draft".into() }

impl Resource for Entity {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Input = NewResearchPaper;

    const LABEL: &'static str = "Research paper";

    fn to_active_model(input: NewResearchPaper, created_at: DateTime) -> Result<ActiveModel, ModelError> {
        Ok(ActiveModel {
            id: NotSet,
            title: Set(input.title),
            abstract_text: Set(input.abstract_text),
            authors: Set(input.authors),
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
