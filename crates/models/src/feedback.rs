//! Feedback is write-only: it implements [`Resource`] but not
//! [`ListedResource`](crate::ListedResource), so no listing can be built for it.
use sea_orm::{entity::prelude::*, InsertResult, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, resource::Resource};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "feedback")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Deserialize)]
pub struct NewFeedback {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Resource for Entity {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Input = NewFeedback;

    const LABEL: &'static str = "Feedback";

    fn created_message() -> String { "Feedback submitted successfully".into() }

    fn to_active_model(input: NewFeedback, created_at: DateTime) -> Result<ActiveModel, ModelError> {
        Ok(ActiveModel {
            id: NotSet,
            name: Set(input.name),
            email: Set(input.email),
            message: Set(input.message),
            created_at: Set(created_at),
        })
    }

    fn inserted_id(result: InsertResult<ActiveModel>) -> i32 { result.last_insert_id }
}
