use sea_orm::{entity::prelude::*, InsertResult, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::{errors::ModelError, resource::{ListedResource, Resource}, timestamp};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_email: String,
    pub name: String,
    pub item_name: String,
    pub deadline: DateTime,
    #[sea_orm(column_name = "type")]
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub user_email: String,
    pub name: String,
    pub item_name: String,
    pub deadline: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Resource for Entity {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Input = NewBooking;

    const LABEL: &'static str = "Booking";

    fn to_active_model(input: NewBooking, created_at: DateTime) -> Result<ActiveModel, ModelError> {
        let deadline = timestamp::parse_local("deadline", &input.deadline)?;
        Ok(ActiveModel {
            id: NotSet,
            user_email: Set(input.user_email),
            name: Set(input.name),
            item_name: Set(input.item_name),
            deadline: Set(deadline),
            kind: Set(input.kind),
            created_at: Set(created_at),
        })
    }

    fn inserted_id(result: InsertResult<ActiveModel>) -> i32 { result.last_insert_id }
}

impl ListedResource for Entity {
    fn sort_column() -> Column { Column::CreatedAt }
    fn id_column() -> Column { Column::Id }
}
