use sea_orm::{entity::prelude::*, FromQueryResult, InsertResult};
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::ModelError;

/// A record type that can be created through the API.
///
/// Implemented on each table's SeaORM `Entity`, so `assignment::Entity` is
/// both the query entry point and the resource marker.
pub trait Resource: Send + Sync + 'static {
    type Entity: EntityTrait<Model = Self::Model>;
    type Model: ModelTrait<Entity = Self::Entity> + FromQueryResult + Serialize + Send + Sync + 'static;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + Send + 'static;
    /// JSON body accepted by the create endpoint.
    type Input: DeserializeOwned + Send + 'static;

    /// Human-facing name used in response messages and logs.
    const LABEL: &'static str;

    /// Message returned alongside the new id.
    fn created_message() -> String {
        format!("{} created successfully", Self::LABEL)
    }

    /// Build the row to insert. `created_at` is always server time.
    fn to_active_model(input: Self::Input, created_at: DateTime) -> Result<Self::ActiveModel, ModelError>;

    fn inserted_id(result: InsertResult<Self::ActiveModel>) -> i32;
}

/// A resource that also has a paginated listing.
pub trait ListedResource: Resource {
    /// Listing is descending on this column.
    fn sort_column() -> <Self::Entity as EntityTrait>::Column;

    /// Tie-breaker, ascending, so equal sort keys keep insertion order.
    fn id_column() -> <Self::Entity as EntityTrait>::Column;
}
