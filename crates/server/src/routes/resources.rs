use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, Query, State},
    http::StatusCode,
    Json,
};
use models::{ListedResource, Resource};
use serde::{Deserialize, Serialize};
use service::{
    pagination::{Page, Pagination},
    resources::ResourceRepository,
};

use crate::{errors::ApiError, state::ServerState};

/// Raw paging parameters; parsing is lenient and done by [`Pagination`].
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    pub per_page: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct Created {
    pub message: String,
    pub id: i32,
}

/// `GET /api/<resource>`
pub async fn list<R: ListedResource>(
    State(state): State<ServerState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Page<R::Model>>, ApiError> {
    let q = query.map(|Query(q)| q).unwrap_or_default();
    let pagination = Pagination::from_query(q.page.as_deref(), q.per_page.as_deref());
    let repo = ResourceRepository::<R>::new(state.db.clone());
    let page = repo.list_page(pagination).await?;
    Ok(Json(page))
}

/// `POST /api/<resource>`
pub async fn create<R: Resource>(
    State(state): State<ServerState>,
    body: Result<Json<R::Input>, JsonRejection>,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    let Json(input) = body?;
    let repo = ResourceRepository::<R>::new(state.db.clone());
    let id = repo.insert(input).await?;
    Ok((StatusCode::CREATED, Json(Created { message: R::created_message(), id })))
}
