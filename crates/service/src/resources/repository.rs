use std::marker::PhantomData;

use models::{timestamp, ListedResource, Resource};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect};
use tracing::{debug, info, instrument};

use crate::errors::ServiceError;
use crate::pagination::{Page, Pagination};

/// SeaORM-backed repository for one resource type.
///
/// Holds a clone of the shared connection pool; cheap to build per request.
pub struct ResourceRepository<R> {
    db: DatabaseConnection,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceRepository<R> {
    fn clone(&self) -> Self {
        Self { db: self.db.clone(), _resource: PhantomData }
    }
}

impl<R: Resource> ResourceRepository<R> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db, _resource: PhantomData }
    }

    /// Insert one row and return its store-assigned id. `created_at` is
    /// stamped here; timestamp fields in the input must parse or nothing is
    /// written.
    #[instrument(skip_all, fields(resource = R::LABEL))]
    pub async fn insert(&self, input: R::Input) -> Result<i32, ServiceError> {
        let am = R::to_active_model(input, timestamp::now_local())?;
        let res = <R::Entity as EntityTrait>::insert(am).exec(&self.db).await?;
        let id = R::inserted_id(res);
        info!(resource = R::LABEL, id, "record_created");
        Ok(id)
    }
}

impl<R: ListedResource> ResourceRepository<R> {
    /// Rows for one page, newest sort key first, plus the total row count.
    pub async fn list(&self, pagination: Pagination) -> Result<(Vec<R::Model>, u64), ServiceError> {
        let items = <R::Entity as EntityTrait>::find()
            .order_by_desc(R::sort_column())
            .order_by_asc(R::id_column())
            .offset(pagination.offset())
            .limit(pagination.limit())
            .all(&self.db)
            .await?;
        let total = <R::Entity as EntityTrait>::find().count(&self.db).await?;
        debug!(resource = R::LABEL, page = pagination.page(), per_page = pagination.per_page(), total, "listed");
        Ok((items, total))
    }

    pub async fn list_page(&self, pagination: Pagination) -> Result<Page<R::Model>, ServiceError> {
        let (items, total) = self.list(pagination).await?;
        Ok(Page::new(items, total, pagination))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use models::{assignment, booking, feedback, project, video};

    fn assignment_due(title: &str, due: &str) -> assignment::NewAssignment {
        assignment::NewAssignment {
            title: title.into(),
            description: "desc".into(),
            due_date: due.into(),
            status: "pending".into(),
        }
    }

    fn project_named(title: &str) -> project::NewProject {
        project::NewProject { title: title.into(), description: "desc".into(), status: "ongoing".into() }
    }

    #[tokio::test]
    async fn list_on_empty_table_has_zero_pages() -> Result<(), anyhow::Error> {
        let (_dir, db) = get_db().await?;
        let repo = ResourceRepository::<video::Entity>::new(db);

        let page = repo.list_page(Pagination::default()).await?;
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.pages, 0);
        assert_eq!(page.current_page, 1);
        Ok(())
    }

    #[tokio::test]
    async fn insert_then_list_round_trip() -> Result<(), anyhow::Error> {
        let (_dir, db) = get_db().await?;
        let repo = ResourceRepository::<assignment::Entity>::new(db);

        let before = timestamp::now_local();
        let id = repo.insert(assignment_due("Essay", "2024-01-01T00:00:00")).await?;

        let (items, total) = repo.list(Pagination::default()).await?;
        assert_eq!(total, 1);
        assert_eq!(items.len(), 1);
        let row = &items[0];
        assert_eq!(row.id, id);
        assert_eq!(row.title, "Essay");
        assert_eq!(row.due_date, timestamp::parse_local("dueDate", "2024-01-01T00:00:00")?);
        assert!(row.created_at >= before);
        Ok(())
    }

    #[tokio::test]
    async fn assignments_sort_by_due_date_descending() -> Result<(), anyhow::Error> {
        let (_dir, db) = get_db().await?;
        let repo = ResourceRepository::<assignment::Entity>::new(db);

        repo.insert(assignment_due("middle", "2024-06-01T00:00:00")).await?;
        repo.insert(assignment_due("latest", "2024-12-01T00:00:00")).await?;
        repo.insert(assignment_due("earliest", "2024-01-01T00:00:00")).await?;

        let (items, _) = repo.list(Pagination::default()).await?;
        let titles: Vec<_> = items.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, ["latest", "middle", "earliest"]);
        Ok(())
    }

    #[tokio::test]
    async fn equal_sort_keys_keep_insertion_order() -> Result<(), anyhow::Error> {
        let (_dir, db) = get_db().await?;
        let repo = ResourceRepository::<assignment::Entity>::new(db);

        let first = repo.insert(assignment_due("first", "2024-05-05T00:00:00")).await?;
        let second = repo.insert(assignment_due("second", "2024-05-05T00:00:00")).await?;

        let (items, _) = repo.list(Pagination::default()).await?;
        let ids: Vec<_> = items.iter().map(|a| a.id).collect();
        assert_eq!(ids, [first, second]);
        Ok(())
    }

    #[tokio::test]
    async fn projects_list_newest_first_and_paginate() -> Result<(), anyhow::Error> {
        let (_dir, db) = get_db().await?;
        let repo = ResourceRepository::<project::Entity>::new(db);

        for i in 0..7 {
            repo.insert(project_named(&format!("p{i}"))).await?;
        }

        let page1 = repo.list_page(Pagination::new(1, 3)).await?;
        assert_eq!(page1.total, 7);
        assert_eq!(page1.pages, 3);
        assert_eq!(page1.items.len(), 3);
        assert!(page1.items.windows(2).all(|w| w[0].created_at >= w[1].created_at));
        assert_eq!(page1.items[0].title, "p6");

        let page3 = repo.list_page(Pagination::new(3, 3)).await?;
        assert_eq!(page3.items.len(), 1);
        assert_eq!(page3.items[0].title, "p0");

        let page4 = repo.list_page(Pagination::new(4, 3)).await?;
        assert!(page4.items.is_empty());
        assert_eq!(page4.current_page, 4);
        Ok(())
    }

    #[tokio::test]
    async fn huge_page_size_returns_everything() -> Result<(), anyhow::Error> {
        let (_dir, db) = get_db().await?;
        let repo = ResourceRepository::<project::Entity>::new(db);
        for i in 0..4 {
            repo.insert(project_named(&format!("p{i}"))).await?;
        }

        let page = repo.list_page(Pagination::new(1, u32::MAX)).await?;
        assert_eq!(page.items.len(), 4);
        assert_eq!(page.pages, 1);
        Ok(())
    }

    #[tokio::test]
    async fn bad_timestamp_inserts_nothing() -> Result<(), anyhow::Error> {
        let (_dir, db) = get_db().await?;
        let repo = ResourceRepository::<booking::Entity>::new(db);

        let input = booking::NewBooking {
            user_email: "a@example.com".into(),
            name: "A".into(),
            item_name: "Essay editing".into(),
            deadline: "not-a-date".into(),
            kind: "service".into(),
        };
        let err = repo.insert(input).await.unwrap_err();
        assert!(matches!(err, ServiceError::Model(_)));
        assert!(!err.to_string().is_empty());

        let (_, total) = repo.list(Pagination::default()).await?;
        assert_eq!(total, 0);
        Ok(())
    }

    #[tokio::test]
    async fn feedback_insert_returns_increasing_ids() -> Result<(), anyhow::Error> {
        let (_dir, db) = get_db().await?;
        let repo = ResourceRepository::<feedback::Entity>::new(db);
        let make = |n: &str| feedback::NewFeedback {
            name: n.into(),
            email: "not validated".into(),
            message: "".into(),
        };

        let a = repo.insert(make("a")).await?;
        let b = repo.insert(make("b")).await?;
        assert!(b > a);
        Ok(())
    }
}
