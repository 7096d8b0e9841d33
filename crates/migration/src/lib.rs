//! Migrator registering one migration per resource table.
//! Every table is independent; order only matters for readability.
pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_assignments;
mod m20240601_000002_create_projects;
mod m20240601_000003_create_research_papers;
mod m20240601_000004_create_videos;
mod m20240601_000005_create_feedback;
mod m20240601_000006_create_bookings;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_assignments::Migration),
            Box::new(m20240601_000002_create_projects::Migration),
            Box::new(m20240601_000003_create_research_papers::Migration),
            Box::new(m20240601_000004_create_videos::Migration),
            Box::new(m20240601_000005_create_feedback::Migration),
            Box::new(m20240601_000006_create_bookings::Migration),
        ]
    }
}
