//! Create `assignments` table.
//!
//! Listed newest deadline first, so `due_date` gets an index.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Assignments::Table)
                    .if_not_exists()
                    .col(pk_auto(Assignments::Id))
                    .col(string_len(Assignments::Title, 100))
                    .col(text(Assignments::Description))
                    .col(date_time(Assignments::DueDate))
                    .col(string_len(Assignments::Status, 20).default("pending"))
                    .col(date_time(Assignments::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_assignments_due_date")
                    .table(Assignments::Table)
                    .col(Assignments::DueDate)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Assignments::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Assignments {
    Table,
    Id,
    Title,
    Description,
    DueDate,
    Status,
    CreatedAt,
}
