//! Create `bookings` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bookings::Table)
                    .if_not_exists()
                    .col(pk_auto(Bookings::Id))
                    .col(string_len(Bookings::UserEmail, 120))
                    .col(string_len(Bookings::Name, 100))
                    .col(string_len(Bookings::ItemName, 200))
                    .col(date_time(Bookings::Deadline))
                    .col(string_len(Bookings::Type, 50))
                    .col(date_time(Bookings::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Bookings::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Bookings { Table, Id, UserEmail, Name, ItemName, Deadline, Type, CreatedAt }
