//! Create `videos` table.
//! Only the path of an already-stored file is recorded; uploads are handled elsewhere.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Videos::Table)
                    .if_not_exists()
                    .col(pk_auto(Videos::Id))
                    .col(string_len(Videos::Title, 100))
                    .col(text_null(Videos::Description))
                    .col(string_len(Videos::FilePath, 200))
                    .col(string_len(Videos::Status, 20).default("processing"))
                    .col(date_time(Videos::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Videos::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Videos { Table, Id, Title, Description, FilePath, Status, CreatedAt }
