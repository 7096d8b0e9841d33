//! Create `research_papers` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ResearchPapers::Table)
                    .if_not_exists()
                    .col(pk_auto(ResearchPapers::Id))
                    .col(string_len(ResearchPapers::Title, 200))
                    .col(text(ResearchPapers::Abstract))
                    .col(string_len(ResearchPapers::Authors, 200))
                    .col(string_len(ResearchPapers::Status, 20).default("draft"))
                    .col(date_time(ResearchPapers::CreatedAt).default(Expr::current_timestamp()))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ResearchPapers::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ResearchPapers { Table, Id, Title, Abstract, Authors, Status, CreatedAt }
