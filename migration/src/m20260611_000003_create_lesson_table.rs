use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lesson::Table)
                    .if_not_exists()
                    .col(pk_auto(Lesson::Id))
                    .col(string_uniq(Lesson::Slug))
                    .col(string(Lesson::Title))
                    .col(string(Lesson::Description))
                    .col(integer(Lesson::Order))
                    .col(string_null(Lesson::DocUrl))
                    .col(string_null(Lesson::GithubUrl))
                    .col(string_null(Lesson::VideoUrl))
                    .col(string_null(Lesson::ChatUrl))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Lesson::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Lesson {
    Table,
    Id,
    Slug,
    Title,
    Description,
    Order,
    DocUrl,
    GithubUrl,
    VideoUrl,
    ChatUrl,
}
