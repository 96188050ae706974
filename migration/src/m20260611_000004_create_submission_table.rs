use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260610_000001_create_user_table::User, m20260611_000003_create_lesson_table::Lesson,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Submission::Table)
                    .if_not_exists()
                    .col(pk_auto(Submission::Id))
                    .col(integer(Submission::LessonId))
                    .col(integer(Submission::UserId))
                    .col(string(Submission::Status))
                    .col(string_null(Submission::Comment))
                    .col(timestamp_with_time_zone(Submission::CreatedAt))
                    .col(timestamp_with_time_zone(Submission::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_submission_lesson_id")
                            .from(Submission::Table, Submission::LessonId)
                            .to(Lesson::Table, Lesson::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_submission_user_id")
                            .from(Submission::Table, Submission::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Submission::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Submission {
    Table,
    Id,
    LessonId,
    UserId,
    Status,
    Comment,
    CreatedAt,
    UpdatedAt,
}
