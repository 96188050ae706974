use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260610_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProviderToken::Table)
                    .if_not_exists()
                    // User id doubles as the primary key so token refresh can
                    // never produce a second row for the same user.
                    .col(integer(ProviderToken::UserId).primary_key())
                    .col(string(ProviderToken::AccessToken))
                    .col(string(ProviderToken::RefreshToken))
                    .col(timestamp_with_time_zone(ProviderToken::ExpiresAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_provider_token_user_id")
                            .from(ProviderToken::Table, ProviderToken::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProviderToken::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProviderToken {
    Table,
    UserId,
    AccessToken,
    RefreshToken,
    ExpiresAt,
}
