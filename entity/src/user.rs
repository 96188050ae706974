use sea_orm::entity::prelude::*;

/// Platform account with local credentials and an optional linked Discord identity.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub is_admin: bool,
    /// Discord ID of the linked external account, absent until the user connects one.
    #[sea_orm(unique)]
    pub discord_id: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::provider_token::Entity")]
    ProviderToken,
    #[sea_orm(has_many = "super::submission::Entity")]
    Submission,
}

impl Related<super::provider_token::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProviderToken.def()
    }
}

impl Related<super::submission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
