use sea_orm_migration::prelude::*;

/// Creates the `oauth_accounts` table with a cascading foreign key to
/// `users`, a composite unique index on `(provider, provider_user_id)`,
/// and a lookup index on `user_id`.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum OauthAccounts {
    Table,
    Id,
    UserId,
    Provider,
    ProviderUserId,
    AccessToken,
    RefreshToken,
    ExpiresAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OauthAccounts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OauthAccounts::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(OauthAccounts::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(OauthAccounts::Provider)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OauthAccounts::ProviderUserId)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(OauthAccounts::AccessToken).text().null())
                    .col(ColumnDef::new(OauthAccounts::RefreshToken).text().null())
                    .col(
                        ColumnDef::new(OauthAccounts::ExpiresAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(OauthAccounts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_oauth_accounts_user_id")
                            .from(OauthAccounts::Table, OauthAccounts::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One provider account links to at most one local user
        manager
            .create_index(
                Index::create()
                    .name("idx_oauth_accounts_provider_provider_user_id")
                    .table(OauthAccounts::Table)
                    .col(OauthAccounts::Provider)
                    .col(OauthAccounts::ProviderUserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_oauth_accounts_user_id")
                    .table(OauthAccounts::Table)
                    .col(OauthAccounts::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_oauth_accounts_provider_provider_user_id")
                    .table(OauthAccounts::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_oauth_accounts_user_id")
                    .table(OauthAccounts::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(OauthAccounts::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}
