use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(User::Uid)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(User::Username)
                            .string_len(32)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(User::Password).string_len(64).null())
                    .col(
                        ColumnDef::new(User::Email)
                            .string_len(200)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(User::Url).string_len(200).null())
                    .col(ColumnDef::new(User::ScreenName).string_len(32).null())
                    .col(
                        ColumnDef::new(User::Created)
                            .date_time()
                            .null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(User::Activated).date_time().null())
                    .col(ColumnDef::new(User::Logged).date_time().null())
                    .col(ColumnDef::new(User::Group).string_len(16).null())
                    .col(ColumnDef::new(User::AuthCode).string_len(40).null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum User {
    Table,
    Uid,
    Username,
    Password,
    Email,
    Url,
    ScreenName,
    Created,
    Activated,
    Logged,
    Group,
    AuthCode,
}
