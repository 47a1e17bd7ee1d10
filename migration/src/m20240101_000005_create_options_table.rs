use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Options::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Options::Name).string_len(32).not_null())
                    .col(
                        ColumnDef::new(Options::User)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Options::Value).text().null())
                    .primary_key(Index::create().col(Options::Name).col(Options::User))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Options::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Options {
    Table,
    Name,
    User,
    Value,
}
