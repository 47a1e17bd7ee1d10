use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Metas::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Metas::Mid)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Metas::Name).string_len(200).null())
                    .col(ColumnDef::new(Metas::Slug).string_len(200).null())
                    .col(ColumnDef::new(Metas::Type).string_len(32).null())
                    .col(ColumnDef::new(Metas::Description).string_len(200).null())
                    .col(ColumnDef::new(Metas::Count).integer().null())
                    .col(ColumnDef::new(Metas::Order).integer().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_metas_slug")
                    .table(Metas::Table)
                    .col(Metas::Slug)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Metas::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Metas {
    Table,
    Mid,
    Name,
    Slug,
    Type,
    Description,
    Count,
    Order,
}
