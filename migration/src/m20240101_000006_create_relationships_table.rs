use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Relationships::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Relationships::Cid).integer().not_null())
                    .col(ColumnDef::new(Relationships::Mid).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(Relationships::Cid)
                            .col(Relationships::Mid),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Relationships::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Relationships {
    Table,
    Cid,
    Mid,
}
