use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Comments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Comments::Coid)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Comments::Cid).integer().not_null())
                    .col(
                        ColumnDef::new(Comments::Created)
                            .date_time()
                            .null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Comments::Author).string_len(200).null())
                    .col(ColumnDef::new(Comments::AuthorId).integer().null())
                    .col(ColumnDef::new(Comments::OwnerId).integer().null())
                    .col(ColumnDef::new(Comments::Mail).string_len(200).null())
                    .col(ColumnDef::new(Comments::Url).string_len(200).null())
                    .col(ColumnDef::new(Comments::Ip).string_len(64).null())
                    .col(ColumnDef::new(Comments::Agent).string_len(200).null())
                    .col(ColumnDef::new(Comments::Text).text().null())
                    .col(ColumnDef::new(Comments::Type).string_len(16).null())
                    .col(ColumnDef::new(Comments::Status).string_len(16).null())
                    .col(ColumnDef::new(Comments::Parent).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_cid")
                            .from(Comments::Table, Comments::Cid)
                            .to(Contents::Table, Contents::Cid)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_comments_cid")
                    .table(Comments::Table)
                    .col(Comments::Cid)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Comments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Comments {
    Table,
    Coid,
    Cid,
    Created,
    Author,
    AuthorId,
    OwnerId,
    Mail,
    Url,
    Ip,
    Agent,
    Text,
    Type,
    Status,
    Parent,
}

#[derive(DeriveIden)]
enum Contents {
    Table,
    Cid,
}
