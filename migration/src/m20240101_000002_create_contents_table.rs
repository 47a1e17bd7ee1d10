use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Contents::Cid)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Contents::Title).string_len(200).null())
                    .col(ColumnDef::new(Contents::Slug).string_len(200).null())
                    .col(
                        ColumnDef::new(Contents::Created)
                            .date_time()
                            .null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Contents::Modified)
                            .date_time()
                            .null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Contents::Text).text().null())
                    .col(ColumnDef::new(Contents::Order).integer().null())
                    .col(ColumnDef::new(Contents::AuthorId).integer().null())
                    .col(ColumnDef::new(Contents::Template).string_len(32).null())
                    .col(ColumnDef::new(Contents::Type).string_len(16).null())
                    .col(ColumnDef::new(Contents::Status).string_len(16).null())
                    .col(ColumnDef::new(Contents::Password).string_len(32).null())
                    .col(ColumnDef::new(Contents::CommentsNum).integer().null())
                    .col(ColumnDef::new(Contents::AllowComment).char_len(1).null())
                    .col(ColumnDef::new(Contents::AllowPing).char_len(1).null())
                    .col(ColumnDef::new(Contents::AllowFeed).char_len(1).null())
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            ("idx_contents_slug", Contents::Slug),
            ("idx_contents_created", Contents::Created),
            ("idx_contents_modified", Contents::Modified),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Contents::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Contents::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Contents {
    Table,
    Cid,
    Title,
    Slug,
    Created,
    Modified,
    Text,
    Order,
    AuthorId,
    Template,
    Type,
    Status,
    Password,
    CommentsNum,
    AllowComment,
    AllowPing,
    AllowFeed,
}
