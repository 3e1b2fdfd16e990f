use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Dentist::Table)
                    .if_not_exists()
                    .col(pk_auto(Dentist::Id))
                    .col(string(Dentist::Name))
                    .col(string(Dentist::LastName))
                    .col(string_uniq(Dentist::License))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Dentist::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Dentist {
    Table,
    Id,
    Name,
    LastName,
    License,
}
