//! Create `persons` table.
//!
//! `id` is generated by the database; `name` and `age` are required columns
//! with no further constraints.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Persons::Table)
                    .if_not_exists()
                    .col(pk_auto(Persons::Id))
                    .col(string(Persons::Name))
                    .col(integer(Persons::Age))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Persons::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Persons { Table, Id, Name, Age }
