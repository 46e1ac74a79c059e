//! Create `financial_entry` table with FK to `user`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FinancialEntry::Table)
                    .if_not_exists()
                    .col(uuid(FinancialEntry::Id).primary_key())
                    .col(text(FinancialEntry::Description).not_null())
                    .col(integer(FinancialEntry::Month).not_null())
                    .col(integer(FinancialEntry::Year).not_null())
                    .col(uuid(FinancialEntry::UserId).not_null())
                    .col(decimal_len(FinancialEntry::Value, 16, 2).not_null())
                    .col(string_len(FinancialEntry::EntryType, 16).not_null())
                    .col(string_len(FinancialEntry::Status, 16).not_null())
                    .col(date(FinancialEntry::RegisteredOn).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_financial_entry_user")
                            .from(FinancialEntry::Table, FinancialEntry::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(FinancialEntry::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum FinancialEntry {
    Table,
    Id,
    Description,
    Month,
    Year,
    UserId,
    Value,
    EntryType,
    Status,
    RegisteredOn,
}

#[derive(DeriveIden)]
enum User { Table, Id }
