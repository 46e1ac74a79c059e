use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Entries: every listing and balance query is scoped by owner
        manager
            .create_index(
                Index::create()
                    .name("idx_financial_entry_user")
                    .table(FinancialEntry::Table)
                    .col(FinancialEntry::UserId)
                    .to_owned(),
            )
            .await?;

        // Entries: month/year filtering within a user
        manager
            .create_index(
                Index::create()
                    .name("idx_financial_entry_user_period")
                    .table(FinancialEntry::Table)
                    .col(FinancialEntry::UserId)
                    .col(FinancialEntry::Year)
                    .col(FinancialEntry::Month)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_financial_entry_user_period").table(FinancialEntry::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_financial_entry_user").table(FinancialEntry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum FinancialEntry { Table, UserId, Year, Month }
