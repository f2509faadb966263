use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260801_000004_create_team_table::Team, m20260801_000005_create_player_table::Player,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Bid::Table)
                    .if_not_exists()
                    .col(pk_auto(Bid::Id))
                    .col(integer(Bid::PlayerId))
                    .col(integer(Bid::TeamId))
                    .col(big_integer(Bid::Amount))
                    .col(timestamp(Bid::ExpiresAt))
                    .col(string(Bid::Status).default("active"))
                    .col(boolean(Bid::Finalized).default(false))
                    .col(
                        timestamp(Bid::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bid_player_id")
                            .from(Bid::Table, Bid::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bid_team_id")
                            .from(Bid::Table, Bid::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Bid::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Bid {
    Table,
    Id,
    PlayerId,
    TeamId,
    Amount,
    ExpiresAt,
    Status,
    Finalized,
    CreatedAt,
}
