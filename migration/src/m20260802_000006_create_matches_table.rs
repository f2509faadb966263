use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260801_000003_create_season_table::Season, m20260801_000004_create_team_table::Team,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Matches::Table)
                    .if_not_exists()
                    .col(pk_auto(Matches::Id))
                    .col(integer(Matches::SeasonId))
                    .col(integer(Matches::HomeTeamId))
                    .col(integer(Matches::AwayTeamId))
                    .col(integer_null(Matches::HomeScore))
                    .col(integer_null(Matches::AwayScore))
                    .col(string(Matches::Status).default("scheduled"))
                    .col(boolean(Matches::Overtime).default(false))
                    .col(timestamp(Matches::ScheduledAt))
                    .col(
                        timestamp(Matches::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_season_id")
                            .from(Matches::Table, Matches::SeasonId)
                            .to(Season::Table, Season::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_home_team_id")
                            .from(Matches::Table, Matches::HomeTeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_away_team_id")
                            .from(Matches::Table, Matches::AwayTeamId)
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
            .drop_table(Table::drop().table(Matches::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Matches {
    Table,
    Id,
    SeasonId,
    HomeTeamId,
    AwayTeamId,
    HomeScore,
    AwayScore,
    Status,
    Overtime,
    ScheduledAt,
    CreatedAt,
}
