//! Standings computation and tie-break ranking.
//!
//! Derives win/loss/points ordering for a set of teams from completed match
//! results. The computation is a pure function of its inputs: every call
//! produces a fresh ranking snapshot, and data-quality problems degrade to
//! skipped records rather than errors.

use std::collections::HashMap;
use std::str::FromStr;

use thiserror::Error;

/// Classification applied when a completed match ends with a tied score and
/// no overtime indicator.
///
/// `OvertimeLoss` credits both sides with an overtime loss, matching how the
/// site has historically displayed tied regulation results. `Draw` records a
/// true draw for both sides instead. The policy is part of
/// [`StandingsConfig`] so a deployment can switch semantics without touching
/// the computation itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiePolicy {
    OvertimeLoss,
    Draw,
}

impl Default for TiePolicy {
    fn default() -> Self {
        Self::OvertimeLoss
    }
}

/// Error returned when a tie policy string cannot be recognized.
#[derive(Debug, Error)]
#[error("unrecognized tie policy '{0}', expected 'overtime_loss' or 'draw'")]
pub struct ParseTiePolicyError(String);

impl FromStr for TiePolicy {
    type Err = ParseTiePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overtime_loss" => Ok(Self::OvertimeLoss),
            "draw" => Ok(Self::Draw),
            other => Err(ParseTiePolicyError(other.to_string())),
        }
    }
}

/// Deployment-level standings configuration.
///
/// `points_per_win` is the single configured win value used everywhere points
/// are computed; overtime losses and draws are always worth one point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandingsConfig {
    pub points_per_win: u32,
    pub tie_policy: TiePolicy,
}

impl Default for StandingsConfig {
    fn default() -> Self {
        Self {
            points_per_win: 2,
            tie_policy: TiePolicy::default(),
        }
    }
}

/// Conference a team belongs to, carried through to the ranked output so the
/// rendering layer can group and color rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConferenceRef {
    pub id: i32,
    pub name: String,
    pub color: Option<String>,
}

/// Team identity snapshot used as computation input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRecord {
    pub id: i32,
    pub name: String,
    pub logo_url: Option<String>,
    pub conference: Option<ConferenceRef>,
}

/// A completed match with both scores present.
///
/// Rows still in `scheduled` or `in_progress` status, or completed rows with
/// missing scores, are filtered out before this type is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedMatch {
    pub id: i32,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub home_score: u32,
    pub away_score: u32,
    pub overtime: bool,
}

/// One ranked standings row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamStanding {
    pub team_id: i32,
    pub team_name: String,
    pub logo_url: Option<String>,
    pub conference: Option<ConferenceRef>,
    pub wins: u32,
    pub losses: u32,
    pub otl: u32,
    pub draws: u32,
    pub games_played: u32,
    pub points: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_differential: i64,
}

impl TeamStanding {
    fn zeroed(team: &TeamRecord) -> Self {
        Self {
            team_id: team.id,
            team_name: team.name.clone(),
            logo_url: team.logo_url.clone(),
            conference: team.conference.clone(),
            wins: 0,
            losses: 0,
            otl: 0,
            draws: 0,
            games_played: 0,
            points: 0,
            goals_for: 0,
            goals_against: 0,
            goal_differential: 0,
        }
    }
}

/// Ranked standings plus a count of match records the computation ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsTable {
    pub entries: Vec<TeamStanding>,
    pub skipped_matches: usize,
}

/// Standings rows grouped under one conference; `conference` is `None` for
/// the synthetic bucket holding teams without a conference assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConferenceGroup {
    pub conference: Option<ConferenceRef>,
    pub entries: Vec<TeamStanding>,
}

/// Computes ranked standings for `teams` from `matches`.
///
/// Every input team appears in the output exactly once, zeroed if it played
/// no matches. Goals are attributed to both sides of each match regardless of
/// home/away role; a side whose team id is not in `teams` is ignored for that
/// side only. A match listing the same team on both sides is skipped entirely
/// and counted in `skipped_matches`.
///
/// Result classification per side: more goals than the opponent is a win;
/// fewer is an overtime loss when the match carries the overtime flag,
/// otherwise a regulation loss; a tied score is classified for both sides by
/// the configured [`TiePolicy`].
///
/// Points are `wins * points_per_win + otl + draws`. The final ordering is a
/// stable descending sort on points, then wins, then goal differential, then
/// goals for — teams tied on every key keep their input order.
pub fn compute_standings(
    teams: &[TeamRecord],
    matches: &[CompletedMatch],
    config: &StandingsConfig,
) -> StandingsTable {
    let mut entries: Vec<TeamStanding> = teams.iter().map(TeamStanding::zeroed).collect();
    let index: HashMap<i32, usize> = teams
        .iter()
        .enumerate()
        .map(|(i, team)| (team.id, i))
        .collect();

    let mut skipped_matches = 0;

    for m in matches {
        if m.home_team_id == m.away_team_id {
            skipped_matches += 1;
            continue;
        }

        let sides = [
            (m.home_team_id, m.home_score, m.away_score),
            (m.away_team_id, m.away_score, m.home_score),
        ];

        for (team_id, scored, conceded) in sides {
            let Some(&i) = index.get(&team_id) else {
                continue;
            };
            let entry = &mut entries[i];

            entry.goals_for += scored;
            entry.goals_against += conceded;

            if scored > conceded {
                entry.wins += 1;
            } else if scored < conceded {
                if m.overtime {
                    entry.otl += 1;
                } else {
                    entry.losses += 1;
                }
            } else {
                match config.tie_policy {
                    TiePolicy::OvertimeLoss => entry.otl += 1,
                    TiePolicy::Draw => entry.draws += 1,
                }
            }
        }
    }

    for entry in &mut entries {
        entry.games_played = entry.wins + entry.losses + entry.otl + entry.draws;
        entry.points = entry.wins * config.points_per_win + entry.otl + entry.draws;
        entry.goal_differential = i64::from(entry.goals_for) - i64::from(entry.goals_against);
    }

    // Vec::sort_by is stable, so fully tied teams keep their input order.
    entries.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.wins.cmp(&a.wins))
            .then(b.goal_differential.cmp(&a.goal_differential))
            .then(b.goals_for.cmp(&a.goals_for))
    });

    StandingsTable {
        entries,
        skipped_matches,
    }
}

/// Groups ranked standings rows by conference.
///
/// Groups appear in the order their first-ranked team appears in `entries`,
/// with rows inside each group keeping their ranking order. Teams without a
/// conference assignment land in a single `None` group placed last; no team
/// is ever dropped.
pub fn group_by_conference(entries: &[TeamStanding]) -> Vec<ConferenceGroup> {
    let mut groups: Vec<ConferenceGroup> = Vec::new();
    let mut unassigned: Vec<TeamStanding> = Vec::new();

    for entry in entries {
        match &entry.conference {
            Some(conference) => {
                match groups
                    .iter_mut()
                    .find(|g| g.conference.as_ref().map(|c| c.id) == Some(conference.id))
                {
                    Some(group) => group.entries.push(entry.clone()),
                    None => groups.push(ConferenceGroup {
                        conference: Some(conference.clone()),
                        entries: vec![entry.clone()],
                    }),
                }
            }
            None => unassigned.push(entry.clone()),
        }
    }

    if !unassigned.is_empty() {
        groups.push(ConferenceGroup {
            conference: None,
            entries: unassigned,
        });
    }

    groups
}
