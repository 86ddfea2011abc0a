//! Read-only data source backing every endpoint.
//!
//! The catalog is built once at startup and shared behind an `Arc`. Handlers
//! never mutate it.

mod builtin;

use std::collections::HashSet;

use crate::models::{
    ActivityEntry, League, NucleiOverview, Nucleus, Player, PositionStat, SystemStatus,
    TopPerformer,
};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CatalogError {
    #[error("duplicate player id {0}")]
    DuplicatePlayerId(i64),

    #[error("player {player_id}: {field} = {value} is outside [0, 100]")]
    ScoreOutOfRange {
        player_id: i64,
        field: &'static str,
        value: f64,
    },

    #[error("nucleus overview is missing {0:?}")]
    MissingNucleus(Nucleus),
}

#[derive(Debug, Clone)]
pub struct Catalog {
    /// Insertion order is the iteration order the query service preserves
    pub players: Vec<Player>,
    pub top_performers: Vec<TopPerformer>,
    pub nuclei: NucleiOverview,
    pub system_status: SystemStatus,
    pub position_stats: Vec<PositionStat>,
    pub recent_activity: Vec<ActivityEntry>,
    pub leagues: Vec<League>,
}

fn in_score_range(value: f64) -> bool {
    value.is_finite() && (0.0..=100.0).contains(&value)
}

impl Catalog {
    /// Check the invariants the data model implies but the literals can't enforce
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::with_capacity(self.players.len());
        for player in &self.players {
            if !seen.insert(player.player_id) {
                return Err(CatalogError::DuplicatePlayerId(player.player_id));
            }
            if !in_score_range(player.overall_score) {
                return Err(CatalogError::ScoreOutOfRange {
                    player_id: player.player_id,
                    field: "overall_score",
                    value: player.overall_score,
                });
            }
            if let Some((nucleus, value)) = player
                .mental_nuclei
                .iter()
                .find(|(_, value)| !in_score_range(*value))
            {
                return Err(CatalogError::ScoreOutOfRange {
                    player_id: player.player_id,
                    field: nucleus.label(),
                    value,
                });
            }
        }

        if let Some(missing) = Nucleus::ALL
            .into_iter()
            .find(|n| !self.nuclei.contains_key(n))
        {
            return Err(CatalogError::MissingNucleus(missing));
        }

        Ok(())
    }

    pub fn player(&self, player_id: i64) -> Option<&Player> {
        self.players.iter().find(|p| p.player_id == player_id)
    }

    /// Distinct team names, in first-seen order
    pub fn teams(&self) -> Vec<String> {
        distinct(self.players.iter().map(|p| p.team_name.as_str()))
    }

    /// Distinct position codes across players, leaderboard and position
    /// stats, in first-seen order
    pub fn positions(&self) -> Vec<String> {
        let players = self.players.iter().map(|p| p.position.as_str());
        let performers = self.top_performers.iter().map(|p| p.position.as_str());
        let stats = self.position_stats.iter().map(|s| s.position.as_str());
        distinct(players.chain(performers).chain(stats))
    }

    pub fn position_stat(&self, position: &str) -> Option<&PositionStat> {
        self.position_stats.iter().find(|s| s.position == position)
    }

    /// Players at `position`, best overall score first
    pub fn players_at(&self, position: &str) -> Vec<Player> {
        let mut players: Vec<Player> = self
            .players
            .iter()
            .filter(|p| p.position == position)
            .cloned()
            .collect();
        players.sort_by(|a, b| b.overall_score.total_cmp(&a.overall_score));
        players
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}
