//! Player listing: exact-match filters followed by offset/limit pagination.

use crate::models::{Player, PlayersResponse};

pub const DEFAULT_LIMIT: usize = 50;
pub const DEFAULT_OFFSET: usize = 0;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("`{name}` must be a non-negative integer, got {value}")]
    Negative { name: &'static str, value: i64 },

    #[error("`{name}` is too large: {value}")]
    TooLarge { name: &'static str, value: i64 },
}

/// Validate an optional count-like query parameter, falling back to `default`
pub fn non_negative(
    name: &'static str,
    value: Option<i64>,
    default: usize,
) -> Result<usize, QueryError> {
    match value {
        None => Ok(default),
        Some(v) if v < 0 => Err(QueryError::Negative { name, value: v }),
        Some(v) => usize::try_from(v).map_err(|_| QueryError::TooLarge { name, value: v }),
    }
}

/// Exact, case-sensitive equality filters. `None` matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerFilter {
    pub position: Option<String>,
    pub team: Option<String>,
}

impl PlayerFilter {
    /// Blank strings mean "no filter", the way the dashboard sends them
    pub fn new(position: Option<String>, team: Option<String>) -> Self {
        PlayerFilter {
            position: position.filter(|p| !p.is_empty()),
            team: team.filter(|t| !t.is_empty()),
        }
    }

    pub fn matches(&self, player: &Player) -> bool {
        self.position.as_deref().is_none_or(|p| player.position == p)
            && self.team.as_deref().is_none_or(|t| player.team_name == t)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: usize,
    pub offset: usize,
}

impl Default for Page {
    fn default() -> Self {
        Page {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl Page {
    pub fn from_params(limit: Option<i64>, offset: Option<i64>) -> Result<Self, QueryError> {
        Ok(Page {
            limit: non_negative("limit", limit, DEFAULT_LIMIT)?,
            offset: non_negative("offset", offset, DEFAULT_OFFSET)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerQuery {
    pub filter: PlayerFilter,
    pub page: Page,
}

/// Filter `players`, count the matches, then slice out the requested page.
///
/// `total` is counted before pagination, so an offset past the end still
/// reports how many records matched. Input order is preserved.
pub fn list_players(players: &[Player], query: &PlayerQuery) -> PlayersResponse {
    let matching: Vec<&Player> = players.iter().filter(|p| query.filter.matches(p)).collect();
    let total = matching.len();

    let players = matching
        .into_iter()
        .skip(query.page.offset)
        .take(query.page.limit)
        .cloned()
        .collect();

    PlayersResponse { players, total }
}
