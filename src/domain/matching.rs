use serde::{Deserialize, Serialize};

/// One entry of a match ranking, ordered descending by score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTeam {
    pub team_id: String,
    pub team_name: String,
    pub score: f32,
}

/// The outcome of matching one query against the full team set.
///
/// `team_id` and `score` describe the best match, which is always
/// `ranking[0]`. Appended as an event by the single-query path; the rebuild
/// pipeline replaces the whole store instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub query_id: String,
    pub team_id: String,
    pub score: f32,
    pub ranking: Vec<RankedTeam>,
}
