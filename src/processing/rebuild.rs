use crate::extraction::EntityExtractor;
use crate::processing::ProcessingResult;
use crate::processing::embedding::{FastembedEmbedder, TextEmbedder};
use crate::processing::matching::match_query;
use crate::processing::profile::{derive_query, derive_team};
use crate::repository::{
    MatchWriter, ProcessedQueryReader, ProcessedQueryWriter, ProcessedTeamReader,
    ProcessedTeamWriter, QueryReader, TeamReader,
};

/// Counters reported after a full rebuild.
#[derive(Debug, Default, PartialEq)]
pub struct RebuildStats {
    pub teams_processed: usize,
    pub queries_processed: usize,
    pub matches_rebuilt: usize,
}

/// Regenerate every derived store from the raw stores, in fixed order:
/// processed teams, then processed queries, then match results.
///
/// Each stage derives its complete record set in memory and only then
/// replaces the target store wholesale, so a failed derivation aborts the
/// stage and the store keeps its previous contents. Stage 3 reads the stores
/// written by stages 1 and 2, never stale state. With unchanged raw stores
/// and configuration the rebuild is idempotent.
pub fn rebuild_all<R, E>(
    repo: &R,
    extractor: &EntityExtractor,
    embedder: &mut E,
) -> ProcessingResult<RebuildStats>
where
    R: TeamReader
        + QueryReader
        + ProcessedTeamReader
        + ProcessedTeamWriter
        + ProcessedQueryReader
        + ProcessedQueryWriter
        + MatchWriter,
    E: TextEmbedder,
{
    let mut stats = RebuildStats::default();

    let raw_teams = repo.list_teams()?;
    let mut processed_teams = Vec::with_capacity(raw_teams.len());
    for raw in &raw_teams {
        processed_teams.push(derive_team(raw, extractor, embedder)?);
    }
    repo.replace_processed_teams(&processed_teams)?;
    stats.teams_processed = processed_teams.len();

    let raw_queries = repo.list_queries()?;
    let mut processed_queries = Vec::with_capacity(raw_queries.len());
    for raw in &raw_queries {
        processed_queries.push(derive_query(raw, extractor, embedder)?);
    }
    repo.replace_processed_queries(&processed_queries)?;
    stats.queries_processed = processed_queries.len();

    let teams = repo.list_processed_teams()?;
    let queries = repo.list_processed_queries()?;
    let mut results = Vec::with_capacity(queries.len());
    for query in &queries {
        results.push(match_query(query, &teams, extractor.lexicon())?);
    }
    repo.replace_matches(&results)?;
    stats.matches_rebuilt = results.len();

    Ok(stats)
}

/// Handle a full-rebuild message.
pub async fn process_rebuild_message<R>(repo: &R, extractor: &EntityExtractor)
where
    R: TeamReader
        + QueryReader
        + ProcessedTeamReader
        + ProcessedTeamWriter
        + ProcessedQueryReader
        + ProcessedQueryWriter
        + MatchWriter,
{
    log::info!("Received Rebuild");

    let mut embedder = match FastembedEmbedder::new() {
        Ok(embedder) => embedder,
        Err(error) => {
            log::error!("Failed to initialize embedder: {error}");
            return;
        }
    };

    match rebuild_all(repo, extractor, &mut embedder) {
        Ok(stats) => {
            log::info!(
                "Finished Rebuild: teams_processed={}, queries_processed={}, matches_rebuilt={}",
                stats.teams_processed,
                stats.queries_processed,
                stats.matches_rebuilt
            );
        }
        Err(error) => {
            log::error!("Rebuild failed: {error}");
        }
    }
}
