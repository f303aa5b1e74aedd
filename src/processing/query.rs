use url::Url;

use crate::domain::matching::MatchResult;
use crate::domain::query::NewQuery;
use crate::extraction::EntityExtractor;
use crate::processing::embedding::{FastembedEmbedder, TextEmbedder};
use crate::processing::matching::match_query;
use crate::processing::profile::derive_query;
use crate::processing::{ProcessingError, ProcessingResult};
use crate::repository::{MatchWriter, ProcessedQueryWriter, ProcessedTeamReader, QueryWriter};

fn validate_query(query: &NewQuery) -> ProcessingResult<()> {
    if !query.url.is_empty() {
        Url::parse(&query.url).map_err(|error| {
            ProcessingError::InconsistentDerivedState(format!("query url is malformed: {error}"))
        })?;
    }
    Ok(())
}

/// Store a new raw query, derive its processed record and match it against
/// the full team set, appending one [`MatchResult`] event.
///
/// When no processed teams exist the match fails with `NoCandidates` and no
/// result is written; the ingested query itself remains and is picked up by
/// the next rebuild.
pub fn ingest_query<R, E>(
    query: NewQuery,
    repo: &R,
    extractor: &EntityExtractor,
    embedder: &mut E,
) -> ProcessingResult<MatchResult>
where
    R: QueryWriter + ProcessedQueryWriter + ProcessedTeamReader + MatchWriter,
    E: TextEmbedder,
{
    validate_query(&query)?;
    let raw = repo.create_query(query)?;
    let processed = derive_query(&raw, extractor, embedder)?;
    repo.upsert_processed_query(&processed)?;

    let teams = repo.list_processed_teams()?;
    let result = match_query(&processed, &teams, extractor.lexicon())?;
    repo.append_match(&result)?;

    Ok(result)
}

/// Handle a query-ingestion message.
pub async fn process_create_query_message<R>(query: NewQuery, repo: &R, extractor: &EntityExtractor)
where
    R: QueryWriter + ProcessedQueryWriter + ProcessedTeamReader + MatchWriter,
{
    log::info!("Received CreateQuery: {}", query.title);

    let mut embedder = match FastembedEmbedder::new() {
        Ok(embedder) => embedder,
        Err(error) => {
            log::error!("Failed to initialize embedder: {error}");
            return;
        }
    };

    match ingest_query(query, repo, extractor, &mut embedder) {
        Ok(result) => {
            log::info!(
                "Finished CreateQuery: {} matched to {} (score {:.4})",
                result.query_id,
                result.team_id,
                result.score
            );
        }
        Err(error) => log::error!("CreateQuery failed: {error}"),
    }
}
