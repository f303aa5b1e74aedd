use crate::domain::team::{NewTeam, RawTeam};
use crate::extraction::EntityExtractor;
use crate::processing::embedding::{FastembedEmbedder, TextEmbedder};
use crate::processing::profile::derive_team;
use crate::processing::{ProcessingError, ProcessingResult};
use crate::repository::errors::RepositoryError;
use crate::repository::{ProcessedTeamWriter, TeamWriter};

fn validate_team(team: &NewTeam) -> ProcessingResult<()> {
    if team.team_name.trim().is_empty() {
        return Err(ProcessingError::InconsistentDerivedState(
            "team_name must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Store a new raw team and its freshly derived processed record.
///
/// The raw and processed writes are independent critical sections; a crash
/// between them leaves the stores inconsistent until the next rebuild.
pub fn ingest_team<R, E>(
    team: NewTeam,
    repo: &R,
    extractor: &EntityExtractor,
    embedder: &mut E,
) -> ProcessingResult<RawTeam>
where
    R: TeamWriter + ProcessedTeamWriter,
    E: TextEmbedder,
{
    validate_team(&team)?;
    let raw = repo.create_team(team)?;
    let processed = derive_team(&raw, extractor, embedder)?;
    repo.upsert_processed_team(&processed)?;
    Ok(raw)
}

/// Replace a raw team preserving its id, then re-derive its processed record.
pub fn update_team_profile<R, E>(
    id: &str,
    team: NewTeam,
    repo: &R,
    extractor: &EntityExtractor,
    embedder: &mut E,
) -> ProcessingResult<RawTeam>
where
    R: TeamWriter + ProcessedTeamWriter,
    E: TextEmbedder,
{
    validate_team(&team)?;
    let raw = repo.update_team(id, team)?;
    let processed = derive_team(&raw, extractor, embedder)?;
    repo.upsert_processed_team(&processed)?;
    Ok(raw)
}

/// Remove a team's raw and processed records. Match results referencing the
/// team go stale until the next rebuild.
pub fn remove_team<R>(id: &str, repo: &R) -> ProcessingResult<usize>
where
    R: TeamWriter + ProcessedTeamWriter,
{
    let removed = repo.delete_team(id)?;
    if removed == 0 {
        return Err(RepositoryError::NotFound(format!("team {id}")).into());
    }
    repo.delete_processed_team(id)?;
    Ok(removed)
}

/// Handle a team-creation message.
pub async fn process_create_team_message<R>(team: NewTeam, repo: &R, extractor: &EntityExtractor)
where
    R: TeamWriter + ProcessedTeamWriter,
{
    log::info!("Received CreateTeam: {}", team.team_name);

    let mut embedder = match FastembedEmbedder::new() {
        Ok(embedder) => embedder,
        Err(error) => {
            log::error!("Failed to initialize embedder: {error}");
            return;
        }
    };

    match ingest_team(team, repo, extractor, &mut embedder) {
        Ok(raw) => log::info!("Finished CreateTeam: {}", raw.id),
        Err(error) => log::error!("CreateTeam failed: {error}"),
    }
}

/// Handle a team-update message.
pub async fn process_update_team_message<R>(
    id: &str,
    team: NewTeam,
    repo: &R,
    extractor: &EntityExtractor,
) where
    R: TeamWriter + ProcessedTeamWriter,
{
    log::info!("Received UpdateTeam: {id}");

    let mut embedder = match FastembedEmbedder::new() {
        Ok(embedder) => embedder,
        Err(error) => {
            log::error!("Failed to initialize embedder: {error}");
            return;
        }
    };

    match update_team_profile(id, team, repo, extractor, &mut embedder) {
        Ok(raw) => log::info!("Finished UpdateTeam: {}", raw.id),
        Err(error) => log::error!("UpdateTeam {id} failed: {error}"),
    }
}

/// Handle a team-deletion message.
pub async fn process_delete_team_message<R>(id: &str, repo: &R)
where
    R: TeamWriter + ProcessedTeamWriter,
{
    log::info!("Received DeleteTeam: {id}");

    match remove_team(id, repo) {
        Ok(_) => log::info!("Finished DeleteTeam: {id}"),
        Err(error) => log::error!("DeleteTeam {id} failed: {error}"),
    }
}
