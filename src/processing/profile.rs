use crate::BLOB_SEPARATOR;
use crate::domain::query::{ProcessedQuery, RawQuery};
use crate::domain::team::{ProcessedTeam, RawTeam};
use crate::extraction::EntityExtractor;
use crate::processing::ProcessingResult;
use crate::processing::embedding::TextEmbedder;

/// Build the text blob describing a team for extraction and embedding.
///
/// The blob contains the team name, owner and manager names, then each
/// document, with empty parts skipped.
pub fn team_blob(raw: &RawTeam) -> String {
    let mut parts = vec![
        raw.team_name.as_str(),
        raw.full_name.as_str(),
        raw.manager_name.as_str(),
    ];
    parts.extend(raw.documents.iter().map(String::as_str));
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(BLOB_SEPARATOR)
}

/// Build the text blob describing a query.
pub fn query_blob(raw: &RawQuery) -> String {
    format!("{} . {}", raw.title, raw.content)
}

/// Derive the processed record for a team.
///
/// Pure: given the same raw record, lexicon and model, the output is
/// byte-for-byte reproducible. Persistence is the caller's responsibility.
pub fn derive_team<E: TextEmbedder>(
    raw: &RawTeam,
    extractor: &EntityExtractor,
    embedder: &mut E,
) -> ProcessingResult<ProcessedTeam> {
    let blob = team_blob(raw);
    let entities = extractor.extract(&blob);
    let embedding = embedder.embed(&blob)?;

    Ok(ProcessedTeam {
        id: raw.id.clone(),
        team_name: raw.team_name.clone(),
        owner: raw.full_name.clone(),
        manager: raw.manager_name.clone(),
        skills: entities.skills.into_iter().collect(),
        tools: entities.tools.into_iter().collect(),
        work_areas: entities.work_areas.into_iter().collect(),
        embedding,
    })
}

/// Derive the processed record for a query. The `keywords` field carries the
/// skills subset of the extracted entities.
pub fn derive_query<E: TextEmbedder>(
    raw: &RawQuery,
    extractor: &EntityExtractor,
    embedder: &mut E,
) -> ProcessingResult<ProcessedQuery> {
    let blob = query_blob(raw);
    let entities = extractor.extract(&blob);
    let embedding = embedder.embed(&blob)?;

    Ok(ProcessedQuery {
        id: raw.id.clone(),
        clean_text: blob.to_lowercase(),
        keywords: entities.skills.into_iter().collect(),
        embedding,
    })
}
