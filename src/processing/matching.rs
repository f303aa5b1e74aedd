use crate::domain::matching::{MatchResult, RankedTeam};
use crate::domain::query::ProcessedQuery;
use crate::domain::team::ProcessedTeam;
use crate::extraction::Lexicon;
use crate::processing::{ProcessingError, ProcessingResult};

/// Cosine similarity between two embeddings, clamped to [-1, 1].
///
/// A zero-norm operand makes the similarity undefined and fails with
/// [`ProcessingError::DegenerateVector`] instead of producing NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> ProcessingResult<f32> {
    if a.len() != b.len() {
        return Err(ProcessingError::InconsistentDerivedState(format!(
            "embedding dimensions differ: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return Err(ProcessingError::DegenerateVector(
            "zero-norm operand in similarity".to_string(),
        ));
    }

    let dot = a.iter().zip(b).map(|(x, y)| x * y).sum::<f32>();
    Ok((dot / (norm_a * norm_b)).clamp(-1.0, 1.0))
}

/// Score a query embedding against every team and order the result descending
/// by score. The sort is stable: teams with equal scores keep their input
/// order, so rankings are deterministic.
pub fn rank(
    query_embedding: &[f32],
    teams: &[ProcessedTeam],
) -> ProcessingResult<Vec<RankedTeam>> {
    if teams.is_empty() {
        return Err(ProcessingError::NoCandidates);
    }

    let mut ranking = Vec::with_capacity(teams.len());
    for team in teams {
        let score = cosine_similarity(query_embedding, &team.embedding)?;
        ranking.push(RankedTeam {
            team_id: team.id.clone(),
            team_name: team.team_name.clone(),
            score,
        });
    }
    ranking.sort_by(|a, b| b.score.total_cmp(&a.score));

    Ok(ranking)
}

/// Check a stored processed team against the current lexicon. Labels unknown
/// to the configuration mean the derived store is stale or was produced under
/// a different lexicon.
pub fn ensure_labels_known(team: &ProcessedTeam, lexicon: &Lexicon) -> ProcessingResult<()> {
    let unknown = team
        .skills
        .iter()
        .find(|label| !lexicon.has_skill(label))
        .or_else(|| team.tools.iter().find(|label| !lexicon.has_tool(label)))
        .or_else(|| {
            team.work_areas
                .iter()
                .find(|label| !lexicon.has_work_area(label))
        });

    match unknown {
        Some(label) => Err(ProcessingError::InconsistentDerivedState(format!(
            "processed team {} carries label {label:?} unknown to the lexicon",
            team.id
        ))),
        None => Ok(()),
    }
}

/// Match one processed query against the full team set. The best match is
/// always `ranking[0]`.
pub fn match_query(
    query: &ProcessedQuery,
    teams: &[ProcessedTeam],
    lexicon: &Lexicon,
) -> ProcessingResult<MatchResult> {
    for team in teams {
        ensure_labels_known(team, lexicon)?;
    }

    let ranking = rank(&query.embedding, teams)?;
    let best = ranking.first().ok_or(ProcessingError::NoCandidates)?;
    let (team_id, score) = (best.team_id.clone(), best.score);

    Ok(MatchResult {
        query_id: query.id.clone(),
        team_id,
        score,
        ranking,
    })
}
