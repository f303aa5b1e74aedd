use crate::domain::matching::MatchResult;
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    JsonStoreRepository, MATCHES_STORE, MatchReader, MatchWriter, not_found,
};

impl MatchReader for JsonStoreRepository {
    fn get_match(&self, query_id: &str) -> RepositoryResult<MatchResult> {
        let matches: Vec<MatchResult> = self.read_store(MATCHES_STORE)?;
        // Matches are appended as events; the most recent one wins.
        matches
            .into_iter()
            .rev()
            .find(|result| result.query_id == query_id)
            .ok_or_else(|| not_found("match for query", query_id))
    }

    fn list_matches(&self) -> RepositoryResult<Vec<MatchResult>> {
        self.read_store(MATCHES_STORE)
    }
}

impl MatchWriter for JsonStoreRepository {
    fn append_match(&self, result: &MatchResult) -> RepositoryResult<usize> {
        self.mutate_store(MATCHES_STORE, |matches: &mut Vec<MatchResult>| {
            matches.push(result.clone());
            Ok(1)
        })
    }

    fn replace_matches(&self, results: &[MatchResult]) -> RepositoryResult<usize> {
        self.replace_store(MATCHES_STORE, results)
    }
}
