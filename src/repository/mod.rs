use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::matching::MatchResult;
use crate::domain::query::{NewQuery, ProcessedQuery, RawQuery};
use crate::domain::team::{NewTeam, ProcessedTeam, RawTeam};

pub mod errors;
pub mod matching;
pub mod query;
pub mod team;

use errors::{RepositoryError, RepositoryResult};

pub const TEAMS_STORE: &str = "teams.json";
pub const PROCESSED_TEAMS_STORE: &str = "processed_teams.json";
pub const QUERIES_STORE: &str = "queries.json";
pub const PROCESSED_QUERIES_STORE: &str = "processed_queries.json";
pub const MATCHES_STORE: &str = "matches.json";

pub trait TeamReader {
    fn get_team(&self, id: &str) -> RepositoryResult<RawTeam>;
    fn list_teams(&self) -> RepositoryResult<Vec<RawTeam>>;
}

pub trait TeamWriter {
    fn create_team(&self, team: NewTeam) -> RepositoryResult<RawTeam>;
    fn update_team(&self, id: &str, team: NewTeam) -> RepositoryResult<RawTeam>;
    fn delete_team(&self, id: &str) -> RepositoryResult<usize>;
}

pub trait ProcessedTeamReader {
    fn get_processed_team(&self, id: &str) -> RepositoryResult<ProcessedTeam>;
    fn list_processed_teams(&self) -> RepositoryResult<Vec<ProcessedTeam>>;
}

pub trait ProcessedTeamWriter {
    fn upsert_processed_team(&self, team: &ProcessedTeam) -> RepositoryResult<usize>;
    fn replace_processed_teams(&self, teams: &[ProcessedTeam]) -> RepositoryResult<usize>;
    fn delete_processed_team(&self, id: &str) -> RepositoryResult<usize>;
}

pub trait QueryReader {
    fn get_query(&self, id: &str) -> RepositoryResult<RawQuery>;
    fn list_queries(&self) -> RepositoryResult<Vec<RawQuery>>;
}

pub trait QueryWriter {
    fn create_query(&self, query: NewQuery) -> RepositoryResult<RawQuery>;
}

pub trait ProcessedQueryReader {
    fn list_processed_queries(&self) -> RepositoryResult<Vec<ProcessedQuery>>;
}

pub trait ProcessedQueryWriter {
    fn upsert_processed_query(&self, query: &ProcessedQuery) -> RepositoryResult<usize>;
    fn replace_processed_queries(&self, queries: &[ProcessedQuery]) -> RepositoryResult<usize>;
}

pub trait MatchReader {
    fn get_match(&self, query_id: &str) -> RepositoryResult<MatchResult>;
    fn list_matches(&self) -> RepositoryResult<Vec<MatchResult>>;
}

pub trait MatchWriter {
    fn append_match(&self, result: &MatchResult) -> RepositoryResult<usize>;
    fn replace_matches(&self, results: &[MatchResult]) -> RepositoryResult<usize>;
}

/// File-backed document store: one pretty-printed JSON array per store under
/// `root`, every access guarded by one process-wide lock.
///
/// A store that does not exist yet reads as the empty sequence. Replacements
/// are written to a temp file and renamed into place, so readers observe
/// either the old or the new contents, never a partial write. Raw and derived
/// stores are separate critical sections; a crash between two writes leaves
/// them inconsistent until the next rebuild.
pub struct JsonStoreRepository {
    root: PathBuf,
    lock: Mutex<()>,
}

impl JsonStoreRepository {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn guard(&self) -> RepositoryResult<MutexGuard<'_, ()>> {
        self.lock
            .lock()
            .map_err(|_| RepositoryError::Unexpected("store lock poisoned".to_string()))
    }

    fn store_path(&self, store: &str) -> PathBuf {
        self.root.join(store)
    }

    fn load<T: DeserializeOwned>(&self, store: &str) -> RepositoryResult<Vec<T>> {
        let path = self.store_path(store);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn persist<T: Serialize>(&self, store: &str, records: &[T]) -> RepositoryResult<()> {
        fs::create_dir_all(&self.root)?;
        let path = self.store_path(store);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(records)?)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    /// Consistent snapshot of a whole store.
    pub(crate) fn read_store<T: DeserializeOwned>(&self, store: &str) -> RepositoryResult<Vec<T>> {
        let _guard = self.guard()?;
        self.load(store)
    }

    /// Read-modify-write inside one critical section. Nothing is persisted
    /// when the closure fails.
    pub(crate) fn mutate_store<T, R, F>(&self, store: &str, mutate: F) -> RepositoryResult<R>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut Vec<T>) -> RepositoryResult<R>,
    {
        let _guard = self.guard()?;
        let mut records = self.load(store)?;
        let outcome = mutate(&mut records)?;
        self.persist(store, &records)?;
        Ok(outcome)
    }

    /// Replace a store wholesale.
    pub(crate) fn replace_store<T: Serialize>(
        &self,
        store: &str,
        records: &[T],
    ) -> RepositoryResult<usize> {
        let _guard = self.guard()?;
        self.persist(store, records)?;
        Ok(records.len())
    }
}

pub(crate) fn not_found(kind: &str, id: &str) -> RepositoryError {
    RepositoryError::NotFound(format!("{kind} {id}"))
}
