use chrono::Utc;
use uuid::Uuid;

use crate::domain::query::{NewQuery, ProcessedQuery, RawQuery};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    JsonStoreRepository, PROCESSED_QUERIES_STORE, ProcessedQueryReader, ProcessedQueryWriter,
    QUERIES_STORE, QueryReader, QueryWriter, not_found,
};

impl QueryReader for JsonStoreRepository {
    fn get_query(&self, id: &str) -> RepositoryResult<RawQuery> {
        let queries: Vec<RawQuery> = self.read_store(QUERIES_STORE)?;
        queries
            .into_iter()
            .find(|query| query.id == id)
            .ok_or_else(|| not_found("query", id))
    }

    fn list_queries(&self) -> RepositoryResult<Vec<RawQuery>> {
        self.read_store(QUERIES_STORE)
    }
}

impl QueryWriter for JsonStoreRepository {
    fn create_query(&self, query: NewQuery) -> RepositoryResult<RawQuery> {
        let raw = RawQuery {
            // The prefix keeps query ids distinguishable from team ids.
            id: format!("q-{}", Uuid::new_v4()),
            title: query.title,
            content: query.content,
            source: query.source,
            url: query.url,
            timestamp: query.timestamp.unwrap_or_else(Utc::now),
            comments_count: query.comments_count,
        };
        self.mutate_store(QUERIES_STORE, |queries: &mut Vec<RawQuery>| {
            queries.push(raw.clone());
            Ok(raw.clone())
        })
    }
}

impl ProcessedQueryReader for JsonStoreRepository {
    fn list_processed_queries(&self) -> RepositoryResult<Vec<ProcessedQuery>> {
        self.read_store(PROCESSED_QUERIES_STORE)
    }
}

impl ProcessedQueryWriter for JsonStoreRepository {
    fn upsert_processed_query(&self, query: &ProcessedQuery) -> RepositoryResult<usize> {
        self.mutate_store(
            PROCESSED_QUERIES_STORE,
            |queries: &mut Vec<ProcessedQuery>| {
                match queries.iter().position(|existing| existing.id == query.id) {
                    Some(position) => queries[position] = query.clone(),
                    None => queries.push(query.clone()),
                }
                Ok(1)
            },
        )
    }

    fn replace_processed_queries(&self, queries: &[ProcessedQuery]) -> RepositoryResult<usize> {
        self.replace_store(PROCESSED_QUERIES_STORE, queries)
    }
}
