mod common;

use common::{FakeEmbedder, TestStore};

use team_matcher::domain::matching::{MatchResult, RankedTeam};
use team_matcher::domain::query::NewQuery;
use team_matcher::domain::team::NewTeam;
use team_matcher::extraction::{EntityExtractor, Lexicon};
use team_matcher::processing::query::ingest_query;
use team_matcher::processing::rebuild::rebuild_all;
use team_matcher::processing::team::ingest_team;
use team_matcher::repository::errors::RepositoryError;
use team_matcher::repository::{
    MATCHES_STORE, MatchReader, MatchWriter, PROCESSED_QUERIES_STORE, PROCESSED_TEAMS_STORE,
    ProcessedTeamReader, QueryReader, TeamReader, TeamWriter,
};

fn new_team(name: &str, document: &str) -> NewTeam {
    NewTeam {
        team_name: name.to_string(),
        full_name: "Jane Doe".to_string(),
        manager_name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        documents: vec![document.to_string()],
    }
}

fn new_query(title: &str, content: &str) -> NewQuery {
    NewQuery {
        title: title.to_string(),
        content: content.to_string(),
        source: "reddit/embedded".to_string(),
        url: "https://example.com/post/1".to_string(),
        timestamp: Some(chrono::DateTime::UNIX_EPOCH),
        comments_count: 4,
    }
}

fn extractor() -> EntityExtractor {
    EntityExtractor::new(Lexicon::default())
}

#[test]
fn raw_team_store_roundtrip() {
    let store = TestStore::new();
    let repo = store.repo();

    // A store that does not exist yet reads as the empty sequence.
    assert!(repo.list_teams().expect("list teams").is_empty());

    let created = repo
        .create_team(new_team("Alpha", "linux embedded c firmware"))
        .expect("create team");
    let fetched = repo.get_team(&created.id).expect("get team");
    assert_eq!(fetched, created);

    let updated = repo
        .update_team(&created.id, new_team("Alpha", "python backend"))
        .expect("update team");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.documents, vec!["python backend".to_string()]);

    assert_eq!(repo.delete_team(&created.id).expect("delete team"), 1);
    assert!(matches!(
        repo.get_team(&created.id),
        Err(RepositoryError::NotFound(_))
    ));
}

#[test]
fn match_store_appends_events_and_latest_wins() {
    let store = TestStore::new();
    let repo = store.repo();

    let event = |team_id: &str, score: f32| MatchResult {
        query_id: "q-1".to_string(),
        team_id: team_id.to_string(),
        score,
        ranking: vec![RankedTeam {
            team_id: team_id.to_string(),
            team_name: format!("team-{team_id}"),
            score,
        }],
    };

    repo.append_match(&event("t1", 0.4)).expect("append match");
    repo.append_match(&event("t2", 0.9)).expect("append match");

    let latest = repo.get_match("q-1").expect("get match");
    assert_eq!(latest.team_id, "t2");
    assert_eq!(repo.list_matches().expect("list matches").len(), 2);
}

#[test]
fn query_ingestion_matches_against_stored_teams() {
    let store = TestStore::new();
    let repo = store.repo();
    let extractor = extractor();

    ingest_team(
        new_team("Alpha", "linux embedded c firmware"),
        &repo,
        &extractor,
        &mut FakeEmbedder,
    )
    .expect("ingest team");
    ingest_team(
        new_team("Beta", "frontend javascript"),
        &repo,
        &extractor,
        &mut FakeEmbedder,
    )
    .expect("ingest team");

    let result = ingest_query(
        new_query("Need help", "linux kernel panics on boot"),
        &repo,
        &extractor,
        &mut FakeEmbedder,
    )
    .expect("ingest query");

    assert_eq!(result.ranking.len(), 2);
    assert_eq!(result.team_id, result.ranking[0].team_id);
    assert!(result.ranking[0].score >= result.ranking[1].score);

    let stored = repo.get_match(&result.query_id).expect("stored match");
    assert_eq!(stored, result);

    let raw = repo.get_query(&result.query_id).expect("stored query");
    assert_eq!(raw.title, "Need help");
    assert_eq!(raw.comments_count, 4);
}

#[test]
fn rebuild_twice_writes_byte_identical_stores() {
    let store = TestStore::new();
    let repo = store.repo();
    let extractor = extractor();

    ingest_team(
        new_team("Alpha", "linux embedded c firmware"),
        &repo,
        &extractor,
        &mut FakeEmbedder,
    )
    .expect("ingest team");
    ingest_team(
        new_team("Beta", "rust sql backend"),
        &repo,
        &extractor,
        &mut FakeEmbedder,
    )
    .expect("ingest team");
    ingest_query(
        new_query("Need help", "stuck on icd3 debugging"),
        &repo,
        &extractor,
        &mut FakeEmbedder,
    )
    .expect("ingest query");

    rebuild_all(&repo, &extractor, &mut FakeEmbedder).expect("first rebuild");
    let first = [
        std::fs::read(store.store_file(PROCESSED_TEAMS_STORE)).expect("read store"),
        std::fs::read(store.store_file(PROCESSED_QUERIES_STORE)).expect("read store"),
        std::fs::read(store.store_file(MATCHES_STORE)).expect("read store"),
    ];

    rebuild_all(&repo, &extractor, &mut FakeEmbedder).expect("second rebuild");
    let second = [
        std::fs::read(store.store_file(PROCESSED_TEAMS_STORE)).expect("read store"),
        std::fs::read(store.store_file(PROCESSED_QUERIES_STORE)).expect("read store"),
        std::fs::read(store.store_file(MATCHES_STORE)).expect("read store"),
    ];

    assert_eq!(first, second);
}

#[test]
fn rebuild_replaces_appended_match_events() {
    let store = TestStore::new();
    let repo = store.repo();
    let extractor = extractor();

    ingest_team(
        new_team("Alpha", "linux"),
        &repo,
        &extractor,
        &mut FakeEmbedder,
    )
    .expect("ingest team");
    let result = ingest_query(
        new_query("Need help", "linux boot loop"),
        &repo,
        &extractor,
        &mut FakeEmbedder,
    )
    .expect("ingest query");

    // A second event for the same query simulates a re-match.
    repo.append_match(&result).expect("append match");
    assert_eq!(repo.list_matches().expect("list matches").len(), 2);

    rebuild_all(&repo, &extractor, &mut FakeEmbedder).expect("rebuild");

    // The rebuild replaces the event log with one record per query.
    let matches = repo.list_matches().expect("list matches");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].query_id, result.query_id);
}

#[test]
fn derived_team_records_follow_the_raw_store() {
    let store = TestStore::new();
    let repo = store.repo();
    let extractor = extractor();

    let raw = ingest_team(
        new_team("Alpha", "linux embedded c firmware"),
        &repo,
        &extractor,
        &mut FakeEmbedder,
    )
    .expect("ingest team");

    let processed = repo.get_processed_team(&raw.id).expect("processed team");
    assert_eq!(processed.skills, vec!["c", "embedded", "linux"]);
    assert_eq!(processed.work_areas, vec!["firmware"]);
    assert_eq!(processed.owner, "Jane Doe");
}
