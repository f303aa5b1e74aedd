//! Helpers for integration tests.

use std::path::PathBuf;

use team_matcher::processing::ProcessingResult;
use team_matcher::processing::embedding::TextEmbedder;
use team_matcher::repository::JsonStoreRepository;

/// Temporary store directory used in integration tests.
pub struct TestStore {
    _dir: tempfile::TempDir,
    root: PathBuf,
}

impl TestStore {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp store dir.");
        let root = dir.path().to_path_buf();
        TestStore { _dir: dir, root }
    }

    pub fn repo(&self) -> JsonStoreRepository {
        JsonStoreRepository::new(&self.root)
    }

    pub fn store_file(&self, store: &str) -> PathBuf {
        self.root.join(store)
    }
}

/// Deterministic stand-in for the embedding model.
pub struct FakeEmbedder;

impl TextEmbedder for FakeEmbedder {
    fn embed(&mut self, text: &str) -> ProcessingResult<Vec<f32>> {
        let mut vec = vec![0.0_f32; 8];
        for (i, byte) in text.bytes().enumerate() {
            vec[i % 8] += byte as f32;
        }
        let norm = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut vec {
                *value /= norm;
            }
        }
        Ok(vec)
    }
}
