// Shared test fixtures and helpers

use librank::core::config::Config;
use librank::core::services::Services;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Fixed recency reference year so tests don't depend on the clock
pub const TEST_YEAR: i32 = 2026;

/// On-disk data repository fixture holding the catalog and,
/// optionally, the inverted-index artifact
pub struct TestDataRepo {
    dir: TempDir,
}

#[allow(dead_code)] // Used across integration test binaries
impl TestDataRepo {
    /// Empty repository: no catalog, no index
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Repository seeded with the standard test catalog; no index
    /// artifact, so term frequencies degrade to defaults
    pub fn with_catalog() -> Self {
        let repo = Self::empty();
        repo.write_catalog(&default_catalog_json());
        repo
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_catalog(&self, json: &str) {
        fs::write(self.dir.path().join("books.json"), json).unwrap();
    }

    pub fn write_index(&self, json: &str) {
        fs::write(self.dir.path().join("inverted_index.json"), json).unwrap();
    }
}

/// The standard test catalog.
///
/// Gatsby's year is pinned 90 years before [`TEST_YEAR`] to land in
/// the 0.4 recency bucket.
pub fn default_catalog_json() -> String {
    format!(
        r#"[
            {{"book_id": 1, "title": "The Great Gatsby", "author": "F. Scott Fitzgerald", "language": "en", "year": {gatsby_year}}},
            {{"book_id": 2, "title": "Moby Dick", "author": "Herman Melville", "language": "en", "year": 1851}},
            {{"book_id": 3, "title": "Gatsby Annotated", "author": "J. Doe", "language": "en", "year": {recent_year}}},
            {{"book_id": 4, "title": "Songs of the Sea", "author": "", "language": "fr", "year": 0}}
        ]"#,
        gatsby_year = TEST_YEAR - 90,
        recent_year = TEST_YEAR - 2,
    )
}

/// Create test services over a data repository fixture
#[allow(dead_code)] // Used across integration test binaries
pub fn create_test_services(repo: &TestDataRepo) -> Services {
    let mut config = Config::default();
    config.catalog.data_dir = repo.path().to_path_buf();
    config.ranking.current_year = Some(TEST_YEAR);
    Services::new(config)
}
