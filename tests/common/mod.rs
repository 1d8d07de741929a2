#![allow(dead_code)]

use airport_admin::db::{DbPool, establish_connection_pool, run_migrations};
use airport_admin::repository::DieselRepository;
use tempfile::TempDir;

/// Migrated SQLite database living in a temporary directory for one test.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("temporary directory");
        let path = dir.path().join(name);
        let url = path.to_str().expect("utf-8 database path");

        let pool = establish_connection_pool(url).expect("connection pool");
        run_migrations(&pool).expect("migrations");

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool.clone())
    }
}
