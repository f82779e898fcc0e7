//! One-shot storage selection. The decision is made at startup and holds
//! for the process lifetime; a database that comes back later is picked up
//! on the next restart, never mid-flight.

use std::sync::Arc;

use derive_more::Display;
use tracing::{info, warn};

use crate::{
    infrastructure::db::postgres::create_pool,
    repositories::{
        contact::ContactRepository,
        memory::{MemoryContactRepo, MemoryProjectRepo},
        project::ProjectRepository,
        sqlx_repo::{SqlxContactRepo, SqlxProjectRepo},
    },
    settings::AppConfig,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StorageMode {
    #[display("database")]
    Database,
    #[display("memory")]
    Memory,
}

pub struct Storage {
    pub projects: Arc<dyn ProjectRepository>,
    pub contacts: Arc<dyn ContactRepository>,
    pub mode: StorageMode,
}

impl Storage {
    /// Seeded in-memory backend; what degraded mode and the test suite run on.
    pub fn seeded() -> Self {
        Storage {
            projects: Arc::new(MemoryProjectRepo::seeded()),
            contacts: Arc::new(MemoryContactRepo::new()),
            mode: StorageMode::Memory,
        }
    }
}

/// Tries the configured database; on any failure (no URL, connection
/// exhausted retries, migrations failed) degrades to the seeded in-memory
/// backend instead of refusing to start.
pub async fn connect_storage(config: &AppConfig) -> Storage {
    let Some(database_url) = config.database_url.as_deref() else {
        info!("no database configured, serving seed data from memory");
        return Storage::seeded();
    };

    match create_pool(database_url).await {
        Ok(pool) => match sqlx::migrate!("./migrations").run(&pool).await {
            Ok(()) => {
                info!("storage backend: postgres");
                Storage {
                    projects: Arc::new(SqlxProjectRepo::new(pool.clone())),
                    contacts: Arc::new(SqlxContactRepo::new(pool)),
                    mode: StorageMode::Database,
                }
            }
            Err(e) => {
                warn!("migrations failed ({e}), falling back to in-memory storage");
                Storage::seeded()
            }
        },
        Err(e) => {
            warn!("database unreachable ({e}), falling back to in-memory storage");
            Storage::seeded()
        }
    }
}
