mod domain;
mod infrastructure;
mod interfaces;

pub mod client;
pub mod constants;
pub mod errors;
pub mod graceful_shutdown;
pub mod settings;

pub use domain::{entities, fixtures, use_cases};
pub use infrastructure::db;
pub use interfaces::{handlers, notifier, repositories, routes};

use std::sync::Arc;

use db::storage::{Storage, StorageMode};
use notifier::{ContactNotifier, DisabledNotifier, WebhookNotifier};
use repositories::{contact::ContactRepository, project::ProjectRepository};
use settings::AppConfig;
use use_cases::{contact::ContactHandler, projects::ProjectHandler};

pub struct AppState {
    pub project_handler: AppProjectHandler,
    pub contact_handler: AppContactHandler,
    pub storage_mode: StorageMode,
}

pub type AppProjectHandler = ProjectHandler<dyn ProjectRepository>;
pub type AppContactHandler = ContactHandler<dyn ContactRepository, dyn ContactNotifier>;

impl AppState {
    pub fn new(storage: Storage, notifier: Arc<dyn ContactNotifier>, featured_limit: usize) -> Self {
        AppState {
            project_handler: ProjectHandler::new(storage.projects, featured_limit),
            contact_handler: ContactHandler::new(storage.contacts, notifier),
            storage_mode: storage.mode,
        }
    }

    pub fn from_config(config: &AppConfig, storage: Storage) -> Self {
        let notifier: Arc<dyn ContactNotifier> = match &config.notify_webhook_url {
            Some(url) => Arc::new(WebhookNotifier::new(url.clone())),
            None => Arc::new(DisabledNotifier),
        };

        Self::new(storage, notifier, config.featured_limit)
    }
}
