pub mod handlers;
pub mod notifier;
pub mod repositories;
pub mod routes;
