//! Connection module - lazily-created process-wide connection state

pub mod database;

pub use database::DatabaseConnection;
