//! StrategyResolver Library
//!
//! Picks one of several interchangeable strategies from two discriminator
//! values, builds it with its own named parameters and executes it into a
//! layered result mapping. Also provides a lazily-created, process-wide
//! connection flag.

pub mod common;
pub mod config;
pub mod connection;
pub mod strategy;

// Re-export commonly used types
pub use common::errors::{Result, StrategyError};
pub use common::traits::Connection;
pub use common::types::{Payload, ResultMapping, StrategyParams};
pub use config::types::AppConfig;
pub use connection::DatabaseConnection;

// Strategy types
pub use strategy::{
    run, BoxedStrategy, Context, PaperQuantityStrategy, PaperWeightStrategy, QuantityStrategy,
    Strategy, StrategyDescriptor, StrategyKind, StrategyResolver, StrategyVariant,
};
