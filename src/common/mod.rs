//! Types, traits and errors shared across modules

pub mod errors;
pub mod traits;
pub mod types;
