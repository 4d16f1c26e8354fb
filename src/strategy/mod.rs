//! Strategy selection from two discriminator values
//!
//! # Flow
//!
//! ```text
//!  (condition_alpha, condition_beta)
//!        │
//!        ▼
//!  StrategyResolver ── builds ──▶ Context
//!        │
//!        │  scans DEFAULT_REGISTRY in order, first applicable wins
//!        ▼
//!  StrategyDescriptor (variant identity, not an instance)
//!        │
//!        │  build(input, params)
//!        ▼
//!  BoxedStrategy ── execute() ──▶ ResultMapping { input, <variant fields> }
//! ```
//!
//! # Components
//!
//! - [`Strategy`]: object-safe execution interface
//! - [`StrategyVariant`]: compile-time contract (predicate + factory) of a registrable variant
//! - [`Context`]: immutable discriminator pair
//! - [`StrategyDescriptor`]: registry entry, predicate + factory
//! - [`StrategyResolver`]: ordered first-match lookup over a registry
//! - [`base_result`] / [`extend_result`]: layered result construction
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use strategy_resolver::strategy::StrategyResolver;
//! use strategy_resolver::common::types::StrategyParams;
//!
//! let descriptor = StrategyResolver::new("paper", "paper_quantity").resolve().unwrap();
//! let params = StrategyParams::new().with("paper_quantity_type", "A4");
//! let strategy = descriptor.build(json!({"quantity": 10}), &params).unwrap();
//!
//! let result = strategy.execute();
//! assert_eq!(result["input"], json!({"quantity": 10}));
//! assert_eq!(result["paper_quantity_type"], json!("A4"));
//! ```

mod paper;
mod quantity;
mod registry;
mod resolver;
mod result;
mod traits;
mod types;

pub use types::{Context, StrategyKind};

pub use traits::{BoxedStrategy, Strategy, StrategyVariant};

pub use paper::{PaperQuantityStrategy, PaperWeightStrategy};
pub use quantity::QuantityStrategy;

pub use registry::{descriptor, StrategyDescriptor, DEFAULT_REGISTRY};
pub use resolver::{run, StrategyResolver};
pub use result::{base_result, extend_result, INPUT_FIELD};
