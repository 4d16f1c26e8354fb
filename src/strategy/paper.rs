//! Paper-specific strategies

use serde_json::Value;
use tracing::info;

use crate::common::errors::Result;
use crate::common::types::{Payload, ResultMapping, StrategyParams};
use crate::strategy::result::{base_result, extend_result};
use crate::strategy::traits::{Strategy, StrategyVariant};
use crate::strategy::types::{Context, StrategyKind};

/// Applies to `condition_alpha = "paper"`, `condition_beta = "paper_quantity"`.
#[derive(Debug, Clone, PartialEq)]
pub struct PaperQuantityStrategy {
    input: Payload,
    paper_quantity_type: String,
}

impl PaperQuantityStrategy {
    pub fn new(input: Payload, paper_quantity_type: impl Into<String>) -> Self {
        Self {
            input,
            paper_quantity_type: paper_quantity_type.into(),
        }
    }

    pub fn input(&self) -> &Payload {
        &self.input
    }

    /// Sheet format, e.g. "A4"
    pub fn paper_quantity_type(&self) -> &str {
        &self.paper_quantity_type
    }
}

impl Strategy for PaperQuantityStrategy {
    fn kind(&self) -> StrategyKind {
        Self::KIND
    }

    fn execute(&self) -> ResultMapping {
        info!(
            strategy = Self::KIND.name(),
            paper_quantity_type = %self.paper_quantity_type,
            "Executing paper quantity strategy with quantity type: {}",
            self.paper_quantity_type
        );

        extend_result(
            base_result(&self.input),
            [(
                "paper_quantity_type",
                Value::String(self.paper_quantity_type.clone()),
            )],
        )
    }
}

impl StrategyVariant for PaperQuantityStrategy {
    const KIND: StrategyKind = StrategyKind::PaperQuantity;

    fn applicable(context: &Context) -> bool {
        context.matches("paper", "paper_quantity")
    }

    fn from_params(input: Payload, params: &StrategyParams) -> Result<Self> {
        let paper_quantity_type = params.require(Self::KIND.name(), "paper_quantity_type")?;
        Ok(Self::new(input, paper_quantity_type))
    }
}

/// Applies to `condition_alpha = "paper"`, `condition_beta = "paper_weight"`.
#[derive(Debug, Clone, PartialEq)]
pub struct PaperWeightStrategy {
    input: Payload,
    weight_type: String,
}

impl PaperWeightStrategy {
    pub fn new(input: Payload, weight_type: impl Into<String>) -> Self {
        Self {
            input,
            weight_type: weight_type.into(),
        }
    }

    pub fn input(&self) -> &Payload {
        &self.input
    }

    pub fn weight_type(&self) -> &str {
        &self.weight_type
    }
}

impl Strategy for PaperWeightStrategy {
    fn kind(&self) -> StrategyKind {
        Self::KIND
    }

    fn execute(&self) -> ResultMapping {
        info!(
            strategy = Self::KIND.name(),
            weight_type = %self.weight_type,
            "Executing paper weight strategy with weight type: {}",
            self.weight_type
        );

        extend_result(
            base_result(&self.input),
            [("weight_type", Value::String(self.weight_type.clone()))],
        )
    }
}

impl StrategyVariant for PaperWeightStrategy {
    const KIND: StrategyKind = StrategyKind::PaperWeight;

    fn applicable(context: &Context) -> bool {
        context.matches("paper", "paper_weight")
    }

    fn from_params(input: Payload, params: &StrategyParams) -> Result<Self> {
        let weight_type = params.require(Self::KIND.name(), "weight_type")?;
        Ok(Self::new(input, weight_type))
    }
}
