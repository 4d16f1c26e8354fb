use serde_json::Value;
use tracing::info;

use crate::common::errors::Result;
use crate::common::types::{Payload, ResultMapping, StrategyParams};
use crate::strategy::result::{base_result, extend_result};
use crate::strategy::traits::{Strategy, StrategyVariant};
use crate::strategy::types::{Context, StrategyKind};

/// Generic quantity strategy for paper goods
///
/// Applies to `condition_alpha = "paper"`, `condition_beta = "quantity"`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityStrategy {
    input: Payload,
    quantity_type: String,
}

impl QuantityStrategy {
    pub fn new(input: Payload, quantity_type: impl Into<String>) -> Self {
        Self {
            input,
            quantity_type: quantity_type.into(),
        }
    }

    pub fn input(&self) -> &Payload {
        &self.input
    }

    pub fn quantity_type(&self) -> &str {
        &self.quantity_type
    }
}

impl Strategy for QuantityStrategy {
    fn kind(&self) -> StrategyKind {
        Self::KIND
    }

    fn execute(&self) -> ResultMapping {
        info!(
            strategy = Self::KIND.name(),
            quantity_type = %self.quantity_type,
            "Executing quantity strategy with quantity type: {}",
            self.quantity_type
        );

        extend_result(
            base_result(&self.input),
            [("quantity_type", Value::String(self.quantity_type.clone()))],
        )
    }
}

impl StrategyVariant for QuantityStrategy {
    const KIND: StrategyKind = StrategyKind::Quantity;

    fn applicable(context: &Context) -> bool {
        context.matches("paper", "quantity")
    }

    fn from_params(input: Payload, params: &StrategyParams) -> Result<Self> {
        let quantity_type = params.require(Self::KIND.name(), "quantity_type")?;
        Ok(Self::new(input, quantity_type))
    }
}
