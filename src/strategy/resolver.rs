use tracing::{debug, instrument, warn};

use crate::common::errors::{Result, StrategyError};
use crate::common::types::{Payload, ResultMapping, StrategyParams};
use crate::strategy::registry::{StrategyDescriptor, DEFAULT_REGISTRY};
use crate::strategy::types::Context;

/// Picks the strategy variant for a pair of discriminators
///
/// Scans the registry in order and returns the first variant whose
/// predicate accepts the context. Predicates are not checked for mutual
/// exclusivity; when several match, the earliest registered one wins and
/// a warning is logged.
#[derive(Debug, Clone)]
pub struct StrategyResolver<'r> {
    condition_alpha: String,
    condition_beta: String,
    registry: &'r [StrategyDescriptor],
}

impl StrategyResolver<'static> {
    /// Resolver over the built-in variants
    pub fn new(condition_alpha: impl Into<String>, condition_beta: impl Into<String>) -> Self {
        Self::with_registry(condition_alpha, condition_beta, &DEFAULT_REGISTRY)
    }
}

impl<'r> StrategyResolver<'r> {
    pub fn with_registry(
        condition_alpha: impl Into<String>,
        condition_beta: impl Into<String>,
        registry: &'r [StrategyDescriptor],
    ) -> Self {
        Self {
            condition_alpha: condition_alpha.into(),
            condition_beta: condition_beta.into(),
            registry,
        }
    }

    pub fn context(&self) -> Context {
        Context::new(self.condition_alpha.as_str(), self.condition_beta.as_str())
    }

    /// Find the variant to use for this resolver's discriminators
    #[instrument(skip(self), fields(alpha = %self.condition_alpha, beta = %self.condition_beta))]
    pub fn resolve(&self) -> Result<&'r StrategyDescriptor> {
        let context = self.context();
        let mut candidates = self
            .registry
            .iter()
            .filter(|descriptor| descriptor.is_applicable(&context));

        let Some(selected) = candidates.next() else {
            debug!("No registered strategy applies");
            return Err(StrategyError::NoStrategyFound { context });
        };

        let shadowed = candidates.count();
        if shadowed > 0 {
            warn!(
                strategy = selected.name(),
                shadowed, "Multiple strategies apply, using the first registered"
            );
        }

        debug!(strategy = selected.name(), "Resolved strategy");
        Ok(selected)
    }

    /// Every registered variant that applies, in registry order
    pub fn matching(&self) -> Vec<&'r StrategyDescriptor> {
        let context = self.context();
        self.registry
            .iter()
            .filter(|descriptor| descriptor.is_applicable(&context))
            .collect()
    }
}

/// Resolve, build and execute in one call
pub fn run(
    condition_alpha: &str,
    condition_beta: &str,
    input: Payload,
    params: &StrategyParams,
) -> Result<ResultMapping> {
    let descriptor = StrategyResolver::new(condition_alpha, condition_beta).resolve()?;
    let strategy = descriptor.build(input, params)?;
    Ok(strategy.execute())
}
