use crate::common::errors::Result;
use crate::common::types::{Payload, StrategyParams};
use crate::strategy::paper::{PaperQuantityStrategy, PaperWeightStrategy};
use crate::strategy::quantity::QuantityStrategy;
use crate::strategy::traits::{BoxedStrategy, StrategyVariant};
use crate::strategy::types::{Context, StrategyKind};

/// Predicate + factory for one registered variant
///
/// This is what resolution hands back: the identity of a variant, not an
/// instance. The caller builds it afterwards with [`build`](Self::build).
#[derive(Clone, Copy)]
pub struct StrategyDescriptor {
    pub kind: StrategyKind,
    pub applicable: fn(&Context) -> bool,
    pub build: fn(Payload, &StrategyParams) -> Result<BoxedStrategy>,
}

impl StrategyDescriptor {
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn is_applicable(&self, context: &Context) -> bool {
        (self.applicable)(context)
    }

    /// Instantiate the variant with its input and named parameters
    pub fn build(&self, input: Payload, params: &StrategyParams) -> Result<BoxedStrategy> {
        (self.build)(input, params)
    }
}

impl std::fmt::Debug for StrategyDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyDescriptor")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

fn build_variant<V: StrategyVariant>(input: Payload, params: &StrategyParams) -> Result<BoxedStrategy> {
    Ok(Box::new(V::from_params(input, params)?))
}

/// Derive the registry entry for a variant
pub const fn descriptor<V: StrategyVariant>() -> StrategyDescriptor {
    StrategyDescriptor {
        kind: V::KIND,
        applicable: V::applicable,
        build: build_variant::<V>,
    }
}

/// Known variants in resolution order
///
/// Read-only for the life of the process.
pub static DEFAULT_REGISTRY: [StrategyDescriptor; 3] = [
    descriptor::<QuantityStrategy>(),
    descriptor::<PaperQuantityStrategy>(),
    descriptor::<PaperWeightStrategy>(),
];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_registry_order() {
        let kinds: Vec<StrategyKind> = DEFAULT_REGISTRY.iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![
                StrategyKind::Quantity,
                StrategyKind::PaperQuantity,
                StrategyKind::PaperWeight
            ]
        );
    }

    #[test]
    fn test_descriptor_builds_its_own_kind() {
        let params = StrategyParams::new()
            .with("quantity_type", "box")
            .with("paper_quantity_type", "A3")
            .with("weight_type", "120gsm");

        for descriptor in DEFAULT_REGISTRY.iter() {
            let strategy = descriptor.build(json!({}), &params).unwrap();
            assert_eq!(strategy.kind(), descriptor.kind);
            assert_eq!(strategy.name(), descriptor.name());
        }
    }

    #[test]
    fn test_required_params_match_factories() {
        for descriptor in DEFAULT_REGISTRY.iter() {
            let params: StrategyParams = descriptor
                .kind
                .required_params()
                .iter()
                .map(|name| (*name, "value"))
                .collect();
            assert!(descriptor.build(json!(null), &params).is_ok());
            assert!(descriptor.build(json!(null), &StrategyParams::new()).is_err());
        }
    }
}
