use serde::{Deserialize, Serialize};

/// Discriminator values a strategy is selected by
///
/// Built fresh for every resolution and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Context {
    condition_alpha: String,
    condition_beta: String,
}

impl Context {
    pub fn new(condition_alpha: impl Into<String>, condition_beta: impl Into<String>) -> Self {
        Self {
            condition_alpha: condition_alpha.into(),
            condition_beta: condition_beta.into(),
        }
    }

    /// Primary category, e.g. "paper"
    pub fn condition_alpha(&self) -> &str {
        &self.condition_alpha
    }

    /// Subcategory within `condition_alpha`, e.g. "paper_weight"
    pub fn condition_beta(&self) -> &str {
        &self.condition_beta
    }

    /// True if both discriminators equal the given literals
    pub fn matches(&self, condition_alpha: &str, condition_beta: &str) -> bool {
        self.condition_alpha == condition_alpha && self.condition_beta == condition_beta
    }
}

impl std::fmt::Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "condition_alpha={}, condition_beta={}",
            self.condition_alpha, self.condition_beta
        )
    }
}

/// Identity of a strategy variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    Quantity,
    PaperQuantity,
    PaperWeight,
}

impl StrategyKind {
    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::Quantity => "QuantityStrategy",
            StrategyKind::PaperQuantity => "PaperQuantityStrategy",
            StrategyKind::PaperWeight => "PaperWeightStrategy",
        }
    }

    /// Named parameters the variant must be constructed with
    pub fn required_params(&self) -> &'static [&'static str] {
        match self {
            StrategyKind::Quantity => &["quantity_type"],
            StrategyKind::PaperQuantity => &["paper_quantity_type"],
            StrategyKind::PaperWeight => &["weight_type"],
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_display() {
        let context = Context::new("paper", "paper_weight");
        assert_eq!(
            context.to_string(),
            "condition_alpha=paper, condition_beta=paper_weight"
        );
    }

    #[test]
    fn test_context_matches_both_fields() {
        let context = Context::new("paper", "quantity");
        assert!(context.matches("paper", "quantity"));
        assert!(!context.matches("paper", "paper_quantity"));
        assert!(!context.matches("plastic", "quantity"));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(StrategyKind::Quantity.to_string(), "QuantityStrategy");
        assert_eq!(StrategyKind::PaperWeight.required_params(), &["weight_type"]);
    }
}
