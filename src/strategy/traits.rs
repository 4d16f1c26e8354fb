use crate::common::errors::Result;
use crate::common::types::{Payload, ResultMapping, StrategyParams};
use crate::strategy::types::{Context, StrategyKind};

/// Core strategy trait
///
/// A constructed strategy owns its input payload and its variant-specific
/// parameters; `execute` needs nothing else.
///
/// # Implementation Notes
///
/// - `execute` must not mutate the strategy; it may be called repeatedly
/// - The returned mapping always starts with the untouched `input` field
///   (see [`base_result`](crate::strategy::base_result))
pub trait Strategy: Send + Sync {
    /// Which variant this is
    fn kind(&self) -> StrategyKind;

    /// Run the strategy and build its result mapping
    fn execute(&self) -> ResultMapping;

    fn name(&self) -> &'static str {
        self.kind().name()
    }
}

/// Compile-time contract of a registrable variant
///
/// There are no default bodies for `applicable` or `from_params`: a variant
/// that forgets either does not compile.
///
/// # Example
///
/// ```ignore
/// struct RollStrategy { input: Payload, roll_width: String }
///
/// impl StrategyVariant for RollStrategy {
///     const KIND: StrategyKind = StrategyKind::Roll;
///
///     fn applicable(context: &Context) -> bool {
///         context.matches("paper", "roll")
///     }
///
///     fn from_params(input: Payload, params: &StrategyParams) -> Result<Self> {
///         let roll_width = params.require(Self::KIND.name(), "roll_width")?;
///         Ok(Self { input, roll_width: roll_width.to_string() })
///     }
/// }
/// ```
pub trait StrategyVariant: Strategy + Sized + 'static {
    const KIND: StrategyKind;

    /// Pure applicability predicate over the discriminators
    fn applicable(context: &Context) -> bool;

    /// Build the variant from an input payload and its named parameters
    fn from_params(input: Payload, params: &StrategyParams) -> Result<Self>;
}

/// Boxed strategy for dynamic dispatch
pub type BoxedStrategy = Box<dyn Strategy>;
