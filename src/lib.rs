// ============================================================================
// RustCalc Library
// ============================================================================

pub mod config;
pub mod core;
pub mod facade;
pub mod history;
pub mod plugins;
pub mod validator;

// Re-export main types for convenience
pub use config::CalcConfig;
pub use crate::core::{CalcError, Operand, OperandPosition, Result};
pub use facade::Calculator;
pub use history::{History, HistoryEntry};
pub use plugins::{
    Computation, ManifestEntry, Operation, OperationExt, OperationRegistry, PluginManifest,
};
pub use rust_decimal::Decimal;

/// Evaluate a single operation with the built-in operation table.
///
/// No history is kept; use [`Calculator`] when computations should be
/// recorded.
///
/// # Examples
///
/// ```
/// use rustcalc::evaluate;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let product = evaluate("multiply", "0.5", "0.5")?;
/// assert_eq!(product.to_string(), "0.25");
/// # Ok(())
/// # }
/// ```
pub fn evaluate(
    operation: &str,
    a: impl Into<Operand>,
    b: impl Into<Operand>,
) -> Result<Decimal> {
    let registry = OperationRegistry::with_default_operations()?;
    registry.lookup(operation)?.execute(a.into(), b.into())
}
