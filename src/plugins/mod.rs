pub mod add;
pub mod divide;
pub mod manifest;
pub mod multiply;
pub mod registry;
pub mod subtract;

pub use manifest::{ManifestEntry, PluginManifest};
pub use registry::OperationRegistry;

use crate::core::{Operand, Result};
use crate::validator;
use rust_decimal::Decimal;

/// A named binary arithmetic operation.
///
/// [`Operation::apply`] is the only extension point. Validation and
/// execution of raw operands live in [`OperationExt`], which every operation
/// gets through a blanket impl, so the registry and the dispatcher always run
/// the same validate-then-apply sequence.
pub trait Operation: Send + Sync {
    /// Plugin name, used as the default registry key
    fn name(&self) -> &'static str;

    /// Symbol used when rendering a computation
    fn symbol(&self) -> &'static str;

    /// Compute the result from two exact decimals.
    fn apply(&self, a: Decimal, b: Decimal) -> Result<Decimal>;
}

/// Validated operands together with the result computed from them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Computation {
    pub a: Decimal,
    pub b: Decimal,
    pub result: Decimal,
}

/// Validate-then-apply, shared by every operation.
pub trait OperationExt {
    /// Validate raw operands and compute, keeping the validated operands.
    fn evaluate(&self, a: &Operand, b: &Operand) -> Result<Computation>;

    /// Validate raw operands and compute the result.
    fn execute(&self, a: Operand, b: Operand) -> Result<Decimal> {
        self.evaluate(&a, &b).map(|c| c.result)
    }
}

impl<T: Operation + ?Sized> OperationExt for T {
    fn evaluate(&self, a: &Operand, b: &Operand) -> Result<Computation> {
        let (a, b) = validator::validate(a, b)?;
        let result = self.apply(a, b)?;
        Ok(Computation { a, b, result })
    }
}

/// The statically known table of built-in operations.
pub fn builtin_operations() -> Vec<Box<dyn Operation>> {
    vec![
        Box::new(add::Add),
        Box::new(subtract::Subtract),
        Box::new(multiply::Multiply),
        Box::new(divide::Divide),
    ]
}

/// Look up a built-in operation by its plugin name.
pub fn builtin_by_kind(kind: &str) -> Option<Box<dyn Operation>> {
    let kind = kind.trim().to_lowercase();
    builtin_operations().into_iter().find(|op| op.name() == kind)
}
