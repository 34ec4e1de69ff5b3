use super::Operation;
use crate::core::{CalcError, Result};
use rust_decimal::Decimal;

pub struct Multiply;

impl Operation for Multiply {
    fn name(&self) -> &'static str {
        "multiply"
    }

    fn symbol(&self) -> &'static str {
        "*"
    }

    fn apply(&self, a: Decimal, b: Decimal) -> Result<Decimal> {
        a.checked_mul(b)
            .ok_or_else(|| CalcError::Overflow(format!("{} * {}", a, b)))
    }
}
