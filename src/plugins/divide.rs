use super::Operation;
use crate::core::{CalcError, Result};
use rust_decimal::Decimal;

pub struct Divide;

impl Operation for Divide {
    fn name(&self) -> &'static str {
        "divide"
    }

    fn symbol(&self) -> &'static str {
        "/"
    }

    fn apply(&self, a: Decimal, b: Decimal) -> Result<Decimal> {
        if b.is_zero() {
            return Err(CalcError::DivisionByZero);
        }
        a.checked_div(b)
            .ok_or_else(|| CalcError::Overflow(format!("{} / {}", a, b)))
    }
}
