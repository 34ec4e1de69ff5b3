use super::Operation;
use crate::core::{CalcError, Result};
use rust_decimal::Decimal;

pub struct Subtract;

impl Operation for Subtract {
    fn name(&self) -> &'static str {
        "subtract"
    }

    fn symbol(&self) -> &'static str {
        "-"
    }

    fn apply(&self, a: Decimal, b: Decimal) -> Result<Decimal> {
        a.checked_sub(b)
            .ok_or_else(|| CalcError::Overflow(format!("{} - {}", a, b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::OperationExt;
    use std::str::FromStr;

    #[test]
    fn test_subtract() {
        assert_eq!(Subtract.execute(7.into(), 3.into()).unwrap(), Decimal::from(4));
        assert_eq!(Subtract.execute(3.into(), 7.into()).unwrap(), Decimal::from(-4));
    }

    #[test]
    fn test_subtract_decimal_fractions() {
        let result = Subtract.execute("0.3".into(), "0.1".into()).unwrap();
        assert_eq!(result, Decimal::from_str("0.2").unwrap());
    }

    #[test]
    fn test_subtract_overflow() {
        let err = Subtract.apply(Decimal::MIN, Decimal::ONE).unwrap_err();
        assert!(matches!(err, CalcError::Overflow(_)));
    }
}
