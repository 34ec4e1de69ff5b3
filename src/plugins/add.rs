use super::Operation;
use crate::core::{CalcError, Result};
use rust_decimal::Decimal;

pub struct Add;

impl Operation for Add {
    fn name(&self) -> &'static str {
        "add"
    }

    fn symbol(&self) -> &'static str {
        "+"
    }

    fn apply(&self, a: Decimal, b: Decimal) -> Result<Decimal> {
        a.checked_add(b)
            .ok_or_else(|| CalcError::Overflow(format!("{} + {}", a, b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugins::OperationExt;
    use std::str::FromStr;

    #[test]
    fn test_add_integers() {
        assert_eq!(Add.execute(2.into(), 3.into()).unwrap(), Decimal::from(5));
    }

    #[test]
    fn test_add_mixed_is_exact() {
        let result = Add.execute("3.5".into(), 2.into()).unwrap();
        assert_eq!(result, Decimal::from_str("5.5").unwrap());
    }

    #[test]
    fn test_add_overflow() {
        let err = Add.apply(Decimal::MAX, Decimal::ONE).unwrap_err();
        assert!(matches!(err, CalcError::Overflow(_)));
    }
}
