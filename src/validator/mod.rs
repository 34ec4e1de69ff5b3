//! Numeric validation: turns raw operands into exact decimals.
//!
//! Every operand is converted independently. Nothing is ever coerced to a
//! default value; an operand that has no exact decimal reading is reported
//! together with the side it was given for.

use crate::core::{CalcError, Operand, OperandPosition, Result};
use rust_decimal::Decimal;

const MAX_SCALE: u32 = 28;

/// Validate both operands of a binary operation.
///
/// `a` is checked first, so when both are invalid the error names `a`.
pub fn validate(a: &Operand, b: &Operand) -> Result<(Decimal, Decimal)> {
    let a = to_decimal(a, OperandPosition::A)?;
    let b = to_decimal(b, OperandPosition::B)?;
    Ok((a, b))
}

/// Convert a single operand to an exact decimal.
pub fn to_decimal(operand: &Operand, position: OperandPosition) -> Result<Decimal> {
    let converted = match operand {
        Operand::Decimal(d) => Some(*d),
        Operand::Integer(i) => Some(Decimal::from(*i)),
        Operand::Text(s) => parse_text(s),
        Operand::Float(f) => parse_float(*f),
        Operand::Null
        | Operand::Boolean(_)
        | Operand::List(_)
        | Operand::Map(_)
        | Operand::Opaque(_) => None,
    };

    converted.ok_or_else(|| invalid(operand, position))
}

fn invalid(operand: &Operand, position: OperandPosition) -> CalcError {
    CalcError::InvalidOperand {
        position,
        type_name: operand.type_name(),
        repr: operand.to_string(),
    }
}

fn parse_text(raw: &str) -> Option<Decimal> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }

    if text.contains(['e', 'E']) {
        return parse_scientific(text);
    }
    Decimal::from_str_exact(text).ok()
}

/// Exact `<mantissa>e<exponent>` parsing; any digit that would be lost
/// rejects the value.
fn parse_scientific(text: &str) -> Option<Decimal> {
    let (mantissa, exponent) = text.split_once(['e', 'E'])?;
    let mut value = Decimal::from_str_exact(mantissa).ok()?;
    let exponent: i64 = exponent.parse().ok()?;
    let scale = i64::from(value.scale()).checked_sub(exponent)?;

    if scale >= 0 {
        if scale > i64::from(MAX_SCALE) {
            return None;
        }
        value.set_scale(scale as u32).ok()?;
        return Some(value);
    }

    if value.is_zero() {
        return Some(Decimal::ZERO);
    }

    // Positive remainder: shift the integer mantissa left
    value.set_scale(0).ok()?;
    let mut shift = -scale;
    while shift > 0 {
        value = value.checked_mul(Decimal::from(10))?;
        shift -= 1;
    }
    Some(value)
}

fn parse_float(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    // The shortest round-trip text is the literal the caller wrote
    parse_text(&value.to_string())
}
