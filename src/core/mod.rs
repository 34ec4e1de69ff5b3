pub mod error;
pub mod operand;

pub use error::{CalcError, OperandPosition, Result};
pub use operand::Operand;
