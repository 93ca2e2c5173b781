use super::{Operation, Var};
use crate::error;
use crate::lang::ast::{Expression, Operator};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Evaluate an expression against the variable memory.
///
/// Operands are evaluated left before right. An assignment evaluates only
/// its right side, binds the result and yields it. Effects committed before
/// a failure are kept.
pub fn eval(expr: &Expression, var: &mut Var) -> Result<i32> {
    match expr {
        Expression::Constant(n) => Ok(*n),
        Expression::Identifier(ident) => var.fetch(ident),
        Expression::Compound(Operator::Assign, lhs, rhs) => match &**lhs {
            Expression::Identifier(ident) => {
                let value = eval(rhs, var)?;
                var.store(ident, value);
                Ok(value)
            }
            _ => Err(error!(SyntaxError; "ILLEGAL VARIABLE IN ASSIGNMENT")),
        },
        Expression::Compound(op, lhs, rhs) => {
            let lhs = eval(lhs, var)?;
            let rhs = eval(rhs, var)?;
            Operation::binary(*op, lhs, rhs)
        }
    }
}
