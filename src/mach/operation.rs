use crate::error;
use crate::lang::ast::{Comparator, Operator};
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Integer arithmetic with native 32-bit wrapping semantics.
pub struct Operation {}

impl Operation {
    pub fn binary(op: Operator, lhs: i32, rhs: i32) -> Result<i32> {
        use Operator::*;
        match op {
            Add => Ok(Operation::add(lhs, rhs)),
            Subtract => Ok(Operation::subtract(lhs, rhs)),
            Multiply => Ok(Operation::multiply(lhs, rhs)),
            Divide => Operation::divide(lhs, rhs),
            Assign => Err(error!(InternalError; "ASSIGNMENT IS NOT ARITHMETIC")),
        }
    }

    pub fn add(lhs: i32, rhs: i32) -> i32 {
        lhs.wrapping_add(rhs)
    }

    pub fn subtract(lhs: i32, rhs: i32) -> i32 {
        lhs.wrapping_sub(rhs)
    }

    pub fn multiply(lhs: i32, rhs: i32) -> i32 {
        lhs.wrapping_mul(rhs)
    }

    pub fn divide(lhs: i32, rhs: i32) -> Result<i32> {
        if rhs == 0 {
            return Err(error!(DivisionByZero));
        }
        Ok(lhs.wrapping_div(rhs))
    }

    pub fn compare(cmp: Comparator, lhs: i32, rhs: i32) -> bool {
        use Comparator::*;
        match cmp {
            Less => lhs < rhs,
            Equal => lhs == rhs,
            Greater => lhs > rhs,
        }
    }
}
