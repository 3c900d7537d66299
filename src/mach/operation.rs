use super::Val;
use crate::error;
use crate::lang::{Error, Operator};

type Result<T> = std::result::Result<T, Error>;

/// Operands arrive already resolved to a common type.
pub struct Operation {}

impl Operation {
    pub fn binary(lhs: Val, op: Operator, rhs: Val) -> Result<Val> {
        use Operator::*;
        match op {
            Plus => Operation::sum(lhs, rhs),
            Minus => Operation::subtract(lhs, rhs),
            Multiply => Operation::multiply(lhs, rhs),
            Divide => Operation::divide(lhs, rhs),
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => {
                Operation::compare(lhs, op, rhs)
            }
            And => Operation::and(lhs, rhs),
            Or => Operation::or(lhs, rhs),
        }
    }

    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_add(r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            (Real(l), Real(r)) => Ok(Real(l + r)),
            (Logical(_), Logical(_)) => Err(error!(InvalidOperator; "+")),
            _ => Err(error!(TypesIncompatible)),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_sub(r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            (Real(l), Real(r)) => Ok(Real(l - r)),
            (Logical(_), Logical(_)) => Err(error!(InvalidOperator; "-")),
            _ => Err(error!(TypesIncompatible)),
        }
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_mul(r) {
                Some(i) => Ok(Integer(i)),
                None => Err(error!(Overflow)),
            },
            (Real(l), Real(r)) => Ok(Real(l * r)),
            (Logical(_), Logical(_)) => Err(error!(InvalidOperator; "*")),
            _ => Err(error!(TypesIncompatible)),
        }
    }

    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match (lhs, rhs) {
            (Integer(l), Integer(r)) => match l.checked_div(r) {
                Some(i) => Ok(Integer(i)),
                None => {
                    if r == 0 {
                        Err(error!(DivisionByZero))
                    } else {
                        Err(error!(Overflow))
                    }
                }
            },
            (Real(l), Real(r)) => {
                if r == 0.0 {
                    Err(error!(DivisionByZero))
                } else {
                    Ok(Real(l / r))
                }
            }
            (Logical(_), Logical(_)) => Err(error!(InvalidOperator; "/")),
            _ => Err(error!(TypesIncompatible)),
        }
    }

    pub fn compare(lhs: Val, op: Operator, rhs: Val) -> Result<Val> {
        use Operator::*;
        let result = match (lhs, rhs) {
            (Val::Integer(l), Val::Integer(r)) => match op {
                Equal => l == r,
                NotEqual => l != r,
                Less => l < r,
                LessEqual => l <= r,
                Greater => l > r,
                GreaterEqual => l >= r,
                _ => return Err(error!(InvalidOperator; op.to_string())),
            },
            // NaN is unordered: everything but != is false.
            (Val::Real(l), Val::Real(r)) => match op {
                Equal => l == r,
                NotEqual => l != r,
                Less => l < r,
                LessEqual => l <= r,
                Greater => l > r,
                GreaterEqual => l >= r,
                _ => return Err(error!(InvalidOperator; op.to_string())),
            },
            (Val::Logical(l), Val::Logical(r)) => match op {
                Equal => l == r,
                NotEqual => l != r,
                _ => return Err(error!(InvalidOperator; op.to_string())),
            },
            _ => return Err(error!(TypesIncompatible)),
        };
        Ok(Val::Logical(result))
    }

    pub fn and(lhs: Val, rhs: Val) -> Result<Val> {
        match (lhs, rhs) {
            (Val::Logical(l), Val::Logical(r)) => Ok(Val::Logical(l && r)),
            _ => Err(error!(InvalidOperator; "and")),
        }
    }

    pub fn or(lhs: Val, rhs: Val) -> Result<Val> {
        match (lhs, rhs) {
            (Val::Logical(l), Val::Logical(r)) => Ok(Val::Logical(l || r)),
            _ => Err(error!(InvalidOperator; "or")),
        }
    }

    pub fn not(val: Val) -> Result<Val> {
        match val {
            Val::Logical(b) => Ok(Val::Logical(!b)),
            _ => Err(error!(InvalidOperator; "not")),
        }
    }

    pub fn sqrt(val: Val) -> Result<Val> {
        match val {
            Val::Real(n) => {
                if n < 0.0 {
                    Err(error!(InvalidArgument; n.to_string()))
                } else {
                    Ok(Val::Real(n.sqrt()))
                }
            }
            _ => Err(error!(TypesIncompatible)),
        }
    }
}
