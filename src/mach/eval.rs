use super::{Operation, Type, Val, Var};
use crate::error;
use crate::lang::{Error, Operator};

type Result<T> = std::result::Result<T, Error>;

/// Resolves a symbol at a type: a live variable of that type, or a
/// literal of that type.
pub fn resolve_symbol(vars: &Var, symbol: &str, ty: Type) -> Result<Val> {
    if let Some(var) = vars.find(symbol) {
        if var.ty() != ty {
            return Err(error!(TypeMismatch; symbol));
        }
        return Ok(var.val());
    }
    match Val::parse(symbol, ty) {
        Some(val) => Ok(val),
        None => Err(error!(UnresolvedSymbol; symbol)),
    }
}

/// Resolves a symbol with whatever type it has.
pub fn resolve_any(vars: &Var, symbol: &str) -> Result<Val> {
    match infer_type(vars, symbol) {
        Some(ty) => resolve_symbol(vars, symbol, ty),
        None => Err(error!(UnresolvedSymbol; symbol)),
    }
}

pub fn infer_type(vars: &Var, symbol: &str) -> Option<Type> {
    match vars.find(symbol) {
        Some(var) => Some(var.ty()),
        None => Val::literal_type(symbol),
    }
}

/// Type shared by both operands of a comparison. Variables decide
/// before literals, so `x < 3` compares as real when `x` is real.
pub fn operand_type(vars: &Var, lhs: &str, rhs: &str) -> Result<Type> {
    if let Some(var) = vars.find(lhs) {
        return Ok(var.ty());
    }
    if let Some(var) = vars.find(rhs) {
        return Ok(var.ty());
    }
    match Val::literal_type(lhs) {
        Some(Type::Integer) if Val::literal_type(rhs) == Some(Type::Real) => Ok(Type::Real),
        Some(ty) => Ok(ty),
        None => Err(error!(UnresolvedSymbol; lhs)),
    }
}

/// Both operands are resolved before the operator is looked at, so a
/// bad operand is reported ahead of a bad operator or a zero divisor.
pub fn evaluate(vars: &Var, lhs: &str, operator: &str, rhs: &str, ty: Type) -> Result<Val> {
    let l = resolve_symbol(vars, lhs, ty)?;
    let r = resolve_symbol(vars, rhs, ty)?;
    match Operator::from_str(operator) {
        Some(op) => Operation::binary(l, op, r),
        None => Err(error!(InvalidOperator; operator)),
    }
}
