use crate::error;
use crate::lang::{Error, Word};
use std::convert::TryFrom;

type Result<T> = std::result::Result<T, Error>;

/// ## Data types

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Type {
    Integer,
    Logical,
    Real,
}

impl Type {
    pub fn from_word(word: Word) -> Option<Type> {
        match word {
            Word::Integer => Some(Type::Integer),
            Word::Logical => Some(Type::Logical),
            Word::Real => Some(Type::Real),
            _ => None,
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Type::Integer => write!(f, "integer"),
            Type::Logical => write!(f, "logical"),
            Type::Real => write!(f, "real"),
        }
    }
}

/// ## Values

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Val {
    Integer(i32),
    Logical(bool),
    Real(f64),
}

impl Val {
    pub fn zero(ty: Type) -> Val {
        match ty {
            Type::Integer => Val::Integer(0),
            Type::Logical => Val::Logical(false),
            Type::Real => Val::Real(0.0),
        }
    }

    pub fn ty(&self) -> Type {
        match self {
            Val::Integer(_) => Type::Integer,
            Val::Logical(_) => Type::Logical,
            Val::Real(_) => Type::Real,
        }
    }

    /// Parses a literal of the given type.
    pub fn parse(s: &str, ty: Type) -> Option<Val> {
        match ty {
            Type::Integer => parse_integer(s).map(Val::Integer),
            Type::Logical => match s {
                "true" => Some(Val::Logical(true)),
                "false" => Some(Val::Logical(false)),
                _ => None,
            },
            Type::Real => parse_real(s).map(Val::Real),
        }
    }

    /// Which type a bare literal would have.
    pub fn literal_type(s: &str) -> Option<Type> {
        if s == "true" || s == "false" {
            Some(Type::Logical)
        } else if parse_integer(s).is_some() {
            Some(Type::Integer)
        } else if parse_real(s).is_some() {
            Some(Type::Real)
        } else {
            None
        }
    }

    pub fn convert(self, ty: Type) -> Result<Val> {
        Ok(match ty {
            Type::Integer => Val::Integer(i32::try_from(self)?),
            Type::Logical => Val::Logical(bool::from(self)),
            Type::Real => Val::Real(f64::from(self)),
        })
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Val::Integer(n) => *n == 0,
            Val::Logical(b) => !*b,
            Val::Real(n) => *n == 0.0,
        }
    }
}

fn parse_integer(s: &str) -> Option<i32> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse::<i32>().ok()
}

fn parse_real(s: &str) -> Option<f64> {
    // f64::from_str also takes "inf" and "NaN"; those aren't literals here.
    if !s.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    if !s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
    {
        return None;
    }
    s.parse::<f64>().ok().filter(|n| n.is_finite())
}

impl TryFrom<Val> for i32 {
    type Error = Error;
    fn try_from(val: Val) -> std::result::Result<Self, Self::Error> {
        match val {
            Val::Integer(n) => Ok(n),
            Val::Logical(b) => Ok(b as i32),
            Val::Real(n) => {
                let n = n.trunc();
                if n.is_nan() || n < i32::min_value() as f64 || n > i32::max_value() as f64 {
                    Err(error!(Overflow))
                } else {
                    Ok(n as i32)
                }
            }
        }
    }
}

impl From<Val> for bool {
    fn from(val: Val) -> Self {
        !val.is_zero()
    }
}

impl From<Val> for f64 {
    fn from(val: Val) -> Self {
        match val {
            Val::Integer(n) => n as f64,
            Val::Logical(b) => {
                if b {
                    1.0
                } else {
                    0.0
                }
            }
            Val::Real(n) => n,
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Integer(n) => write!(f, "{}", n),
            Val::Logical(b) => write!(f, "{}", b),
            Val::Real(n) => write!(f, "{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_literals() {
        assert_eq!(Val::parse("42", Type::Integer), Some(Val::Integer(42)));
        assert_eq!(Val::parse("-7", Type::Integer), Some(Val::Integer(-7)));
        assert_eq!(Val::parse("+7", Type::Integer), None);
        assert_eq!(Val::parse("2147483648", Type::Integer), None);
        assert_eq!(Val::parse("1.5", Type::Integer), None);
        assert_eq!(Val::parse("x", Type::Integer), None);
    }

    #[test]
    fn test_integer_round_trip() {
        for n in [i32::min_value(), -1000, -1, 0, 1, 99, i32::max_value()].iter() {
            let s = Val::Integer(*n).to_string();
            assert_eq!(Val::parse(&s, Type::Integer), Some(Val::Integer(*n)));
        }
    }

    #[test]
    fn test_logical_round_trip() {
        for b in [true, false].iter() {
            let s = Val::Logical(*b).to_string();
            assert_eq!(Val::parse(&s, Type::Logical), Some(Val::Logical(*b)));
        }
        assert_eq!(Val::parse("7", Type::Logical), None);
        assert_eq!(Val::parse("TRUE", Type::Logical), None);
    }

    #[test]
    fn test_real_literals() {
        assert_eq!(Val::parse("2.5", Type::Real), Some(Val::Real(2.5)));
        assert_eq!(Val::parse("3", Type::Real), Some(Val::Real(3.0)));
        assert_eq!(Val::parse("1e3", Type::Real), Some(Val::Real(1000.0)));
        assert_eq!(Val::parse("inf", Type::Real), None);
        assert_eq!(Val::parse("NaN", Type::Real), None);
        assert_eq!(Val::parse("1e999", Type::Real), None);
    }

    #[test]
    fn test_literal_type() {
        assert_eq!(Val::literal_type("true"), Some(Type::Logical));
        assert_eq!(Val::literal_type("12"), Some(Type::Integer));
        assert_eq!(Val::literal_type("1.2"), Some(Type::Real));
        assert_eq!(Val::literal_type("y"), None);
    }

    #[test]
    fn test_convert() {
        assert_eq!(Val::Real(-2.9).convert(Type::Integer), Ok(Val::Integer(-2)));
        assert_eq!(Val::Logical(true).convert(Type::Integer), Ok(Val::Integer(1)));
        assert_eq!(Val::Integer(0).convert(Type::Logical), Ok(Val::Logical(false)));
        assert_eq!(Val::Integer(-3).convert(Type::Real), Ok(Val::Real(-3.0)));
        assert_eq!(Val::Real(0.5).convert(Type::Logical), Ok(Val::Logical(true)));
        assert!(Val::Real(3e10).convert(Type::Integer).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Val::Integer(-5).to_string(), "-5");
        assert_eq!(Val::Logical(true).to_string(), "true");
        assert_eq!(Val::Real(2.5).to_string(), "2.5");
        assert_eq!(Val::Real(3.0).to_string(), "3");
        assert_eq!(Val::zero(Type::Real).to_string(), "0");
    }
}
