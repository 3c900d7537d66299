use super::{Type, Val};
use crate::error;
use crate::lang::{has_invalid_char, is_reserved, Error};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    name: String,
    scope: usize,
    val: Val,
}

impl Variable {
    pub fn scope(&self) -> usize {
        self.scope
    }
    pub fn ty(&self) -> Type {
        self.val.ty()
    }
    pub fn val(&self) -> Val {
        self.val
    }
}

/// ## Variable memory
///
/// Declarations append, so the variables of the innermost scope
/// are always a run at the end of the table.

#[derive(Debug, Default)]
pub struct Var {
    vars: Vec<Variable>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn declare(&mut self, name: &str, ty: Type, scope: usize) -> Result<()> {
        if self.find(name).is_some() {
            return Err(error!(DuplicateName; name));
        }
        if is_reserved(name) {
            return Err(error!(ReservedName; name));
        }
        if has_invalid_char(name) {
            return Err(error!(InvalidCharacter; name));
        }
        self.vars.push(Variable {
            name: name.to_string(),
            scope,
            val: Val::zero(ty),
        });
        Ok(())
    }

    pub fn find(&self, name: &str) -> Option<&Variable> {
        self.vars.iter().find(|v| v.name == name)
    }

    pub fn fetch(&self, name: &str) -> Result<&Variable> {
        match self.find(name) {
            Some(var) => Ok(var),
            None => Err(error!(VarUndeclared; name)),
        }
    }

    /// Replaces the value of a live variable. The value must already
    /// have the declared type.
    pub fn store(&mut self, name: &str, val: Val) -> Result<()> {
        match self.vars.iter_mut().find(|v| v.name == name) {
            Some(var) => {
                if var.val.ty() != val.ty() {
                    return Err(error!(TypeMismatch; name));
                }
                var.val = val;
                Ok(())
            }
            None => Err(error!(VarUndeclared; name)),
        }
    }

    /// Drops every trailing variable declared at `depth` or deeper.
    pub fn dispose_scope(&mut self, depth: usize) -> usize {
        let keep = self
            .vars
            .iter()
            .rposition(|v| v.scope < depth)
            .map_or(0, |i| i + 1);
        let disposed = self.vars.len() - keep;
        self.vars.truncate(keep);
        disposed
    }
}
