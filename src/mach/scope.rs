use super::{Listing, Stack, Var};
use crate::error;
use crate::lang::{Error, LineIndex, Word};

type Result<T> = std::result::Result<T, Error>;

/// ## Open blocks
///
/// Each open block remembers the line that opened it. The depth is
/// the number of open blocks.

#[derive(Debug)]
pub struct Scope {
    stack: Stack<LineIndex>,
}

impl Default for Scope {
    fn default() -> Self {
        Scope {
            stack: Stack::new("SCOPES NESTED TOO DEEP"),
        }
    }
}

impl Scope {
    pub fn new() -> Scope {
        Scope::default()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }

    pub fn push(&mut self, opener: LineIndex) -> Result<()> {
        self.stack.push(opener)
    }

    /// Closes the innermost block and disposes everything declared in it.
    /// Returns the line that opened the block.
    pub fn pop(&mut self, vars: &mut Var) -> Result<LineIndex> {
        if self.stack.is_empty() {
            return Err(error!(UnexpectedEndOfScope));
        }
        vars.dispose_scope(self.depth());
        self.stack.pop()
    }

    /// Opener of the block `level` steps out from the innermost.
    pub fn opener(&self, level: usize) -> Option<LineIndex> {
        self.stack.peek(level).copied()
    }
}

/// Index of the `pop` or `end` closing the block opened at `from`.
pub fn find_end(listing: &Listing, from: LineIndex) -> Result<LineIndex> {
    scan(listing, from, false)
}

/// Like `find_end` but stops early at an `else` belonging to this block.
pub fn find_else(listing: &Listing, from: LineIndex) -> Result<LineIndex> {
    scan(listing, from, true)
}

fn scan(listing: &Listing, from: LineIndex, stop_at_else: bool) -> Result<LineIndex> {
    let mut depth = 0usize;
    for index in from..listing.len() {
        let word = match listing.word(index) {
            Some(word) => word,
            None => continue,
        };
        if word.is_opener() {
            depth += 1;
        } else if word.is_closer() {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                return Ok(index);
            }
        } else if stop_at_else && word == Word::Else && depth == 1 {
            return Ok(index);
        }
    }
    Err(error!(UnterminatedScope))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;
    use crate::mach::Type;

    fn listing(src: &str) -> Listing {
        Listing::new(src)
    }

    #[test]
    fn test_find_end_skips_nested_blocks() {
        let l = listing("while a\nif b\nprint x\nend\npush\npop\nend\nprint y");
        assert_eq!(find_end(&l, 0), Ok(6));
        assert_eq!(find_end(&l, 1), Ok(3));
        assert_eq!(find_end(&l, 4), Ok(5));
    }

    #[test]
    fn test_find_else_same_depth_only() {
        let l = listing("if a\nif b\nelse\nend\nelse\nend");
        assert_eq!(find_else(&l, 0), Ok(4));
        assert_eq!(find_else(&l, 1), Ok(2));
        let l = listing("if a\nprint x\nend");
        assert_eq!(find_else(&l, 0), Ok(2));
    }

    #[test]
    fn test_unterminated() {
        let l = listing("while a\nif b\nend");
        assert_eq!(
            find_end(&l, 0).unwrap_err().code(),
            ErrorCode::UnterminatedScope
        );
    }

    #[test]
    fn test_pop_disposes() {
        let mut vars = Var::new();
        let mut scope = Scope::new();
        vars.declare("outer", Type::Integer, scope.depth()).unwrap();
        scope.push(3).unwrap();
        vars.declare("inner", Type::Integer, scope.depth()).unwrap();
        assert_eq!(scope.opener(0), Some(3));
        assert_eq!(scope.pop(&mut vars), Ok(3));
        assert!(vars.find("inner").is_none());
        assert!(vars.find("outer").is_some());
        assert_eq!(
            scope.pop(&mut vars).unwrap_err().code(),
            ErrorCode::UnexpectedEndOfScope
        );
        assert_eq!(vars.len(), 1);
    }
}
