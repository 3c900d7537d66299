use super::eval::{evaluate, operand_type, resolve_any, resolve_symbol};
use super::scope::{find_else, find_end};
use super::{Listing, Operation, Scope, Terminal, Type, Val, Var};
use crate::error;
use crate::lang::{Error, LineIndex, Operator, Word};
use std::rc::Rc;
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Abort after dispatching this many lines.
    pub step_limit: Option<usize>,
}

/// How a run ended.
#[derive(Debug, PartialEq)]
pub enum Event {
    Finished,
    Exited,
    Failed(Error),
}

/// What the dispatch loop does after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Jump(LineIndex),
    Halt,
}

/// ## Script engine
///
/// Executes one listing at a time. Everything a run creates is
/// dropped before `run` returns, whichever way it ends.

pub struct Runtime<T: Terminal> {
    listing: Rc<Listing>,
    vars: Var,
    scope: Scope,
    pc: LineIndex,
    steps: usize,
    config: Config,
    term: T,
}

impl Default for Runtime<String> {
    fn default() -> Self {
        Runtime::new(String::new())
    }
}

impl<T: Terminal> Runtime<T> {
    pub fn new(term: T) -> Runtime<T> {
        Runtime::with_config(term, Config::default())
    }

    pub fn with_config(term: T, config: Config) -> Runtime<T> {
        Runtime {
            listing: Rc::default(),
            vars: Var::new(),
            scope: Scope::new(),
            pc: 0,
            steps: 0,
            config,
            term,
        }
    }

    pub fn terminal(&self) -> &T {
        &self.term
    }

    pub fn terminal_mut(&mut self) -> &mut T {
        &mut self.term
    }

    pub fn into_terminal(self) -> T {
        self.term
    }

    pub fn vars(&self) -> &Var {
        &self.vars
    }

    pub fn depth(&self) -> usize {
        self.scope.depth()
    }

    pub fn run(&mut self, source: &str) -> Event {
        self.run_listing(Listing::new(source))
    }

    #[tracing::instrument(level = "debug", skip_all, fields(lines = listing.len()))]
    pub fn run_listing(&mut self, listing: Listing) -> Event {
        self.listing = Rc::new(listing);
        let event = match self.execute() {
            Ok(event) => event,
            Err(error) => {
                debug!(?error, "run failed");
                self.term.error(&error.report());
                Event::Failed(error)
            }
        };
        self.listing = Rc::default();
        self.vars.clear();
        self.scope.clear();
        debug!(?event, steps = self.steps, "run complete");
        event
    }

    fn execute(&mut self) -> Result<Event> {
        self.pc = 0;
        self.steps = 0;
        self.vars.clear();
        self.scope.clear();
        while self.pc < self.listing.len() {
            let pc = self.pc;
            self.count_step().map_err(|e| e.in_line(pc))?;
            match self.dispatch().map_err(|e| e.in_line(pc))? {
                Control::Continue => self.pc += 1,
                Control::Jump(target) => {
                    trace!(from = pc, to = target, "jump");
                    self.pc = target;
                }
                Control::Halt => return Ok(Event::Exited),
            }
        }
        if self.scope.depth() != 0 {
            return Err(error!(UnterminatedScope, self.listing.len()));
        }
        Ok(Event::Finished)
    }

    fn count_step(&mut self) -> Result<()> {
        self.steps += 1;
        match self.config.step_limit {
            Some(limit) if self.steps > limit => {
                Err(error!(StepLimitExceeded; limit.to_string()))
            }
            _ => Ok(()),
        }
    }

    fn dispatch(&mut self) -> Result<Control> {
        let listing = Rc::clone(&self.listing);
        let line = match listing.line(self.pc) {
            Some(line) => line,
            None => return Ok(Control::Halt),
        };
        if line.is_blank() {
            return Ok(Control::Continue);
        }
        trace!(line = self.pc, "{}", line);
        let cmd: Vec<&str> = line.tokens().iter().map(String::as_str).collect();
        match (line.word(), cmd.as_slice()) {
            (Some(Word::Exit), [_]) => Ok(Control::Halt),
            (Some(w @ Word::Integer), [_, name])
            | (Some(w @ Word::Logical), [_, name])
            | (Some(w @ Word::Real), [_, name]) => match Type::from_word(w) {
                Some(ty) => {
                    self.vars.declare(name, ty, self.scope.depth())?;
                    Ok(Control::Continue)
                }
                None => Err(error!(InternalError; "DECLARATION WORD")),
            },
            (Some(Word::Push), [_]) => {
                self.scope.push(self.pc)?;
                debug!(line = self.pc, depth = self.scope.depth(), "push");
                Ok(Control::Continue)
            }
            (Some(Word::Pop), [_]) => {
                self.scope.pop(&mut self.vars)?;
                debug!(line = self.pc, depth = self.scope.depth(), "pop");
                Ok(Control::Continue)
            }
            (Some(Word::Print), [_, name]) => self.print(name),
            (Some(Word::If), [_, cond @ ..]) if (1..=3).contains(&cond.len()) => {
                self.enter_if(cond)
            }
            (Some(Word::Else), [_]) => self.leave_else(),
            (Some(Word::While), [_, cond @ ..]) if (1..=3).contains(&cond.len()) => {
                self.enter_while(cond)
            }
            (Some(Word::End), [_]) => self.end_block(),
            (Some(Word::Break), [_]) => self.break_scope(1, true),
            (Some(Word::Break), [_, levels]) => {
                let levels = self.levels(levels)?;
                self.break_scope(levels, true)
            }
            (Some(Word::Continue), [_]) => self.break_scope(1, false),
            (Some(Word::Continue), [_, levels]) => {
                let levels = self.levels(levels)?;
                self.break_scope(levels, false)
            }
            (_, [target, "=", expr @ ..]) if !expr.is_empty() && expr.len() <= 3 => {
                self.assign(target, expr)
            }
            _ => Err(error!(UnrecognizedCommand; line.to_string())),
        }
    }

    fn print(&mut self, name: &str) -> Result<Control> {
        let val = self.vars.fetch(name)?.val();
        self.term.print(&val.to_string());
        self.term.newline();
        Ok(Control::Continue)
    }

    fn assign(&mut self, target: &str, expr: &[&str]) -> Result<Control> {
        let ty = self.vars.fetch(target)?.ty();
        let val = match expr {
            [symbol] => self.copy(symbol, ty)?,
            [op, symbol] => self.unary(op, symbol)?,
            [lhs, op, rhs] => {
                let operands = self.operand_type(lhs, op, rhs, ty)?;
                evaluate(&self.vars, lhs, op, rhs, operands)?
            }
            _ => return Err(error!(UnrecognizedCommand; expr.join(" "))),
        };
        if val.ty() != ty {
            return Err(error!(TypesIncompatible));
        }
        self.vars.store(target, val)?;
        Ok(Control::Continue)
    }

    /// `name = symbol` copies a variable of the same type or parses a
    /// literal of the target's type.
    fn copy(&self, symbol: &str, ty: Type) -> Result<Val> {
        match self.vars.find(symbol) {
            Some(source) if source.ty() == ty => Ok(source.val()),
            Some(_) => Err(error!(TypesIncompatible)),
            None => match Val::parse(symbol, ty) {
                Some(val) => Ok(val),
                None => Err(error!(UnresolvedSymbol; symbol)),
            },
        }
    }

    fn unary(&self, op: &str, symbol: &str) -> Result<Val> {
        match Word::from_str(op) {
            Some(Word::Not) => Operation::not(resolve_symbol(&self.vars, symbol, Type::Logical)?),
            Some(Word::Sqrt) => Operation::sqrt(resolve_symbol(&self.vars, symbol, Type::Real)?),
            Some(word) => match Type::from_word(word) {
                Some(ty) => resolve_any(&self.vars, symbol)?.convert(ty),
                None => Err(error!(InvalidOperator; op)),
            },
            None => Err(error!(InvalidOperator; op)),
        }
    }

    /// Comparisons take their operand type from the operands, `and` and
    /// `or` work on logicals, everything else on the target's type.
    fn operand_type(&self, lhs: &str, op: &str, rhs: &str, ty: Type) -> Result<Type> {
        match Operator::from_str(op) {
            Some(op) if op.is_comparison() => operand_type(&self.vars, lhs, rhs),
            Some(Operator::And) | Some(Operator::Or) => Ok(Type::Logical),
            _ => Ok(ty),
        }
    }

    fn condition(&self, cond: &[&str]) -> Result<bool> {
        let val = match cond {
            [symbol] => resolve_symbol(&self.vars, symbol, Type::Logical)?,
            [op, symbol] => match Word::from_str(op) {
                Some(Word::Not) => {
                    Operation::not(resolve_symbol(&self.vars, symbol, Type::Logical)?)?
                }
                _ => return Err(error!(InvalidOperator; *op)),
            },
            [lhs, op, rhs] => {
                let operands = match Operator::from_str(op) {
                    Some(Operator::And) | Some(Operator::Or) => Type::Logical,
                    _ => operand_type(&self.vars, lhs, rhs)?,
                };
                evaluate(&self.vars, lhs, op, rhs, operands)?
            }
            _ => return Err(error!(UnrecognizedCommand; cond.join(" "))),
        };
        match val {
            Val::Logical(b) => Ok(b),
            _ => Err(error!(TypesIncompatible)),
        }
    }

    fn levels(&self, symbol: &str) -> Result<usize> {
        match resolve_symbol(&self.vars, symbol, Type::Integer)? {
            Val::Integer(n) if n >= 1 => Ok(n as usize),
            _ => Err(error!(InvalidArgument; symbol)),
        }
    }

    /// The block is always opened so that `else` and `end` have a frame
    /// to close. A false condition skips to the `else` or onto the `end`.
    fn enter_if(&mut self, cond: &[&str]) -> Result<Control> {
        let taken = self.condition(cond)?;
        self.scope.push(self.pc)?;
        debug!(line = self.pc, taken, "if");
        if taken {
            return Ok(Control::Continue);
        }
        let target = find_else(&self.listing, self.pc)?;
        match self.listing.word(target) {
            Some(Word::Else) => Ok(Control::Jump(target + 1)),
            _ => Ok(Control::Jump(target)),
        }
    }

    /// Reached only by finishing the true branch.
    fn leave_else(&mut self) -> Result<Control> {
        match self.scope.opener(0) {
            Some(opener) if self.listing.word(opener) == Some(Word::If) => {
                Ok(Control::Jump(find_end(&self.listing, opener)?))
            }
            _ => Err(error!(ElseWithoutIf)),
        }
    }

    fn enter_while(&mut self, cond: &[&str]) -> Result<Control> {
        if self.condition(cond)? {
            self.scope.push(self.pc)?;
            Ok(Control::Continue)
        } else {
            Ok(Control::Jump(find_end(&self.listing, self.pc)? + 1))
        }
    }

    fn end_block(&mut self) -> Result<Control> {
        let opener = match self.scope.opener(0) {
            Some(opener) => opener,
            None => return Err(error!(UnexpectedEndOfScope)),
        };
        match self.listing.word(opener) {
            Some(Word::While) => self.loop_back(),
            Some(Word::If) => {
                self.scope.pop(&mut self.vars)?;
                Ok(Control::Continue)
            }
            _ => Err(error!(UnexpectedEndOfScope)),
        }
    }

    /// Closes the loop body and returns to the `while` line so the
    /// condition is evaluated again.
    fn loop_back(&mut self) -> Result<Control> {
        let opener = self.scope.pop(&mut self.vars)?;
        Ok(Control::Jump(opener))
    }

    /// Unwinds `levels` open blocks. With `break_innermost` the last of
    /// them is closed too and execution resumes after its closer,
    /// otherwise execution resumes on the closer itself.
    pub fn break_scope(&mut self, levels: usize, break_innermost: bool) -> Result<Control> {
        if levels == 0 || levels > self.scope.depth() {
            return Err(error!(UnexpectedEndOfScope));
        }
        let target = match self.scope.opener(levels - 1) {
            Some(opener) => opener,
            None => return Err(error!(UnexpectedEndOfScope)),
        };
        let closer = find_end(&self.listing, target)?;
        for _ in 1..levels {
            self.scope.pop(&mut self.vars)?;
        }
        debug!(line = self.pc, levels, break_innermost, closer, "break");
        if break_innermost {
            self.scope.pop(&mut self.vars)?;
            Ok(Control::Jump(closer + 1))
        } else {
            Ok(Control::Jump(closer))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    fn runtime() -> Runtime<String> {
        let mut r = Runtime::default();
        r.vars.declare("a", Type::Integer, 0).unwrap();
        r.vars.declare("b", Type::Logical, 0).unwrap();
        r.vars.store("a", Val::Integer(4)).unwrap();
        r.vars.store("b", Val::Logical(true)).unwrap();
        r
    }

    #[test]
    fn test_failed_assignment_changes_nothing() {
        let mut r = runtime();
        let e = r.assign("a", &["b"]).unwrap_err();
        assert_eq!(e.code(), ErrorCode::TypesIncompatible);
        let e = r.assign("b", &["a"]).unwrap_err();
        assert_eq!(e.code(), ErrorCode::TypesIncompatible);
        let e = r.assign("a", &["a", "/", "0"]).unwrap_err();
        assert_eq!(e.code(), ErrorCode::DivisionByZero);
        assert_eq!(r.vars.fetch("a").unwrap().val(), Val::Integer(4));
        assert_eq!(r.vars.fetch("b").unwrap().val(), Val::Logical(true));
    }

    #[test]
    fn test_halt_is_final() {
        let mut r = Runtime::default();
        assert_eq!(r.run("exit\nprint nothing\n"), Event::Exited);
        assert_eq!(r.terminal(), "");
        assert_eq!(r.pc, 0);
    }

    #[test]
    fn test_listing_shared_only_during_run() {
        let mut r = Runtime::default();
        assert_eq!(r.run("integer i\nwhile i < 3\ni = i + 1\nend\nprint i\n"), Event::Finished);
        assert_eq!(r.terminal(), "3\n");
        assert!(r.listing.is_empty());
        assert_eq!(Rc::strong_count(&r.listing), 1);
    }

    #[test]
    fn test_break_scope_directly() {
        let mut r = Runtime::default();
        r.listing = Rc::new(Listing::new("push\npush\ninteger x\npop\npop\n"));
        r.scope.push(0).unwrap();
        r.scope.push(1).unwrap();
        r.vars.declare("x", Type::Integer, 2).unwrap();
        r.pc = 2;
        assert_eq!(r.break_scope(1, false), Ok(Control::Jump(3)));
        assert_eq!(r.depth(), 2);
        assert_eq!(r.break_scope(2, true), Ok(Control::Jump(5)));
        assert_eq!(r.depth(), 0);
        assert!(r.vars.is_empty());
    }
}
