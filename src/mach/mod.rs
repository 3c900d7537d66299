/*!
## Rust Machine Module

This Rust module executes scripts one line at a time.

*/

mod eval;
mod listing;
mod operation;
mod runtime;
mod scope;
mod stack;
mod terminal;
mod val;
mod var;

#[cfg(test)]
mod tests;

pub use eval::{evaluate, infer_type, resolve_symbol};
pub use listing::Listing;
pub use operation::Operation;
pub use runtime::{Config, Control, Event, Runtime};
pub use scope::{find_else, find_end, Scope};
pub use stack::Stack;
pub use terminal::Terminal;
pub use val::{Type, Val};
pub use var::{Var, Variable};
