//! # exec
//!
//! A small line-oriented command language with typed variables,
//! lexical scopes and loops.
//!
//! ```text
//! integer n
//! while n < 3
//! n = n + 1
//! print n
//! end
//! ```
//!
//! Scripts run against a [`Terminal`](mach::Terminal) that receives all
//! output. Errors stop the run and are reported through the same
//! terminal.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

pub mod lang;
pub mod mach;
pub mod term;
