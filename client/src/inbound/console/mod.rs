//! Interactive console surface for the restaurant board.
//!
//! The console plays the role of the original page: render the board,
//! accept a handful of commands, and keep running whatever the remote
//! calls do. Split into a pure command grammar, a pure renderer, and the
//! IO loop that ties them to the domain services.

mod command;
pub mod render;
mod repl;

pub use command::{Command, parse_command};
pub use repl::Console;
