//! The line-oriented surface: a prompt, command tokens, fixed-art
//! rendering, and the loop that drives a session from a terminal.

pub mod command;
pub use command::*;

pub mod io;
pub use io::*;

pub mod render;
pub use render::*;

pub mod runner;
pub use runner::*;
