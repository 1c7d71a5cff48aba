//! Terminal front end: argument parsing, the menu loop and text rendering.
//! Not part of the library API.

pub mod args;
mod print;
pub mod shell;

pub use args::Cli;
pub use shell::Shell;
