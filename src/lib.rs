pub mod cli;

pub use cli::{execute, Cli, Command, ThemeCommand};
