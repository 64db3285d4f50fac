//! Host layer for the portfolio site.
//!
//! - `bootstrap`: config loading, tracing setup, adapter wiring
//! - `presentation`: HTML and terminal rendering of use case state
//! - `commands`: one entry point per CLI command

pub mod bootstrap;
pub mod commands;
pub mod presentation;
