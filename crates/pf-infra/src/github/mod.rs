//! GitHub REST adapter for the project list.

pub mod client;
pub mod types;

pub use client::GitHubRepositorySource;
pub use types::GitHubRepoDto;
