//! Core module - run configuration, tool configuration and delegation

pub mod config;
pub mod delegate;
pub mod error;
pub mod run_config;

pub use config::Config;
pub use delegate::Delegate;
pub use error::RunError;
pub use run_config::{RunConfig, ServerLocator};
