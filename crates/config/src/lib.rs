// Configuration Management
//
// This crate handles configuration loading for services deployed on Railway.
// It provides:
// - The Railway-provided environment record and its loader
// - An environment source abstraction so loaders can read a snapshot
// - Server and logging settings for the HTTP service
//
// Nothing here caches the process environment; every loader reads at call time.

use thiserror::Error;

pub mod env_source;
pub mod railway;
pub mod types;

// Re-export all configuration types
pub use env_source::{EnvSource, SystemEnv};
pub use railway::*;
pub use types::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} has an invalid value: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}
