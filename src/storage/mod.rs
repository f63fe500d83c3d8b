//! Storage layer for utilbelt
//!
//! Handles the optional TOML configuration file that sets default text
//! encoding for the file helpers.

use crate::error::StorageError;

pub mod config;

type Result<T> = std::result::Result<T, StorageError>;
