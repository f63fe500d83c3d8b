//! Utils module - the helper functions themselves
//!
//! Each submodule groups independent, stateless functions by concern.

/// Argument presence checks and their variadic macros
pub mod validation;

/// Slice concatenation, string conversion and batching
pub mod data;

/// Random numbers and random element selection
pub mod random;

/// Hex, text encodings and type names
pub mod encoding;

/// Working-directory paths, whole-file read/write and file URLs
pub mod file;
