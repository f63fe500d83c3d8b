//! # utilbelt
//!
//! Small, stateless helpers shared by application code.
//!
//! ## Quick Start
//!
//! ```rust
//! use utilbelt::prelude::*;
//!
//! # fn main() -> utilbelt::Result<()> {
//! require_non_null(&[Some(1), Some(2)])?;
//!
//! let chunks: Vec<&[u8]> = batches(&[1, 2, 3, 4, 5], 2)?.collect();
//! assert_eq!(chunks.len(), 3);
//!
//! assert_eq!(bytes_to_hex(&[0xCA, 0xFE]), "CAFE");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`utils`]: the helper functions, grouped by concern
//! - [`storage`]: optional TOML configuration (default text encoding)
//! - [`error`]: error hierarchy with kinds and severity levels

pub use error::AppError;

/// Prelude module for convenient imports.
///
/// ```rust
/// use utilbelt::prelude::*;
/// ```
pub mod prelude {
    // Error handling
    pub use crate::Result;
    pub use crate::error::AppError;

    // Helpers
    pub use crate::utils::data::{arrays_concatenate, batches, batches_mut, to_str_array};
    pub use crate::utils::encoding::{bytes_to_hex, short_type_name, type_name_of};
    pub use crate::utils::file::{
        create_url_quietly, read_file, read_file_with_encoding, user_dir_path, write_file,
        write_file_with_encoding,
    };
    pub use crate::utils::random::{
        gen_random_numbers, gen_random_numbers_with, random_element, random_element_from_iter,
        random_element_with,
    };
    pub use crate::utils::validation::{
        add_not_null, are_not_null, are_null, require_any_non_null, require_non_null,
    };

    // Configuration
    pub use crate::storage::config::Config;
}

/// Helpers layer - validation, collections, randomness, encoding and files.
///
/// - [`utils::validation`]: presence checks over `Option` sequences
/// - [`utils::data`]: concatenation and batching
/// - [`utils::random`]: random selection
/// - [`utils::encoding`]: hex and text encodings
/// - [`utils::file`]: path resolution and whole-file I/O
pub mod utils;

/// Storage layer - configuration persistence.
pub mod storage;

/// Error handling - error hierarchy with kinds and severity levels.
pub mod error;

/// Convenient Result type alias using [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;
