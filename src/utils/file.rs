//! File system operations and path handling utilities
//!
//! Paths are resolved against the process working directory as it is at call
//! time. Reads buffer the whole file before decoding; writes go through a
//! scoped handle that is closed on every exit path.

use super::encoding::{decode_text, encode_text, lookup_encoding};
use crate::error::{InternalError, StorageError};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use url::Url;

/// Encoding used when the caller does not name one.
pub const DEFAULT_ENCODING: &str = "UTF-8";

fn file_io_error(path: &Path, source: std::io::Error) -> StorageError {
    StorageError::FileIo {
        path: path.to_string_lossy().to_string(),
        source,
    }
}

/// Resolve `path` against the current working directory.
///
/// The working directory is read on every call. An absolute `path` is
/// returned unchanged.
pub fn user_dir_path<P: AsRef<Path>>(path: P) -> crate::Result<PathBuf> {
    let base = std::env::current_dir().map_err(|source| StorageError::WorkingDir { source })?;
    Ok(base.join(path))
}

/// Ensure a directory exists, creating it and any missing parents if necessary
pub fn ensure_directory_exists<P: AsRef<Path>>(path: P) -> crate::Result<()> {
    let path = path.as_ref();
    if !path.is_dir() {
        log::debug!("creating directory {}", path.display());
        std::fs::create_dir_all(path).map_err(|e| file_io_error(path, e))?;
    }
    Ok(())
}

/// Read a whole file as UTF-8 text.
pub fn read_file<P: AsRef<Path>>(path: P) -> crate::Result<String> {
    read_file_with_encoding(path, DEFAULT_ENCODING)
}

/// Read a whole file and decode it with the named encoding.
///
/// # Errors
/// - [`StorageError::UnknownEncoding`] if `encoding` is not a known label
/// - [`StorageError::FileIo`] if the file cannot be opened or read
/// - [`StorageError::Decode`] if the bytes are not valid in `encoding`
pub fn read_file_with_encoding<P: AsRef<Path>>(path: P, encoding: &str) -> crate::Result<String> {
    let path = path.as_ref();
    let encoding = lookup_encoding(encoding)?;

    let bytes = std::fs::read(path).map_err(|e| file_io_error(path, e))?;
    log::debug!(
        "read {} bytes from {} as {}",
        bytes.len(),
        path.display(),
        encoding.name()
    );

    Ok(decode_text(&bytes, encoding)?.into_owned())
}

/// Write `content` as UTF-8 to `folder/file_name`, creating `folder` if needed.
///
/// Returns the path of the written file.
pub fn write_file<P: AsRef<Path>>(
    folder: P,
    file_name: &str,
    content: &str,
) -> crate::Result<PathBuf> {
    write_file_with_encoding(folder, file_name, DEFAULT_ENCODING, content)
}

/// Write `content` to `folder/file_name` using the named encoding.
///
/// Missing directories are created. An existing file is truncated.
///
/// # Errors
/// - [`StorageError::UnknownEncoding`] if `encoding` is not a known label
/// - [`StorageError::Encode`] if `content` cannot be represented in `encoding`
/// - [`StorageError::FileIo`] if the directory or the file cannot be written
pub fn write_file_with_encoding<P: AsRef<Path>>(
    folder: P,
    file_name: &str,
    encoding: &str,
    content: &str,
) -> crate::Result<PathBuf> {
    let encoding = lookup_encoding(encoding)?;
    let bytes = encode_text(content, encoding)?;

    let folder = folder.as_ref();
    ensure_directory_exists(folder)?;

    let file_path = folder.join(file_name);
    let file = File::create(&file_path).map_err(|e| file_io_error(&file_path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&bytes)
        .and_then(|()| writer.flush())
        .map_err(|e| file_io_error(&file_path, e))?;

    log::debug!(
        "wrote {} bytes to {} as {}",
        bytes.len(),
        file_path.display(),
        encoding.name()
    );
    Ok(file_path)
}

/// Build a `file:` URL for `path`, resolving relative paths first.
///
/// A failure here means an absolute path was rejected by the URL builder and
/// is reported as [`InternalError::UrlConstruction`].
pub fn create_url_quietly<P: AsRef<Path>>(path: P) -> crate::Result<Url> {
    let absolute = user_dir_path(path)?;
    Url::from_file_path(&absolute).map_err(|()| {
        log::debug!("file URL construction failed for {}", absolute.display());
        InternalError::UrlConstruction {
            path: absolute.to_string_lossy().to_string(),
        }
        .into()
    })
}
