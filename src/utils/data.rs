//! Slice and collection helpers
//!
//! Concatenation, textual conversion and chunked batching. None of these
//! mutate their input except [`batches_mut`], whose chunks are mutable views.

use crate::error::ArgumentError;
use std::fmt::Display;
use std::slice::{Chunks, ChunksMut};

/// Text used for an absent value by [`to_str_array`].
pub const NULL_TEXT: &str = "null";

/// Concatenate two slices into a new vector, `a` first.
///
/// # Examples
/// ```
/// use utilbelt::utils::data::arrays_concatenate;
///
/// assert_eq!(arrays_concatenate(&[1, 2], &[3, 4]), vec![1, 2, 3, 4]);
/// ```
pub fn arrays_concatenate<T: Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let mut joined = Vec::with_capacity(a.len() + b.len());
    joined.extend_from_slice(a);
    joined.extend_from_slice(b);
    joined
}

/// Render each value with `Display`, using `"null"` for absent ones.
pub fn to_str_array<T: Display>(values: &[Option<T>]) -> Vec<String> {
    values.iter().map(|v| display_or_null(v.as_ref())).collect()
}

#[doc(hidden)]
pub fn display_or_null<T: Display>(value: Option<&T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => NULL_TEXT.to_string(),
    }
}

/// Variadic form of [`to_str_array`](crate::utils::data::to_str_array) for
/// `Option` values of differing `Display` types.
#[macro_export]
macro_rules! to_str_array {
    ($($value:expr),* $(,)?) => {{
        let rendered: ::std::vec::Vec<::std::string::String> = ::std::vec![
            $($crate::utils::data::display_or_null(::core::option::Option::as_ref(&$value))),*
        ];
        rendered
    }};
}

/// Lazy, single-pass iterator over consecutive chunks of a slice.
///
/// Every chunk is a borrowed view into the source. All chunks hold exactly
/// `length` elements except the last, which holds between 1 and `length`.
#[derive(Debug, Clone)]
pub struct Batches<'a, T> {
    inner: Chunks<'a, T>,
}

impl<'a, T> Iterator for Batches<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Batches<'_, T> {}

/// Mutable counterpart of [`Batches`].
#[derive(Debug)]
pub struct BatchesMut<'a, T> {
    inner: ChunksMut<'a, T>,
}

impl<'a, T> Iterator for BatchesMut<'a, T> {
    type Item = &'a mut [T];

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for BatchesMut<'_, T> {}

fn check_batch_length(length: usize) -> crate::Result<()> {
    if length == 0 {
        log::debug!("rejected batch length {}", length);
        return Err(ArgumentError::InvalidBatchLength { length }.into());
    }
    Ok(())
}

/// Split `source` into consecutive chunks of `length` elements.
///
/// An empty source yields no chunks. The final chunk may be shorter.
///
/// # Errors
/// Returns [`ArgumentError::InvalidBatchLength`] when `length` is zero.
///
/// # Examples
/// ```
/// use utilbelt::utils::data::batches;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let chunks: Vec<&[i32]> = batches(&[1, 2, 3, 4, 5], 2)?.collect();
/// assert_eq!(chunks, vec![&[1, 2][..], &[3, 4][..], &[5][..]]);
/// # Ok(())
/// # }
/// ```
pub fn batches<T>(source: &[T], length: usize) -> crate::Result<Batches<'_, T>> {
    check_batch_length(length)?;
    Ok(Batches {
        inner: source.chunks(length),
    })
}

/// Like [`batches`], but each chunk is a mutable view into `source`.
pub fn batches_mut<T>(source: &mut [T], length: usize) -> crate::Result<BatchesMut<'_, T>> {
    check_batch_length(length)?;
    Ok(BatchesMut {
        inner: source.chunks_mut(length),
    })
}
