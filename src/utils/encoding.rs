//! Byte and text encoding helpers
//!
//! Hex rendering of raw bytes, strict text encode/decode by encoding name,
//! and short type names.

use crate::error::StorageError;
use encoding_rs::{Encoding, REPLACEMENT, UTF_16BE, UTF_16LE};
use std::borrow::Cow;

/// Render bytes as uppercase hex, two digits per byte, high nibble first.
///
/// # Examples
/// ```
/// use utilbelt::utils::encoding::bytes_to_hex;
/// assert_eq!(bytes_to_hex(&[0x00, 0xFF, 0x1A]), "00FF1A");
/// assert_eq!(bytes_to_hex(&[]), "");
/// ```
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

const LATIN1_LABELS: &[&str] = &[
    "iso-8859-1",
    "iso8859-1",
    "iso_8859-1",
    "iso_8859_1",
    "iso88591",
    "8859_1",
    "latin1",
    "l1",
    "cp819",
    "ibm819",
    "iso-ir-100",
    "csisolatin1",
];

const ASCII_LABELS: &[&str] = &[
    "us-ascii",
    "ascii",
    "us",
    "iso646-us",
    "ansi_x3.4-1968",
    "iso-ir-6",
    "cp367",
    "ibm367",
    "csascii",
];

const UTF16_LABELS: &[&str] = &[
    "utf-16",
    "utf16",
    "unicode",
    "csunicode",
    "ucs-2",
    "iso-10646-ucs-2",
];

// Labels the WHATWG table folds into a different Windows code page.
const SUBSTITUTED_LABELS: &[&str] = &[
    "iso-8859-9",
    "iso8859-9",
    "iso_8859-9",
    "iso88599",
    "latin5",
    "l5",
    "iso-ir-148",
    "csisolatin5",
    "tis-620",
    "iso-8859-11",
    "iso8859-11",
];

/// A resolved text encoding.
///
/// ISO-8859-1, US-ASCII and BOM-aware UTF-16 are handled here because the
/// WHATWG label table maps their names onto other charsets. Everything else
/// is delegated to `encoding_rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// Each byte is the code point of the same value.
    Latin1,
    /// 7-bit only; bytes and characters at 0x80 and above are rejected.
    Ascii,
    /// Decodes by BOM, big-endian when absent. Encodes FE FF then big-endian.
    Utf16,
    Standard(&'static Encoding),
}

impl TextEncoding {
    pub fn name(&self) -> &'static str {
        match self {
            TextEncoding::Latin1 => "ISO-8859-1",
            TextEncoding::Ascii => "US-ASCII",
            TextEncoding::Utf16 => "UTF-16",
            TextEncoding::Standard(encoding) => encoding.name(),
        }
    }

    fn decode_error(&self) -> StorageError {
        StorageError::Decode {
            encoding: self.name().to_string(),
        }
    }

    fn encode_error(&self) -> StorageError {
        StorageError::Encode {
            encoding: self.name().to_string(),
        }
    }
}

pub(crate) fn resolve_encoding(label: &str) -> Result<TextEncoding, StorageError> {
    let normalized = label.trim().to_ascii_lowercase();
    let unknown = || StorageError::UnknownEncoding {
        label: label.to_string(),
    };

    if LATIN1_LABELS.contains(&normalized.as_str()) {
        return Ok(TextEncoding::Latin1);
    }
    if ASCII_LABELS.contains(&normalized.as_str()) {
        return Ok(TextEncoding::Ascii);
    }
    if UTF16_LABELS.contains(&normalized.as_str()) {
        return Ok(TextEncoding::Utf16);
    }
    if SUBSTITUTED_LABELS.contains(&normalized.as_str()) {
        log::debug!("encoding label '{}' has no faithful decoder", label);
        return Err(unknown());
    }

    match Encoding::for_label(normalized.as_bytes()) {
        Some(encoding) if encoding != REPLACEMENT => Ok(TextEncoding::Standard(encoding)),
        _ => {
            log::debug!("unknown encoding label '{}'", label);
            Err(unknown())
        }
    }
}

/// Resolve an encoding name such as `"UTF-8"`, `"ISO-8859-1"` or `"UTF-16"`.
///
/// Names are matched case-insensitively. A name is never silently replaced
/// by a different charset; names that cannot be honoured are rejected.
pub fn lookup_encoding(label: &str) -> crate::Result<TextEncoding> {
    Ok(resolve_encoding(label)?)
}

/// Decode `bytes` with `encoding`, failing on malformed input.
///
/// Only [`TextEncoding::Utf16`] consumes a byte order mark; for every other
/// encoding a leading BOM is kept as part of the text.
pub fn decode_text(bytes: &[u8], encoding: TextEncoding) -> crate::Result<Cow<'_, str>> {
    match encoding {
        TextEncoding::Latin1 => Ok(Cow::Owned(bytes.iter().map(|&b| char::from(b)).collect())),
        TextEncoding::Ascii => match std::str::from_utf8(bytes) {
            Ok(text) if text.is_ascii() => Ok(Cow::Borrowed(text)),
            _ => Err(encoding.decode_error().into()),
        },
        TextEncoding::Utf16 => {
            let (body, endian) = match bytes {
                [0xFE, 0xFF, rest @ ..] => (rest, UTF_16BE),
                [0xFF, 0xFE, rest @ ..] => (rest, UTF_16LE),
                _ => (bytes, UTF_16BE),
            };
            endian
                .decode_without_bom_handling_and_without_replacement(body)
                .ok_or_else(|| encoding.decode_error().into())
        }
        TextEncoding::Standard(inner) => inner
            .decode_without_bom_handling_and_without_replacement(bytes)
            .ok_or_else(|| encoding.decode_error().into()),
    }
}

/// Encode `text` with `encoding`, failing on characters it cannot represent.
pub fn encode_text(text: &str, encoding: TextEncoding) -> crate::Result<Cow<'_, [u8]>> {
    match encoding {
        TextEncoding::Latin1 => {
            let bytes = text
                .chars()
                .map(u8::try_from)
                .collect::<Result<Vec<u8>, _>>()
                .map_err(|_| encoding.encode_error())?;
            Ok(Cow::Owned(bytes))
        }
        TextEncoding::Ascii => {
            if !text.is_ascii() {
                return Err(encoding.encode_error().into());
            }
            Ok(Cow::Borrowed(text.as_bytes()))
        }
        TextEncoding::Utf16 => {
            let mut bytes = vec![0xFE, 0xFF];
            bytes.extend(text.encode_utf16().flat_map(u16::to_be_bytes));
            Ok(Cow::Owned(bytes))
        }
        TextEncoding::Standard(inner) if inner == UTF_16LE => Ok(Cow::Owned(
            text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
        )),
        TextEncoding::Standard(inner) if inner == UTF_16BE => Ok(Cow::Owned(
            text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
        )),
        TextEncoding::Standard(inner) => {
            // encoding_rs falls back to UTF-8 output for encodings it cannot encode
            if inner.output_encoding() != inner {
                return Err(encoding.encode_error().into());
            }
            let (bytes, _, had_errors) = inner.encode(text);
            if had_errors {
                return Err(encoding.encode_error().into());
            }
            Ok(bytes)
        }
    }
}

/// Static type name of `T` with every module path removed.
///
/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>` and
/// `(i32, alloc::string::String)` becomes `(i32, String)`.
pub fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let mut short = String::with_capacity(full.len());
    let mut path = String::new();

    for c in full.chars() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            path.push(c);
        } else {
            short.push_str(last_segment(&path));
            path.clear();
            short.push(c);
        }
    }
    short.push_str(last_segment(&path));
    short
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

/// [`short_type_name`] for the type of `value`.
pub fn type_name_of<T: ?Sized>(_value: &T) -> String {
    short_type_name::<T>()
}
