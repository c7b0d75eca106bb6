// crates/algokit-cli/src/input.rs
// ============================================================================
// Module: CLI Bounded Input
// Description: Size-capped text readers for files and stdin.
// Purpose: Refuse oversized inputs before they reach the algorithms.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Every command reads its input through [`read_text`], which enforces the
//! `limits.max_input_bytes` cap on files and stdin alike. Reads stop one byte
//! past the limit, so an oversized stream is never fully buffered.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::File;
use std::io;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors returned by bounded reads.
#[derive(Debug, Error)]
pub enum InputError {
    /// I/O failure.
    #[error("failed to read {source_name}: {error}")]
    Io {
        /// File path or `stdin`.
        source_name: String,
        /// Underlying error.
        error: io::Error,
    },
    /// Input exceeds the configured limit.
    #[error("{source_name} exceeds {limit} bytes")]
    TooLarge {
        /// File path or `stdin`.
        source_name: String,
        /// Allowed limit in bytes.
        limit: usize,
    },
    /// Input is not valid utf-8.
    #[error("{source_name} is not valid utf-8")]
    NotUtf8 {
        /// File path or `stdin`.
        source_name: String,
    },
}

// ============================================================================
// SECTION: Readers
// ============================================================================

/// Reads `path`, or stdin when `path` is `None`, as utf-8 text of at most
/// `max_bytes` bytes.
///
/// # Errors
///
/// Returns [`InputError`] when the read fails, exceeds `max_bytes`, or is
/// not utf-8.
pub fn read_text(path: Option<&Path>, max_bytes: usize) -> Result<String, InputError> {
    let (source_name, bytes) = match path {
        Some(path) => {
            let source_name = path.display().to_string();
            let bytes = read_file(path, max_bytes, &source_name)?;
            (source_name, bytes)
        }
        None => {
            let source_name = "stdin".to_string();
            let bytes = read_limited(io::stdin().lock(), max_bytes, &source_name)?;
            (source_name, bytes)
        }
    };
    String::from_utf8(bytes).map_err(|_| InputError::NotUtf8 {
        source_name,
    })
}

/// Reads a file, rejecting it up front when its metadata already exceeds
/// the limit.
fn read_file(path: &Path, max_bytes: usize, source_name: &str) -> Result<Vec<u8>, InputError> {
    let io_error = |error| InputError::Io {
        source_name: source_name.to_string(),
        error,
    };
    let file = File::open(path).map_err(io_error)?;
    let size = file.metadata().map_err(io_error)?.len();
    if u64::try_from(max_bytes).is_ok_and(|limit| size > limit) {
        return Err(InputError::TooLarge {
            source_name: source_name.to_string(),
            limit: max_bytes,
        });
    }
    read_limited(file, max_bytes, source_name)
}

/// Reads at most `max_bytes + 1` bytes from `reader` and fails when the
/// extra byte arrives.
fn read_limited<R: Read>(
    reader: R,
    max_bytes: usize,
    source_name: &str,
) -> Result<Vec<u8>, InputError> {
    let read_limit = u64::try_from(max_bytes).unwrap_or(u64::MAX).saturating_add(1);
    let mut bytes = Vec::new();
    reader.take(read_limit).read_to_end(&mut bytes).map_err(|error| InputError::Io {
        source_name: source_name.to_string(),
        error,
    })?;
    if bytes.len() > max_bytes {
        return Err(InputError::TooLarge {
            source_name: source_name.to_string(),
            limit: max_bytes,
        });
    }
    Ok(bytes)
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::io::Write;

    use super::InputError;
    use super::read_limited;
    use super::read_text;

    #[test]
    fn reads_small_file() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"4 2 1")?;
        assert_eq!(read_text(Some(file.path()), 16)?, "4 2 1");
        Ok(())
    }

    #[test]
    fn rejects_large_file() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(&[b'x'; 9])?;
        let result = read_text(Some(file.path()), 8);
        assert!(matches!(result, Err(InputError::TooLarge { limit: 8, .. })));
        Ok(())
    }

    #[test]
    fn rejects_non_utf8_file() -> Result<(), Box<dyn std::error::Error>> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(&[0xFF, 0xFE])?;
        let result = read_text(Some(file.path()), 8);
        assert!(matches!(result, Err(InputError::NotUtf8 { .. })));
        Ok(())
    }

    #[test]
    fn limited_reader_accepts_exact_limit() {
        let bytes = read_limited(Cursor::new(vec![1_u8; 8]), 8, "stdin");
        assert!(matches!(bytes, Ok(ref read) if read.len() == 8));
        let over = read_limited(Cursor::new(vec![1_u8; 9]), 8, "stdin");
        assert!(matches!(over, Err(InputError::TooLarge { .. })));
    }
}
