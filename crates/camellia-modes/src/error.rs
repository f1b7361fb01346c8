//! Error types for the chaining-mode layer.

use core::fmt;

use crate::BLOCK_SIZE;

/// Errors produced by the chaining-mode operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeError {
    /// Buffer length is not a multiple of the 16-byte block size.
    UnalignedBuffer {
        /// Length of the rejected buffer in bytes.
        len: usize,
    },
}

impl fmt::Display for ModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeError::UnalignedBuffer { len } => {
                write!(
                    f,
                    "buffer length {} is not a multiple of the {}-byte block size",
                    len, BLOCK_SIZE
                )
            }
        }
    }
}

impl std::error::Error for ModeError {}

pub(crate) fn ensure_aligned(buffer: &[u8]) -> Result<(), ModeError> {
    if buffer.len() % BLOCK_SIZE != 0 {
        return Err(ModeError::UnalignedBuffer { len: buffer.len() });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unaligned_buffer_display() {
        let err = ModeError::UnalignedBuffer { len: 17 };
        assert_eq!(
            format!("{}", err),
            "buffer length 17 is not a multiple of the 16-byte block size"
        );
    }

    #[test]
    fn alignment_check() {
        assert!(ensure_aligned(&[]).is_ok());
        assert!(ensure_aligned(&[0u8; 32]).is_ok());
        assert_eq!(
            ensure_aligned(&[0u8; 33]),
            Err(ModeError::UnalignedBuffer { len: 33 })
        );
    }
}
