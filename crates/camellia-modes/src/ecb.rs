//! Electronic Codebook mode: independent per-block transforms.

use camellia_core::{decrypt_block, encrypt_block, Block, Subkeys};

use crate::error::{ensure_aligned, ModeError};
use crate::BLOCK_SIZE;

/// Encrypts `buffer` in place, one independent block at a time.
///
/// The buffer length must be a multiple of 16 bytes.
pub fn encrypt_ecb(subkeys: &Subkeys, buffer: &mut [u8]) -> Result<(), ModeError> {
    ensure_aligned(buffer)?;
    for chunk in buffer.chunks_exact_mut(BLOCK_SIZE) {
        let mut block: Block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        chunk.copy_from_slice(&encrypt_block(&block, subkeys));
    }
    Ok(())
}

/// Decrypts `buffer` in place, one independent block at a time.
///
/// The buffer length must be a multiple of 16 bytes.
pub fn decrypt_ecb(subkeys: &Subkeys, buffer: &mut [u8]) -> Result<(), ModeError> {
    ensure_aligned(buffer)?;
    for chunk in buffer.chunks_exact_mut(BLOCK_SIZE) {
        let mut block: Block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        chunk.copy_from_slice(&decrypt_block(&block, subkeys));
    }
    Ok(())
}
