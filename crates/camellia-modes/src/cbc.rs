//! Cipher Block Chaining mode.
//!
//! The chaining value is caller-owned and updated in place: after a call it
//! holds the last ciphertext block, so a follow-up call continues the same
//! logical stream.

use camellia_core::{decrypt_block, encrypt_block, xor_in_place, Block, Subkeys};

use crate::error::{ensure_aligned, ModeError};
use crate::BLOCK_SIZE;

/// Encrypts `buffer` in place, chaining each block through `iv`.
///
/// Each plaintext block is XORed into the chaining value before the block
/// transform; the transform output becomes both the ciphertext and the next
/// chaining value. Strictly sequential. The buffer length must be a
/// multiple of 16 bytes.
pub fn encrypt_cbc(subkeys: &Subkeys, buffer: &mut [u8], iv: &mut Block) -> Result<(), ModeError> {
    ensure_aligned(buffer)?;
    for chunk in buffer.chunks_exact_mut(BLOCK_SIZE) {
        let mut block: Block = [0u8; BLOCK_SIZE];
        block.copy_from_slice(chunk);
        xor_in_place(iv, &block);
        *iv = encrypt_block(iv, subkeys);
        chunk.copy_from_slice(iv);
    }
    Ok(())
}

/// Decrypts `buffer` in place, chaining each block through `iv`.
///
/// Each ciphertext block is transformed and then XORed with the previous
/// ciphertext block (the initial `iv` for the first). On return `iv` holds
/// the last ciphertext block. The buffer length must be a multiple of
/// 16 bytes.
pub fn decrypt_cbc(subkeys: &Subkeys, buffer: &mut [u8], iv: &mut Block) -> Result<(), ModeError> {
    ensure_aligned(buffer)?;
    for chunk in buffer.chunks_exact_mut(BLOCK_SIZE) {
        let mut ciphertext: Block = [0u8; BLOCK_SIZE];
        ciphertext.copy_from_slice(chunk);
        let mut plaintext = decrypt_block(&ciphertext, subkeys);
        xor_in_place(&mut plaintext, iv);
        chunk.copy_from_slice(&plaintext);
        *iv = ciphertext;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camellia_core::{derive_subkeys, CamelliaKey};
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn subkeys() -> camellia_core::Subkeys {
        derive_subkeys(&CamelliaKey::from([0x5cu8; 32]))
    }

    #[test]
    fn round_trip_restores_plaintext() {
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        let subkeys = subkeys();
        let mut iv = [0u8; 16];
        rng.fill_bytes(&mut iv);

        let mut buffer = vec![0u8; 16 * 5];
        rng.fill_bytes(&mut buffer);
        let original = buffer.clone();

        let mut enc_iv = iv;
        encrypt_cbc(&subkeys, &mut buffer, &mut enc_iv).unwrap();
        assert_ne!(buffer, original);

        let mut dec_iv = iv;
        decrypt_cbc(&subkeys, &mut buffer, &mut dec_iv).unwrap();
        assert_eq!(buffer, original);
        assert_eq!(enc_iv, dec_iv);
    }

    #[test]
    fn identical_blocks_encrypt_differently() {
        let subkeys = subkeys();
        let mut iv = [0x11u8; 16];
        let mut buffer = vec![0xabu8; 32];
        encrypt_cbc(&subkeys, &mut buffer, &mut iv).unwrap();
        assert_ne!(buffer[..16], buffer[16..]);
    }

    #[test]
    fn split_calls_match_one_call() {
        let mut rng = ChaCha20Rng::from_seed([9u8; 32]);
        let subkeys = subkeys();
        let mut buffer = vec![0u8; 16 * 6];
        rng.fill_bytes(&mut buffer);

        let mut whole = buffer.clone();
        let mut whole_iv = [0x3fu8; 16];
        encrypt_cbc(&subkeys, &mut whole, &mut whole_iv).unwrap();

        let mut streamed = buffer.clone();
        let mut stream_iv = [0x3fu8; 16];
        let (head, tail) = streamed.split_at_mut(16 * 2);
        encrypt_cbc(&subkeys, head, &mut stream_iv).unwrap();
        encrypt_cbc(&subkeys, tail, &mut stream_iv).unwrap();

        assert_eq!(streamed, whole);
        assert_eq!(stream_iv, whole_iv);
    }

    #[test]
    fn tampered_block_corrupts_itself_and_bit_flips_the_next() {
        let mut rng = ChaCha20Rng::from_seed([21u8; 32]);
        let subkeys = subkeys();
        let iv = [0x77u8; 16];

        let mut buffer = vec![0u8; 16 * 3];
        rng.fill_bytes(&mut buffer);
        let original = buffer.clone();

        let mut enc_iv = iv;
        encrypt_cbc(&subkeys, &mut buffer, &mut enc_iv).unwrap();

        // Flip one bit in the middle ciphertext block.
        buffer[16 + 4] ^= 0x20;

        let mut dec_iv = iv;
        decrypt_cbc(&subkeys, &mut buffer, &mut dec_iv).unwrap();

        // Block 0 is untouched, block 1 is garbage, block 2 differs from
        // the original in exactly the flipped bit position.
        assert_eq!(buffer[..16], original[..16]);
        assert_ne!(buffer[16..32], original[16..32]);
        for i in 0..16 {
            let diff = buffer[32 + i] ^ original[32 + i];
            assert_eq!(diff, if i == 4 { 0x20 } else { 0 });
        }
    }

    #[test]
    fn rejects_unaligned_buffer() {
        let subkeys = subkeys();
        let mut iv = [0u8; 16];
        let mut buffer = vec![0u8; 31];
        assert_eq!(
            encrypt_cbc(&subkeys, &mut buffer, &mut iv),
            Err(ModeError::UnalignedBuffer { len: 31 })
        );
        assert_eq!(
            decrypt_cbc(&subkeys, &mut buffer, &mut iv),
            Err(ModeError::UnalignedBuffer { len: 31 })
        );
        // A failed call must leave the chaining value untouched.
        assert_eq!(iv, [0u8; 16]);
    }
}
