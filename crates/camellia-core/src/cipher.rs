//! Camellia single-block encryption and decryption.

use crate::block::Block;
use crate::key::Subkeys;
use crate::round::{fl, fl_inv, round_f};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Direction {
    Encrypt,
    Decrypt,
}

/// Encrypts a single 16-byte block with pre-derived subkeys.
pub fn encrypt_block(block: &Block, subkeys: &Subkeys) -> Block {
    transform(block, subkeys, Direction::Encrypt)
}

/// Decrypts a single 16-byte block with pre-derived subkeys.
pub fn decrypt_block(block: &Block, subkeys: &Subkeys) -> Block {
    transform(block, subkeys, Direction::Decrypt)
}

#[inline]
fn xor_half(half: &mut [u8; 8], subkey: &[u8; 8]) {
    for (h, k) in half.iter_mut().zip(subkey.iter()) {
        *h ^= *k;
    }
}

/// One walk over the subkey table serves both directions: decryption runs
/// the identical round structure with the start index and step mirrored,
/// so the round logic exists exactly once.
fn transform(block: &Block, subkeys: &Subkeys, direction: Direction) -> Block {
    let rounds = subkeys.rounds();
    let (step, mut cursor) = match direction {
        Direction::Encrypt => (1isize, 0isize),
        Direction::Decrypt => (-1isize, subkeys.count() as isize - 2),
    };

    let mut left = [0u8; 8];
    let mut right = [0u8; 8];
    left.copy_from_slice(&block[..8]);
    right.copy_from_slice(&block[8..]);

    // Prewhitening: two consecutive table entries cover the full block.
    xor_half(&mut left, subkeys.get(cursor as usize));
    xor_half(&mut right, subkeys.get(cursor as usize + 1));
    cursor += if step > 0 { 2 } else { -1 };

    let mut round = 0;
    while round < rounds {
        if round == 6 || round == 12 || round == 18 {
            fl(subkeys.get(cursor as usize), &mut left);
            cursor += step;
            fl_inv(subkeys.get(cursor as usize), &mut right);
            cursor += step;
        }
        round_f(subkeys.get(cursor as usize), &left, &mut right);
        cursor += step;
        round_f(subkeys.get(cursor as usize), &right, &mut left);
        cursor += step;
        round += 2;
    }

    if step < 0 {
        cursor -= 1;
    }

    // Swap the halves (undoing the last round's implicit swap), then
    // postwhiten with the final table pair.
    xor_half(&mut right, subkeys.get(cursor as usize));
    xor_half(&mut left, subkeys.get(cursor as usize + 1));

    let mut output = [0u8; 16];
    output[..8].copy_from_slice(&right);
    output[8..].copy_from_slice(&left);
    output
}
