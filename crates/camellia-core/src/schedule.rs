//! Camellia key schedule.
//!
//! Derives the ordered subkey table from a raw key: build the KL/KR
//! halves, run the short Feistel ladder that produces the intermediate
//! keys KA (and KB for long keys), then emit 8-byte windows of the rotating
//! registers, skipping the positions the published table leaves unused.

use crate::key::{CamelliaKey, Subkeys};
use crate::round::round_f;
use crate::sbox::SIGMA;

/// Extraction positions skipped for 128-bit keys (registers KL, KA).
const DROP_128: [usize; 6] = [8, 9, 15, 16, 22, 23];

/// Extraction positions skipped for 192/256-bit keys (KL, KR, KA, KB).
const DROP_256: [usize; 30] = [
    2, 3, 4, 5, 8, 9, 14, 15, 16, 17, 20, 21, 26, 27, 30, 31, 36, 37, 42, 43, 46, 47, 48, 49, 54,
    55, 58, 59, 60, 61,
];

/// Derives the round subkey table for `key`.
///
/// Yields 26 entries for a 128-bit key and 34 for 192/256-bit keys.
pub fn derive_subkeys(key: &CamelliaKey) -> Subkeys {
    let (kl, kr) = load_halves(key);
    let ka = derive_ka(&kl, &kr);

    let mut table = [[0u8; 8]; 34];
    let count = match key {
        CamelliaKey::Camellia128(_) => extract(&mut table, &mut [kl, ka], &DROP_128),
        _ => {
            let kb = derive_kb(&ka, &kr);
            extract(&mut table, &mut [kl, kr, ka, kb], &DROP_256)
        }
    };
    Subkeys::new(table, count)
}

/// Builds KL and KR from the raw key bytes.
///
/// KR is zero for 128-bit keys; for 192-bit keys its low half is the bitwise
/// complement of its high half.
fn load_halves(key: &CamelliaKey) -> ([u8; 16], [u8; 16]) {
    let mut kl = [0u8; 16];
    let mut kr = [0u8; 16];
    match key {
        CamelliaKey::Camellia128(bytes) => kl.copy_from_slice(bytes),
        CamelliaKey::Camellia192(bytes) => {
            kl.copy_from_slice(&bytes[..16]);
            kr[..8].copy_from_slice(&bytes[16..]);
            for i in 0..8 {
                kr[i + 8] = !kr[i];
            }
        }
        CamelliaKey::Camellia256(bytes) => {
            kl.copy_from_slice(&bytes[..16]);
            kr.copy_from_slice(&bytes[16..]);
        }
    }
    (kl, kr)
}

/// Four half-rounds over KL ⊕ KR with Σ1..Σ4, re-mixing KL halfway through.
fn derive_ka(kl: &[u8; 16], kr: &[u8; 16]) -> [u8; 16] {
    let mut left = [0u8; 8];
    let mut right = [0u8; 8];
    for i in 0..8 {
        left[i] = kl[i] ^ kr[i];
        right[i] = kl[i + 8] ^ kr[i + 8];
    }
    round_f(&SIGMA[0], &left, &mut right);
    round_f(&SIGMA[1], &right, &mut left);
    for i in 0..8 {
        left[i] ^= kl[i];
        right[i] ^= kl[i + 8];
    }
    round_f(&SIGMA[2], &left, &mut right);
    round_f(&SIGMA[3], &right, &mut left);
    join_halves(&left, &right)
}

/// Two further half-rounds over KA ⊕ KR with Σ5, Σ6 (long keys only).
fn derive_kb(ka: &[u8; 16], kr: &[u8; 16]) -> [u8; 16] {
    let mut left = [0u8; 8];
    let mut right = [0u8; 8];
    for i in 0..8 {
        left[i] = ka[i] ^ kr[i];
        right[i] = ka[i + 8] ^ kr[i + 8];
    }
    round_f(&SIGMA[4], &left, &mut right);
    round_f(&SIGMA[5], &right, &mut left);
    join_halves(&left, &right)
}

fn join_halves(left: &[u8; 8], right: &[u8; 8]) -> [u8; 16] {
    let mut joined = [0u8; 16];
    joined[..8].copy_from_slice(left);
    joined[8..].copy_from_slice(right);
    joined
}

/// Emits register halves across eight generations, skipping the drop-list
/// positions. After each generation every register rotates left by 15 bits
/// (generations 0..4) or 17 bits (generations 4..8), walking the registers
/// through the published 0/15/30/45/60/77/94/111-bit offsets.
fn extract(table: &mut [[u8; 8]; 34], registers: &mut [[u8; 16]], drop_list: &[usize]) -> usize {
    let mut emitted = 0;
    let mut position = 0;
    for generation in 0..8 {
        for register in registers.iter() {
            for half in register.chunks_exact(8) {
                if !drop_list.contains(&position) {
                    table[emitted].copy_from_slice(half);
                    emitted += 1;
                }
                position += 1;
            }
        }
        let bits = if generation < 4 { 15 } else { 17 };
        for register in registers.iter_mut() {
            rotate_left(register, bits);
        }
    }
    emitted
}

/// 128-bit left rotation of a big-endian register.
///
/// The rotation must carry across byte boundaries; lifting the register
/// into a `u128` keeps that in one well-tested operation.
fn rotate_left(register: &mut [u8; 16], bits: u32) {
    let rotated = u128::from_be_bytes(*register).rotate_left(bits);
    *register = rotated.to_be_bytes();
}
