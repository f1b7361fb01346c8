//! Camellia round transformations.

use crate::sbox::{s1, s2, s3, s4};

#[inline]
fn hi_word(bytes: &[u8; 8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

#[inline]
fn lo_word(bytes: &[u8; 8]) -> u32 {
    u32::from_be_bytes([bytes[4], bytes[5], bytes[6], bytes[7]])
}

/// Feistel round function F: XORs the P-function diffusion of the
/// substituted `left ^ subkey` into `right`.
#[inline]
pub(crate) fn round_f(subkey: &[u8; 8], left: &[u8; 8], right: &mut [u8; 8]) {
    let mut t = [0u8; 8];
    for (i, byte) in t.iter_mut().enumerate() {
        *byte = subkey[i] ^ left[i];
    }

    // S-function: the fixed variant pattern over the eight byte positions.
    let [t0, t1, t2, t3, t4, t5, t6, t7] = [
        s1(t[0]),
        s2(t[1]),
        s3(t[2]),
        s4(t[3]),
        s2(t[4]),
        s3(t[5]),
        s4(t[6]),
        s1(t[7]),
    ];

    // P-function: branch-optimal byte diffusion, folded into the Feistel XOR.
    right[0] ^= t0 ^ t2 ^ t3 ^ t5 ^ t6 ^ t7;
    right[1] ^= t0 ^ t1 ^ t3 ^ t4 ^ t6 ^ t7;
    right[2] ^= t0 ^ t1 ^ t2 ^ t4 ^ t5 ^ t7;
    right[3] ^= t1 ^ t2 ^ t3 ^ t4 ^ t5 ^ t6;
    right[4] ^= t0 ^ t1 ^ t5 ^ t6 ^ t7;
    right[5] ^= t1 ^ t2 ^ t4 ^ t6 ^ t7;
    right[6] ^= t2 ^ t3 ^ t4 ^ t5 ^ t7;
    right[7] ^= t0 ^ t3 ^ t4 ^ t5 ^ t6;
}

/// FL mixing function, applied to one 8-byte half of the state.
#[inline]
pub(crate) fn fl(subkey: &[u8; 8], half: &mut [u8; 8]) {
    let k1 = hi_word(subkey);
    let k2 = lo_word(subkey);
    let x1 = hi_word(half);
    let x2 = lo_word(half) ^ (x1 & k1).rotate_left(1);
    let x1 = x1 ^ (x2 | k2);
    half[..4].copy_from_slice(&x1.to_be_bytes());
    half[4..].copy_from_slice(&x2.to_be_bytes());
}

/// Inverse of [`fl`]: the same operations in the opposite order.
#[inline]
pub(crate) fn fl_inv(subkey: &[u8; 8], half: &mut [u8; 8]) {
    let k1 = hi_word(subkey);
    let k2 = lo_word(subkey);
    let y2 = lo_word(half);
    let y1 = hi_word(half) ^ (y2 | k2);
    let y2 = y2 ^ (y1 & k1).rotate_left(1);
    half[..4].copy_from_slice(&y1.to_be_bytes());
    half[4..].copy_from_slice(&y2.to_be_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fl_inv_undoes_fl() {
        let subkey = [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef];
        for seed in 0..=255u8 {
            let original: [u8; 8] =
                core::array::from_fn(|i| seed.wrapping_mul(31).wrapping_add((i as u8).wrapping_mul(97)));
            let mut half = original;
            fl(&subkey, &mut half);
            fl_inv(&subkey, &mut half);
            assert_eq!(half, original);
        }
    }

    #[test]
    fn fl_with_zero_subkey_xors_low_word_into_high() {
        // k1 = 0 kills the AND term, so x2 is unchanged; k2 = 0 makes the
        // OR pass x2 through, so the high word becomes x1 ^ x2.
        let mut half = [0xde, 0xad, 0xbe, 0xef, 0x00, 0x00, 0x00, 0x00];
        fl(&[0u8; 8], &mut half);
        assert_eq!(half, [0xde, 0xad, 0xbe, 0xef, 0x00, 0x00, 0x00, 0x00]);

        let mut half = [0xde, 0xad, 0xbe, 0xef, 0x01, 0x02, 0x03, 0x04];
        fl(&[0u8; 8], &mut half);
        assert_eq!(half, [0xdf, 0xaf, 0xbd, 0xeb, 0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn round_f_is_a_feistel_xor() {
        // Applying the same F twice to the same left half cancels out.
        let subkey = [0x10, 0x32, 0x54, 0x76, 0x98, 0xba, 0xdc, 0xfe];
        let left = [0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88];
        let original = [0xf0, 0xe1, 0xd2, 0xc3, 0xb4, 0xa5, 0x96, 0x87];
        let mut right = original;
        round_f(&subkey, &left, &mut right);
        assert_ne!(right, original);
        round_f(&subkey, &left, &mut right);
        assert_eq!(right, original);
    }
}
