//! Camellia block cipher primitive (128-bit block, 128/192/256-bit keys).
//!
//! This crate mirrors the published Camellia specification and provides:
//! - Key schedule for all three key lengths.
//! - Single-block encryption and decryption.
//! - Public types shared across the workspace.
//!
//! The implementation aims for clarity and bit-exact fidelity rather than
//! constant-time guarantees; it should not be treated as side-channel
//! hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod key;
mod round;
mod sbox;
mod schedule;

pub use crate::block::{xor_in_place, Block};
pub use crate::cipher::{decrypt_block, encrypt_block};
pub use crate::key::{CamelliaKey, InvalidKeyLength, Subkeys};
pub use crate::schedule::derive_subkeys;
