//! Key types for Camellia.

use core::fmt;

/// Maximum subkey-table size (192/256-bit keys).
const MAX_SUBKEYS: usize = 34;

/// Raw Camellia key, one variant per supported length.
///
/// The variant fixes the key length, so a key of any other size cannot be
/// constructed; use [`CamelliaKey::try_from`] to validate an untrusted
/// slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CamelliaKey {
    /// 128-bit key (18 rounds, 26 subkeys).
    Camellia128([u8; 16]),
    /// 192-bit key (24 rounds, 34 subkeys).
    Camellia192([u8; 24]),
    /// 256-bit key (24 rounds, 34 subkeys).
    Camellia256([u8; 32]),
}

impl CamelliaKey {
    /// Key length in bits.
    pub fn bits(&self) -> usize {
        match self {
            CamelliaKey::Camellia128(_) => 128,
            CamelliaKey::Camellia192(_) => 192,
            CamelliaKey::Camellia256(_) => 256,
        }
    }
}

impl From<[u8; 16]> for CamelliaKey {
    fn from(value: [u8; 16]) -> Self {
        Self::Camellia128(value)
    }
}

impl From<[u8; 24]> for CamelliaKey {
    fn from(value: [u8; 24]) -> Self {
        Self::Camellia192(value)
    }
}

impl From<[u8; 32]> for CamelliaKey {
    fn from(value: [u8; 32]) -> Self {
        Self::Camellia256(value)
    }
}

impl TryFrom<&[u8]> for CamelliaKey {
    type Error = InvalidKeyLength;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        match bytes.len() {
            16 => {
                let mut key = [0u8; 16];
                key.copy_from_slice(bytes);
                Ok(Self::Camellia128(key))
            }
            24 => {
                let mut key = [0u8; 24];
                key.copy_from_slice(bytes);
                Ok(Self::Camellia192(key))
            }
            32 => {
                let mut key = [0u8; 32];
                key.copy_from_slice(bytes);
                Ok(Self::Camellia256(key))
            }
            len => Err(InvalidKeyLength { len }),
        }
    }
}

/// Error returned when a raw key slice is not 16, 24 or 32 bytes long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidKeyLength {
    /// Length of the rejected slice in bytes.
    pub len: usize,
}

impl fmt::Display for InvalidKeyLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "key length is {} bytes, must be 16, 24 or 32",
            self.len
        )
    }
}

impl std::error::Error for InvalidKeyLength {}

/// Derived subkey table: 26 entries for 128-bit keys, 34 otherwise.
///
/// Pure data, immutable once derived; share it freely across threads that
/// transform blocks under the same key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subkeys {
    table: [[u8; 8]; MAX_SUBKEYS],
    count: usize,
}

impl Subkeys {
    pub(crate) fn new(table: [[u8; 8]; MAX_SUBKEYS], count: usize) -> Self {
        Self { table, count }
    }

    /// Returns the subkey at the requested index (0..count()).
    #[inline]
    pub fn get(&self, index: usize) -> &[u8; 8] {
        &self.table[index]
    }

    /// Number of table entries, 26 or 34.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of Feistel rounds the table drives, 18 or 24.
    pub fn rounds(&self) -> usize {
        if self.count == 26 {
            18
        } else {
            24
        }
    }
}
