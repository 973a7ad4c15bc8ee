//! Fingerprint of the loaded input files.

use sha2::{Digest, Sha256};

/// Calculate a SHA-256 checksum over several byte sources, in order.
///
/// Each source is prefixed with its length so that moving bytes between two
/// adjacent files changes the result.
pub fn calculate_checksum<'a, I>(sources: I) -> String
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut hasher = Sha256::new();
    for bytes in sources {
        hasher.update((bytes.len() as u64).to_le_bytes());
        hasher.update(bytes);
    }
    hex::encode(hasher.finalize())
}
