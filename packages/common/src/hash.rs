//! Hashing utilities for cross-chain commitments.
//!
//! The finality oracle checkpoints an exit by its source transaction id and
//! commits to the payload via keccak256; the root tunnel recomputes both
//! before releasing escrow, so a relayer can never substitute a payload.

use tiny_keccak::{Hasher, Keccak};

/// Compute keccak256 hash of arbitrary data.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Derive the source-transaction id for an exit.
///
/// `keccak256(nonce-BE || keccak256(payload))`: unique per exit nonce and
/// bound to the exact payload bytes.
pub fn compute_exit_tx_id(payload: &[u8], nonce: u64) -> [u8; 32] {
    let mut data = [0u8; 40];
    data[..8].copy_from_slice(&nonce.to_be_bytes());
    data[8..].copy_from_slice(&keccak256(payload));
    keccak256(&data)
}

/// Render a 32-byte hash as 0x-prefixed hex for event attributes.
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Parse a 0x-prefixed (or bare) hex string into a 32-byte hash.
pub fn hex_to_bytes32(input: &str) -> Result<[u8; 32], hex::FromHexError> {
    let stripped = input.strip_prefix("0x").unwrap_or(input);
    let raw = hex::decode(stripped)?;
    raw.try_into()
        .map_err(|_| hex::FromHexError::InvalidStringLength)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keccak256_known_vector() {
        // keccak256 of the empty string
        assert_eq!(
            bytes32_to_hex(&keccak256(b"")),
            "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn exit_tx_ids_differ_by_nonce_and_payload() {
        let a = compute_exit_tx_id(b"payload", 1);
        let b = compute_exit_tx_id(b"payload", 2);
        let c = compute_exit_tx_id(b"other", 1);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, compute_exit_tx_id(b"payload", 1));
    }

    #[test]
    fn hex_round_trip() {
        let hash = keccak256(b"quad");
        let hex = bytes32_to_hex(&hash);
        assert_eq!(hex_to_bytes32(&hex).unwrap(), hash);
        assert!(hex_to_bytes32("0x1234").is_err());
    }
}
