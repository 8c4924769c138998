//! Common - Shared Types and Utilities for the Land Bridge Contracts
//!
//! This package provides the quad geometry validator, the cross-chain wire
//! codec, and hashing utilities used across the Land Bridge smart contracts.

pub mod codec;
pub mod hash;
pub mod quad;

pub use codec::{
    decode_transfer, encode_proof, encode_transfer, split_proof, CodecError, TransferPayload,
};
pub use hash::{bytes32_to_hex, compute_exit_tx_id, hex_to_bytes32, keccak256};
pub use quad::{
    estimate_receive_gas, quads_from_arrays, quads_to_arrays, validate_batch, GeometryError, Quad,
    ALLOWED_SIZES,
};
