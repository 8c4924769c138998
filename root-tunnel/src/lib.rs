//! Root Tunnel - the escrow-side bridge endpoint.
//!
//! Sits next to the Grid Ledger on the root chain and moves quads to and
//! from the mirror chain:
//!
//! # Outgoing (lock)
//! 1. Holder approves the tunnel as an operator on the ledger
//! 2. `BatchTransferQuadToChild` escrows the quads into the tunnel and emits
//!    the encoded transfer payload for the relay
//! 3. The relay delivers the payload to the child tunnel, which mints on the
//!    mirror ledger
//!
//! # Incoming (proof-gated release)
//! 1. Holder exits on the mirror chain (child tunnel burns and records a
//!    pending exit keyed by a source transaction id)
//! 2. The finality oracle observes the exit being checkpointed and calls
//!    `SubmitCheckpoint { tx_id, payload_hash }`
//! 3. Anyone submits the oracle-built proof via `ReceiveMessage`; the tunnel
//!    verifies the payload against the checkpointed hash, rejects replays,
//!    and transfers the quads out of escrow back to the holder
//!
//! The asymmetry with the child tunnel is deliberate: this side never
//! releases escrow without an oracle checkpoint, while the child side mints
//! on the word of the registered relay.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
