//! Child Tunnel - the mirror-side bridge endpoint.
//!
//! Sits next to the Grid Ledger on the mirror chain:
//!
//! # Incoming (trusted receive)
//! The registered relay delivers messages emitted by the root tunnel;
//! `ReceiveFromRoot` mints the quads to the holder. The root chain is
//! implicitly trusted in this direction, so no proof is required - only the
//! relay identity check and per-message replay protection.
//!
//! # Outgoing (exit)
//! `BatchTransferQuadToRoot` burns the holder's quads and records a Pending
//! Exit Message keyed by a source transaction id. The exit completes on the
//! root chain once the finality oracle checkpoints it; until then the burn
//! stands and the record remains pending. There is no refund path for an
//! exit that never finalizes - a known liveness gap inherited from the
//! protocol design.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
