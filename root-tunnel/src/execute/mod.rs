//! Execute handlers for the root tunnel.
//!
//! - `lock` - outgoing batch escrow and message emission
//! - `release` - checkpoint submission and proof-gated release
//! - `admin` - pause, limits, and wiring

mod admin;
mod lock;
mod release;

pub use admin::*;
pub use lock::*;
pub use release::*;
