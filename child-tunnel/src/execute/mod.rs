//! Execute handlers for the child tunnel.
//!
//! - `receive` - trusted application of root-chain transfer messages
//! - `exit` - burn-and-record toward the root chain
//! - `admin` - pause, limits, and wiring

mod admin;
mod exit;
mod receive;

pub use admin::*;
pub use exit::*;
pub use receive::*;
