//! Relayer submission and confirmation polling.

pub mod client;
pub mod poller;
pub mod types;

pub use client::RelayClient;
pub use poller::wait_for_receipt;
pub use types::{OpHash, RelayError, RelayStatus};
