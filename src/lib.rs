//! Smart-Wallet Relay Demo
//!
//! Drives a counterfactual smart-contract wallet from a standalone private
//! key: build a signer topology, derive the wallet address, publish the
//! configuration to a directory service, then prepare, sign, and relay one
//! transaction and poll the relayer until it reports a terminal status.
//!
//! # Flow
//!
//! ```text
//! env config ─▶ signer + topology ─▶ address resolver ─▶ directory publish
//!                                                         (best effort)
//!                        │
//!                        ▼
//!              envelope prepare ─▶ sign ─▶ build ─▶ relay ─▶ poll status
//! ```
//!
//! All heavy lifting (signature scheme, relayer queuing, state indexing)
//! lives behind the `node`, `relay`, and `directory` seams; this crate is
//! the orchestration around them.

pub mod config;
pub mod directory;
pub mod flow;
pub mod node;
pub mod relay;
pub mod tx;
pub mod wallet;

pub use config::EnvConfig;
pub use flow::{send_and_confirm, FlowOutcome};
pub use relay::RelayClient;
