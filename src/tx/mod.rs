//! Transaction preparation, signing glue, and call encoding.

pub mod envelope;
pub mod orchestrator;

pub use envelope::{attach_signatures, BehaviorOnError, Call, Envelope, SignedEnvelope};
pub use orchestrator::{BuiltCall, Orchestrator};

use thiserror::Error;

use crate::node::NodeError;

/// Errors from envelope preparation and call building.
#[derive(Debug, Error)]
pub enum TxError {
    /// Chain state could not be read.
    #[error(transparent)]
    Node(#[from] NodeError),

    /// Attached signer weight does not satisfy the wallet threshold.
    #[error("signatures carry weight {have}, threshold is {need}")]
    ThresholdNotMet { have: u32, need: u16 },
}
