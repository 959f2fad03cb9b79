//! Wallet signer topology and configuration.
//!
//! A topology is a binary tree whose leaves are weighted signers. A
//! configuration pairs a topology with a signing threshold and a monotonic
//! checkpoint; a configuration is immutable once published for a given
//! checkpoint, and any change bumps the checkpoint.

use alloy::primitives::{keccak256, Address, B256, U256};
use alloy::sol_types::SolValue;

/// Who may authorize wallet actions, as a weighted tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Topology {
    /// A single signer carrying `weight` toward the threshold.
    Signer { address: Address, weight: u16 },
    /// Two subtrees whose weights combine.
    Node(Box<Topology>, Box<Topology>),
}

impl Topology {
    /// Leaf constructor.
    pub fn signer(address: Address, weight: u16) -> Self {
        Topology::Signer { address, weight }
    }

    /// Join two subtrees.
    pub fn pair(left: Topology, right: Topology) -> Self {
        Topology::Node(Box::new(left), Box::new(right))
    }

    /// Sum of all leaf weights.
    pub fn total_weight(&self) -> u32 {
        match self {
            Topology::Signer { weight, .. } => u32::from(*weight),
            Topology::Node(l, r) => l.total_weight() + r.total_weight(),
        }
    }

    /// Combined weight of the given signers within this topology.
    pub fn weight_of(&self, signers: &[Address]) -> u32 {
        match self {
            Topology::Signer { address, weight } => {
                if signers.contains(address) {
                    u32::from(*weight)
                } else {
                    0
                }
            }
            Topology::Node(l, r) => l.weight_of(signers) + r.weight_of(signers),
        }
    }

    /// All leaf signers with their weights, left to right.
    pub fn signers(&self) -> Vec<(Address, u16)> {
        let mut out = Vec::new();
        self.collect_signers(&mut out);
        out
    }

    fn collect_signers(&self, out: &mut Vec<(Address, u16)>) {
        match self {
            Topology::Signer { address, weight } => out.push((*address, *weight)),
            Topology::Node(l, r) => {
                l.collect_signers(out);
                r.collect_signers(out);
            }
        }
    }

    /// Deterministic hash of the tree shape and contents.
    pub fn hash(&self) -> B256 {
        match self {
            Topology::Signer { address, weight } => {
                keccak256((*address, U256::from(*weight)).abi_encode())
            }
            Topology::Node(l, r) => keccak256((l.hash(), r.hash()).abi_encode()),
        }
    }
}

/// A wallet configuration: topology plus threshold and version counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletConfig {
    /// Combined signer weight required to authorize an action.
    pub threshold: u16,
    /// Monotonic configuration version.
    pub checkpoint: u32,
    /// Signer tree.
    pub topology: Topology,
}

impl WalletConfig {
    /// The degenerate one-of-one configuration used by the demo.
    pub fn single_signer(address: Address) -> Self {
        Self {
            threshold: 1,
            checkpoint: 0,
            topology: Topology::signer(address, 1),
        }
    }

    /// Deterministic image of the full configuration.
    ///
    /// Same configuration, same image; this is the CREATE2 salt used for
    /// counterfactual address derivation.
    pub fn image_hash(&self) -> B256 {
        keccak256(
            (
                self.topology.hash(),
                U256::from(self.threshold),
                U256::from(self.checkpoint),
            )
                .abi_encode(),
        )
    }

    /// Whether the given signers collectively satisfy the threshold.
    pub fn threshold_met(&self, signers: &[Address]) -> bool {
        self.topology.weight_of(signers) >= u32::from(self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    const ALICE: Address = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
    const BOB: Address = address!("70997970C51812dc3A010C7d01b50e0d17dc79C8");

    #[test]
    fn test_single_signer_config() {
        let config = WalletConfig::single_signer(ALICE);
        assert_eq!(config.threshold, 1);
        assert_eq!(config.checkpoint, 0);
        assert_eq!(config.topology.total_weight(), 1);
        assert!(config.threshold_met(&[ALICE]));
        assert!(!config.threshold_met(&[BOB]));
    }

    #[test]
    fn test_weighted_pair() {
        let topology = Topology::pair(Topology::signer(ALICE, 2), Topology::signer(BOB, 1));
        assert_eq!(topology.total_weight(), 3);
        assert_eq!(topology.weight_of(&[ALICE]), 2);
        assert_eq!(topology.weight_of(&[BOB]), 1);
        assert_eq!(topology.weight_of(&[ALICE, BOB]), 3);
        assert_eq!(topology.signers().len(), 2);
    }

    #[test]
    fn test_image_hash_deterministic() {
        let a = WalletConfig::single_signer(ALICE);
        let b = WalletConfig::single_signer(ALICE);
        assert_eq!(a.image_hash(), b.image_hash());
    }

    #[test]
    fn test_image_hash_tracks_checkpoint() {
        let mut a = WalletConfig::single_signer(ALICE);
        let before = a.image_hash();
        a.checkpoint += 1;
        assert_ne!(before, a.image_hash());
    }

    #[test]
    fn test_image_hash_distinguishes_tree_shape() {
        let left = Topology::pair(
            Topology::pair(Topology::signer(ALICE, 1), Topology::signer(BOB, 1)),
            Topology::signer(ALICE, 1),
        );
        let right = Topology::pair(
            Topology::signer(ALICE, 1),
            Topology::pair(Topology::signer(BOB, 1), Topology::signer(ALICE, 1)),
        );
        assert_ne!(left.hash(), right.hash());
    }
}
