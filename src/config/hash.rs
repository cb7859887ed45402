//! Plan-input fingerprinting.
//!
//! A plan computed from the same candidate, running config, and mode pair is
//! byte-identical across runs. The fingerprint captures those inputs so
//! callers can detect no-op re-applications without re-diffing.

use sha2::{Digest, Sha256};

use super::spec::{MatchMode, ReplaceMode};
use super::tree::ConfigTree;

/// Hasher for computing plan-input fingerprints.
#[derive(Debug, Default)]
pub struct SpecHasher;

impl SpecHasher {
    /// Creates a new hasher.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Computes a fingerprint over a diff invocation's inputs.
    ///
    /// The candidate and base linearizations are hashed with their parent
    /// paths, so identical texts in different sections fingerprint
    /// differently.
    #[must_use]
    pub fn fingerprint(
        &self,
        candidate: &ConfigTree,
        base: &ConfigTree,
        match_mode: MatchMode,
        replace: ReplaceMode,
    ) -> String {
        let mut hasher = Sha256::new();

        Self::hash_tree(&mut hasher, candidate);
        hasher.update([0xff]);
        Self::hash_tree(&mut hasher, base);
        hasher.update(match_mode.to_string().as_bytes());
        hasher.update(replace.to_string().as_bytes());

        hex::encode(hasher.finalize())
    }

    /// Computes a short fingerprint (first 8 characters) for display.
    #[must_use]
    pub fn short(hash: &str) -> String {
        hash.chars().take(8).collect()
    }

    fn hash_tree(hasher: &mut Sha256, tree: &ConfigTree) {
        for line in tree.lines() {
            for parent in &line.parents {
                hasher.update(parent.as_bytes());
                hasher.update([0x1f]);
            }
            hasher.update(line.text.as_bytes());
            hasher.update([0x0a]);
        }
    }
}
