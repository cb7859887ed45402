//! Plan construction: validation, candidate resolution, diffing, rendering.
//!
//! The planner is the one place where a change spec, a running
//! configuration, and the diff machinery meet. Everything below it is pure;
//! the planner owns the orchestration order and the before/after splicing
//! rule.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{ChangeSpec, ConfigTree, SpecHasher, SpecValidator};
use crate::error::{ConfigError, ConfplanError, Result};

use super::diff::{CommandBlock, DiffEngine};
use super::render::CommandRenderer;

/// The outcome of planning one change spec against a running configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    /// When the plan was computed.
    pub created_at: DateTime<Utc>,
    /// Fingerprint of the plan inputs; identical inputs yield identical
    /// fingerprints across runs.
    pub fingerprint: String,
    /// Whether applying the plan would change the device.
    pub changed: bool,
    /// The flat, device-ready command list, including any spliced
    /// before/after framing commands.
    pub commands: Vec<String>,
    /// The structured blocks the command list was rendered from.
    pub blocks: Vec<CommandBlock>,
}

impl Plan {
    /// Short fingerprint for display.
    #[must_use]
    pub fn short_fingerprint(&self) -> String {
        SpecHasher::short(&self.fingerprint)
    }
}

/// Builds plans from change specs.
#[derive(Debug, Default)]
pub struct Planner {
    engine: DiffEngine,
    hasher: SpecHasher,
}

impl Planner {
    /// Creates a new planner.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            engine: DiffEngine::new(),
            hasher: SpecHasher::new(),
        }
    }

    /// Computes the plan that converges `running` onto the spec's candidate.
    ///
    /// An already-satisfied spec yields an unchanged plan with an empty
    /// command list; `before` and `after` framing commands are spliced in
    /// only when there is something to apply.
    ///
    /// # Errors
    ///
    /// Returns an error if the spec fails validation or its `src` file
    /// cannot be loaded.
    pub fn plan(&self, spec: &ChangeSpec, running: &ConfigTree) -> Result<Plan> {
        let validation = SpecValidator::new().validate(spec)?;
        for warning in &validation.warnings {
            tracing::warn!("{warning}");
        }

        let candidate = Self::candidate_tree(spec)?;
        debug!(
            "Candidate: {} line(s), running: {} line(s)",
            candidate.len(),
            running.len()
        );

        let blocks =
            self.engine
                .difference(&candidate, running, spec.match_mode, spec.replace);
        let mut commands = CommandRenderer::new().render(&blocks);

        let changed = !commands.is_empty();
        if changed {
            let mut framed = spec.before.clone();
            framed.append(&mut commands);
            framed.extend(spec.after.iter().cloned());
            commands = framed;
        }

        let fingerprint =
            self.hasher
                .fingerprint(&candidate, running, spec.match_mode, spec.replace);

        info!(
            "Plan {}: changed={changed}, {} command(s)",
            SpecHasher::short(&fingerprint),
            commands.len()
        );

        Ok(Plan {
            created_at: Utc::now(),
            fingerprint,
            changed,
            commands,
            blocks,
        })
    }

    /// Resolves the spec's candidate configuration into a tree.
    ///
    /// `src` takes a whole indented file; `lines` are inserted under the
    /// spec's parent path. Validation has already rejected specs naming
    /// both.
    fn candidate_tree(spec: &ChangeSpec) -> Result<ConfigTree> {
        if let Some(src) = &spec.src {
            if !src.exists() {
                return Err(ConfplanError::Config(ConfigError::FileNotFound {
                    path: src.clone(),
                }));
            }
            return ConfigTree::load_file(src);
        }

        let mut tree = ConfigTree::new();
        tree.add(&spec.lines, &spec.parents);
        Ok(tree)
    }
}
