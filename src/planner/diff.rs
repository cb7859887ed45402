//! Diff engine for comparing candidate vs running configuration trees.
//!
//! This module computes the ordered set of command blocks needed to
//! converge the running configuration onto the candidate, under the
//! selected match and replace policies.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{ConfigLine, ConfigTree, MatchMode, ReplaceMode};

/// How a command block should be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockDirective {
    /// Emit the listed lines into the section.
    Append,
    /// The block re-states the entire section; every candidate line is
    /// included, even ones the running config already satisfies.
    ReplaceBlock,
}

/// A contiguous unit of commands scoped to one parent path.
///
/// Blocks are produced only by the [`DiffEngine`] and consumed only by the
/// renderer. Line text is copied out of the trees, so a block stays valid
/// regardless of what happens to the trees afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandBlock {
    /// Ordered ancestor commands identifying the section.
    pub parents: Vec<String>,
    /// The command lines to emit under the section, in order.
    pub lines: Vec<String>,
    /// How the block should be applied.
    pub directive: BlockDirective,
}

/// Engine for computing configuration diffs.
///
/// A diff is a pure function of two immutable trees plus the two mode flags:
/// no shared state, no interior mutability. The same inputs always produce
/// the same ordered block list.
#[derive(Debug, Default)]
pub struct DiffEngine;

impl DiffEngine {
    /// Creates a new diff engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Computes the blocks required to converge `base` onto `candidate`.
    ///
    /// Blocks are emitted depth-first in the candidate's insertion order,
    /// parents before their children's blocks; the renderer relies on that
    /// order to open sections before filling them.
    #[must_use]
    pub fn difference(
        &self,
        candidate: &ConfigTree,
        base: &ConfigTree,
        match_mode: MatchMode,
        replace: ReplaceMode,
    ) -> Vec<CommandBlock> {
        let mut blocks = Vec::new();

        if match_mode == MatchMode::None {
            Self::emit_unconditionally(&[], candidate.roots(), &mut blocks);
        } else {
            Self::walk(&[], candidate.roots(), base, match_mode, replace, &mut blocks);
        }

        debug!(
            "Computed {} command block(s) (match={match_mode}, replace={replace})",
            blocks.len()
        );
        blocks
    }

    /// Recursive descent over the candidate tree, one sibling list at a time.
    fn walk(
        path: &[String],
        siblings: &[ConfigLine],
        base: &ConfigTree,
        match_mode: MatchMode,
        replace: ReplaceMode,
        out: &mut Vec<CommandBlock>,
    ) {
        if siblings.is_empty() {
            return;
        }

        let base_children = base.get_children(path);
        let satisfied = Self::satisfied_mask(siblings, base_children, match_mode);

        if satisfied.iter().any(|s| !s) {
            match replace {
                ReplaceMode::Block => {
                    // The whole section is re-applied together; nothing
                    // below this path may emit its own block.
                    debug!("Section {path:?} unsatisfied, replacing whole block");
                    out.push(CommandBlock {
                        parents: path.to_vec(),
                        lines: siblings.iter().map(|n| n.text.clone()).collect(),
                        directive: BlockDirective::ReplaceBlock,
                    });
                    return;
                }
                ReplaceMode::Line => {
                    let lines: Vec<String> = siblings
                        .iter()
                        .zip(&satisfied)
                        .filter(|(_, ok)| !**ok)
                        .map(|(n, _)| n.text.clone())
                        .collect();
                    debug!("Section {path:?}: {} line(s) unsatisfied", lines.len());
                    out.push(CommandBlock {
                        parents: path.to_vec(),
                        lines,
                        directive: BlockDirective::Append,
                    });
                }
            }
        }

        // A satisfied section may still have unsatisfied grandchildren, so
        // recursion continues under every candidate node here.
        for node in siblings {
            if !node.children.is_empty() {
                Self::walk(
                    &node.child_path(),
                    &node.children,
                    base,
                    match_mode,
                    replace,
                    out,
                );
            }
        }
    }

    /// Evaluates per-line satisfaction of `candidate` against `base` under
    /// the active match policy.
    ///
    /// A candidate node with children is section context, not content: it is
    /// always satisfied at its own level, and whether the section must be
    /// entered is decided by its children's blocks. Without this, a spec
    /// scoped to a `parents` path would trip the comparison at every
    /// ancestor level instead of at the lines themselves.
    fn satisfied_mask(
        candidate: &[ConfigLine],
        base: &[ConfigLine],
        match_mode: MatchMode,
    ) -> Vec<bool> {
        let mut mask: Vec<bool> = match match_mode {
            MatchMode::Line => candidate
                .iter()
                .map(|c| base.iter().any(|b| b.text == c.text))
                .collect(),
            MatchMode::Strict => candidate
                .iter()
                .enumerate()
                .map(|(i, c)| base.get(i).is_some_and(|b| b.text == c.text))
                .collect(),
            MatchMode::Exact => {
                let whole_block_equal = base.len() == candidate.len()
                    && candidate.iter().zip(base).all(|(c, b)| c.text == b.text);
                vec![whole_block_equal; candidate.len()]
            }
            // Dispatched before walking; a line is never satisfied here.
            MatchMode::None => vec![false; candidate.len()],
        };

        for (ok, node) in mask.iter_mut().zip(candidate) {
            if !node.children.is_empty() {
                *ok = true;
            }
        }
        mask
    }

    /// `match: none` bypass: every candidate line is emitted verbatim, with
    /// blocks split so their concatenation equals the candidate's pre-order
    /// linearization.
    fn emit_unconditionally(
        path: &[String],
        siblings: &[ConfigLine],
        out: &mut Vec<CommandBlock>,
    ) {
        let mut run: Vec<String> = Vec::new();
        for node in siblings {
            run.push(node.text.clone());
            if !node.children.is_empty() {
                out.push(CommandBlock {
                    parents: path.to_vec(),
                    lines: std::mem::take(&mut run),
                    directive: BlockDirective::Append,
                });
                Self::emit_unconditionally(&node.child_path(), &node.children, out);
            }
        }
        if !run.is_empty() {
            out.push(CommandBlock {
                parents: path.to_vec(),
                lines: run,
                directive: BlockDirective::Append,
            });
        }
    }
}
