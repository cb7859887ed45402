//! Change-spec types: the declarative document describing a desired change.
//!
//! A change spec mirrors what an operator would put in a task file: the
//! command lines to ensure (or a source file containing them), the section
//! they belong to, framing commands, and the match/replace policies that
//! control how convergence is computed.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ConfigError, ConfplanError, ModeError, Result};

/// Policy for deciding whether a candidate line is already satisfied by the
/// running configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// A line is satisfied if identical text exists anywhere under the same
    /// parent path, regardless of position (default).
    #[default]
    Line,
    /// A line is satisfied only if the running config has identical text at
    /// the same sibling position under the same parent path.
    Strict,
    /// The entire ordered sibling list must match line for line; one
    /// mismatch invalidates the whole block.
    Exact,
    /// Skip comparison entirely and apply the candidate unconditionally.
    None,
}

/// Policy for how much surrounding context is re-emitted on a mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReplaceMode {
    /// Emit only the unsatisfied candidate lines (default).
    #[default]
    Line,
    /// Emit the entire candidate block if any line in it is unsatisfied.
    /// Ordering-sensitive sections (ACLs, route-maps) need the whole block
    /// re-applied together.
    Block,
}

impl FromStr for MatchMode {
    type Err = ModeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "line" => Ok(Self::Line),
            "strict" => Ok(Self::Strict),
            "exact" => Ok(Self::Exact),
            "none" => Ok(Self::None),
            _ => Err(ModeError::UnknownMatchMode {
                token: s.to_string(),
            }),
        }
    }
}

impl FromStr for ReplaceMode {
    type Err = ModeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "line" => Ok(Self::Line),
            "block" => Ok(Self::Block),
            _ => Err(ModeError::UnknownReplaceMode {
                token: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Line => "line",
            Self::Strict => "strict",
            Self::Exact => "exact",
            Self::None => "none",
        };
        write!(f, "{s}")
    }
}

impl std::fmt::Display for ReplaceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Line => "line",
            Self::Block => "block",
        };
        write!(f, "{s}")
    }
}

/// A declarative change document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChangeSpec {
    /// The ordered command lines to ensure in the section. Mutually
    /// exclusive with `src`.
    #[serde(default, alias = "commands")]
    pub lines: Vec<String>,

    /// Ordered parent commands identifying the section the lines belong to.
    /// Empty means the top level. Mutually exclusive with `src`.
    #[serde(default)]
    pub parents: Vec<String>,

    /// Path to a file containing the candidate configuration. Mutually
    /// exclusive with `lines` and `parents`.
    #[serde(default)]
    pub src: Option<PathBuf>,

    /// Commands spliced verbatim onto the front of the rendered list when a
    /// change is needed.
    #[serde(default)]
    pub before: Vec<String>,

    /// Commands spliced verbatim onto the back of the rendered list when a
    /// change is needed.
    #[serde(default)]
    pub after: Vec<String>,

    /// Match policy.
    #[serde(default, rename = "match")]
    pub match_mode: MatchMode,

    /// Replace policy.
    #[serde(default)]
    pub replace: ReplaceMode,
}

impl ChangeSpec {
    /// Creates a spec from literal command lines under a parent path.
    #[must_use]
    pub fn from_lines<S: Into<String>>(lines: Vec<S>, parents: Vec<String>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            parents,
            ..Self::default()
        }
    }

    /// Loads a change spec from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading change spec from: {}", path.display());

        if !path.exists() {
            return Err(ConfplanError::Config(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            }));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfplanError::Config(ConfigError::ParseError {
                message: format!("Failed to read file: {e}"),
                location: Some(path.display().to_string()),
            })
        })?;

        Self::parse_yaml(&content, Some(path))
    }

    /// Parses a change spec from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn parse_yaml(content: &str, source: Option<&Path>) -> Result<Self> {
        debug!("Parsing YAML change spec");

        let spec: Self = serde_yaml::from_str(content).map_err(|e| {
            let location = source.map(|p| p.display().to_string());
            ConfplanError::Config(ConfigError::ParseError {
                message: format!("YAML parse error: {e}"),
                location,
            })
        })?;

        debug!(
            "Parsed change spec: {} lines, match={}, replace={}",
            spec.lines.len(),
            spec.match_mode,
            spec.replace
        );
        Ok(spec)
    }
}
