//! Configuration model for the confplan planner.
//!
//! This module covers everything on the input side of a plan:
//! - Parsing raw indented text into ordered line records
//! - Building and querying the hierarchical configuration tree
//! - The declarative change-spec document and its validation
//! - Fingerprinting plan inputs for change detection

mod hash;
mod line;
mod parser;
mod spec;
mod tree;
mod validator;

pub use hash::SpecHasher;
pub use line::ConfigLine;
pub use parser::{LineParser, ParsedLine};
pub use spec::{ChangeSpec, MatchMode, ReplaceMode};
pub use tree::ConfigTree;
pub use validator::{SpecValidator, ValidationResult};
