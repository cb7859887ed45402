// ============================================================================
// Strict linting - Dangerous or non-idiomatic practices are forbidden
// ============================================================================

#![deny(warnings)]                    // All warnings are treated as errors
#![deny(unsafe_code)]                 // Unsafe code is forbidden
#![deny(missing_docs)]                // All public items must be documented
#![deny(dead_code)]                   // Unused code is forbidden
#![deny(non_camel_case_types)]        // Types must follow CamelCase convention

// Additional strictness - Leave nothing unchecked
#![deny(unused_imports)]              // Unused imports are forbidden
#![deny(unused_variables)]            // Unused variables are forbidden
#![deny(unused_must_use)]             // Must handle Result and Option explicitly
#![deny(non_snake_case)]              // Variables and functions must be snake_case
#![deny(non_upper_case_globals)]      // Constants must be UPPER_CASE
#![deny(nonstandard_style)]           // Non-standard code style is forbidden
#![forbid(unsafe_op_in_unsafe_fn)]    // Unsafe ops in unsafe fns are forbidden

// Clippy lints (warnings only)
#![warn(clippy::all)]                 // All standard Clippy lints
#![warn(clippy::pedantic)]            // Very strict Clippy lints
#![warn(clippy::nursery)]             // Experimental lints
#![warn(clippy::unwrap_used)]         // unwrap() warning
#![warn(clippy::expect_used)]         // expect() warning
#![warn(clippy::panic)]               // panic!() warning
#![warn(clippy::todo)]                // TODO warning
#![warn(clippy::unimplemented)]       // unimplemented!() warning
#![warn(clippy::missing_const_for_fn)] // Force const when possible
#![warn(clippy::unwrap_in_result)]    // unwrap() in Result warning
#![warn(clippy::module_inception)]    // Module with same name as crate warning
#![warn(clippy::redundant_clone)]     // Useless clones warning
#![warn(clippy::shadow_unrelated)]    // Shadowing unrelated variables warning
#![warn(clippy::too_many_arguments)]  // Limit function arguments
#![warn(clippy::cognitive_complexity)] // Limit cognitive complexity

// Safety and robustness lints
#![deny(overflowing_literals)]        // Overflowing literals are forbidden
#![deny(arithmetic_overflow)]         // Arithmetic overflow is forbidden

// ============================================================================
// Crate Documentation
// ============================================================================

//! # Confplan
//!
//! A declarative, idempotent configuration planner for CLI-style network
//! devices.
//!
//! ## Overview
//!
//! Confplan computes the minimal command sequence needed to converge a
//! device's running configuration onto a desired candidate, allowing you to:
//!
//! - Describe intended changes as data in a YAML change spec
//! - Diff candidate lines against the running configuration, position- and
//!   hierarchy-aware
//! - Render a device-ready command list with section entry and exit handling
//! - Re-run the same spec safely: a satisfied spec plans zero commands
//!
//! ## Architecture
//!
//! The system is built around **declarative convergence**:
//!
//! 1. **Candidate**: The desired lines, from the spec or a source file
//! 2. **Running**: The device's current configuration, parsed into a tree
//! 3. **Planner**: Diffs the two and renders the commands that close the gap
//!
//! ## Modules
//!
//! - [`config`]: Parsing, the configuration tree, change specs, validation
//! - [`planner`]: Diff computation and command rendering
//! - [`cli`]: Command-line interface
//!
//! ## Example
//!
//! ```yaml
//! lines:
//!   - 10 permit ip 1.1.1.1 any log
//!   - 20 permit ip 2.2.2.2 any log
//! parents:
//!   - ip access-list test
//! before:
//!   - no ip access-list test
//! match: exact
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod cli;
pub mod config;
pub mod error;
pub mod planner;

// ============================================================================
// Re-exports
// ============================================================================

pub use cli::{Cli, Commands, OutputFormatter};
pub use config::{ChangeSpec, ConfigTree, MatchMode, ReplaceMode, SpecValidator};
pub use error::{ConfplanError, Result};
pub use planner::{CommandBlock, DiffEngine, Plan, Planner};
