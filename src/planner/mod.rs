//! Plan computation: diffing candidate against running configuration and
//! rendering the result into device-ready commands.

mod diff;
mod plan;
mod render;

pub use diff::{BlockDirective, CommandBlock, DiffEngine};
pub use plan::{Plan, Planner};
pub use render::CommandRenderer;
