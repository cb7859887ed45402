//! Rendering command blocks into a flat, device-ready command list.
//!
//! Blocks carry a parent path but no section-entry or section-exit commands
//! of their own. The renderer threads a cursor through the block list,
//! entering and leaving sections exactly as a CLI session would, so the
//! output can be pasted into a terminal verbatim.

use tracing::debug;

use super::diff::CommandBlock;

/// Command emitted to leave a configuration section.
const EXIT_COMMAND: &str = "exit";

/// Renderer that flattens command blocks into an executable command list.
#[derive(Debug, Default)]
pub struct CommandRenderer {
    /// The section path currently open, outermost first.
    open: Vec<String>,
    /// Rendered commands so far.
    commands: Vec<String>,
    /// Last emitted command and the depth it was emitted at. A section
    /// command that was just emitted as a body line counts as already
    /// entered, so descending into it must not re-emit it.
    last: Option<(String, usize)>,
}

impl CommandRenderer {
    /// Creates a new renderer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders a block list into a flat command sequence.
    ///
    /// Every section entered is closed with an `exit` before the cursor
    /// moves elsewhere, and all remaining sections are closed at the end.
    #[must_use]
    pub fn render(mut self, blocks: &[CommandBlock]) -> Vec<String> {
        for block in blocks {
            self.move_to(&block.parents);
            for line in &block.lines {
                self.emit(line);
            }
        }
        self.close_to(0);

        debug!("Rendered {} command(s)", self.commands.len());
        self.commands
    }

    /// Repositions the cursor onto `target`, exiting and entering sections
    /// as needed.
    fn move_to(&mut self, target: &[String]) {
        let common = self
            .open
            .iter()
            .zip(target)
            .take_while(|(open, want)| open == want)
            .count();
        self.close_to(common);

        for section in &target[common..] {
            let depth = self.open.len();
            let already_entered = self
                .last
                .as_ref()
                .is_some_and(|(text, at)| text == section && *at == depth);
            if !already_entered {
                self.commands.push(section.clone());
            }
            self.open.push(section.clone());
            self.last = None;
        }
    }

    /// Emits `exit` commands until only `depth` sections remain open.
    fn close_to(&mut self, depth: usize) {
        while self.open.len() > depth {
            self.commands.push(String::from(EXIT_COMMAND));
            self.open.pop();
            self.last = None;
        }
    }

    fn emit(&mut self, line: &str) {
        self.commands.push(line.to_string());
        self.last = Some((line.to_string(), self.open.len()));
    }
}
