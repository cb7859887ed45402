//! Output formatting for CLI commands.
//!
//! This module provides formatting utilities for displaying plans and
//! validation results in various formats.

use colored::Colorize;
use std::fmt::Write;
use tabled::{Table, Tabled};

use crate::config::ValidationResult;
use crate::planner::{BlockDirective, Plan};

use super::commands::OutputFormat;

/// Output formatter for CLI.
#[derive(Debug)]
pub struct OutputFormatter {
    /// Output format.
    format: OutputFormat,
}

/// Command block row for table display.
#[derive(Tabled)]
struct BlockRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Section")]
    section: String,
    #[tabled(rename = "Mode")]
    mode: String,
    #[tabled(rename = "Lines")]
    lines: usize,
}

impl OutputFormatter {
    /// Creates a new output formatter.
    #[must_use]
    pub const fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a plan for display.
    #[must_use]
    pub fn format_plan(&self, plan: &Plan) -> String {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(plan).unwrap_or_default(),
            OutputFormat::Text => Self::format_plan_text(plan),
        }
    }

    /// Formats a plan as text.
    fn format_plan_text(plan: &Plan) -> String {
        if !plan.changed {
            return format!(
                "{} No changes required - configuration is converged.\n",
                "✓".green()
            );
        }

        let mut output = String::new();

        let _ = write!(output, "\nChange Plan\n");
        let _ = write!(output, "   Fingerprint: {}\n\n", plan.short_fingerprint());

        let rows: Vec<BlockRow> = plan
            .blocks
            .iter()
            .enumerate()
            .map(|(i, b)| BlockRow {
                index: i + 1,
                section: if b.parents.is_empty() {
                    String::from("(top level)")
                } else {
                    b.parents.join(" / ")
                },
                mode: Self::format_directive(b.directive),
                lines: b.lines.len(),
            })
            .collect();

        if !rows.is_empty() {
            let table = Table::new(rows).to_string();
            output.push_str(&table);
            output.push('\n');
        }

        output.push_str("\nCommands:\n");
        for command in &plan.commands {
            let _ = writeln!(output, "   {command}");
        }

        let _ = write!(
            output,
            "\nPlan: {} command(s) across {} block(s)\n",
            plan.commands.len().to_string().green(),
            plan.blocks.len()
        );

        output
    }

    /// Formats a validation result for display.
    #[must_use]
    pub fn format_validation(&self, result: &ValidationResult, show_warnings: bool) -> String {
        match self.format {
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "valid": result.is_valid(),
                    "errors": result.errors.iter().map(ToString::to_string).collect::<Vec<_>>(),
                    "warnings": result.warnings,
                });
                serde_json::to_string_pretty(&json).unwrap_or_default()
            }
            OutputFormat::Text => {
                let mut output = String::new();

                if result.is_valid() {
                    let _ = writeln!(output, "{} Change spec is valid.", "✓".green());
                } else {
                    let _ = writeln!(output, "{} Change spec is invalid:", "✗".red());
                    for error in &result.errors {
                        let _ = writeln!(output, "   - {error}");
                    }
                }

                if show_warnings && !result.warnings.is_empty() {
                    let _ = writeln!(output, "\n{} Warnings:", "⚠".yellow());
                    for warning in &result.warnings {
                        let _ = writeln!(output, "   - {warning}");
                    }
                }

                output
            }
        }
    }

    /// Formats a block directive with color.
    fn format_directive(directive: BlockDirective) -> String {
        match directive {
            BlockDirective::Append => "+append".green().to_string(),
            BlockDirective::ReplaceBlock => "~replace-block".yellow().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::CommandBlock;
    use chrono::Utc;

    fn sample_plan(changed: bool) -> Plan {
        Plan {
            created_at: Utc::now(),
            fingerprint: String::from("abcdef1234567890"),
            changed,
            commands: if changed {
                vec![
                    String::from("interface Te1/0/1"),
                    String::from("no shutdown"),
                    String::from("exit"),
                ]
            } else {
                Vec::new()
            },
            blocks: if changed {
                vec![CommandBlock {
                    parents: vec![String::from("interface Te1/0/1")],
                    lines: vec![String::from("no shutdown")],
                    directive: BlockDirective::Append,
                }]
            } else {
                Vec::new()
            },
        }
    }

    #[test]
    fn test_noop_plan_text() {
        colored::control::set_override(false);
        let text = OutputFormatter::new(OutputFormat::Text).format_plan(&sample_plan(false));
        assert!(text.contains("No changes required"));
    }

    #[test]
    fn test_changed_plan_text_lists_commands() {
        colored::control::set_override(false);
        let text = OutputFormatter::new(OutputFormat::Text).format_plan(&sample_plan(true));
        assert!(text.contains("no shutdown"));
        assert!(text.contains("Fingerprint: abcdef12"));
    }

    #[test]
    fn test_plan_json_round_trips() {
        let json = OutputFormatter::new(OutputFormat::Json).format_plan(&sample_plan(true));
        let parsed: Plan = serde_json::from_str(&json).unwrap();
        assert!(parsed.changed);
        assert_eq!(parsed.commands.len(), 3);
    }

    #[test]
    fn test_validation_text() {
        colored::control::set_override(false);
        let result = ValidationResult::default();
        let text =
            OutputFormatter::new(OutputFormat::Text).format_validation(&result, false);
        assert!(text.contains("valid"));
    }
}
