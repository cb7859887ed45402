//! Line parser for raw indented configuration text.
//!
//! Device configurations in the OS6/IOS family use a simple block indent
//! syntax: a command indented one step further than its predecessor belongs
//! to that predecessor's section. This module turns raw text into ordered
//! `(text, level)` records; the tree builder in [`super::tree`] assembles
//! them into a hierarchy.

use tracing::debug;

use crate::error::ParseError;

/// A single parsed configuration line with its resolved structural level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// The command text, trimmed of surrounding whitespace.
    pub text: String,
    /// Structural depth (0 = top level).
    pub level: usize,
    /// 1-based line number within the source text.
    pub number: usize,
}

/// Parser for indentation-structured configuration text.
#[derive(Debug, Clone, Copy)]
pub struct LineParser {
    /// Leading space-equivalents per structural level.
    indent: usize,
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LineParser {
    /// Default indent width: one space per level, the OS6 block convention.
    pub const DEFAULT_INDENT: usize = 1;

    /// Creates a parser with the default indent width.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            indent: Self::DEFAULT_INDENT,
        }
    }

    /// Sets the indent width (space-equivalents per level).
    ///
    /// A width of zero is treated as one.
    #[must_use]
    pub const fn with_indent(mut self, indent: usize) -> Self {
        self.indent = if indent == 0 { 1 } else { indent };
        self
    }

    /// Parses raw configuration text into ordered lines with levels.
    ///
    /// Blank lines and comment lines (`!` or `#`) are dropped. A line
    /// indented deeper than its predecessor's level plus one attaches at the
    /// nearest valid ancestor.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::OrphanIndent`] if the first content line is
    /// already indented: its level refers to an ancestor context that does
    /// not exist.
    pub fn parse(&self, text: &str) -> Result<Vec<ParsedLine>, ParseError> {
        let mut parsed = Vec::new();
        // Depth of the most recently accepted line plus one, i.e. the
        // deepest level at which the next line may legally sit.
        let mut open_depth = 0usize;

        for (index, raw) in text.lines().enumerate() {
            let number = index + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('!') || trimmed.starts_with('#') {
                continue;
            }

            let mut level = self.leading_units(raw) / self.indent;
            if level > open_depth {
                if open_depth == 0 && parsed.is_empty() {
                    return Err(ParseError::OrphanIndent {
                        line: trimmed.to_string(),
                        number,
                    });
                }
                debug!(
                    "Line {number} over-indented (level {level}), attaching at level {open_depth}"
                );
                level = open_depth;
            }

            parsed.push(ParsedLine {
                text: trimmed.to_string(),
                level,
                number,
            });
            open_depth = level + 1;
        }

        Ok(parsed)
    }

    /// Counts leading space-equivalents; a tab counts as one.
    fn leading_units(&self, raw: &str) -> usize {
        raw.chars().take_while(|c| *c == ' ' || *c == '\t').count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flat_config() {
        let parser = LineParser::new();
        let lines = parser.parse("hostname sw1\nip routing\n").unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "hostname sw1");
        assert_eq!(lines[0].level, 0);
        assert_eq!(lines[1].level, 0);
    }

    #[test]
    fn test_parse_nested_sections() {
        let config = "interface Te1/0/1\n switchport mode trunk\n no shutdown\nhostname sw1\n";
        let lines = LineParser::new().parse(config).unwrap();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].level, 0);
        assert_eq!(lines[1].level, 1);
        assert_eq!(lines[2].level, 1);
        assert_eq!(lines[3].level, 0);
    }

    #[test]
    fn test_blank_and_comment_lines_dropped() {
        let config = "! running config\nhostname sw1\n\n# note\nip routing\n";
        let lines = LineParser::new().parse(config).unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "hostname sw1");
        assert_eq!(lines[1].text, "ip routing");
    }

    #[test]
    fn test_first_line_indented_is_error() {
        let result = LineParser::new().parse(" switchport mode trunk\n");
        assert!(matches!(
            result,
            Err(ParseError::OrphanIndent { number: 1, .. })
        ));
    }

    #[test]
    fn test_comment_before_indented_first_line_still_errors() {
        let result = LineParser::new().parse("! header\n no shutdown\n");
        assert!(matches!(
            result,
            Err(ParseError::OrphanIndent { number: 2, .. })
        ));
    }

    #[test]
    fn test_over_indent_attaches_to_nearest_ancestor() {
        let config = "interface Te1/0/1\n    description uplink\n";
        let lines = LineParser::new().parse(config).unwrap();

        // Jumped four levels deep; only level 1 has an ancestor.
        assert_eq!(lines[1].level, 1);
    }

    #[test]
    fn test_tabs_count_as_one_unit() {
        let config = "router bgp 65000\n\tneighbor 10.0.0.1\n";
        let lines = LineParser::new().parse(config).unwrap();
        assert_eq!(lines[1].level, 1);
    }

    #[test]
    fn test_wider_indent_policy() {
        let config = "interface Te1/0/1\n  no shutdown\n";
        let lines = LineParser::new().with_indent(2).parse(config).unwrap();
        assert_eq!(lines[1].level, 1);
    }

    #[test]
    fn test_line_numbers_are_one_based() {
        let config = "\nhostname sw1\n";
        let lines = LineParser::new().parse(config).unwrap();
        assert_eq!(lines[0].number, 2);
    }
}
