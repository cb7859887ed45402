//! The hierarchical configuration model.
//!
//! A [`ConfigTree`] is an ordered forest of [`ConfigLine`] nodes representing
//! one configuration (candidate or running). It is built once, from parsed
//! text or literal command lists, and treated as immutable for the duration
//! of any diff over it.

use std::path::Path;
use tracing::debug;

use crate::error::{ConfplanError, Result};

use super::line::ConfigLine;
use super::parser::LineParser;

/// An ordered forest of configuration commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigTree {
    /// Top-level commands in insertion order.
    roots: Vec<ConfigLine>,
}

impl ConfigTree {
    /// Creates an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self { roots: Vec::new() }
    }

    /// Builds a tree from raw indented text using the default parser.
    ///
    /// # Errors
    ///
    /// Returns an error if the text has unresolvable indentation.
    pub fn from_str(text: &str) -> Result<Self> {
        let mut tree = Self::new();
        tree.load_str(text)?;
        Ok(tree)
    }

    /// Inserts `lines` as children of the node at `parents`.
    ///
    /// Intermediate parent nodes are created if absent. A line whose text
    /// duplicates an existing sibling replaces that sibling's position
    /// (last-write-wins); the surviving node keeps any children it had.
    pub fn add<S: AsRef<str>>(&mut self, lines: &[S], parents: &[String]) {
        for line in lines {
            let text = line.as_ref().trim();
            if text.is_empty() {
                continue;
            }
            Self::insert(&mut self.roots, text, parents, 0);
        }
    }

    /// Parses raw indented text and folds it into this tree.
    ///
    /// # Errors
    ///
    /// Propagates parse errors from the line parser.
    pub fn load_str(&mut self, text: &str) -> Result<()> {
        self.load_str_with(text, &LineParser::new())
    }

    /// Like [`Self::load_str`] but with an explicit parser policy.
    ///
    /// # Errors
    ///
    /// Propagates parse errors from the line parser.
    pub fn load_str_with(&mut self, text: &str, parser: &LineParser) -> Result<()> {
        let parsed = parser.parse(text)?;
        debug!("Loaded {} configuration lines", parsed.len());

        // Ancestor chain of the most recently inserted line.
        let mut path: Vec<String> = Vec::new();
        for line in parsed {
            path.truncate(line.level);
            Self::insert(&mut self.roots, &line.text, &path, 0);
            path.push(line.text);
        }
        Ok(())
    }

    /// Builds a tree from a configuration file on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(ConfplanError::Io)?;
        Self::from_str(&content)
    }

    /// Returns the ordered lines directly under the given parent path.
    ///
    /// An absent path yields an empty slice: the section simply does not
    /// exist in this configuration.
    #[must_use]
    pub fn get_children(&self, parents: &[String]) -> &[ConfigLine] {
        let mut current = &self.roots;
        for parent in parents {
            match current.iter().find(|n| n.text == *parent) {
                Some(node) => current = &node.children,
                None => return &[],
            }
        }
        current
    }

    /// Exact text-plus-path membership test.
    #[must_use]
    pub fn contains(&self, text: &str, parents: &[String]) -> bool {
        self.get_children(parents).iter().any(|n| n.text == text)
    }

    /// Depth-first pre-order linearization of the whole tree.
    #[must_use]
    pub fn lines(&self) -> Vec<&ConfigLine> {
        let mut out = Vec::new();
        Self::collect(&self.roots, &mut out);
        out
    }

    /// Top-level commands in insertion order.
    #[must_use]
    pub fn roots(&self) -> &[ConfigLine] {
        &self.roots
    }

    /// Returns true if the tree holds no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of commands in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines().len()
    }

    fn collect<'a>(nodes: &'a [ConfigLine], out: &mut Vec<&'a ConfigLine>) {
        for node in nodes {
            out.push(node);
            Self::collect(&node.children, out);
        }
    }

    /// Descends to `parents[depth..]`, creating intermediates, then appends
    /// `text` among the destination siblings with last-write-wins position.
    fn insert(siblings: &mut Vec<ConfigLine>, text: &str, parents: &[String], depth: usize) {
        if depth == parents.len() {
            let mut node = ConfigLine::new(text, parents.to_vec());
            if let Some(pos) = siblings.iter().position(|n| n.text == text) {
                let existing = siblings.remove(pos);
                node.children = existing.children;
            }
            siblings.push(node);
            return;
        }

        let parent_text = &parents[depth];
        let pos = match siblings.iter().position(|n| n.text == *parent_text) {
            Some(pos) => pos,
            None => {
                siblings.push(ConfigLine::new(parent_text, parents[..depth].to_vec()));
                siblings.len() - 1
            }
        };
        Self::insert(&mut siblings[pos].children, text, parents, depth + 1);
    }
}

impl std::fmt::Display for ConfigTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}{}", " ".repeat(line.indent()), line.text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_add_top_level() {
        let mut tree = ConfigTree::new();
        tree.add(&["hostname sw1", "ip routing"], &[]);

        assert_eq!(tree.roots().len(), 2);
        assert!(tree.contains("hostname sw1", &[]));
        assert!(!tree.contains("hostname sw2", &[]));
    }

    #[test]
    fn test_add_creates_intermediate_parents() {
        let mut tree = ConfigTree::new();
        let parents = strings(&["router bgp 65000", "neighbor 10.0.0.1"]);
        tree.add(&["remote-as 65001"], &parents);

        assert_eq!(tree.roots().len(), 1);
        assert_eq!(tree.roots()[0].text, "router bgp 65000");
        assert!(tree.contains("remote-as 65001", &parents));

        let children = tree.get_children(&parents);
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].parents, parents);
    }

    #[test]
    fn test_duplicate_sibling_moves_to_end() {
        let mut tree = ConfigTree::new();
        tree.add(&["a", "b", "c"], &[]);
        tree.add(&["a"], &[]);

        let texts: Vec<&str> = tree.roots().iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_duplicate_parent_keeps_children() {
        let mut tree = ConfigTree::new();
        let parents = strings(&["interface Te1/0/1"]);
        tree.add(&["no shutdown"], &parents);
        tree.add(&["interface Te1/0/1"], &[]);

        assert!(tree.contains("no shutdown", &parents));
    }

    #[test]
    fn test_get_children_absent_path_is_empty() {
        let tree = ConfigTree::from_str("hostname sw1\n").unwrap();
        assert!(tree.get_children(&strings(&["interface Te1/0/1"])).is_empty());
    }

    #[test]
    fn test_load_str_builds_hierarchy() {
        let config = "\
interface Te1/0/1
 switchport mode trunk
 no shutdown
interface Te1/0/2
 shutdown
";
        let tree = ConfigTree::from_str(config).unwrap();

        assert_eq!(tree.roots().len(), 2);
        let te1 = strings(&["interface Te1/0/1"]);
        assert!(tree.contains("switchport mode trunk", &te1));
        assert!(tree.contains("no shutdown", &te1));
        assert!(tree.contains("shutdown", &strings(&["interface Te1/0/2"])));
    }

    #[test]
    fn test_load_str_dedent_returns_to_top_level() {
        let config = "interface Te1/0/1\n no shutdown\nhostname sw1\n";
        let tree = ConfigTree::from_str(config).unwrap();

        assert!(tree.contains("hostname sw1", &[]));
        assert_eq!(tree.roots().len(), 2);
    }

    #[test]
    fn test_linearization_is_pre_order() {
        let config = "a\n a1\n a2\nb\n b1\n";
        let tree = ConfigTree::from_str(config).unwrap();

        let texts: Vec<&str> = tree.lines().iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "a1", "a2", "b", "b1"]);
        assert_eq!(tree.len(), 5);
    }

    #[test]
    fn test_parents_invariant_matches_root_path() {
        let config = "router bgp 65000\n neighbor 10.0.0.1\n  remote-as 65001\n";
        let tree = ConfigTree::from_str(config).unwrap();

        for line in tree.lines() {
            let children = tree.get_children(&line.parents);
            assert!(children.iter().any(|c| c.text == line.text));
        }
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "hostname sw1").unwrap();
        writeln!(file, "interface Te1/0/1").unwrap();
        writeln!(file, " no shutdown").unwrap();

        let tree = ConfigTree::load_file(file.path()).unwrap();
        assert!(tree.contains("hostname sw1", &[]));
        assert!(tree.contains("no shutdown", &strings(&["interface Te1/0/1"])));
    }

    #[test]
    fn test_empty_tree() {
        let tree = ConfigTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert!(tree.lines().is_empty());
    }
}
