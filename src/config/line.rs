//! A single configuration command within the hierarchy.

use serde::{Deserialize, Serialize};

/// One configuration command plus the section context it lives in.
///
/// A `ConfigLine` owns its children exclusively; the tree is acyclic by
/// construction because children are only ever attached below their declared
/// parent path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigLine {
    /// The literal command text, trimmed of surrounding whitespace.
    pub text: String,
    /// Ordered ancestor command texts from root to immediate parent.
    pub parents: Vec<String>,
    /// Child commands owned by this node, in insertion order.
    #[serde(default)]
    pub children: Vec<ConfigLine>,
}

impl ConfigLine {
    /// Creates a leaf line under the given parent path.
    #[must_use]
    pub fn new(text: impl Into<String>, parents: Vec<String>) -> Self {
        Self {
            text: text.into(),
            parents,
            children: Vec::new(),
        }
    }

    /// Structural depth of this line, inferred from its parent chain.
    ///
    /// Depth is not a raw whitespace count: lines added from literal command
    /// lists carry no indentation at all.
    #[must_use]
    pub fn indent(&self) -> usize {
        self.parents.len()
    }

    /// The parent path of this line's own children.
    #[must_use]
    pub fn child_path(&self) -> Vec<String> {
        let mut path = self.parents.clone();
        path.push(self.text.clone());
        path
    }

    /// Finds a direct child by command text.
    #[must_use]
    pub fn find_child(&self, text: &str) -> Option<&ConfigLine> {
        self.children.iter().find(|c| c.text == text)
    }
}

impl std::fmt::Display for ConfigLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_follows_parent_chain() {
        let top = ConfigLine::new("hostname sw1", vec![]);
        assert_eq!(top.indent(), 0);

        let nested = ConfigLine::new(
            "switchport mode trunk",
            vec![String::from("interface Te1/0/1")],
        );
        assert_eq!(nested.indent(), 1);
    }

    #[test]
    fn test_child_path_appends_own_text() {
        let line = ConfigLine::new("neighbor 10.0.0.1", vec![String::from("router bgp 65000")]);
        assert_eq!(
            line.child_path(),
            vec![
                String::from("router bgp 65000"),
                String::from("neighbor 10.0.0.1")
            ]
        );
    }

    #[test]
    fn test_find_child() {
        let mut parent = ConfigLine::new("interface Te1/0/1", vec![]);
        parent.children.push(ConfigLine::new(
            "no shutdown",
            vec![String::from("interface Te1/0/1")],
        ));

        assert!(parent.find_child("no shutdown").is_some());
        assert!(parent.find_child("shutdown").is_none());
    }
}
