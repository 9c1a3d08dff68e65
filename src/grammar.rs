use std::fmt;

use rand::Rng;
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::writer::Writer;

/// Token written after each child of a sequence
const SEPARATOR: &str = " ";

/// Marker heading the JSON form of an alternative
const ALTERNATIVE_MARKER: &str = "?";

/// A node of an excuse grammar.
///
/// Trees are built once and never mutated; randomness only decides which
/// branch of each [`Node::Alternative`] is taken during expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A fixed piece of text, emitted verbatim
    Literal(String),
    /// A uniform random choice among the children
    Alternative(Vec<Node>),
    /// The children expanded one after the other
    Sequence(Vec<Node>),
}

impl Node {
    /// Create a literal node holding `text` as is
    pub fn literal(text: impl Into<String>) -> Self {
        Node::Literal(text.into())
    }

    /// Create an alternative over the coerced children.
    ///
    /// # Panics
    ///
    /// Panics when `children` is empty.
    pub fn alternative<I, T>(children: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Node>,
    {
        let children: Vec<Node> = children.into_iter().map(Into::into).collect();
        assert!(!children.is_empty(), "an alternative needs at least one child");
        Node::Alternative(children)
    }

    /// Create a sequence over the coerced children.
    ///
    /// # Panics
    ///
    /// Panics when `children` is empty.
    pub fn sequence<I, T>(children: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Node>,
    {
        let children: Vec<Node> = children.into_iter().map(Into::into).collect();
        assert!(!children.is_empty(), "a sequence needs at least one child");
        Node::Sequence(children)
    }

    /// Recursively expand this node into `out`, drawing choices from `rng`.
    ///
    /// # Panics
    ///
    /// Panics when an alternative or a sequence without children is reached.
    pub fn expand<R: Rng + ?Sized>(&self, out: &mut Writer, rng: &mut R) {
        match self {
            Node::Literal(text) => out.write(text),
            Node::Alternative(children) => {
                assert!(!children.is_empty(), "cannot expand an empty alternative");
                let idx = rng.gen_range(0..children.len());
                children[idx].expand(out, rng);
            }
            Node::Sequence(children) => {
                assert!(!children.is_empty(), "cannot expand an empty sequence");
                for child in children {
                    child.expand(out, rng);
                    out.write(SEPARATOR);
                }
            }
        }
    }

    /// Number of distinct outcomes this node can produce
    pub fn count(&self) -> u64 {
        match self {
            Node::Literal(_) => 1,
            Node::Alternative(children) => children
                .iter()
                .fold(0u64, |total, child| total.saturating_add(child.count())),
            Node::Sequence(children) => children
                .iter()
                .fold(1u64, |total, child| total.saturating_mul(child.count())),
        }
    }

    /// Length in bytes of the longest concatenation of literals this node can yield
    pub fn max_length(&self) -> usize {
        match self {
            Node::Literal(text) => text.len(),
            Node::Alternative(children) => {
                children.iter().map(Node::max_length).max().unwrap_or(0)
            }
            Node::Sequence(children) => children.iter().map(Node::max_length).sum(),
        }
    }

    /// Serialize the tree as JSON
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Turn plain data into a node.
///
/// Strings become literals, collections become alternatives over their
/// coerced elements and nodes are passed through.
pub fn coerce(value: impl Into<Node>) -> Node {
    value.into()
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::literal(text)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Literal(text)
    }
}

impl<T: Into<Node>> From<Vec<T>> for Node {
    fn from(children: Vec<T>) -> Self {
        Node::alternative(children)
    }
}

impl<T: Into<Node>, const N: usize> From<[T; N]> for Node {
    fn from(children: [T; N]) -> Self {
        Node::alternative(children)
    }
}

/// Writes the compact notation understood by [`crate::parser::parse_expression`].
///
/// `<`, `|`, `>` and `\` inside literals are escaped with a backslash.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Literal(text) => {
                for c in text.chars() {
                    if matches!(c, '<' | '|' | '>' | '\\') {
                        f.write_str("\\")?;
                    }
                    write!(f, "{}", c)?;
                }
                Ok(())
            }
            Node::Alternative(children) => {
                f.write_str("<")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str("|")?;
                    }
                    write!(f, "{}", child)?;
                }
                f.write_str(">")
            }
            Node::Sequence(children) => {
                for child in children {
                    write!(f, "{}", child)?;
                }
                Ok(())
            }
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Node::Literal(text) => serializer.serialize_str(text),
            Node::Alternative(children) => {
                let mut seq = serializer.serialize_seq(Some(children.len() + 1))?;
                seq.serialize_element(ALTERNATIVE_MARKER)?;
                for child in children {
                    seq.serialize_element(child)?;
                }
                seq.end()
            }
            Node::Sequence(children) => {
                let mut seq = serializer.serialize_seq(Some(children.len()))?;
                for child in children {
                    seq.serialize_element(child)?;
                }
                seq.end()
            }
        }
    }
}
