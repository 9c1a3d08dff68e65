//! The excuse grammar: vocabulary and sentence templates.

use clap::ValueEnum;

use crate::grammar::{coerce, Node};
use crate::parser::parse_vocabulary;
use crate::utils::Result;

/// Ways of announcing the absence
pub const STATEMENTS: [&str; 4] = [
    "I cannot attend the daily meeting",
    "going to miss the meeting",
    "gonna miss the meeting",
    "I won't be able to attend the daily meeting",
];

/// Reasons, written to fit after a connective
pub const CAUSES: [&str; 12] = [
    "feeling sick this morning",
    "woke up with a pretty bad headache",
    "not feeling great",
    "I have a dog grooming errand",
    "my wife is stuck in her car",
    "I had a hard time last night",
    "I have to file for a new ID card",
    "I've lost my keys in the river",
    "someone stole my catalytic exhaust pipe",
    "my colonoscopy won't be done yet",
    "my prostate exam doesnt happen as expected",
    "my nan slipped on a dung",
];

/// Connectives placed before a cause
pub const CAUSAL_CONJUNCTIONS: [&str; 3] = ["because", "'cos", "since"];

/// Connectives placed before a consequence
pub const CONSEQUENTIAL_CONJUNCTIONS: [&str; 4] =
    ["thus", "then", "as a consequence", "therefore"];

/// Ways of announcing a day out of office
pub const OOO_STATEMENTS: [&str; 4] = [
    "it's likely I will be OOO today",
    "I'm going to be OOO",
    "I'm forced to stay OOO today",
    "I can't show up today",
];

/// Source of the extended causes, in the vocabulary notation
pub const EXTENDED_CAUSES: &str = include_str!("../data/causes.txt");

/// Source of the out-of-office causes, in the vocabulary notation
pub const OOO_CAUSES: &str = include_str!("../data/ooo.txt");

/// Built-in excuse sets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Vocabulary {
    /// Skipping the meeting, short historical list of causes
    #[default]
    Classic,
    /// Skipping the meeting, longer list shipped in `data/causes.txt`
    Extended,
    /// A whole day out of office, causes shipped in `data/ooo.txt`
    Ooo,
}

impl Vocabulary {
    /// Build the statement node of this vocabulary
    pub fn statement(self) -> Node {
        match self {
            Vocabulary::Classic | Vocabulary::Extended => statement(),
            Vocabulary::Ooo => ooo_statement(),
        }
    }

    /// Build the cause node of this vocabulary
    pub fn cause(self) -> Result<Node> {
        match self {
            Vocabulary::Classic => Ok(cause()),
            Vocabulary::Extended => extended_cause(),
            Vocabulary::Ooo => ooo_cause(),
        }
    }

    /// Build the root grammar of this vocabulary
    pub fn sentence(self) -> Result<Node> {
        Ok(sentence_from(self.statement(), self.cause()?))
    }
}

/// Alternative over [`STATEMENTS`]
pub fn statement() -> Node {
    coerce(STATEMENTS)
}

/// Alternative over [`OOO_STATEMENTS`]
pub fn ooo_statement() -> Node {
    coerce(OOO_STATEMENTS)
}

/// Alternative over [`CAUSES`]
pub fn cause() -> Node {
    coerce(CAUSES)
}

/// Parse the embedded extended list of causes
pub fn extended_cause() -> Result<Node> {
    parse_vocabulary(EXTENDED_CAUSES)
}

/// Parse the embedded out-of-office causes
pub fn ooo_cause() -> Result<Node> {
    parse_vocabulary(OOO_CAUSES)
}

/// Alternative over [`CAUSAL_CONJUNCTIONS`]
pub fn conjunction_cause() -> Node {
    coerce(CAUSAL_CONJUNCTIONS)
}

/// Alternative over [`CONSEQUENTIAL_CONJUNCTIONS`]
pub fn conjunction_consequence() -> Node {
    coerce(CONSEQUENTIAL_CONJUNCTIONS)
}

/// The root of the classic grammar
pub fn sentence() -> Node {
    sentence_with(cause())
}

/// The root grammar built around a custom set of causes.
///
/// Either the statement comes first and the cause follows a causal
/// connective, or the cause comes first and the statement follows a
/// consequential one.
pub fn sentence_with(cause: Node) -> Node {
    sentence_from(statement(), cause)
}

/// The root grammar over any statement and cause
pub fn sentence_from(statement: Node, cause: Node) -> Node {
    Node::alternative([
        Node::sequence([statement.clone(), conjunction_cause(), cause.clone()]),
        Node::sequence([cause, conjunction_consequence(), statement]),
    ])
}
