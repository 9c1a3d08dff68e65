//! Daily-Excuse generates high-grade excuses for skipping the daily meeting.
//!
//! A grammar is a tree of three kinds of [`Node`]: literals, alternatives
//! (one child picked uniformly at random) and sequences (every child in
//! order). Plain data is turned into nodes with [`coerce`], trees are
//! expanded into a [`Writer`] and the writer renders one normalized line.
//!
//! # Example
//!
//! ```rust
//! use daily_excuse::{coerce, Node, Writer};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let greeting = Node::sequence([coerce("Hello"), coerce(["world", "Rust"])]);
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut out = Writer::new();
//! greeting.expand(&mut out, &mut rng);
//!
//! let text = out.render();
//! assert!(text == "Hello world" || text == "Hello Rust");
//! ```

pub mod excuse;
pub mod generator;
pub mod grammar;
pub mod parser;
pub mod utils;
pub mod writer;

pub use excuse::{sentence, sentence_from, sentence_with, Vocabulary};
pub use generator::{Generator, GeneratorConfig};
pub use grammar::{coerce, Node};
pub use parser::{load_vocabulary, parse_expression, parse_vocabulary};
pub use utils::{ExcuseError, Result};
pub use writer::Writer;
