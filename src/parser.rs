//! Parser for the compact vocabulary notation.
//!
//! - plain text is a literal: `I have a dog grooming errand`
//! - `<a|b|c>` is an alternative, and alternatives nest: `<a|<b|c>>`
//! - pieces written next to each other form a sequence: `my <wife|nan> slipped`
//! - `\` takes the next character literally: `I \<3 my cat`
//!
//! A sequence or an alternative holding a single piece collapses into that
//! piece, and empty pieces are dropped.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::grammar::Node;
use crate::utils::{ExcuseError, Result};

struct ExpressionParser {
    chars: Vec<char>,
    pos: usize,
}

impl ExpressionParser {
    fn new(encoded: &str) -> Self {
        ExpressionParser {
            chars: encoded.chars().collect(),
            pos: 0,
        }
    }

    /// Parse pieces up to the next `|`, `>` or the end of input, leaving the stop char unread
    fn parse_sequence(&mut self) -> Result<Option<Node>> {
        let mut parts = Vec::new();
        let mut text = String::new();

        while let Some(&c) = self.chars.get(self.pos) {
            match c {
                '<' => {
                    flush_text(&mut text, &mut parts);
                    self.pos += 1;
                    if let Some(choice) = self.parse_alternative()? {
                        parts.push(choice);
                    }
                }
                '\\' => {
                    let Some(&escaped) = self.chars.get(self.pos + 1) else {
                        return Err(ExcuseError::parse(
                            1,
                            format!("dangling '\\' at column {}", self.pos + 1),
                        ));
                    };
                    text.push(escaped);
                    self.pos += 2;
                }
                '|' | '>' => break,
                _ => {
                    text.push(c);
                    self.pos += 1;
                }
            }
        }
        flush_text(&mut text, &mut parts);

        Ok(collapse(parts, Node::Sequence))
    }

    /// Parse the body of an alternative, the opening `<` being already consumed
    fn parse_alternative(&mut self) -> Result<Option<Node>> {
        let opened_at = self.pos;
        let mut parts = Vec::new();

        loop {
            if let Some(part) = self.parse_sequence()? {
                parts.push(part);
            }
            match self.chars.get(self.pos) {
                Some('|') => self.pos += 1,
                Some('>') => {
                    self.pos += 1;
                    break;
                }
                _ => {
                    return Err(ExcuseError::parse(
                        1,
                        format!("unclosed '<' at column {}", opened_at),
                    ));
                }
            }
        }

        Ok(collapse(parts, Node::Alternative))
    }
}

fn flush_text(text: &mut String, parts: &mut Vec<Node>) {
    if !text.is_empty() {
        parts.push(Node::Literal(std::mem::take(text)));
    }
}

fn collapse(mut parts: Vec<Node>, build: fn(Vec<Node>) -> Node) -> Option<Node> {
    match parts.len() {
        0 => None,
        1 => parts.pop(),
        _ => Some(build(parts)),
    }
}

/// Parse a single expression.
///
/// An expression that collapses to nothing, such as `""` or `"<>"`, yields an
/// empty literal.
pub fn parse_expression(encoded: &str) -> Result<Node> {
    let mut parser = ExpressionParser::new(encoded);
    let node = parser.parse_sequence()?;

    if let Some(&c) = parser.chars.get(parser.pos) {
        return Err(ExcuseError::parse(
            1,
            format!("unexpected '{}' at column {}", c, parser.pos + 1),
        ));
    }

    Ok(node.unwrap_or_else(|| Node::literal("")))
}

/// Number of `<` left open in `text`, escaped characters aside
fn open_alternatives(text: &str) -> isize {
    let mut depth = 0;
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '<' => depth += 1,
            '>' => depth -= 1,
            _ => {}
        }
    }
    depth
}

/// Parse a vocabulary, one alternative per line.
///
/// Lines are trimmed; blank lines and lines starting with `#` are skipped.
/// While a `<` is left open the following lines are glued to the entry, so a
/// long alternative can be written one part per line.
pub fn parse_vocabulary(text: &str) -> Result<Node> {
    let mut entries = Vec::new();
    let mut pending = String::new();
    let mut first_line = 0;

    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if pending.is_empty() {
            first_line = idx + 1;
        }
        pending.push_str(line);
        if open_alternatives(&pending) > 0 {
            continue;
        }

        let entry = parse_expression(&pending).map_err(|e| e.at_line(first_line))?;
        entries.push(entry);
        pending.clear();
    }

    if !pending.is_empty() {
        return Err(ExcuseError::parse(
            first_line,
            "'<' still open at end of input",
        ));
    }

    if entries.is_empty() {
        return Err(ExcuseError::EmptyVocabulary(
            "no entry found".to_string(),
        ));
    }

    Ok(Node::Alternative(entries))
}

/// Read and parse a vocabulary file
pub fn load_vocabulary<P: AsRef<Path>>(path: P) -> Result<Node> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;

    let node = parse_vocabulary(&text).map_err(|e| match e {
        ExcuseError::EmptyVocabulary(_) => {
            ExcuseError::EmptyVocabulary(format!("no entry found in {}", path.display()))
        }
        other => other,
    })?;

    debug!(path = %path.display(), outcomes = node.count(), "loaded vocabulary");
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::coerce;

    fn assert_recoded(source: &str, encoded: &str) {
        let node = parse_expression(source).unwrap();
        assert_eq!(node.to_string(), encoded, "source: {:?}", source);
    }

    #[test]
    fn test_plain_text_is_a_literal() {
        let node = parse_expression("plop mmlm mxls").unwrap();
        assert_eq!(node, Node::literal("plop mmlm mxls"));
    }

    #[test]
    fn test_simple_choice() {
        let node = parse_expression("<plop|mmlm|mxls>").unwrap();
        assert_eq!(node, coerce(["plop", "mmlm", "mxls"]));
        assert_recoded("<plop|mmlm|mxls>", "<plop|mmlm|mxls>");
    }

    #[test]
    fn test_degenerate_choices_collapse() {
        assert_recoded("<>", "");
        assert_recoded("< >", " ");
        assert_recoded("<plop|>", "plop");
        assert_recoded("<plop| >", "<plop| >");
    }

    #[test]
    fn test_sequence_with_nested_choice() {
        let node = parse_expression("my <wife|<nan|dog>> slipped").unwrap();
        assert_eq!(
            node,
            Node::Sequence(vec![
                Node::literal("my "),
                Node::Alternative(vec![
                    Node::literal("wife"),
                    Node::Alternative(vec![Node::literal("nan"), Node::literal("dog")]),
                ]),
                Node::literal(" slipped"),
            ])
        );
        assert_eq!(node.count(), 3);
    }

    #[test]
    fn test_unbalanced_input_is_rejected() {
        for source in ["plop>", "a|b", "<plop", "<a|<b>"] {
            let err = parse_expression(source).unwrap_err();
            assert!(
                matches!(err, ExcuseError::Parse { line: 1, .. }),
                "{:?} gave {:?}",
                source,
                err
            );
        }
    }

    #[test]
    fn test_vocabulary_skips_comments_and_blank_lines() {
        let text = "# causes\n\n  I had a hard time last night  \n<my|the> keys are lost\n";
        let node = parse_vocabulary(text).unwrap();
        match &node {
            Node::Alternative(entries) => {
                assert_eq!(entries.len(), 2);
                assert_eq!(entries[0], Node::literal("I had a hard time last night"));
            }
            other => panic!("Expected Alternative, got {:?}", other),
        }
        assert_eq!(node.count(), 3);
    }

    #[test]
    fn test_vocabulary_reports_line_numbers() {
        let err = parse_vocabulary("fine\n# comment\nbroken>\n").unwrap_err();
        assert!(matches!(err, ExcuseError::Parse { line: 3, .. }));
    }

    #[test]
    fn test_escaped_characters_are_literal() {
        let node = parse_expression(r"I \<3 my a\|b cat \\o/").unwrap();
        assert_eq!(node, Node::literal(r"I <3 my a|b cat \o/"));

        let err = parse_expression("trailing \\").unwrap_err();
        assert!(matches!(err, ExcuseError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_special_literals_survive_display() {
        let node = Node::sequence([
            Node::literal("I <3 my a|b cat"),
            coerce(["x>y", r"back\slash"]),
        ]);
        assert_eq!(parse_expression(&node.to_string()).unwrap(), node);
    }

    #[test]
    fn test_alternative_spanning_lines() {
        let text = "first\n<going to miss\n# skipped\n|gonna miss\n>< |so sorry>\nlast\n";
        let node = parse_vocabulary(text).unwrap();
        match &node {
            Node::Alternative(entries) => {
                assert_eq!(entries.len(), 3);
                assert_eq!(
                    entries[1],
                    Node::Sequence(vec![
                        coerce(["going to miss", "gonna miss"]),
                        coerce([" ", "so sorry"]),
                    ])
                );
                assert_eq!(entries[2], Node::literal("last"));
            }
            other => panic!("Expected Alternative, got {:?}", other),
        }
    }

    #[test]
    fn test_unclosed_block_reports_its_first_line() {
        let err = parse_vocabulary("fine\n\n<never\n|closed\n").unwrap_err();
        assert!(matches!(err, ExcuseError::Parse { line: 3, .. }));
    }

    #[test]
    fn test_empty_vocabulary_is_an_error() {
        let err = parse_vocabulary("# nothing here\n\n").unwrap_err();
        assert!(matches!(err, ExcuseError::EmptyVocabulary(_)));
    }
}
