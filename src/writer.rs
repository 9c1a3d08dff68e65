use std::sync::OnceLock;

use regex::Regex;

fn spaces() -> &'static Regex {
    static SPACES: OnceLock<Regex> = OnceLock::new();
    SPACES.get_or_init(|| Regex::new(r" {2,}").expect("valid regex"))
}

/// Ordered collector of the tokens emitted while expanding a grammar
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Writer {
    tokens: Vec<String>,
}

impl Writer {
    /// Create an empty writer
    pub fn new() -> Self {
        Writer { tokens: Vec::new() }
    }

    /// Append a token
    pub fn write(&mut self, token: &str) {
        self.tokens.push(token.to_string());
    }

    /// The tokens written so far, in order
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Whether nothing was written yet
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Render the tokens as one line.
    ///
    /// Tokens are joined with single spaces, then every run of spaces is
    /// collapsed and the result trimmed. The writer itself is left untouched.
    pub fn render(&self) -> String {
        let joined = self.tokens.join(" ");
        spaces().replace_all(&joined, " ").trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_writer_renders_empty_string() {
        let out = Writer::new();
        assert!(out.is_empty());
        assert_eq!(out.render(), "");
    }

    #[test]
    fn test_render_collapses_and_trims() {
        let mut out = Writer::new();
        for token in ["  Gonna miss the meeting", " ", "since", " ", "", "I had a hard time last night  ", " "] {
            out.write(token);
        }
        assert_eq!(
            out.render(),
            "Gonna miss the meeting since I had a hard time last night"
        );
    }

    #[test]
    fn test_render_keeps_tokens_verbatim() {
        let mut out = Writer::new();
        out.write("it's shower day and ... it takes time");
        assert_eq!(out.tokens(), ["it's shower day and ... it takes time"]);
        assert_eq!(out.render(), "it's shower day and ... it takes time");
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut out = Writer::new();
        out.write("thus");
        out.write(" ");
        out.write("Going to miss the meeting");

        let first = out.render();
        let second = out.render();
        assert_eq!(first, second);
        assert_eq!(out.tokens().len(), 3);
    }
}
