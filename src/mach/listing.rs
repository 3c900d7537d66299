use crate::lang::{lex, Line, LineIndex, Word};

/// ## Token store
///
/// The script as lines of tokens. Indexes are the zero based line
/// positions of the source text, blank lines included.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing {
    lines: Vec<Line>,
}

impl Listing {
    pub fn new(source: &str) -> Listing {
        Listing { lines: lex(source) }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, index: LineIndex) -> Option<&Line> {
        self.lines.get(index)
    }

    pub fn lines(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }

    /// The keyword starting the line at `index`.
    pub fn word(&self, index: LineIndex) -> Option<Word> {
        self.line(index).and_then(Line::word)
    }

    /// Appends one line typed at the prompt.
    pub fn push_str(&mut self, s: &str) {
        self.lines.push(Line::new(s));
    }
}

impl std::fmt::Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
