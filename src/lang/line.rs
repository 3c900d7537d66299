use super::token::Word;

/// One line of a script, split on spaces.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    tokens: Vec<String>,
}

impl Line {
    pub fn new(s: &str) -> Line {
        let s = s.trim_end_matches(|c: char| c == '\n' || c == '\r');
        Line {
            tokens: s
                .split(' ')
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn is_comment(&self) -> bool {
        match self.tokens.first() {
            Some(t) => t.starts_with("//"),
            None => false,
        }
    }

    /// Lines that execute nothing.
    pub fn is_blank(&self) -> bool {
        self.is_empty() || self.is_comment()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The keyword this line starts with, if any.
    pub fn word(&self) -> Option<Word> {
        self.tokens.first().and_then(|t| Word::from_str(t))
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}
