use super::line::Line;

/// Splits a script into lines. Empty lines are kept so that line
/// indexes in error reports match the source.
pub fn lex(source: &str) -> Vec<Line> {
    if source.is_empty() {
        return vec![];
    }
    let source = source.strip_suffix('\n').unwrap_or(source);
    source.split('\n').map(Line::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_keep_positions() {
        let lines = lex("integer x\n\n// hi\nprint x\n");
        assert_eq!(lines.len(), 4);
        assert!(lines[1].is_empty());
        assert!(lines[2].is_comment());
        assert_eq!(lines[3].tokens(), ["print", "x"]);
    }

    #[test]
    fn test_no_trailing_newline() {
        assert_eq!(lex("exit").len(), 1);
        assert_eq!(lex("").len(), 0);
    }
}
