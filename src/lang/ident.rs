use super::token::Word;

pub fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

pub fn is_reserved(name: &str) -> bool {
    Word::is_reserved(name)
}

pub fn has_invalid_char(name: &str) -> bool {
    name.is_empty() || !name.chars().all(is_ident_char)
}
