use phf::phf_map;

static WORDS: phf::Map<&'static str, Word> = phf_map! {
    "and" => Word::And,
    "break" => Word::Break,
    "continue" => Word::Continue,
    "else" => Word::Else,
    "end" => Word::End,
    "exit" => Word::Exit,
    "false" => Word::False,
    "if" => Word::If,
    "integer" => Word::Integer,
    "logical" => Word::Logical,
    "not" => Word::Not,
    "or" => Word::Or,
    "pop" => Word::Pop,
    "print" => Word::Print,
    "push" => Word::Push,
    "real" => Word::Real,
    "sqrt" => Word::Sqrt,
    "true" => Word::True,
    "while" => Word::While,
};

static OPERATORS: phf::Map<&'static str, Operator> = phf_map! {
    "+" => Operator::Plus,
    "-" => Operator::Minus,
    "*" => Operator::Multiply,
    "/" => Operator::Divide,
    "==" => Operator::Equal,
    "!=" => Operator::NotEqual,
    "<" => Operator::Less,
    "<=" => Operator::LessEqual,
    ">" => Operator::Greater,
    ">=" => Operator::GreaterEqual,
    "and" => Operator::And,
    "or" => Operator::Or,
};

/// Reserved words. None of these may name a variable.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Word {
    And,
    Break,
    Continue,
    Else,
    End,
    Exit,
    False,
    If,
    Integer,
    Logical,
    Not,
    Or,
    Pop,
    Print,
    Push,
    Real,
    Sqrt,
    True,
    While,
}

impl Word {
    pub fn from_str(s: &str) -> Option<Word> {
        WORDS.get(s).copied()
    }

    pub fn is_reserved(s: &str) -> bool {
        WORDS.contains_key(s)
    }

    /// Lines starting with these open a block.
    pub fn is_opener(&self) -> bool {
        matches!(self, Word::Push | Word::If | Word::While)
    }

    /// Lines starting with these close a block.
    pub fn is_closer(&self) -> bool {
        matches!(self, Word::Pop | Word::End)
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            And => write!(f, "and"),
            Break => write!(f, "break"),
            Continue => write!(f, "continue"),
            Else => write!(f, "else"),
            End => write!(f, "end"),
            Exit => write!(f, "exit"),
            False => write!(f, "false"),
            If => write!(f, "if"),
            Integer => write!(f, "integer"),
            Logical => write!(f, "logical"),
            Not => write!(f, "not"),
            Or => write!(f, "or"),
            Pop => write!(f, "pop"),
            Print => write!(f, "print"),
            Push => write!(f, "push"),
            Real => write!(f, "real"),
            Sqrt => write!(f, "sqrt"),
            True => write!(f, "true"),
            While => write!(f, "while"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    And,
    Or,
}

impl Operator {
    pub fn from_str(s: &str) -> Option<Operator> {
        OPERATORS.get(s).copied()
    }

    pub fn is_comparison(&self) -> bool {
        use Operator::*;
        match self {
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual => true,
            Plus | Minus | Multiply | Divide | And | Or => false,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            Equal => write!(f, "=="),
            NotEqual => write!(f, "!="),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
            And => write!(f, "and"),
            Or => write!(f, "or"),
        }
    }
}
