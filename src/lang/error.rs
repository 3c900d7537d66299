use super::LineIndex;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line: Option<LineIndex>,
    subject: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident; $subject:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).subject($subject)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line($line)
    };
    ($err:ident, $line:expr; $subject:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line($line)
            .subject($subject)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line: None,
            subject: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line(&self) -> Option<LineIndex> {
        self.line
    }

    /// Errors raised below the runtime don't know where they happened.
    /// The first line attached wins.
    pub fn in_line(self, line: LineIndex) -> Error {
        if self.line.is_some() {
            return self;
        }
        Error {
            line: Some(line),
            ..self
        }
    }

    pub fn subject<S: AsRef<str>>(self, subject: S) -> Error {
        debug_assert!(self.subject.is_empty());
        Error {
            subject: subject.as_ref().to_string(),
            ..self
        }
    }

    /// The two line report written to the terminal.
    pub fn report(&self) -> String {
        match self.line {
            Some(line) => format!("Error on line {}\n{}\n", line, self),
            None => format!("Error\n{}\n", self),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    DuplicateName,
    ReservedName,
    InvalidCharacter,
    VarUndeclared,
    UnresolvedSymbol,
    TypeMismatch,
    TypesIncompatible,
    InvalidOperator,
    InvalidArgument,
    DivisionByZero,
    Overflow,
    UnrecognizedCommand,
    UnexpectedEndOfScope,
    ElseWithoutIf,
    UnterminatedScope,
    OutOfMemory,
    StepLimitExceeded,
    FileNotFound,
    InternalError,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "Error {{ {:?} on line {}: {} }}", self.code, line, self),
            None => write!(f, "Error {{ {:?}: {} }}", self.code, self),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let s = &self.subject;
        match self.code {
            DuplicateName => write!(f, "Variable with the name \"{}\" is already declared!", s),
            ReservedName => write!(f, "Variable name \"{}\" conflicts with a keyword!", s),
            InvalidCharacter => write!(
                f,
                "Variable name \"{}\" contains an invalid character!\nValid characters: {{ a-z, A-Z, 0-9, _ }}",
                s
            ),
            VarUndeclared => write!(
                f,
                "Variable \"{}\" has not been declared in current scope!",
                s
            ),
            UnresolvedSymbol => write!(f, "Unable to resolve symbol \"{}\"!", s),
            TypeMismatch => write!(
                f,
                "Variable \"{}\" is not of the expected data type!",
                s
            ),
            TypesIncompatible => write!(f, "Variables do not have matching data types!"),
            InvalidOperator => write!(f, "Symbol \"{}\" is not a valid operator!", s),
            InvalidArgument => write!(f, "Invalid argument \"{}\"!", s),
            DivisionByZero => write!(f, "Cannot divide by zero!"),
            Overflow => write!(f, "Arithmetic overflow!"),
            UnrecognizedCommand => write!(f, "Unrecognized command: \"{}\"", s),
            UnexpectedEndOfScope => write!(f, "Unexpected end of scope!"),
            ElseWithoutIf => write!(f, "Unexpected else outside of an if block!"),
            UnterminatedScope => write!(f, "End of scope expected!"),
            OutOfMemory => write!(f, "Out of memory: {}", s),
            StepLimitExceeded => write!(f, "Execution step limit of {} exceeded!", s),
            FileNotFound => write!(f, "File not found: {}", s),
            InternalError => {
                if s.is_empty() {
                    write!(f, "Internal error!")
                } else {
                    write!(f, "Internal error: {}", s)
                }
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use crate::error;

    #[test]
    fn test_report_has_two_lines() {
        let e = error!(DuplicateName, 1; "x");
        assert_eq!(
            e.report(),
            "Error on line 1\nVariable with the name \"x\" is already declared!\n"
        );
    }

    #[test]
    fn test_first_line_wins() {
        let e = error!(DivisionByZero, 4).in_line(9);
        assert_eq!(e.line(), Some(4));
    }
}
