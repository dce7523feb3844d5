//! Errors produced while building or querying a short-lex automaton.

/// Convenience wrapper for fallible operations in the coxlex workspace.
pub type CoxResult<T> = std::result::Result<T, Error>;

/// Errors produced by the coxlex workspace.
#[derive(Clone, Debug)]
pub struct Error {
    kind: Box<ErrorKind>,
    line: Option<usize>,
}

impl Error {
    /// Attach a 1-based source-line number to a malformed-input error.
    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn out_of_memory() -> Self {
        Self {
            kind: Box::new(ErrorKind::OutOfMemory),
            line: None,
        }
    }

    pub fn malformed_input<S: ToString>(msg: S) -> Self {
        Self {
            kind: Box::new(ErrorKind::MalformedInput(msg.to_string())),
            line: None,
        }
    }

    pub fn invariant_violation<S: ToString>(msg: S) -> Self {
        Self {
            kind: Box::new(ErrorKind::InvariantViolation(msg.to_string())),
            line: None,
        }
    }

    pub fn root_limit_exceeded(limit: usize) -> Self {
        Self {
            kind: Box::new(ErrorKind::RootLimitExceeded(limit)),
            line: None,
        }
    }

    pub fn state_limit_exceeded(limit: usize) -> Self {
        Self {
            kind: Box::new(ErrorKind::StateLimitExceeded(limit)),
            line: None,
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(
            *self.kind,
            ErrorKind::OutOfMemory | ErrorKind::InvariantViolation(_)
        )
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {line}: {}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for Error {}

/// Leaf error kinds: out-of-memory and invariant violations are fatal;
/// malformed input is recoverable and re-prompted by the caller (the REPL).
#[derive(Clone, Debug, thiserror::Error)]
enum ErrorKind {
    #[error("memory exhausted")]
    OutOfMemory,

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),

    #[error("minimal root set exceeded configured limit of {0}")]
    RootLimitExceeded(usize),

    #[error("automaton state count exceeded configured limit of {0}")]
    StateLimitExceeded(usize),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error {
            kind: Box::new(ErrorKind::Io(e.to_string())),
            line: None,
        }
    }
}
