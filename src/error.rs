// Copyright (C) 2020-2026 Andy Kurnia.

pub struct MyError {
    s: String,
}

impl std::fmt::Display for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.s)
    }
}

impl std::fmt::Debug for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (self as &dyn std::fmt::Display).fmt(f)
    }
}

impl std::error::Error for MyError {}

pub fn new(s: String) -> MyError {
    MyError { s }
}

pub type BoxAnyError = Box<dyn std::error::Error>;
pub type Returns<T> = Result<T, BoxAnyError>;

#[macro_export]
macro_rules! return_error {
    ($error:expr) => {
        return Err($crate::error::new($error).into());
    };
}

// Errors signalled by the matching core. None of these are transient.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchError {
    // position is the char offset within the offending line.
    AlphabetViolation { ch: char, position: usize },
    OversizedWord { word_len: usize, query_len: usize },
    EmptyWord,
    InvalidParameter { name: &'static str, value: u64 },
}

impl std::fmt::Display for MatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchError::AlphabetViolation { ch, position } => {
                write!(f, "invalid letter {:?} at position {}", ch, position)
            }
            MatchError::OversizedWord {
                word_len,
                query_len,
            } => write!(
                f,
                "word of length {} is longer than query of length {}",
                word_len, query_len
            ),
            MatchError::EmptyWord => write!(f, "empty word"),
            MatchError::InvalidParameter { name, value } => {
                write!(f, "parameter {} is out of range: {}", name, value)
            }
        }
    }
}

impl std::error::Error for MatchError {}
