//! Error types for password generation.
//!
//! Errors fall into two families: problems with what the user supplied, which are
//! shown verbatim, and internal invariant violations that indicate a bug.

use thiserror::Error;

/// Rejection reasons for a raw password length, in the order they are checked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LengthError {
    #[error("The password length cannot be empty")]
    Empty,
    #[error("The password length must be a number")]
    NotANumber,
    #[error("You must enter a password length")]
    NoResponse,
    #[error("The password length must be an integer")]
    NotInteger,
    #[error("The password length must be between {min} and {max} characters")]
    OutOfRange { min: usize, max: usize },
}

/// Construction failures for a [`CharacterCategory`](crate::CharacterCategory).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CategoryError {
    #[error("category has no characters")]
    EmptyCharacters,
    #[error("category has no label")]
    EmptyLabel,
}

/// Coarse classification of a [`GenerationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad input; recoverable by asking again.
    UserInput,
    /// An internal invariant was violated.
    Defect,
    /// The attempt was cancelled before a password was accepted.
    Cancelled,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error(transparent)]
    Length(#[from] LengthError),
    #[error("You must select at least one character type in order to generate a password")]
    NoCategorySelected,
    #[error(
        "There is not enough data to run the program (category #{index}: {source}), this is a bug"
    )]
    MalformedCategory {
        index: usize,
        #[source]
        source: CategoryError,
    },
    #[error("No password generated because there are no characters to choose from")]
    EmptyAlphabet,
    #[error("No password generated because the password length was {0}")]
    InvalidLength(usize),
    #[error("No password satisfied every selected character type after {attempts} attempts")]
    GenerationFailed { attempts: usize },
    #[error("Password generation cancelled")]
    Cancelled,
}

impl GenerationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Length(_) | Self::NoCategorySelected => ErrorKind::UserInput,
            Self::MalformedCategory { .. }
            | Self::EmptyAlphabet
            | Self::InvalidLength(_)
            | Self::GenerationFailed { .. } => ErrorKind::Defect,
            Self::Cancelled => ErrorKind::Cancelled,
        }
    }

    /// Returns `true` when the error signals a bug rather than bad input.
    pub fn is_defect(&self) -> bool {
        self.kind() == ErrorKind::Defect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_messages_are_distinct() {
        let messages: Vec<String> = [
            LengthError::Empty,
            LengthError::NotANumber,
            LengthError::NoResponse,
            LengthError::NotInteger,
            LengthError::OutOfRange { min: 8, max: 128 },
        ]
        .iter()
        .map(|e| e.to_string())
        .collect();

        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_length_error_is_shown_verbatim() {
        let err = GenerationError::from(LengthError::OutOfRange { min: 8, max: 128 });
        assert_eq!(
            err.to_string(),
            "The password length must be between 8 and 128 characters"
        );
        assert_eq!(err.kind(), ErrorKind::UserInput);
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(GenerationError::NoCategorySelected.kind(), ErrorKind::UserInput);
        assert!(GenerationError::EmptyAlphabet.is_defect());
        assert!(GenerationError::InvalidLength(0).is_defect());
        assert!(GenerationError::GenerationFailed { attempts: 3 }.is_defect());
        assert!(
            GenerationError::MalformedCategory {
                index: 0,
                source: CategoryError::EmptyLabel,
            }
            .is_defect()
        );
        assert_eq!(GenerationError::Cancelled.kind(), ErrorKind::Cancelled);
        assert!(!GenerationError::Cancelled.is_defect());
    }
}
