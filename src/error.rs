//! Crate error type.
//!
//! Only failures that abort a prompt live here. Things a user can recover
//! from inside a widget (selection bounds, validation, filtered keys) are
//! widget state, not errors.

/// Result type alias for termprompt operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that end a prompt or reject its configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Terminal read/write failure, including end of input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The user pressed Ctrl-C.
    #[error("interrupted")]
    Interrupted,

    /// A list prompt needs something to pick.
    #[error("list prompt needs at least one choice")]
    NoChoices,

    /// A page must show at least one row.
    #[error("page size must be at least 1")]
    ZeroPageSize,

    /// The minimum selection can never be satisfied.
    #[error("min selection ({min}) exceeds max selection ({max})")]
    SelectionBounds { min: usize, max: usize },

    /// A validated numeric answer failed to parse.
    ///
    /// Validation and filtering should make this impossible; seeing it
    /// means the two patterns disagree.
    #[error("validated input {input:?} is not a decimal number: {source}")]
    InvalidNumber {
        input: String,
        #[source]
        source: bigdecimal::ParseBigDecimalError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert() {
        let err: Error = std::io::Error::from(std::io::ErrorKind::UnexpectedEof).into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn selection_bounds_message_names_both_limits() {
        let err = Error::SelectionBounds { min: 3, max: 1 };
        assert_eq!(err.to_string(), "min selection (3) exceeds max selection (1)");
    }
}
