use super::Error;

/// Error when a SELECT statement cannot be rendered.
///
/// This occurs when:
/// - The SELECT list is empty
/// - A HAVING clause is added without a GROUP BY clause
/// - An AND/OR connective is appended to an empty WHERE or HAVING clause
/// - A condition tree has a connective with no condition on one side
#[derive(Debug)]
pub(super) struct InvalidClauseError {
    message: Box<str>,
}

impl std::error::Error for InvalidClauseError {}

impl core::fmt::Display for InvalidClauseError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid clause: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid clause error.
    pub fn invalid_clause(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidClause(InvalidClauseError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid clause error.
    pub fn is_invalid_clause(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidClause(_))
    }
}
