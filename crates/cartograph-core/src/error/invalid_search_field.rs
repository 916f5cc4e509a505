use super::Error;

/// Error when search criteria name a field the mapping does not know about.
#[derive(Debug)]
pub(super) struct InvalidSearchFieldError {
    field: Box<str>,
}

impl std::error::Error for InvalidSearchFieldError {}

impl core::fmt::Display for InvalidSearchFieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "'{}' is not a valid search field", self.field)
    }
}

impl Error {
    pub fn invalid_search_field(field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSearchField(
            InvalidSearchFieldError {
                field: field.into().into(),
            },
        ))
    }

    pub fn is_invalid_search_field(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidSearchField(_))
    }
}
