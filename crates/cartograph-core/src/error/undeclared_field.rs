use super::Error;

/// Error when a model field is read or written that is not part of the
/// model's fixed field set.
#[derive(Debug)]
pub(super) struct UndeclaredFieldError {
    name: Box<str>,
}

impl std::error::Error for UndeclaredFieldError {}

impl core::fmt::Display for UndeclaredFieldError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "undeclared field `{}`", self.name)
    }
}

impl Error {
    pub fn undeclared_field(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UndeclaredField(UndeclaredFieldError {
            name: name.into().into(),
        }))
    }

    pub fn is_undeclared_field(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UndeclaredField(_))
    }
}
