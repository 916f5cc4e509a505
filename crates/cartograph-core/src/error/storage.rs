use super::Error;

/// Error when a gateway's underlying store fails.
///
/// This wraps errors from storage clients (rusqlite, lock poisoning in a
/// document store, I/O) and is passed through the mapper untouched.
#[derive(Debug)]
pub(super) struct StorageError {
    inner: Box<dyn std::error::Error + Send + Sync>,
}

/// Displays the client's own message. Its causes are reached through
/// `source()`, not repeated in the message.
impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner.source()
    }
}

impl core::fmt::Display for StorageError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.inner, f)
    }
}

impl Error {
    /// Creates an error from a storage client failure.
    ///
    /// Gateways convert driver-specific errors with
    /// `.map_err(Error::storage)`.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Storage(StorageError {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error originated in a gateway's store.
    pub fn is_storage(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Storage(_))
    }
}
