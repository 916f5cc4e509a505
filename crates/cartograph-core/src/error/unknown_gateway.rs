use super::Error;

/// Error when a gateway name is looked up that was never registered.
#[derive(Debug)]
pub(super) struct UnknownGatewayError {
    name: Box<str>,
}

impl std::error::Error for UnknownGatewayError {}

impl core::fmt::Display for UnknownGatewayError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "gateway not found: '{}'", self.name)
    }
}

impl Error {
    /// Creates an error for a missing gateway, naming the gateway.
    pub fn unknown_gateway(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownGateway(UnknownGatewayError {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown gateway error.
    pub fn is_unknown_gateway(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownGateway(_))
    }
}
