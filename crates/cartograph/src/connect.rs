use crate::{Error, Gateway, Result};

use std::sync::Arc;
use url::Url;

/// Opens a gateway from a connection URL.
///
/// `sqlite::memory:` and `sqlite:<path>` open the relational driver,
/// `memory://` the in-process document store. Each driver is behind a cargo
/// feature of the same name.
pub fn connect(url: &str) -> Result<Arc<dyn Gateway>> {
    let parsed = Url::parse(url)
        .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url}")))?;

    tracing::debug!(scheme = parsed.scheme(), "connecting gateway");

    match parsed.scheme() {
        "sqlite" => connect_sqlite(url),
        "memory" => connect_memory(url),
        scheme => Err(Error::invalid_connection_url(format!(
            "unsupported gateway; scheme={scheme}; url={url}"
        ))),
    }
}

#[cfg(feature = "sqlite")]
fn connect_sqlite(url: &str) -> Result<Arc<dyn Gateway>> {
    Ok(Arc::new(cartograph_driver_sqlite::Sqlite::new(url)?))
}

#[cfg(not(feature = "sqlite"))]
fn connect_sqlite(_url: &str) -> Result<Arc<dyn Gateway>> {
    Err(Error::configuration("`sqlite` feature not enabled"))
}

#[cfg(feature = "memory")]
fn connect_memory(url: &str) -> Result<Arc<dyn Gateway>> {
    Ok(Arc::new(cartograph_driver_memory::Memory::connect(url)?))
}

#[cfg(not(feature = "memory"))]
fn connect_memory(_url: &str) -> Result<Arc<dyn Gateway>> {
    Err(Error::configuration("`memory` feature not enabled"))
}
