//! Registry operations module
//!
//! One struct per endpoint family, each owning a clone of the HTTP client and the logger.
//! [`crate::registry::RegistryClient`] composes them behind the `RegistryApi` trait.

pub mod blob_operations;
pub mod manifest_operations;
pub mod repository_operations;

pub use blob_operations::BlobOperations;
pub use manifest_operations::{DeleteResponse, ManifestOperations};
pub use repository_operations::RepositoryOperations;

use crate::error::handlers::{HttpErrorHandler, NetworkErrorHandler};
use crate::error::{RegistryError, Result};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

/// Send a read request and decode its JSON body.
///
/// Non-success statuses become `HttpStatus`, unreadable bodies `Decode`.
pub(crate) async fn read_json<T: DeserializeOwned>(
    request: RequestBuilder,
    operation: &str,
) -> Result<T> {
    let response = request
        .send()
        .await
        .map_err(|e| NetworkErrorHandler::handle_network_error(&e, operation))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(HttpErrorHandler::handle_registry_error(
            status, &body, operation,
        ));
    }

    response.json::<T>().await.map_err(|e| {
        if e.is_decode() {
            RegistryError::Decode(format!("Failed to parse {} response: {}", operation, e))
        } else {
            NetworkErrorHandler::handle_network_error(&e, operation)
        }
    })
}
