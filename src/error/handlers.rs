//! Standardized error handling patterns shared by the registry operations

use crate::error::{RegistryError, Result};
use reqwest::StatusCode;

/// Standard error handler for HTTP responses
pub struct HttpErrorHandler;

impl HttpErrorHandler {
    /// Handle registry-related HTTP errors
    pub fn handle_registry_error(
        status: StatusCode,
        error_text: &str,
        operation: &str,
    ) -> RegistryError {
        let body = match status.as_u16() {
            401 => format!("unauthorized: {}", error_text),
            403 => format!("insufficient permissions: {}", error_text),
            404 => format!("resource not found: {}", error_text),
            405 => format!("operation not supported by registry: {}", error_text),
            429 => format!("rate limited: {}", error_text),
            500 => format!("registry server error: {}", error_text),
            502 | 503 => format!("registry unavailable: {}", error_text),
            _ => error_text.to_string(),
        };

        RegistryError::HttpStatus {
            operation: operation.to_string(),
            status,
            body,
        }
    }
}

/// Network error categorization and handling
pub struct NetworkErrorHandler;

impl NetworkErrorHandler {
    /// Categorize and format network errors with helpful context
    pub fn handle_network_error(error: &reqwest::Error, context: &str) -> RegistryError {
        let message = if error.is_timeout() {
            format!("{} timeout: {}", context, error)
        } else if error.is_connect() {
            format!("Connection error during {}: {}", context, error)
        } else if error.to_string().contains("dns") {
            format!("DNS resolution error for {}: {}", context, error)
        } else if error.to_string().contains("certificate") {
            format!("TLS certificate error during {}: {}", context, error)
        } else {
            format!("{} network error: {}", context, error)
        };

        RegistryError::Transport(message)
    }
}

/// Validation error utilities
pub struct ValidationErrorHandler;

impl ValidationErrorHandler {
    /// Standard URL validation
    pub fn validate_registry_url(url: &str) -> Result<()> {
        if url.is_empty() {
            return Err(RegistryError::Validation(
                "Registry URL cannot be empty".to_string(),
            ));
        }

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(RegistryError::Validation(
                "Registry URL must include protocol (http:// or https://)".to_string(),
            ));
        }

        url::Url::parse(url)?;
        Ok(())
    }

    /// Repository names are path-like: `project/app`
    pub fn validate_repository(repository: &str) -> Result<()> {
        if repository.is_empty() {
            return Err(RegistryError::Validation(
                "Repository name cannot be empty".to_string(),
            ));
        }

        if repository.starts_with('/') || repository.ends_with('/') {
            return Err(RegistryError::Validation(format!(
                "Repository name cannot start or end with '/': {}",
                repository
            )));
        }

        if repository.contains("//") {
            return Err(RegistryError::Validation(format!(
                "Repository name contains an empty path segment: {}",
                repository
            )));
        }

        Ok(())
    }

    /// Standard numeric range validation
    pub fn validate_timeout(timeout: u64) -> Result<()> {
        if timeout == 0 {
            return Err(RegistryError::Validation(
                "Timeout must be greater than 0".to_string(),
            ));
        }

        if timeout > 86400 {
            // 24 hours
            return Err(RegistryError::Validation(
                "Timeout cannot exceed 24 hours (86400 seconds)".to_string(),
            ));
        }

        Ok(())
    }
}
