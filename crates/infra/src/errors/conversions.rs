//! Conversions from external infrastructure errors into domain errors.

use bizhub_domain::BizHubError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use std::io::Error as IoError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub BizHubError);

impl From<InfraError> for BizHubError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<BizHubError> for InfraError {
    fn from(value: BizHubError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoBizHubError {
    fn into_bizhub(self) -> BizHubError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → BizHubError */
/* -------------------------------------------------------------------------- */

impl IntoBizHubError for HttpError {
    fn into_bizhub(self) -> BizHubError {
        if self.is_timeout() {
            return BizHubError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return BizHubError::Network("HTTP connection failure".into());
        }

        if self.is_builder() {
            return BizHubError::Config(format!("invalid HTTP request: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 | 403 => BizHubError::Auth(message),
                404 => BizHubError::NotFound(message),
                400..=499 => BizHubError::InvalidInput(message),
                _ => BizHubError::Network(message),
            };
        }

        BizHubError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_bizhub())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → BizHubError */
/* -------------------------------------------------------------------------- */

impl IntoBizHubError for JsonError {
    fn into_bizhub(self) -> BizHubError {
        if self.is_io() {
            BizHubError::Storage(format!("JSON I/O failure: {self}"))
        } else {
            BizHubError::Internal(format!("invalid JSON at line {}: {self}", self.line()))
        }
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_bizhub())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → BizHubError */
/* -------------------------------------------------------------------------- */

impl IntoBizHubError for IoError {
    fn into_bizhub(self) -> BizHubError {
        use std::io::ErrorKind;

        match self.kind() {
            ErrorKind::NotFound => BizHubError::NotFound(format!("file not found: {self}")),
            ErrorKind::PermissionDenied => {
                BizHubError::Storage(format!("permission denied: {self}"))
            }
            _ => BizHubError::Storage(self.to_string()),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_bizhub())
    }
}
