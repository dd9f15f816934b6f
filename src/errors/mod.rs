//! # Error Handling
//!
//! Error types for the credential pipeline and the AWS clients built on top of it.
//! Every variant is terminal for the current action only; callers report it and
//! move on instead of exiting.

use std::fmt;

/// Custom result type for vaultscope operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for vaultscope
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The Vault client could not be constructed.
    #[error("Failed to create Vault client: {message}")]
    Connection { message: String },

    /// The read against Vault failed (transport, permission, server error).
    #[error("Failed to read secret from Vault at '{path}': {message}")]
    Read { path: String, message: String },

    /// Vault returned no secret, or a secret without data.
    #[error("No data found at path '{path}'")]
    NotFound { path: String },

    /// The secret payload does not have the expected `data` object.
    #[error("Unexpected data format in secret payload: {reason}")]
    MalformedPayload { reason: String },

    /// A required field is absent or empty.
    #[error("Failed to find {field} field in secret")]
    MissingField { field: String },

    /// The embedded credentials JSON could not be decoded.
    #[error("Failed to parse {field} JSON: {source}")]
    Parse {
        field: String,
        #[source]
        source: serde_json::Error,
    },

    /// AWS shared configuration could not be loaded.
    #[error("Failed to load AWS configuration: {message}")]
    ConfigLoad { message: String },

    /// An AWS API call failed.
    #[error("AWS {operation} failed: {message}")]
    Cloud { operation: String, message: String },
}

/// Fieldless discriminant of [`Error`], for matching without destructuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Connection,
    Read,
    NotFound,
    MalformedPayload,
    MissingField,
    Parse,
    ConfigLoad,
    Cloud,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Connection => "connection",
            ErrorKind::Read => "read",
            ErrorKind::NotFound => "not_found",
            ErrorKind::MalformedPayload => "malformed_payload",
            ErrorKind::MissingField => "missing_field",
            ErrorKind::Parse => "parse",
            ErrorKind::ConfigLoad => "config_load",
            ErrorKind::Cloud => "cloud",
        };
        f.write_str(name)
    }
}

impl Error {
    /// Create a connection error
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection { message: message.into() }
    }

    /// Create a read error for the given path
    pub fn read(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Read { path: path.into(), message: message.into() }
    }

    /// Create a not found error for the given path
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::NotFound { path: path.into() }
    }

    /// Create a malformed payload error
    pub fn malformed_payload(reason: impl Into<String>) -> Self {
        Self::MalformedPayload { reason: reason.into() }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField { field: field.into() }
    }

    /// Create a parse error wrapping the decoder diagnostic
    pub fn parse(field: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Parse { field: field.into(), source }
    }

    /// Create a config load error
    pub fn config_load(message: impl Into<String>) -> Self {
        Self::ConfigLoad { message: message.into() }
    }

    /// Create a cloud API error
    pub fn cloud(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Cloud { operation: operation.into(), message: message.into() }
    }

    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Connection { .. } => ErrorKind::Connection,
            Error::Read { .. } => ErrorKind::Read,
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::MalformedPayload { .. } => ErrorKind::MalformedPayload,
            Error::MissingField { .. } => ErrorKind::MissingField,
            Error::Parse { .. } => ErrorKind::Parse,
            Error::ConfigLoad { .. } => ErrorKind::ConfigLoad,
            Error::Cloud { .. } => ErrorKind::Cloud,
        }
    }

    /// A short hint telling the operator what to check next.
    pub fn remediation(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Connection => {
                "check the Vault address and that the Vault service is reachable"
            }
            ErrorKind::Read => "check that the Vault token is allowed to read this path",
            ErrorKind::NotFound => "check that a secret has been written at this path",
            ErrorKind::MalformedPayload | ErrorKind::MissingField | ErrorKind::Parse => {
                "check the shape of the stored secret: data.creds must hold a JSON object of strings"
            }
            ErrorKind::ConfigLoad => "check the AWS region and endpoint settings",
            ErrorKind::Cloud => {
                "check that the credentials stored in Vault are valid for this account"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructors() {
        let err = Error::not_found("secret/data/aws");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "No data found at path 'secret/data/aws'");

        let err = Error::read("secret/data/aws", "permission denied");
        assert_eq!(err.kind(), ErrorKind::Read);
        assert!(err.to_string().contains("permission denied"));

        let err = Error::missing_field("creds");
        assert_eq!(err.to_string(), "Failed to find creds field in secret");
    }

    #[test]
    fn test_parse_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = Error::parse("creds", source);

        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("Failed to parse creds JSON:"));
    }

    #[test]
    fn test_remediation_differs_for_fetch_failures() {
        let connection = Error::connection("bad address").remediation();
        let read = Error::read("p", "denied").remediation();
        let not_found = Error::not_found("p").remediation();

        assert_ne!(connection, read);
        assert_ne!(read, not_found);
        assert_ne!(connection, not_found);
    }

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::MalformedPayload.to_string(), "malformed_payload");
        assert_eq!(ErrorKind::ConfigLoad.to_string(), "config_load");
    }
}
