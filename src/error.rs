// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Http(String),
    Api(ApiError),
}

/// Specific error types for requests against the SmartChef service.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// The server answered but reported `success: false`.
    Rejected(Option<String>),

    /// The response body could not be decoded as the expected JSON shape.
    MalformedResponse(String),

    /// The endpoint requires an authenticated session.
    Unauthorized,

    /// Generic error with raw message
    Other(String),
}

impl ApiError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ApiError::Rejected(_) => "error-api-rejected",
            ApiError::MalformedResponse(_) => "error-api-malformed",
            ApiError::Unauthorized => "error-api-unauthorized",
            ApiError::Other(_) => "error-api-general",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Rejected(Some(msg)) => write!(f, "Request rejected: {}", msg),
            ApiError::Rejected(None) => write!(f, "Request rejected"),
            ApiError::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),
            ApiError::Unauthorized => write!(f, "Login required"),
            ApiError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error {
    /// Returns the i18n message key for a user-facing toast.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Api(api) => api.i18n_key(),
            _ => "error-api-general",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Api(e) => write!(f, "API Error: {}", e),
        }
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        Error::Api(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Api(ApiError::MalformedResponse(err.to_string()))
        } else {
            Error::Http(err.to_string())
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
