use thiserror::Error;

/// Result of a call to the Policy API.
pub type ApiResult<T> = Result<T, ApiError>;

/// Which side of the fetch boundary failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    Network,
    Http,
}

/// Failure of a Policy API call.
///
/// `Display` is the user-facing banner text; `detail` keeps the technical
/// cause for the log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Connection failure, or a response body that could not be read.
    #[error("Unable to connect to the Policy API. Please try again in a moment.")]
    Network { detail: String },
    /// Non-2xx response.
    #[error("Unable to load data right now (HTTP {status}).")]
    Http { status: u16 },
}

impl ApiError {
    pub fn network(detail: impl Into<String>) -> Self {
        ApiError::Network {
            detail: detail.into(),
        }
    }

    pub fn http(status: u16) -> Self {
        ApiError::Http { status }
    }

    pub fn kind(&self) -> ApiErrorKind {
        match self {
            ApiError::Network { .. } => ApiErrorKind::Network,
            ApiError::Http { .. } => ApiErrorKind::Http,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status } => Some(*status),
            ApiError::Network { .. } => None,
        }
    }
}
