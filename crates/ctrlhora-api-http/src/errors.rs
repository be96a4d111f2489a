use ctrlhora_api_interface::ApiError;

/// HTTP API error.
#[allow(missing_docs)]
#[derive(Debug, thiserror::Error)]
pub enum HttpApiError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    #[error("server responded with status {}: {}", status, detail)]
    UnexpectedStatus { status: u16, detail: String },

    #[error("unreadable response body (status {}): {}", status, message)]
    InvalidResponse { status: u16, message: String },

    #[error("Invalid API URL '{}': {}", url, message)]
    InvalidUrl { url: String, message: String },
}

impl From<reqwest::Error> for HttpApiError {
    fn from(e: reqwest::Error) -> Self {
        HttpApiError::HttpError { source: e }
    }
}

impl From<HttpApiError> for ApiError {
    fn from(e: HttpApiError) -> Self {
        match e {
            HttpApiError::UnexpectedStatus { status, detail } => {
                ApiError::UnexpectedStatus { status, detail }
            }
            HttpApiError::InvalidResponse { status, message } => {
                ApiError::InvalidResponse { status, message }
            }
            e => ApiError::ImplementationError { source: e.into() },
        }
    }
}
