use thiserror::Error;

/// The main error type for findash-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// HTTP transport error: the request could not be sent or its body read
  #[error("HTTP error: {0}")]
  Http(String),

  /// Server answered with a non-2xx status
  #[error("HTTP status {status} from {url}")]
  Status {
    /// Numeric status code
    status: u16,
    /// Requested URL
    url: String,
  },

  /// Response body did not match the expected shape
  #[error("Failed to decode response body: {0}")]
  Decode(#[from] serde_json::Error),

  /// Base URL and endpoint could not be combined into a valid URL
  #[error("Invalid URL: {0}")]
  InvalidUrl(String),

  /// Request was cancelled by the caller before it completed
  #[error("Request cancelled")]
  Cancelled,
}

impl Error {
  /// Whether the failure happened at the HTTP layer (transport or status).
  ///
  /// Everything else is treated as an unexpected error when logged.
  pub fn is_http(&self) -> bool {
    matches!(self, Error::Http(_) | Error::Status { .. })
  }

  /// Status code carried by a non-2xx response, if any
  pub fn status(&self) -> Option<u16> {
    match self {
      Error::Status { status, .. } => Some(*status),
      _ => None,
    }
  }
}

/// Result type alias for findash-* crates
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_http_classification() {
    assert!(Error::Http("connection refused".to_string()).is_http());
    assert!(Error::Status { status: 500, url: "http://x/getTenK".to_string() }.is_http());

    let decode = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
    assert!(!Error::Decode(decode).is_http());
    assert!(!Error::Cancelled.is_http());
    assert!(!Error::Config("missing".to_string()).is_http());
  }

  #[test]
  fn test_status_accessor() {
    let err = Error::Status { status: 404, url: "http://x/getTenK".to_string() };
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "HTTP status 404 from http://x/getTenK");
    assert_eq!(Error::Cancelled.status(), None);
  }
}
