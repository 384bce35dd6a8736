//! Endpoint groups
//!
//! Every operation is a single call into [`EndpointCore::get`].

pub mod company;
pub mod location;
pub mod statements;

use crate::cancel::CancelToken;
use crate::transport::Transport;
use findash_core::{Endpoint, Result};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Common endpoint structure
///
/// All endpoint modules follow this pattern with a shared transport layer
/// and an optional cancellation token applied to every request they make.
#[derive(Debug, Clone)]
pub struct EndpointCore {
  /// Shared HTTP transport
  pub transport: Arc<Transport>,
  /// Token applied to every request, if any
  pub cancel: Option<CancelToken>,
}

impl EndpointCore {
  /// Create a new endpoint core
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport, cancel: None }
  }

  /// GET `endpoint` with `value` as its query parameter, honouring the cancellation token
  pub async fn get<T>(&self, endpoint: Endpoint, value: &str) -> Result<T>
  where
    T: DeserializeOwned,
  {
    match &self.cancel {
      Some(cancel) => self.transport.get_with_cancel(endpoint, value, cancel).await,
      None => self.transport.get(endpoint, value).await,
    }
  }
}

/// Macro to implement the shared constructor and cancellation builder for endpoint structs
macro_rules! impl_endpoint_base {
  ($struct_name:ident) => {
    impl $struct_name {
      /// Create a new endpoints instance over a shared transport
      pub fn new(transport: std::sync::Arc<$crate::transport::Transport>) -> Self {
        Self { core: $crate::endpoints::EndpointCore::new(transport) }
      }

      /// Abort requests made through this instance once `cancel` fires
      pub fn with_cancel(mut self, cancel: $crate::cancel::CancelToken) -> Self {
        self.core.cancel = Some(cancel);
        self
      }
    }
  };
}

pub(crate) use impl_endpoint_base;

#[cfg(test)]
mod tests {
  use super::*;
  use findash_core::Config;

  #[test]
  fn test_endpoint_core_creation() {
    let transport = Arc::new(Transport::new(&Config::new("https://mock.findash.dev")).unwrap());
    let core = EndpointCore::new(transport);

    assert_eq!(core.transport.base_url(), "https://mock.findash.dev");
    assert!(core.cancel.is_none());
  }
}
