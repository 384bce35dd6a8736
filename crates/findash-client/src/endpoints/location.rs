//! IP geolocation endpoint

use super::{impl_endpoint_base, EndpointCore};
use findash_core::{Endpoint, Result};
use findash_models::location::LocationGet;
use tracing::instrument;

/// IP geolocation endpoint
#[derive(Debug, Clone)]
pub struct LocationEndpoints {
  core: EndpointCore,
}

impl LocationEndpoints {
  /// Look up geolocation details for an IP address
  ///
  /// Unlike the company endpoints this returns a single object, and the value
  /// is sent as the `ip` parameter. It is not validated client-side.
  #[instrument(skip(self))]
  pub async fn ip_info(&self, ip: &str) -> Result<LocationGet> {
    self.core.get(Endpoint::IpInfo, ip).await
  }
}

impl_endpoint_base!(LocationEndpoints);
