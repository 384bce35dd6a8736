//! HTTP transport layer for dashboard backend requests

use crate::cancel::CancelToken;
use findash_core::{Config, Endpoint, Error, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};
use url::Url;

/// HTTP transport layer for making requests to the backend functions
#[derive(Debug)]
pub struct Transport {
  client: Client,
  base_url: String,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: &Config) -> Result<Self> {
    let client = Client::builder()
      .user_agent(config.user_agent.as_str())
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self { client, base_url: config.base_url.trim_end_matches('/').to_string() })
  }

  /// Make a GET request to an endpoint and decode the JSON body
  ///
  /// # Arguments
  ///
  /// * `endpoint` - The backend function to call
  /// * `value` - Value of the endpoint's single query parameter, sent as-is
  ///
  /// # Errors
  ///
  /// Transport failures and non-2xx statuses are returned as `Error::Http` /
  /// `Error::Status`; a body that does not decode as `T` is `Error::Decode`.
  /// Every failure is logged once before it is returned.
  #[instrument(skip(self, endpoint), fields(endpoint = %endpoint))]
  pub async fn get<T>(&self, endpoint: Endpoint, value: &str) -> Result<T>
  where
    T: DeserializeOwned,
  {
    self.fetch(endpoint, value).await.map_err(|e| {
      log_failure(endpoint, &e);
      e
    })
  }

  /// Same as [`Transport::get`], but abandons the request once `cancel` fires.
  ///
  /// A cancelled request resolves to `Error::Cancelled` and is not logged as a failure.
  pub async fn get_with_cancel<T>(
    &self,
    endpoint: Endpoint,
    value: &str,
    cancel: &CancelToken,
  ) -> Result<T>
  where
    T: DeserializeOwned,
  {
    tokio::select! {
      biased;
      () = cancel.cancelled() => {
        debug!(endpoint = %endpoint, "request cancelled");
        Err(Error::Cancelled)
      }
      result = self.get(endpoint, value) => result,
    }
  }

  /// Fetch an endpoint's body as untyped JSON
  pub async fn get_json(&self, endpoint: Endpoint, value: &str) -> Result<serde_json::Value> {
    self.get(endpoint, value).await
  }

  async fn fetch<T>(&self, endpoint: Endpoint, value: &str) -> Result<T>
  where
    T: DeserializeOwned,
  {
    let url = self.build_url(endpoint, value)?;
    debug!("Making request to: {}", url);

    let response = self
      .client
      .get(url.clone())
      .send()
      .await
      .map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
      return Err(Error::Status { status: status.as_u16(), url: url.to_string() });
    }

    let body = response
      .bytes()
      .await
      .map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))?;
    debug!("Response body length: {} bytes", body.len());

    Ok(serde_json::from_slice(&body)?)
  }

  /// Build the full URL for an endpoint request
  pub(crate) fn build_url(&self, endpoint: Endpoint, value: &str) -> Result<Url> {
    let mut url = Url::parse(&format!("{}{}", self.base_url, endpoint.path()))
      .map_err(|e| Error::InvalidUrl(format!("{}{}: {}", self.base_url, endpoint.path(), e)))?;

    url.query_pairs_mut().append_pair(endpoint.param(), value);

    Ok(url)
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    &self.base_url
  }
}

fn log_failure(endpoint: Endpoint, err: &Error) {
  if err.is_http() {
    error!("Error {}: {}", endpoint.description(), err);
  } else {
    error!("Unexpected error {}: {}", endpoint.description(), err);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn transport(base_url: &str) -> Transport {
    Transport::new(&Config::new(base_url)).unwrap()
  }

  #[test]
  fn test_build_url() {
    let transport = transport("https://functions.example.com/api");
    let url = transport.build_url(Endpoint::CompanyProfile, "AAPL").unwrap();

    assert_eq!(url.as_str(), "https://functions.example.com/api/getCompanyProfile?query=AAPL");
  }

  #[test]
  fn test_build_url_ip_param() {
    let transport = transport("https://functions.example.com");
    let url = transport.build_url(Endpoint::IpInfo, "203.0.113.7").unwrap();

    assert_eq!(url.path(), "/getIPInfo");
    assert_eq!(url.query(), Some("ip=203.0.113.7"));
  }

  #[test]
  fn test_build_url_encodes_value_verbatim() {
    let transport = transport("https://functions.example.com");
    let url = transport.build_url(Endpoint::SearchCompanies, "apple & co/?").unwrap();

    let pairs: Vec<(String, String)> =
      url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect();
    assert_eq!(pairs, vec![("query".to_string(), "apple & co/?".to_string())]);
  }

  #[test]
  fn test_trailing_slash_is_not_doubled() {
    let mut config = Config::new("http://localhost:7071/api");
    config.base_url.push('/');
    let transport = Transport::new(&config).unwrap();

    assert_eq!(transport.base_url(), "http://localhost:7071/api");
    let url = transport.build_url(Endpoint::TenK, "MSFT").unwrap();
    assert_eq!(url.path(), "/api/getTenK");
  }

  #[test]
  fn test_invalid_base_url() {
    let transport = transport("not a url");
    let err = transport.build_url(Endpoint::KeyMetrics, "AAPL").unwrap_err();

    assert!(matches!(err, Error::InvalidUrl(_)));
    assert!(!err.is_http());
  }
}
