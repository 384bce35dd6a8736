//! Company search, profile, key metrics and filing endpoints

use super::{impl_endpoint_base, EndpointCore};
use findash_core::{Endpoint, Result};
use findash_models::company::*;
use tracing::instrument;

/// Company-level endpoints: search, profile, key metrics and 10-K filings
#[derive(Debug, Clone)]
pub struct CompanyEndpoints {
  core: EndpointCore,
}

impl CompanyEndpoints {
  /// Search companies by ticker or name fragment
  ///
  /// # Arguments
  ///
  /// * `query` - Free-text search, forwarded as-is (e.g., "appl")
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use findash_client::FinDashClient;
  /// # use findash_core::Config;
  /// # async fn run() -> findash_core::Result<()> {
  /// # let client = FinDashClient::new(Config::new("http://localhost:7071/api"))?;
  /// let results = client.company().search_companies("appl").await?;
  /// for hit in &results.data {
  ///     println!("{} - {}", hit.symbol, hit.name);
  /// }
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self))]
  pub async fn search_companies(&self, query: &str) -> Result<SearchResponse> {
    self.core.get(Endpoint::SearchCompanies, query).await
  }

  /// Get the company profile (price, DCF, sector, description, ...)
  ///
  /// The backend answers with an array, normally holding a single profile.
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use findash_client::FinDashClient;
  /// # use findash_core::Config;
  /// # async fn run() -> findash_core::Result<()> {
  /// # let client = FinDashClient::new(Config::new("http://localhost:7071/api"))?;
  /// let profiles = client.company().company_profile("AAPL").await?;
  /// if let Some(profile) = profiles.first() {
  ///     println!("{}: {:?}", profile.company_name, profile.price);
  /// }
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self))]
  pub async fn company_profile(&self, query: &str) -> Result<Vec<CompanyProfile>> {
    self.core.get(Endpoint::CompanyProfile, query).await
  }

  /// Get trailing-twelve-month key metrics
  #[instrument(skip(self))]
  pub async fn key_metrics(&self, query: &str) -> Result<Vec<CompanyKeyMetrics>> {
    self.core.get(Endpoint::KeyMetrics, query).await
  }

  /// Get 10-K filing references, most recent first
  #[instrument(skip(self))]
  pub async fn ten_k(&self, query: &str) -> Result<Vec<CompanyTenK>> {
    self.core.get(Endpoint::TenK, query).await
  }
}

impl_endpoint_base!(CompanyEndpoints);
