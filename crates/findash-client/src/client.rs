/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. findash contributors
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Client entry point

use crate::cancel::CancelToken;
use crate::endpoints::{
  company::CompanyEndpoints, location::LocationEndpoints, statements::StatementEndpoints,
};

use crate::transport::Transport;
use findash_core::{Config, Result};
use std::sync::Arc;
use tracing::debug;

/// Main dashboard backend client
///
/// Provides access to every backend function through grouped endpoint modules.
/// Each call is a single independent GET; nothing is cached or shared between
/// calls beyond the pooled HTTP connection.
///
/// # Examples
///
/// ```rust,no_run
/// use findash_client::FinDashClient;
/// use findash_core::Config;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = FinDashClient::new(Config::from_env()?)?;
///
///     let profile = client.company().company_profile("AAPL").await?;
///     println!("{:?}", profile.first().map(|p| &p.company_name));
///
///     let cash_flow = client.statements().cashflow_statement("AAPL").await?;
///     println!("{} periods", cash_flow.len());
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FinDashClient {
  transport: Arc<Transport>,
}

impl FinDashClient {
  /// Create a new client
  ///
  /// # Arguments
  ///
  /// * `config` - Configuration holding the function base URL
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    let transport = Arc::new(Transport::new(&config)?);
    debug!(base_url = transport.base_url(), "client created");
    Ok(Self { transport })
  }

  /// Get access to company endpoints
  ///
  /// Search, profile, key metrics and 10-K filings.
  pub fn company(&self) -> CompanyEndpoints {
    CompanyEndpoints::new(self.transport.clone())
  }

  /// Get access to financial statement endpoints
  ///
  /// Income statement, balance sheet and cash flow.
  pub fn statements(&self) -> StatementEndpoints {
    StatementEndpoints::new(self.transport.clone())
  }

  /// Get access to the IP geolocation endpoint
  pub fn location(&self) -> LocationEndpoints {
    LocationEndpoints::new(self.transport.clone())
  }

  /// Company endpoints whose requests abort when `cancel` fires
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use findash_client::{CancelToken, FinDashClient};
  /// # use findash_core::Config;
  /// # async fn run() -> findash_core::Result<()> {
  /// # let client = FinDashClient::new(Config::new("http://localhost:7071/api"))?;
  /// let (handle, token) = CancelToken::new();
  /// let company = client.company_with_cancel(token);
  /// let pending = company.company_profile("AAPL");
  /// handle.cancel();
  /// assert!(pending.await.is_err());
  /// # Ok(())
  /// # }
  /// ```
  pub fn company_with_cancel(&self, cancel: CancelToken) -> CompanyEndpoints {
    self.company().with_cancel(cancel)
  }

  /// Statement endpoints whose requests abort when `cancel` fires
  pub fn statements_with_cancel(&self, cancel: CancelToken) -> StatementEndpoints {
    self.statements().with_cancel(cancel)
  }

  /// Geolocation endpoint whose requests abort when `cancel` fires
  pub fn location_with_cancel(&self, cancel: CancelToken) -> LocationEndpoints {
    self.location().with_cancel(cancel)
  }

  /// The underlying transport, for untyped access via [`Transport::get_json`]
  pub fn transport(&self) -> &Transport {
    &self.transport
  }

  /// Base URL requests are sent to
  pub fn base_url(&self) -> &str {
    self.transport.base_url()
  }
}
