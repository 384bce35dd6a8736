//! Financial statement endpoints
//!
//! Each call returns one record per reporting period, as the backend orders them.

use super::{impl_endpoint_base, EndpointCore};
use findash_core::{Endpoint, Result};
use findash_models::statements::*;
use tracing::instrument;

/// Income statement, balance sheet and cash flow endpoints
#[derive(Debug, Clone)]
pub struct StatementEndpoints {
  core: EndpointCore,
}

impl StatementEndpoints {
  /// Get income statements
  ///
  /// # Arguments
  ///
  /// * `query` - The stock symbol
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use findash_client::FinDashClient;
  /// # use findash_core::Config;
  /// # async fn run() -> findash_core::Result<()> {
  /// # let client = FinDashClient::new(Config::new("http://localhost:7071/api"))?;
  /// for period in client.statements().income_statement("AAPL").await? {
  ///     println!("{}: revenue {:?}", period.date, period.revenue);
  /// }
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self))]
  pub async fn income_statement(&self, query: &str) -> Result<Vec<CompanyIncomeStatement>> {
    self.core.get(Endpoint::IncomeStatement, query).await
  }

  /// Get balance sheets
  ///
  /// # Arguments
  ///
  /// * `query` - The stock symbol
  #[instrument(skip(self))]
  pub async fn balance_sheet(&self, query: &str) -> Result<Vec<CompanyBalanceSheet>> {
    self.core.get(Endpoint::BalanceSheet, query).await
  }

  /// Get cash flow statements
  ///
  /// # Arguments
  ///
  /// * `query` - The stock symbol
  #[instrument(skip(self))]
  pub async fn cashflow_statement(&self, query: &str) -> Result<Vec<CompanyCashFlow>> {
    self.core.get(Endpoint::CashflowStatement, query).await
  }
}

impl_endpoint_base!(StatementEndpoints);
