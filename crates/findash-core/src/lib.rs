pub mod config;
pub mod error;

pub use config::Config;
pub use error::{Error, Result};

/// Name of the query parameter used by company-keyed endpoints.
pub const QUERY_PARAM: &str = "query";

/// Name of the query parameter used by the geolocation endpoint.
pub const IP_PARAM: &str = "ip";

/// Default `User-Agent` sent with every request
pub const DEFAULT_USER_AGENT: &str = concat!("findash-client/", env!("CARGO_PKG_VERSION"));

/// The backend functions supported by the dashboard client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
  // Company functions
  SearchCompanies,
  CompanyProfile,
  KeyMetrics,
  TenK,

  // Financial statements
  IncomeStatement,
  BalanceSheet,
  CashflowStatement,

  // Geolocation
  IpInfo,
}

impl Endpoint {
  /// Every endpoint, in catalogue order
  pub const ALL: [Endpoint; 8] = [
    Endpoint::SearchCompanies,
    Endpoint::CompanyProfile,
    Endpoint::KeyMetrics,
    Endpoint::TenK,
    Endpoint::IncomeStatement,
    Endpoint::BalanceSheet,
    Endpoint::CashflowStatement,
    Endpoint::IpInfo,
  ];

  /// Fixed URL suffix appended to the configured base URL
  pub fn path(&self) -> &'static str {
    match self {
      Endpoint::SearchCompanies => "/searchCompanies",
      Endpoint::CompanyProfile => "/getCompanyProfile",
      Endpoint::KeyMetrics => "/getKeyMetrics",
      Endpoint::TenK => "/getTenK",
      Endpoint::IncomeStatement => "/getIncomeStatement",
      Endpoint::BalanceSheet => "/getBalanceSheet",
      Endpoint::CashflowStatement => "/getCashflowStatement",
      Endpoint::IpInfo => "/getIPInfo",
    }
  }

  /// Name of the single query parameter the endpoint expects
  pub fn param(&self) -> &'static str {
    match self {
      Endpoint::IpInfo => IP_PARAM,
      _ => QUERY_PARAM,
    }
  }

  /// Short description of the operation, used in diagnostics
  pub fn description(&self) -> &'static str {
    match self {
      Endpoint::SearchCompanies => "searching companies",
      Endpoint::CompanyProfile => "fetching company profile",
      Endpoint::KeyMetrics => "fetching key metrics",
      Endpoint::TenK => "fetching Ten-K filings",
      Endpoint::IncomeStatement => "fetching income statement",
      Endpoint::BalanceSheet => "fetching balance sheet",
      Endpoint::CashflowStatement => "fetching cashflow statement",
      Endpoint::IpInfo => "fetching IP info",
    }
  }
}

impl std::fmt::Display for Endpoint {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    // Suffix without the leading slash, e.g. "getCompanyProfile"
    write!(f, "{}", &self.path()[1..])
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;

  #[test]
  fn test_endpoint_paths_are_unique() {
    let paths: HashSet<_> = Endpoint::ALL.iter().map(|e| e.path()).collect();
    assert_eq!(paths.len(), Endpoint::ALL.len());
    assert!(Endpoint::ALL.iter().all(|e| e.path().starts_with('/')));
  }

  #[test]
  fn test_endpoint_params() {
    assert_eq!(Endpoint::IpInfo.param(), "ip");
    for endpoint in Endpoint::ALL.iter().filter(|e| **e != Endpoint::IpInfo) {
      assert_eq!(endpoint.param(), "query", "{endpoint}");
    }
  }

  #[test]
  fn test_endpoint_display() {
    assert_eq!(Endpoint::CashflowStatement.to_string(), "getCashflowStatement");
    assert_eq!(Endpoint::IpInfo.to_string(), "getIPInfo");
    assert_eq!(Endpoint::SearchCompanies.to_string(), "searchCompanies");
  }
}
