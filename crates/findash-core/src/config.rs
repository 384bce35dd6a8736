//! Configuration management for the dashboard client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env::{self, VarError};

/// Primary environment variable holding the function base URL
pub const BASE_URL_VAR: &str = "FINDASH_FUNCTION_BASE_URL";

/// Variable name used by the web dashboard build, accepted as a fallback
pub const LEGACY_BASE_URL_VAR: &str = "VITE_APP_FUNCTION_BASE_URL";

/// Main configuration struct for the dashboard client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// Base URL every endpoint suffix is appended to, without a trailing slash
  pub base_url: String,

  /// `User-Agent` header sent with requests
  pub user_agent: String,
}

impl Config {
  /// Create a config for the given base URL
  pub fn new(base_url: impl Into<String>) -> Self {
    let base_url: String = base_url.into();
    Config {
      base_url: base_url.trim_end_matches('/').to_string(),
      user_agent: crate::DEFAULT_USER_AGENT.to_string(),
    }
  }

  /// Load configuration from environment variables (and a `.env` file if present)
  ///
  /// A variable that is set but not valid unicode is an `Error::EnvVar`.
  pub fn from_env() -> Result<Self> {
    dotenv().ok();
    Self::from_lookup(|key| env::var(key))
  }

  fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> std::result::Result<String, VarError>,
  {
    let read = |key: &str| match lookup(key) {
      Ok(value) => Ok(Some(value)),
      Err(VarError::NotPresent) => Ok(None),
      Err(e) => Err(Error::EnvVar(e)),
    };

    let primary = read(BASE_URL_VAR)?;
    let base_url = match primary {
      Some(url) => Some(url),
      None => read(LEGACY_BASE_URL_VAR)?,
    }
    .filter(|url| !url.trim().is_empty())
      .ok_or_else(|| {
        Error::Config(format!("{} (or {}) not set", BASE_URL_VAR, LEGACY_BASE_URL_VAR))
      })?;

    Ok(Config::new(base_url.trim()))
  }

  /// Replace the `User-Agent` header value
  pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
    self.user_agent = user_agent.into();
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;
  use std::ffi::OsString;

  fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> std::result::Result<String, VarError> {
    let map: HashMap<String, String> =
      vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |key| map.get(key).cloned().ok_or(VarError::NotPresent)
  }

  #[test]
  fn test_config_prefers_primary_var() {
    let config = Config::from_lookup(lookup_from(&[
      (BASE_URL_VAR, "https://functions.example.com/api"),
      (LEGACY_BASE_URL_VAR, "https://legacy.example.com"),
    ]))
    .unwrap();
    assert_eq!(config.base_url, "https://functions.example.com/api");
    assert_eq!(config.user_agent, crate::DEFAULT_USER_AGENT);
  }

  #[test]
  fn test_config_falls_back_to_legacy_var() {
    let config =
      Config::from_lookup(lookup_from(&[(LEGACY_BASE_URL_VAR, "https://legacy.example.com/")]))
        .unwrap();
    assert_eq!(config.base_url, "https://legacy.example.com");
  }

  #[test]
  fn test_config_missing_base_url() {
    let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
    assert!(matches!(err, Error::Config(_)));

    let err = Config::from_lookup(lookup_from(&[(BASE_URL_VAR, "  ")])).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
  }

  #[test]
  fn test_config_non_unicode_var() {
    let err = Config::from_lookup(|key: &str| {
      if key == BASE_URL_VAR {
        Err(VarError::NotUnicode(OsString::from("bad")))
      } else {
        Err(VarError::NotPresent)
      }
    })
    .unwrap_err();
    assert!(matches!(err, Error::EnvVar(VarError::NotUnicode(_))));
    assert!(!err.is_http());
  }

  #[test]
  fn test_new_strips_trailing_slash() {
    assert_eq!(Config::new("http://localhost:7071/api/").base_url, "http://localhost:7071/api");
    assert_eq!(Config::new("http://localhost:7071").base_url, "http://localhost:7071");
  }

  #[test]
  fn test_with_user_agent() {
    let config = Config::new("http://localhost").with_user_agent("dashboard/2.0");
    assert_eq!(config.user_agent, "dashboard/2.0");
  }
}
