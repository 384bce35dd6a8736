use anyhow::{Context, Result};
use findash_core::Config as CoreConfig;

/// Build the client configuration, preferring an explicit `--base-url`
pub fn resolve(base_url: Option<String>) -> Result<CoreConfig> {
  match base_url.filter(|url| !url.trim().is_empty()) {
    Some(url) => Ok(CoreConfig::new(url.trim())),
    None => CoreConfig::from_env()
      .context("No function base URL: pass --base-url or set FINDASH_FUNCTION_BASE_URL"),
  }
}
