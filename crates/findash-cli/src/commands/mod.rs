//! Subcommand implementations
//!
//! Each command makes exactly one client call. `--raw` bypasses the typed
//! records and prints the body as received.

pub mod company;
pub mod location;
pub mod statements;
pub mod summary;

use anyhow::{anyhow, Result};
use clap::Args;
use findash_client::{Config, Endpoint, FinDashClient};
use serde::Serialize;
use std::fmt::Display;
use std::io::{self, Write};
use std::sync::Mutex;

/// Shared state for one CLI invocation
pub struct Context {
  pub client: FinDashClient,
  pub raw: bool,
  out: Mutex<Box<dyn Write + Send>>,
}

impl Context {
  pub fn new(config: Config, raw: bool) -> Result<Self> {
    Self::with_output(config, raw, Box::new(io::stdout()))
  }

  /// Same as [`Context::new`] but writing command output to `out`
  pub fn with_output(config: Config, raw: bool, out: Box<dyn Write + Send>) -> Result<Self> {
    Ok(Self { client: FinDashClient::new(config)?, raw, out: Mutex::new(out) })
  }

  /// Write one line of command output
  pub fn emit(&self, text: impl Display) -> Result<()> {
    let mut out = self.out.lock().map_err(|_| anyhow!("output writer poisoned"))?;
    writeln!(out, "{}", text)?;
    out.flush()?;
    Ok(())
  }

  /// Print the endpoint's body untouched, pretty-printed
  pub async fn print_raw(&self, endpoint: Endpoint, value: &str) -> Result<()> {
    let body = self.client.transport().get_json(endpoint, value).await?;
    self.emit(serde_json::to_string_pretty(&body)?)
  }

  pub fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
    self.emit(serde_json::to_string_pretty(value)?)
  }
}

#[derive(Args, Debug)]
pub struct QueryArgs {
  /// Ticker symbol or free-text query, sent as-is
  pub query: String,
}

#[derive(Args, Debug)]
pub struct ReportArgs {
  /// Ticker symbol, e.g. AAPL
  pub symbol: String,

  /// Render the dashboard summary table instead of JSON
  #[arg(short, long)]
  pub summary: bool,

  /// Maximum number of periods shown in the summary
  #[arg(short, long, default_value = "5")]
  pub limit: usize,
}

#[derive(Args, Debug)]
pub struct IpArgs {
  /// IPv4 or IPv6 address to look up
  pub ip: String,
}

#[cfg(test)]
pub(crate) mod test_support {
  use super::Context;
  use findash_client::Config;
  use serde_json::Value;
  use std::io;
  use std::sync::{Arc, Mutex};
  use wiremock::matchers::{method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  /// Output sink shared between a test and its `Context`
  #[derive(Clone, Default)]
  pub struct Captured(Arc<Mutex<Vec<u8>>>);

  impl Captured {
    pub fn text(&self) -> String {
      String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
  }

  impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
      self.0.lock().unwrap().extend_from_slice(buf);
      Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
      Ok(())
    }
  }

  pub fn context(server: &MockServer, raw: bool) -> (Context, Captured) {
    let captured = Captured::default();
    let ctx = Context::with_output(Config::new(server.uri()), raw, Box::new(captured.clone()))
      .expect("context");
    (ctx, captured)
  }

  pub async fn mount(server: &MockServer, route: &str, key: &str, value: &str, body: Value) {
    Mock::given(method("GET"))
      .and(path(route))
      .and(query_param(key, value))
      .respond_with(ResponseTemplate::new(200).set_body_json(body))
      .expect(1)
      .mount(server)
      .await;
  }
}
