#![allow(dead_code)]

use findash_client::{Config, FinDashClient};
use std::io;
use std::sync::{Arc, Mutex};
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;
use wiremock::{MockServer, Request};

/// In-memory sink for formatted log lines
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
  pub fn lines(&self) -> Vec<String> {
    let bytes = self.0.lock().unwrap();
    String::from_utf8_lossy(&bytes)
      .lines()
      .filter(|line| !line.trim().is_empty())
      .map(str::to_string)
      .collect()
  }
}

impl io::Write for LogBuffer {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    self.0.lock().unwrap().extend_from_slice(buf);
    Ok(buf.len())
  }

  fn flush(&mut self) -> io::Result<()> {
    Ok(())
  }
}

impl<'a> MakeWriter<'a> for LogBuffer {
  type Writer = LogBuffer;

  fn make_writer(&'a self) -> Self::Writer {
    self.clone()
  }
}

/// Capture error-level events emitted on this thread until the guard drops
pub fn capture_errors() -> (LogBuffer, DefaultGuard) {
  let buffer = LogBuffer::default();
  let subscriber = tracing_subscriber::fmt()
    .with_writer(buffer.clone())
    .with_max_level(tracing::Level::ERROR)
    .with_ansi(false)
    .finish();
  let guard = tracing::subscriber::set_default(subscriber);
  (buffer, guard)
}

pub fn client_for(server: &MockServer) -> FinDashClient {
  FinDashClient::new(Config::new(server.uri())).expect("client")
}

/// Query string of a received request as owned key/value pairs
pub fn query_pairs(request: &Request) -> Vec<(String, String)> {
  request.url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect()
}

pub fn pair(key: &str, value: &str) -> Vec<(String, String)> {
  vec![(key.to_string(), value.to_string())]
}
