//! # findash-client
//!
//! Async client for the financial dashboard's backend functions.
//!
//! ## Features
//!
//! - **Clean API**: One method per backend function, grouped by domain
//! - **Async/Await**: Built on tokio and reqwest
//! - **Type Safe**: Strongly typed responses using findash-models
//! - **Explicit configuration**: The base URL is passed in through `findash_core::Config`
//! - **Cancellable**: Any request can be aborted through a `CancelToken`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use findash_client::FinDashClient;
//! use findash_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = FinDashClient::new(Config::new("http://localhost:7071/api"))?;
//!
//!     let hits = client.company().search_companies("appl").await?;
//!     println!("{} matches", hits.data.len());
//!
//!     let location = client.location().ip_info("8.8.8.8").await?;
//!     println!("{:?}", location.city);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, findash_core::Error>`. A failed call logs a
//! single `error!` event and hands the error back unchanged: no retries, no
//! fallback values. `Error::is_http()` tells transport and status failures
//! apart from everything else.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod cancel;
pub mod client;
pub mod endpoints;
pub mod transport;

// Re-export the main client and common types
pub use cancel::{CancelHandle, CancelToken};
pub use client::FinDashClient;
pub use findash_core::{Config, Endpoint, Error, Result};
pub use findash_models::*;

// Re-export endpoint modules for direct access if needed
pub use endpoints::{
  company::CompanyEndpoints, location::LocationEndpoints, statements::StatementEndpoints,
};
