//! # findash-models
//!
//! Data models for the dashboard backend's responses.
//!
//! This crate provides strongly-typed Rust structures for every record the
//! backend returns: company search hits, profiles, key metrics, the three
//! financial statements, 10-K filing references and IP geolocation.
//!
//! ## Features
//!
//! - **Type Safety**: All responses are strongly typed
//! - **Serde Integration**: Wire names are the backend's camelCase names
//! - **Lossless**: Numbers keep their JSON form, explicit `null`s are kept
//!   apart from missing keys, and unmodelled fields land in `extra`
//! - **Formatting**: Helpers for rendering large financial figures
//!
//! ## Usage
//!
//! ```ignore
//! use findash_models::{CompanyProfile, CompanyCashFlow};
//!
//! let profiles: Vec<CompanyProfile> = serde_json::from_str(&profile_json)?;
//! let cash_flow: Vec<CompanyCashFlow> = serde_json::from_str(&cash_flow_json)?;
//! ```

#![warn(clippy::all)]

pub mod common;
pub mod company;
pub mod format;
pub mod location;
pub mod statements;

// Re-export common types for convenience
pub use common::*;

// Re-export all model types
pub use company::*;
pub use location::*;
pub use statements::*;
