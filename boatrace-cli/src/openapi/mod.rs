//! Boatrace Open API client.
//!
//! The upstream is a static JSON file tree published on GitHub Pages:
//! one document per endpoint, year, and date, addressed as
//! `/{endpoint}/v2/{yyyy}/{yyyymmdd}.json`. There is no authentication,
//! and a date with no published data is a plain 404.

mod client;
mod error;

pub use client::{OpenApiClient, OpenApiConfig};
pub use error::OpenApiError;
