//! Boatrace Open API fetch tool.
//!
//! Retrieves public racing schedule, result, and preview documents from
//! the Boatrace Open API, optionally narrows them by stadium and race
//! number, and returns the outcome as JSON with exactly one top-level
//! key: the endpoint name on success, `error` on any failure.

pub mod domain;
pub mod fetch;
pub mod filter;
pub mod openapi;
pub mod report;
