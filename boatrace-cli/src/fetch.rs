//! The composed fetch operation.
//!
//! Ties validation, the HTTP fetch, and filtering together behind a
//! single operation that cannot fail: parameter problems, HTTP failures,
//! and bad upstream bodies all come back as `{"error": {...}}` documents,
//! and success comes back as the (possibly filtered) upstream document
//! rewrapped under the endpoint key. Either way the result has exactly
//! one top-level key.

use serde_json::Value;

use crate::domain::{Endpoint, RaceDate, RaceNumber, StadiumNumber, Year};
use crate::filter::filter_races;
use crate::openapi::{OpenApiClient, OpenApiError};
use crate::report::{ErrorKind, ErrorReport};

/// A fully validated fetch request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub endpoint: Endpoint,
    pub year: Year,
    pub date: RaceDate,
    pub stadium: Option<StadiumNumber>,
    pub race: Option<RaceNumber>,
}

impl FetchRequest {
    /// Validate raw request parameters.
    ///
    /// Rules are checked in a fixed order (endpoint, year, date, stadium,
    /// race) and the first failure wins. A failure is returned as the
    /// report the caller will print, so invalid input never reaches the
    /// network.
    pub fn validate(
        endpoint: &str,
        yyyy: &str,
        yyyymmdd: &str,
        stadium: Option<i64>,
        race: Option<i64>,
    ) -> Result<Self, ErrorReport> {
        let endpoint = Endpoint::parse(endpoint).map_err(|e| {
            ErrorReport::new(ErrorKind::InvalidParameters, e.to_string())
                .with_detail("endpoint", endpoint)
        })?;

        let year = Year::parse(yyyy).map_err(|_| {
            ErrorReport::new(ErrorKind::InvalidParameters, "yyyy must be a 4-digit year")
                .with_detail("yyyy", yyyy)
        })?;

        let date = RaceDate::parse(yyyymmdd).map_err(|_| {
            ErrorReport::new(
                ErrorKind::InvalidParameters,
                "yyyymmdd must be in YYYYMMDD format",
            )
            .with_detail("yyyymmdd", yyyymmdd)
        })?;

        let stadium = stadium
            .map(|n| {
                StadiumNumber::new(n).map_err(|e| {
                    ErrorReport::new(ErrorKind::InvalidParameters, e.to_string())
                        .with_detail("race_stadium_number", n)
                })
            })
            .transpose()?;

        let race = race
            .map(|n| {
                RaceNumber::new(n).map_err(|e| {
                    ErrorReport::new(ErrorKind::InvalidParameters, e.to_string())
                        .with_detail("race_number", n)
                })
            })
            .transpose()?;

        Ok(FetchRequest {
            endpoint,
            year,
            date,
            stadium,
            race,
        })
    }
}

/// Fetch a race document, filter it, and return the outcome as data.
///
/// This is the only operation the CLI calls.
pub async fn fetch(
    client: &OpenApiClient,
    endpoint: &str,
    yyyy: &str,
    yyyymmdd: &str,
    stadium: Option<i64>,
    race: Option<i64>,
) -> Value {
    let request = match FetchRequest::validate(endpoint, yyyy, yyyymmdd, stadium, race) {
        Ok(request) => request,
        Err(report) => return report.into_document(),
    };

    let document = match client
        .fetch_day(request.endpoint, &request.year, &request.date)
        .await
    {
        Ok(document) => document,
        Err(e) => return e.report().into_document(),
    };

    match filter_races(document, request.endpoint, request.stadium, request.race) {
        Ok(filtered) => filtered,
        // A document the filter cannot work with is an upstream shape
        // problem, reported like any other unclassified API failure
        Err(e) => OpenApiError::Unexpected {
            url: client.day_url(request.endpoint, &request.year, &request.date),
            message: e.to_string(),
        }
        .report()
        .into_document(),
    }
}
