//! Race record filtering.
//!
//! Narrows the race list of a fetched document by stadium and/or race
//! number. Error documents and documents without the endpoint key pass
//! through unchanged; everything else is rewrapped under the endpoint
//! key, so the single-top-level-key shape holds on every success path.
//! Applying a filter to an endpoint value that is not a list is an
//! error.

use serde_json::{Map, Value};
use tracing::trace;

use crate::domain::{Endpoint, RaceNumber, StadiumNumber};

/// Error returned when a set filter meets an endpoint value that is not
/// a list of race records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{endpoint} value is not a list of race records")]
pub struct NotFilterable {
    endpoint: &'static str,
}

/// Returns the integer field `name` of a race record, if present.
fn record_number(record: &Value, name: &str) -> Option<i64> {
    record.get(name).and_then(Value::as_i64)
}

/// Compute the value to rewrap under the endpoint key, or `None` if the
/// document passes through unchanged.
fn filtered_value(
    map: &Map<String, Value>,
    endpoint: Endpoint,
    stadium: Option<StadiumNumber>,
    race: Option<RaceNumber>,
) -> Result<Option<Value>, NotFilterable> {
    // Error documents are never filtered.
    if map.contains_key("error") {
        return Ok(None);
    }

    let Some(value) = map.get(endpoint.as_str()) else {
        return Ok(None);
    };

    let Value::Array(races) = value else {
        // A non-list value rides along untouched, but there is nothing
        // a filter can select from it.
        if stadium.is_none() && race.is_none() {
            return Ok(Some(value.clone()));
        }
        return Err(NotFilterable {
            endpoint: endpoint.as_str(),
        });
    };

    let filtered: Vec<Value> = races
        .iter()
        .filter(|record| match stadium {
            Some(stadium) => record_number(record, "race_stadium_number") == Some(stadium.get()),
            None => true,
        })
        .filter(|record| match race {
            Some(race) => record_number(record, "race_number") == Some(race.get()),
            None => true,
        })
        .cloned()
        .collect();

    trace!(
        endpoint = endpoint.as_str(),
        before = races.len(),
        after = filtered.len(),
        "filtered race records"
    );

    Ok(Some(Value::Array(filtered)))
}

/// Filter a race document by stadium and/or race number.
///
/// Both filters are optional and compose as logical AND: stadium first,
/// then race. Records missing an inspected field never match a set
/// filter. An empty match is still a success document with an empty
/// list, not an error.
pub fn filter_races(
    document: Value,
    endpoint: Endpoint,
    stadium: Option<StadiumNumber>,
    race: Option<RaceNumber>,
) -> Result<Value, NotFilterable> {
    let rewrapped = match document.as_object() {
        Some(map) => filtered_value(map, endpoint, stadium, race)?,
        None => None,
    };

    Ok(match rewrapped {
        Some(value) => {
            let mut wrapped = Map::new();
            wrapped.insert(endpoint.as_str().to_string(), value);
            Value::Object(wrapped)
        }
        None => document,
    })
}
