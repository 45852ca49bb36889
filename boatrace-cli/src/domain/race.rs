//! Race number.

/// Error returned for an out-of-range race number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("race_number must be an integer between 1 and 12")]
pub struct InvalidRaceNumber;

/// A race within a day's schedule at one stadium.
///
/// Each stadium runs up to 12 races a day, numbered 1 through 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RaceNumber(u8);

impl RaceNumber {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 12;

    /// Validate an integer as a race number.
    pub fn new(n: i64) -> Result<Self, InvalidRaceNumber> {
        if (Self::MIN..=Self::MAX).contains(&n) {
            Ok(RaceNumber(n as u8))
        } else {
            Err(InvalidRaceNumber)
        }
    }

    /// Returns the race number as an integer.
    pub fn get(self) -> i64 {
        i64::from(self.0)
    }
}
