//! Stadium number.

/// Error returned for an out-of-range stadium number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("race_stadium_number must be an integer between 1 and 24")]
pub struct InvalidStadiumNumber;

/// A racing venue identifier.
///
/// There are 24 boatrace stadiums nationwide, numbered 1 through 24.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StadiumNumber(u8);

impl StadiumNumber {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 24;

    /// Validate an integer as a stadium number.
    pub fn new(n: i64) -> Result<Self, InvalidStadiumNumber> {
        if (Self::MIN..=Self::MAX).contains(&n) {
            Ok(StadiumNumber(n as u8))
        } else {
            Err(InvalidStadiumNumber)
        }
    }

    /// Returns the stadium number as an integer.
    pub fn get(self) -> i64 {
        i64::from(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_full_range() {
        for n in 1..=24 {
            assert!(StadiumNumber::new(n).is_ok());
        }
    }

    #[test]
    fn reject_out_of_range() {
        assert!(StadiumNumber::new(0).is_err());
        assert!(StadiumNumber::new(25).is_err());
        assert!(StadiumNumber::new(-1).is_err());
        assert!(StadiumNumber::new(i64::MIN).is_err());
        assert!(StadiumNumber::new(i64::MAX).is_err());
    }

    #[test]
    fn get_roundtrip() {
        assert_eq!(StadiumNumber::new(1).unwrap().get(), 1);
        assert_eq!(StadiumNumber::new(24).unwrap().get(), 24);
    }
}
