//! Year and date request parameters.
//!
//! The upstream API addresses documents by a 4-digit year and an 8-digit
//! YYYYMMDD date, both used purely as URL path segments. Validation is
//! shape-only (digit count, ASCII digits): a shape-valid date with no
//! published document is the upstream's 404 to report, not ours.

use std::fmt;

/// Error returned when parsing an invalid year string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid year: {reason}")]
pub struct InvalidYear {
    reason: &'static str,
}

/// Error returned when parsing an invalid date string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid date: {reason}")]
pub struct InvalidRaceDate {
    reason: &'static str,
}

/// A 4-digit year string, e.g. `2025`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Year([u8; 4]);

impl Year {
    /// Parse a year from a string of exactly 4 ASCII digits.
    pub fn parse(s: &str) -> Result<Self, InvalidYear> {
        let bytes = s.as_bytes();

        if bytes.len() != 4 {
            return Err(InvalidYear {
                reason: "must be exactly 4 digits",
            });
        }

        for &b in bytes {
            if !b.is_ascii_digit() {
                return Err(InvalidYear {
                    reason: "must be ASCII digits 0-9",
                });
            }
        }

        Ok(Year([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Returns the year as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII digits are stored
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Year({})", self.as_str())
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An 8-digit date string in YYYYMMDD form, e.g. `20251222`.
///
/// # Examples
///
/// ```
/// use boatrace_cli::domain::RaceDate;
///
/// let date = RaceDate::parse("20251222").unwrap();
/// assert_eq!(date.as_str(), "20251222");
///
/// // Wrong length or non-digits are rejected
/// assert!(RaceDate::parse("2025122").is_err());
/// assert!(RaceDate::parse("2025-12-22").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RaceDate([u8; 8]);

impl RaceDate {
    /// Parse a date from a string of exactly 8 ASCII digits.
    pub fn parse(s: &str) -> Result<Self, InvalidRaceDate> {
        let bytes = s.as_bytes();

        if bytes.len() != 8 {
            return Err(InvalidRaceDate {
                reason: "must be exactly 8 digits",
            });
        }

        for &b in bytes {
            if !b.is_ascii_digit() {
                return Err(InvalidRaceDate {
                    reason: "must be ASCII digits 0-9",
                });
            }
        }

        let mut digits = [0u8; 8];
        digits.copy_from_slice(bytes);
        Ok(RaceDate(digits))
    }

    /// Returns the date as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII digits are stored
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for RaceDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RaceDate({})", self.as_str())
    }
}

impl fmt::Display for RaceDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_year() {
        assert!(Year::parse("2025").is_ok());
        assert!(Year::parse("0000").is_ok());
        assert!(Year::parse("9999").is_ok());
    }

    #[test]
    fn reject_wrong_length_year() {
        assert!(Year::parse("").is_err());
        assert!(Year::parse("25").is_err());
        assert!(Year::parse("202").is_err());
        assert!(Year::parse("20255").is_err());
    }

    #[test]
    fn reject_non_digit_year() {
        assert!(Year::parse("abcd").is_err());
        assert!(Year::parse("20a5").is_err());
        assert!(Year::parse("-205").is_err());
        // Full-width digits are digits to some definitions, not this one
        assert!(Year::parse("２０２５").is_err());
    }

    #[test]
    fn parse_valid_date() {
        assert!(RaceDate::parse("20251222").is_ok());
        assert!(RaceDate::parse("00000000").is_ok());
        // Shape-only validation: not a real calendar date, still accepted
        assert!(RaceDate::parse("20259999").is_ok());
    }

    #[test]
    fn reject_wrong_length_date() {
        assert!(RaceDate::parse("").is_err());
        assert!(RaceDate::parse("2025122").is_err());
        assert!(RaceDate::parse("202512223").is_err());
    }

    #[test]
    fn reject_non_digit_date() {
        assert!(RaceDate::parse("2025-12-22").is_err());
        assert!(RaceDate::parse("2025122a").is_err());
        assert!(RaceDate::parse("abcdefgh").is_err());
    }

    #[test]
    fn as_str_roundtrip() {
        assert_eq!(Year::parse("2025").unwrap().as_str(), "2025");
        assert_eq!(RaceDate::parse("20251222").unwrap().as_str(), "20251222");
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Year::parse("2025").unwrap()), "2025");
        assert_eq!(
            format!("{}", RaceDate::parse("20251222").unwrap()),
            "20251222"
        );
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Year::parse("2025").unwrap()), "Year(2025)");
        assert_eq!(
            format!("{:?}", RaceDate::parse("20251222").unwrap()),
            "RaceDate(20251222)"
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any 4-digit string parses as a year
        #[test]
        fn four_digits_always_parse(s in "[0-9]{4}") {
            prop_assert!(Year::parse(&s).is_ok());
        }

        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn year_roundtrip(s in "[0-9]{4}") {
            let year = Year::parse(&s).unwrap();
            prop_assert_eq!(year.as_str(), s.as_str());
        }

        /// Wrong-length digit strings are always rejected
        #[test]
        fn year_wrong_length_rejected(s in "[0-9]{0,3}|[0-9]{5,12}") {
            prop_assert!(Year::parse(&s).is_err());
        }

        /// Strings containing a non-digit are always rejected
        #[test]
        fn year_non_digit_rejected(s in "[0-9a-z]{4}".prop_filter("has letter", |s| s.chars().any(|c| c.is_ascii_lowercase()))) {
            prop_assert!(Year::parse(&s).is_err());
        }

        /// Any 8-digit string parses as a date
        #[test]
        fn eight_digits_always_parse(s in "[0-9]{8}") {
            prop_assert!(RaceDate::parse(&s).is_ok());
        }

        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn date_roundtrip(s in "[0-9]{8}") {
            let date = RaceDate::parse(&s).unwrap();
            prop_assert_eq!(date.as_str(), s.as_str());
        }

        /// Wrong-length digit strings are always rejected
        #[test]
        fn date_wrong_length_rejected(s in "[0-9]{0,7}|[0-9]{9,16}") {
            prop_assert!(RaceDate::parse(&s).is_err());
        }

        /// Strings containing a non-digit are always rejected
        #[test]
        fn date_non_digit_rejected(s in "[0-9a-z]{8}".prop_filter("has letter", |s| s.chars().any(|c| c.is_ascii_lowercase()))) {
            prop_assert!(RaceDate::parse(&s).is_err());
        }
    }
}
