//! Upstream data categories.

/// Error returned when parsing an unknown endpoint name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("endpoint must be one of: programs, results, previews")]
pub struct InvalidEndpoint;

/// One of the three data categories published by the Boatrace Open API.
///
/// Each category maps to a same-named top-level key in the response
/// document, so [`Endpoint::as_str`] doubles as both the URL path segment
/// and the key the filter step looks for.
///
/// # Examples
///
/// ```
/// use boatrace_cli::domain::Endpoint;
///
/// let programs = Endpoint::parse("programs").unwrap();
/// assert_eq!(programs.as_str(), "programs");
///
/// // Only the three lowercase literals are accepted
/// assert!(Endpoint::parse("Programs").is_err());
/// assert!(Endpoint::parse("odds").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Race programs (schedules and entries).
    Programs,
    /// Race results.
    Results,
    /// Race previews (pre-race conditions).
    Previews,
}

impl Endpoint {
    /// Parse an endpoint from its lowercase upstream name.
    pub fn parse(s: &str) -> Result<Self, InvalidEndpoint> {
        match s {
            "programs" => Ok(Endpoint::Programs),
            "results" => Ok(Endpoint::Results),
            "previews" => Ok(Endpoint::Previews),
            _ => Err(InvalidEndpoint),
        }
    }

    /// Returns the name used in request URLs and response keys.
    pub fn as_str(self) -> &'static str {
        match self {
            Endpoint::Programs => "programs",
            Endpoint::Results => "results",
            Endpoint::Previews => "previews",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_endpoints() {
        assert_eq!(Endpoint::parse("programs"), Ok(Endpoint::Programs));
        assert_eq!(Endpoint::parse("results"), Ok(Endpoint::Results));
        assert_eq!(Endpoint::parse("previews"), Ok(Endpoint::Previews));
    }

    #[test]
    fn reject_unknown_names() {
        assert!(Endpoint::parse("").is_err());
        assert!(Endpoint::parse("odds").is_err());
        assert!(Endpoint::parse("program").is_err());
        assert!(Endpoint::parse("programss").is_err());
    }

    #[test]
    fn reject_wrong_case() {
        assert!(Endpoint::parse("Programs").is_err());
        assert!(Endpoint::parse("RESULTS").is_err());
    }

    #[test]
    fn reject_surrounding_whitespace() {
        assert!(Endpoint::parse(" programs").is_err());
        assert!(Endpoint::parse("programs ").is_err());
    }

    #[test]
    fn as_str_roundtrip() {
        for name in ["programs", "results", "previews"] {
            assert_eq!(Endpoint::parse(name).unwrap().as_str(), name);
        }
    }
}
