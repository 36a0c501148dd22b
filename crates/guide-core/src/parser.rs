//! Parser for compact catalog entries.
//!
//! Formats:
//! - movie:   `Title::Genre::Director::Year`
//! - service: `Name=ENTRY;ENTRY;...` (`Name=` for an empty catalog)
//!
//! Used by the command-line driver to build a guide from its arguments.

use crate::error::{GuideError, Result};
use crate::service::StreamingService;
use crate::types::Movie;

/// Parse a single `Title::Genre::Director::Year` entry
pub fn parse_movie(entry: &str) -> Result<Movie> {
    let missing = |field: &str| GuideError::ParseError {
        input: entry.to_string(),
        reason: format!("Missing {}", field),
    };

    // Split by "::"
    let mut parts = entry.trim().split("::");

    let title = parts.next().filter(|s| !s.is_empty()).ok_or_else(|| missing("title"))?;
    let genre = parts.next().ok_or_else(|| missing("genre"))?;
    let director = parts.next().ok_or_else(|| missing("director"))?;
    let year = parts.next().ok_or_else(|| missing("year"))?;

    if parts.next().is_some() {
        return Err(GuideError::ParseError {
            input: entry.to_string(),
            reason: "Expected 4 fields separated by '::'".to_string(),
        });
    }

    Movie::new(title, genre, director, year)
}

/// Parse a `Name=ENTRY;ENTRY` service description
///
/// Blank entries (e.g. a trailing `;`) are skipped. A title listed twice
/// keeps the later entry, as with `add_movie`.
pub fn parse_service(spec: &str) -> Result<StreamingService> {
    let (name, entries) = spec.split_once('=').ok_or_else(|| GuideError::ParseError {
        input: spec.to_string(),
        reason: "Expected NAME=ENTRIES".to_string(),
    })?;

    let name = name.trim();
    if name.is_empty() {
        return Err(GuideError::ParseError {
            input: spec.to_string(),
            reason: "Missing service name".to_string(),
        });
    }

    let mut service = StreamingService::new(name);
    for entry in entries.split(';').filter(|e| !e.trim().is_empty()) {
        service.add_movie(parse_movie(entry)?);
    }
    Ok(service)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_movie() {
        let movie = parse_movie("Dune::Sci-Fi::David Lynch::1984").unwrap();
        assert_eq!(movie.get_title(), "Dune");
        assert_eq!(movie.get_genre(), "Sci-Fi");
        assert_eq!(movie.get_director(), "David Lynch");
        assert_eq!(movie.get_year(), 1984);
    }

    #[test]
    fn test_parse_movie_missing_fields() {
        let err = parse_movie("Dune::Sci-Fi").unwrap_err();
        assert!(matches!(err, GuideError::ParseError { ref reason, .. } if reason == "Missing director"));

        assert!(parse_movie("").is_err());
        assert!(parse_movie("a::b::c::1::extra").is_err());
    }

    #[test]
    fn test_parse_movie_bad_year() {
        let err = parse_movie("Dune::Sci-Fi::David Lynch::soon").unwrap_err();
        assert!(matches!(err, GuideError::TypeConversion { .. }));
    }

    #[test]
    fn test_parse_service() {
        let service =
            parse_service("BetaStream=Dune::Sci-Fi::David Lynch::1984;Arrival::Sci-Fi::Denis Villeneuve::2016;")
                .unwrap();

        assert_eq!(service.get_name(), "BetaStream");
        assert_eq!(service.len(), 2);
        assert_eq!(service.get_movie("Arrival").unwrap().get_year(), 2016);
    }

    #[test]
    fn test_parse_empty_service() {
        let service = parse_service("GammaTV=").unwrap();
        assert_eq!(service.get_name(), "GammaTV");
        assert!(service.is_empty());
    }

    #[test]
    fn test_parse_service_errors() {
        assert!(parse_service("NoEquals").is_err());
        assert!(parse_service("=Dune::Sci-Fi::David Lynch::1984").is_err());
        assert!(parse_service("AlphaFlix=Dune").is_err());
    }
}
