//! Integration tests for the streaming guide.
//!
//! These build a small guide through the public API and check the lookup
//! scenarios end to end.

use guide_core::{GuideError, Movie, StreamingGuide, StreamingLookup, StreamingService};

fn create_test_guide() -> StreamingGuide {
    let mut alpha = StreamingService::new("AlphaFlix");
    alpha.add_movie(Movie::new("Dune", "Sci-Fi", "Denis Villeneuve", 2021).unwrap());

    let mut beta = StreamingService::new("BetaStream");
    beta.add_movie(Movie::new("Dune", "Sci-Fi", "David Lynch", 1984).unwrap());
    beta.add_movie(Movie::new("Arrival", "Sci-Fi", "Denis Villeneuve", "2016").unwrap());

    let mut guide = StreamingGuide::new();
    guide.add_streaming_service(alpha);
    guide.add_streaming_service(beta);
    guide
}

#[test]
fn test_title_on_two_services() {
    let guide = create_test_guide();

    let found = guide.who_streams_this_movie("Dune");

    assert_eq!(
        found,
        Some(StreamingLookup {
            title: "Dune".to_string(),
            year: 1984,
            services: vec!["AlphaFlix".to_string(), "BetaStream".to_string()],
        })
    );
}

#[test]
fn test_title_on_one_service() {
    let guide = create_test_guide();

    let found = guide.who_streams_this_movie("Arrival").unwrap();

    assert_eq!(found.title, "Arrival");
    assert_eq!(found.year, 2016);
    assert_eq!(found.services, vec!["BetaStream"]);
}

#[test]
fn test_unknown_title() {
    let guide = create_test_guide();
    assert!(guide.who_streams_this_movie("Inception").is_none());
}

#[test]
fn test_removals_change_lookup() {
    let mut guide = create_test_guide();

    guide.delete_streaming_service("BetaStream");
    let found = guide.who_streams_this_movie("Dune").unwrap();
    assert_eq!(found.year, 2021);
    assert_eq!(found.services, vec!["AlphaFlix"]);
    assert!(guide.who_streams_this_movie("Arrival").is_none());

    guide
        .get_streaming_service_mut("AlphaFlix")
        .unwrap()
        .delete_movie("Dune");
    assert!(guide.who_streams_this_movie("Dune").is_none());
}

#[test]
fn test_same_service_added_twice() {
    let mut alpha = StreamingService::new("AlphaFlix");
    alpha.add_movie(Movie::new("Dune", "Sci-Fi", "Denis Villeneuve", 2021).unwrap());

    let mut guide = StreamingGuide::new();
    guide.add_streaming_service(alpha.clone());
    guide.add_streaming_service(alpha);
    assert_eq!(guide.len(), 2);

    guide.delete_streaming_service("AlphaFlix");

    assert_eq!(guide.len(), 1);
    assert_eq!(guide.get_services()[0].get_name(), "AlphaFlix");
    assert_eq!(
        guide.who_streams_this_movie("Dune").unwrap().services,
        vec!["AlphaFlix"]
    );
}

#[test]
fn test_bad_year_is_rejected_before_reaching_catalog() {
    let result = Movie::new("Dune", "Sci-Fi", "David Lynch", "MCMLXXXIV");
    assert!(matches!(result, Err(GuideError::TypeConversion { .. })));
}

#[test]
fn test_guide_from_parsed_entries() {
    let mut guide = StreamingGuide::new();
    for spec in [
        "AlphaFlix=Dune::Sci-Fi::Denis Villeneuve::2021",
        "BetaStream=Dune::Sci-Fi::David Lynch::1984;Arrival::Sci-Fi::Denis Villeneuve::2016",
    ] {
        guide.add_streaming_service(guide_core::parse_service(spec).unwrap());
    }

    assert_eq!(
        guide.who_streams_this_movie("Dune"),
        create_test_guide().who_streams_this_movie("Dune")
    );
}
