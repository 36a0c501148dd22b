//! # Guide Core Crate
//!
//! An in-memory catalog relating movies to the streaming services that carry
//! them, answering "which services carry movie X, and what year is it from?"
//!
//! ## Main Components
//!
//! - **types**: `Movie`, year coercion and the `StreamingLookup` record
//! - **service**: `StreamingService`, a named catalog keyed by title
//! - **guide**: `StreamingGuide`, ordered services plus the lookup
//! - **parser**: Parse compact `Title::Genre::Director::Year` entries
//! - **error**: Error types for construction
//!
//! ## Example Usage
//!
//! ```
//! use guide_core::{Movie, StreamingGuide, StreamingService};
//!
//! let mut alpha = StreamingService::new("AlphaFlix");
//! alpha.add_movie(Movie::new("Dune", "Sci-Fi", "Denis Villeneuve", 2021)?);
//!
//! let mut guide = StreamingGuide::new();
//! guide.add_streaming_service(alpha);
//!
//! let found = guide.who_streams_this_movie("Dune").unwrap();
//! assert_eq!(found.services, vec!["AlphaFlix"]);
//! assert!(guide.who_streams_this_movie("Inception").is_none());
//! # Ok::<(), guide_core::GuideError>(())
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod service;
pub mod guide;
pub mod parser;

// Re-export commonly used types for convenience
pub use error::{GuideError, Result};
pub use guide::StreamingGuide;
pub use parser::{parse_movie, parse_service};
pub use service::StreamingService;
pub use types::{
    // Type aliases
    Catalog,
    Year,
    // Core types
    IntoYear,
    Movie,
    StreamingLookup,
};
