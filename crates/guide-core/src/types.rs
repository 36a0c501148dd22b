//! Core domain types for the streaming guide.
//!
//! This module defines the leaf data structures used throughout the crate:
//! - Type aliases for domain clarity (Year, Catalog)
//! - `Movie`, an immutable film record
//! - `IntoYear`, the coercion used when a movie is constructed
//! - `StreamingLookup`, the record returned by a guide query

use crate::error::{GuideError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// Release year of a movie
pub type Year = i32;

/// A service's movies keyed by title
///
/// Every key equals the title of the movie stored under it.
pub type Catalog = HashMap<String, Movie>;

// =============================================================================
// Movie
// =============================================================================

/// A single film's metadata.
///
/// Fields are private so a movie cannot change after construction; use the
/// getters to read them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Movie {
    title: String,
    genre: String,
    director: String,
    year: Year,
}

impl Movie {
    /// Create a movie, coercing each field to its declared type.
    ///
    /// The text fields accept anything with a `ToString` impl. The year
    /// accepts integers, floats (truncated) and numeric strings.
    ///
    /// # Errors
    /// `GuideError::TypeConversion` if `year` is not an integer value.
    pub fn new(
        title: impl ToString,
        genre: impl ToString,
        director: impl ToString,
        year: impl IntoYear,
    ) -> Result<Self> {
        Ok(Self {
            title: title.to_string(),
            genre: genre.to_string(),
            director: director.to_string(),
            year: year.into_year()?,
        })
    }

    pub fn get_title(&self) -> &str {
        &self.title
    }

    pub fn get_genre(&self) -> &str {
        &self.genre
    }

    pub fn get_director(&self) -> &str {
        &self.director
    }

    pub fn get_year(&self) -> Year {
        self.year
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - {}, dir. {}",
            self.title, self.year, self.genre, self.director
        )
    }
}

// =============================================================================
// Year coercion
// =============================================================================

/// Conversion of a raw value into a `Year`.
///
/// Implemented for every primitive integer, for `f32`/`f64` and for strings.
pub trait IntoYear {
    fn into_year(self) -> Result<Year>;
}

macro_rules! impl_into_year_for_int {
    ($($t:ty),*) => {$(
        impl IntoYear for $t {
            fn into_year(self) -> Result<Year> {
                Year::try_from(self).map_err(|e| GuideError::year(self, e))
            }
        }
    )*};
}

impl_into_year_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl IntoYear for f64 {
    /// Truncates toward zero, like an integer cast.
    fn into_year(self) -> Result<Year> {
        if !self.is_finite() {
            return Err(GuideError::year(self, "not a finite number"));
        }
        let truncated = self.trunc();
        if truncated < f64::from(Year::MIN) || truncated > f64::from(Year::MAX) {
            return Err(GuideError::year(self, "out of range"));
        }
        Ok(truncated as Year)
    }
}

impl IntoYear for f32 {
    fn into_year(self) -> Result<Year> {
        f64::from(self).into_year()
    }
}

impl IntoYear for &str {
    /// Surrounding whitespace is ignored; the rest must be a base-10 integer.
    fn into_year(self) -> Result<Year> {
        self.trim()
            .parse::<Year>()
            .map_err(|e| GuideError::year(self, e))
    }
}

impl IntoYear for String {
    fn into_year(self) -> Result<Year> {
        self.as_str().into_year()
    }
}

impl IntoYear for &String {
    fn into_year(self) -> Result<Year> {
        self.as_str().into_year()
    }
}

// =============================================================================
// Lookup result
// =============================================================================

/// Answer to "which services carry this movie?"
///
/// `services` holds service names in guide order. When the same title was
/// found with different years, `year` is the one from the last service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamingLookup {
    pub title: String,
    pub year: Year,
    pub services: Vec<String>,
}

impl fmt::Display for StreamingLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) streams on: {}",
            self.title,
            self.year,
            self.services.join(", ")
        )
    }
}
