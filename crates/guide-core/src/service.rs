//! A named streaming service and its catalog of movies.

use crate::types::{Catalog, Movie};
use tracing::debug;

/// A streaming service holding a catalog of movies keyed by title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamingService {
    name: String,
    catalog: Catalog,
}

impl StreamingService {
    /// Creates a service with an empty catalog
    pub fn new(name: impl ToString) -> Self {
        Self {
            name: name.to_string(),
            catalog: Catalog::new(),
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// The live catalog, not a copy.
    pub fn get_catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Mutable access to the live catalog.
    ///
    /// Changes made through the returned reference are the service's own
    /// state. Callers inserting directly must keep each key equal to its
    /// movie's title; `add_movie` does that for you.
    pub fn get_catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    /// Get a movie by title
    pub fn get_movie(&self, title: &str) -> Option<&Movie> {
        self.catalog.get(title)
    }

    /// Insert a movie under its title, replacing any movie with the same title
    pub fn add_movie(&mut self, movie: Movie) {
        debug!(service = %self.name, "Adding {}", movie);
        if let Some(previous) = self.catalog.insert(movie.get_title().to_string(), movie) {
            debug!(service = %self.name, "Replaced {}", previous);
        }
    }

    /// Remove a movie by title. Missing titles are ignored.
    pub fn delete_movie(&mut self, title: &str) {
        match self.catalog.remove(title) {
            Some(movie) => debug!(service = %self.name, "Removed {}", movie),
            None => debug!(service = %self.name, "No movie titled {:?} to remove", title),
        }
    }

    /// Number of movies in the catalog
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}
