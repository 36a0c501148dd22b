//! The streaming guide: an ordered list of services and the cross-service
//! lookup over their catalogs.

use crate::service::StreamingService;
use crate::types::{StreamingLookup, Year};
use tracing::{debug, warn};

/// Holds streaming services in the order they were added.
///
/// Order does not change lookup membership, but it decides the order of
/// service names in a `StreamingLookup` and which duplicate is removed first.
#[derive(Debug, Clone, Default)]
pub struct StreamingGuide {
    services: Vec<StreamingService>,
}

impl StreamingGuide {
    /// Create an empty guide.
    pub fn new() -> Self {
        Self {
            services: Vec::new(),
        }
    }

    /// Services in guide order
    pub fn get_services(&self) -> &[StreamingService] {
        &self.services
    }

    /// First service with the given name, for mutation after it was added
    pub fn get_streaming_service_mut(&mut self, name: &str) -> Option<&mut StreamingService> {
        self.services.iter_mut().find(|s| s.get_name() == name)
    }

    /// Append a service.
    ///
    /// No uniqueness check: the same service, or two services sharing a
    /// name, may be added more than once.
    pub fn add_streaming_service(&mut self, service: StreamingService) {
        debug!(
            "Adding service {} ({} movies)",
            service.get_name(),
            service.len()
        );
        self.services.push(service);
    }

    /// Remove the first service named `name`. Unknown names are ignored.
    pub fn delete_streaming_service(&mut self, name: &str) {
        match self.services.iter().position(|s| s.get_name() == name) {
            Some(idx) => {
                self.services.remove(idx);
                debug!("Removed service {} at position {}", name, idx);
            }
            None => debug!("No service named {:?} to remove", name),
        }
    }

    /// Find every service carrying `title`.
    ///
    /// ## Algorithm
    /// 1. Walk services in guide order
    /// 2. For each catalog holding `title`, record the movie's year and
    ///    append the service name
    /// 3. Return `None` when nothing matched
    ///
    /// If services disagree on the year, the last match wins.
    pub fn who_streams_this_movie(&self, title: &str) -> Option<StreamingLookup> {
        let mut services = Vec::new();
        let mut year: Option<Year> = None;

        for service in &self.services {
            if let Some(movie) = service.get_movie(title) {
                if let Some(previous) = year.filter(|&y| y != movie.get_year()) {
                    warn!(
                        "{:?} listed as {} by an earlier service but {} by {}",
                        title,
                        previous,
                        movie.get_year(),
                        service.get_name()
                    );
                }
                year = Some(movie.get_year());
                services.push(service.get_name().to_string());
            }
        }

        debug!("Lookup {:?}: {} matching services", title, services.len());

        year.map(|year| StreamingLookup {
            title: title.to_string(),
            year,
            services,
        })
    }

    /// Number of services (duplicates included)
    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
