//! In-memory catalog of vehicle listings.
//!
//! The catalog is the single owner of every listing and the only place that
//! mints listing identifiers. Mutation goes through [`Catalog::append`], which
//! takes `&mut self`; callers sharing a catalog across threads wrap the whole
//! catalog in one mutex.

use crate::core::vehicle::{Vehicle, VehicleDetails, seed_listings};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Search and filter criteria for browsing the catalog.
///
/// Every criterion is optional; an empty string behaves the same as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingFilter {
    /// Case-insensitive text matched against brand or model.
    #[serde(default)]
    pub search: String,
    pub brand: Option<String>,
    pub location: Option<String>,
    pub year: Option<String>,
}

impl ListingFilter {
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        let details = &vehicle.details;
        let search = self.search.to_lowercase();

        let matches_search = details.brand.to_lowercase().contains(&search)
            || details.model.to_lowercase().contains(&search);
        let matches_brand = active(&self.brand).is_none_or(|brand| details.brand == brand);
        let matches_location =
            active(&self.location).is_none_or(|location| details.location == location);
        let matches_year = active(&self.year).is_none_or(|year| details.year.to_string() == year);

        matches_search && matches_brand && matches_location && matches_year
    }
}

fn active(criterion: &Option<String>) -> Option<&str> {
    criterion.as_deref().filter(|value| !value.is_empty())
}

/// Distinct values present in the catalog, in the order they first appear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogFacets {
    pub brands: Vec<String>,
    pub locations: Vec<String>,
    pub years: Vec<i32>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    vehicles: Vec<Vehicle>,
    next_id: u64,
}

impl Catalog {
    /// Creates a catalog holding `listings`, numbered from "1" in order.
    pub fn with_listings(listings: Vec<VehicleDetails>) -> Self {
        let mut catalog = Self {
            vehicles: Vec::with_capacity(listings.len()),
            next_id: 1,
        };
        for details in listings {
            catalog.append(details);
        }
        debug!("Catalog seeded with {} listings", catalog.len());
        catalog
    }

    /// Creates a catalog holding the built-in listings.
    pub fn seeded() -> Self {
        Self::with_listings(seed_listings())
    }

    /// Assigns the next identifier to `details` and stores it at the end of
    /// the catalog.
    pub fn append(&mut self, details: VehicleDetails) -> Vehicle {
        let vehicle = Vehicle {
            id: self.next_id.to_string(),
            details,
        };
        self.next_id += 1;
        self.vehicles.push(vehicle.clone());
        debug!("Catalog APPEND id={} ({})", vehicle.id, vehicle.title());
        vehicle
    }

    pub fn find(&self, id: &str) -> Option<&Vehicle> {
        let found = self.vehicles.iter().find(|v| v.id == id);
        if found.is_none() {
            debug!("Catalog MISS for id: {}", id);
        }
        found
    }

    pub fn filter(&self, filter: &ListingFilter) -> Vec<&Vehicle> {
        let matches: Vec<&Vehicle> = self.vehicles.iter().filter(|v| filter.matches(v)).collect();
        debug!(?filter, "Filter matched {} of {}", matches.len(), self.len());
        matches
    }

    /// Listings whose location is exactly `location`.
    pub fn listed_by(&self, location: &str) -> Vec<&Vehicle> {
        self.vehicles
            .iter()
            .filter(|v| v.details.location == location)
            .collect()
    }

    pub fn facets(&self) -> CatalogFacets {
        let mut facets = CatalogFacets::default();
        for vehicle in &self.vehicles {
            let details = &vehicle.details;
            if !facets.brands.contains(&details.brand) {
                facets.brands.push(details.brand.clone());
            }
            if !facets.locations.contains(&details.location) {
                facets.locations.push(details.location.clone());
            }
            if !facets.years.contains(&details.year) {
                facets.years.push(details.year);
            }
        }
        facets
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.iter()
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}
