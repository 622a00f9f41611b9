//! Marketplace business logic

pub mod catalog;
pub mod config;
pub mod error;
pub mod log;
pub mod pricing;
pub mod sell;
pub mod vehicle;

// Re-export main types for cleaner imports
pub use catalog::{Catalog, CatalogFacets, ListingFilter};
pub use error::MarketError;
pub use pricing::{EstimateRequest, PriceEstimator, PriceQuote};
pub use sell::{OfferSheet, Sale, SaleForm};
pub use vehicle::{FuelType, Transmission, Vehicle, VehicleDetails};
