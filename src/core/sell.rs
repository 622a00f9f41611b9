//! The "sell my vehicle" workflow: validate a form, gather offers, and list
//! the vehicle when the marketplace's own offer is accepted.

use crate::core::catalog::Catalog;
use crate::core::error::{MarketError, Result};
use crate::core::pricing::{EstimateRequest, PriceEstimator, PriceQuote};
use crate::core::vehicle::{FuelType, Transmission, Vehicle, VehicleDetails};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub const INTERNAL_PLATFORM: &str = "AutoLink";
pub const INTERNAL_PLATFORM_URL: &str = "#";
pub const INTERNAL_PREMIUM: f64 = 1.05;

/// Location recorded on every listing created through the marketplace.
pub const LISTED_LOCATION: &str = "Listed on AutoLink";

pub const MAX_PHOTOS: usize = 5;

/// Earliest model year accepted by the form.
const FIRST_MODEL_YEAR: i32 = 1886;

/// Raw values as typed into the sell form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleForm {
    pub brand: String,
    pub year: String,
    pub km_driven: String,
    pub fuel_type: String,
    pub transmission: String,
    pub owner: String,
    pub seats: String,
    pub engine: String,
    pub max_power: String,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub video: Option<String>,
}

/// A validated sell request.
#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    pub brand: String,
    pub year: i32,
    pub km_driven: u64,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub owner: String,
    pub seats: u8,
    pub engine: String,
    pub max_power: String,
    pub photos: Vec<String>,
    pub video: Option<String>,
}

impl SaleForm {
    /// Parses every field, failing on the first one that is not acceptable.
    ///
    /// Photos past [`MAX_PHOTOS`] are dropped and a blank video reference is
    /// treated as no video.
    pub fn validate(&self, current_year: i32) -> Result<Sale> {
        let brand = self.brand.trim();
        if brand.is_empty() {
            return Err(MarketError::invalid("brand", &self.brand));
        }

        let year = self
            .year
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|y| (FIRST_MODEL_YEAR..=current_year + 1).contains(y))
            .ok_or_else(|| MarketError::invalid("year", &self.year))?;

        let km_driven = self
            .km_driven
            .trim()
            .parse::<u64>()
            .map_err(|_| MarketError::invalid("kmDriven", &self.km_driven))?;

        let fuel_type = self.fuel_type.parse::<FuelType>()?;
        let transmission = self.transmission.parse::<Transmission>()?;

        let seats = self
            .seats
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|s| *s > 0)
            .ok_or_else(|| MarketError::invalid("seats", &self.seats))?;

        if self.photos.len() > MAX_PHOTOS {
            debug!(
                "Dropping {} photos past the limit of {}",
                self.photos.len() - MAX_PHOTOS,
                MAX_PHOTOS
            );
        }

        Ok(Sale {
            brand: brand.to_string(),
            year,
            km_driven,
            fuel_type,
            transmission,
            owner: self.owner.trim().to_string(),
            seats,
            engine: self.engine.trim().to_string(),
            max_power: self.max_power.trim().to_string(),
            photos: self.photos.iter().take(MAX_PHOTOS).cloned().collect(),
            video: self.video.clone().filter(|v| !v.trim().is_empty()),
        })
    }
}

impl Sale {
    pub fn estimate_request(&self) -> EstimateRequest {
        EstimateRequest {
            brand: self.brand.clone(),
            year: self.year,
            km_driven: self.km_driven,
            fuel_type: self.fuel_type,
            transmission: self.transmission,
        }
    }
}

/// External quotes followed by the marketplace's own offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OfferSheet {
    quotes: Vec<PriceQuote>,
}

impl OfferSheet {
    /// Adds the internal offer, priced at a premium over the first external
    /// quote. An empty quote set gets no internal offer.
    pub fn from_external(mut quotes: Vec<PriceQuote>) -> Self {
        if let Some(first) = quotes.first() {
            let price = (first.price as f64 * INTERNAL_PREMIUM).round() as i64;
            quotes.push(PriceQuote {
                platform: INTERNAL_PLATFORM.to_string(),
                price,
                url: INTERNAL_PLATFORM_URL.to_string(),
            });
        }
        Self { quotes }
    }

    pub fn quotes(&self) -> &[PriceQuote] {
        &self.quotes
    }

    pub fn external(&self) -> impl Iterator<Item = &PriceQuote> {
        self.quotes
            .iter()
            .filter(|q| q.platform != INTERNAL_PLATFORM)
    }

    pub fn internal(&self) -> Option<&PriceQuote> {
        self.quotes.iter().find(|q| q.platform == INTERNAL_PLATFORM)
    }

    /// Highest offer; the earliest one wins a tie.
    pub fn best(&self) -> Option<&PriceQuote> {
        self.quotes
            .iter()
            .reduce(|best, q| if q.price > best.price { q } else { best })
    }
}

pub fn request_offers<R: Rng + ?Sized>(
    estimator: &PriceEstimator,
    rng: &mut R,
    sale: &Sale,
) -> OfferSheet {
    let quotes = estimator.estimate(rng, &sale.estimate_request());
    let sheet = OfferSheet::from_external(quotes);
    info!(
        "Collected {} offers for {} {}",
        sheet.quotes().len(),
        sale.year,
        sale.brand
    );
    sheet
}

/// Lists the vehicle on the marketplace at the internal offer's price.
pub fn accept(catalog: &mut Catalog, sale: &Sale, offers: &OfferSheet) -> Vehicle {
    let price = offers.internal().map_or(0, |q| q.price.max(0) as u64);

    let vehicle = catalog.append(VehicleDetails {
        brand: sale.brand.clone(),
        model: sale.brand.clone(),
        year: sale.year,
        price,
        location: LISTED_LOCATION.to_string(),
        km_driven: sale.km_driven,
        fuel_type: sale.fuel_type,
        transmission: sale.transmission,
        owner: sale.owner.clone(),
        seats: sale.seats,
        engine: sale.engine.clone(),
        max_power: sale.max_power.clone(),
        images: sale.photos.clone(),
        video: sale.video.clone(),
        model_viewer: None,
    });
    info!("Listed {} as id {} for {}", vehicle.title(), vehicle.id, price);
    vehicle
}

pub fn my_listings(catalog: &Catalog) -> Vec<&Vehicle> {
    catalog.listed_by(LISTED_LOCATION)
}
