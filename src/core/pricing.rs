//! Mock resale price estimation across competing buyer platforms.

use crate::core::vehicle::{FuelType, Transmission};
use chrono::{Datelike, Local};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use tracing::debug;

const BASE_PRICE: Range<f64> = 30_000.0..80_000.0;
const AGE_DEPRECIATION_PER_YEAR: f64 = 2_000.0;
const MILEAGE_DEPRECIATION_PER_KM: f64 = 0.1;

/// An external platform that buys used vehicles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    pub name: &'static str,
    pub url: &'static str,
    /// Upper bound (exclusive) of the platform's random premium.
    pub noise_ceiling: f64,
}

pub const EXTERNAL_PLATFORMS: [Platform; 3] = [
    Platform {
        name: "CarDekho",
        url: "https://www.cardekho.com/sell-used-car",
        noise_ceiling: 5_000.0,
    },
    Platform {
        name: "Cars24",
        url: "https://www.cars24.com/sell-car/",
        noise_ceiling: 3_000.0,
    },
    Platform {
        name: "Spinny",
        url: "https://www.spinny.com/sell-used-car/",
        noise_ceiling: 4_000.0,
    },
];

/// One platform's offer for a vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub platform: String,
    pub price: i64,
    pub url: String,
}

/// Vehicle attributes the estimator accepts.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateRequest {
    pub brand: String,
    pub year: i32,
    pub km_driven: u64,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
}

#[derive(Debug, Clone, Copy)]
pub struct PriceEstimator {
    current_year: i32,
}

impl PriceEstimator {
    /// Creates an estimator that ages vehicles against today's local year.
    pub fn new() -> Self {
        Self::with_current_year(Local::now().year())
    }

    pub fn with_current_year(current_year: i32) -> Self {
        Self { current_year }
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    /// Produces one quote per external platform, in [`EXTERNAL_PLATFORMS`] order.
    ///
    /// Only `year` and `km_driven` affect the price. Results are not clamped,
    /// so old high-mileage vehicles can receive negative quotes.
    pub fn estimate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        request: &EstimateRequest,
    ) -> Vec<PriceQuote> {
        let base_price = rng.gen_range(BASE_PRICE);
        let age_adjustment = (f64::from(self.current_year) - f64::from(request.year))
            * AGE_DEPRECIATION_PER_YEAR;
        let mileage_adjustment = request.km_driven as f64 * MILEAGE_DEPRECIATION_PER_KM;
        debug!(
            base_price,
            age_adjustment,
            mileage_adjustment,
            "Estimating price for {}",
            request.brand
        );

        EXTERNAL_PLATFORMS
            .iter()
            .map(|platform| {
                let noise = rng.gen_range(0.0..platform.noise_ceiling);
                let price = base_price - age_adjustment - mileage_adjustment + noise;
                PriceQuote {
                    platform: platform.name.to_string(),
                    price: price.round() as i64,
                    url: platform.url.to_string(),
                }
            })
            .collect()
    }
}

impl Default for PriceEstimator {
    fn default() -> Self {
        Self::new()
    }
}
