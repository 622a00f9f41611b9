//! Vehicle listing records and their closed enumerations.

use crate::core::error::MarketError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum FuelType {
    Petrol,
    Diesel,
    Electric,
    Hybrid,
}

impl FuelType {
    pub const ALL: [FuelType; 4] = [
        FuelType::Petrol,
        FuelType::Diesel,
        FuelType::Electric,
        FuelType::Hybrid,
    ];
}

impl Display for FuelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                FuelType::Petrol => "Petrol",
                FuelType::Diesel => "Diesel",
                FuelType::Electric => "Electric",
                FuelType::Hybrid => "Hybrid",
            }
        )
    }
}

impl FromStr for FuelType {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "petrol" => Ok(FuelType::Petrol),
            "diesel" => Ok(FuelType::Diesel),
            "electric" => Ok(FuelType::Electric),
            "hybrid" => Ok(FuelType::Hybrid),
            _ => Err(MarketError::invalid("fuelType", s)),
        }
    }
}

impl TryFrom<String> for FuelType {
    type Error = MarketError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Transmission {
    Manual,
    Automatic,
}

impl Display for Transmission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Transmission::Manual => "Manual",
                Transmission::Automatic => "Automatic",
            }
        )
    }
}

impl FromStr for Transmission {
    type Err = MarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "manual" => Ok(Transmission::Manual),
            "automatic" => Ok(Transmission::Automatic),
            _ => Err(MarketError::invalid("transmission", s)),
        }
    }
}

impl TryFrom<String> for Transmission {
    type Error = MarketError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A listing's attributes before the catalog assigns it an identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDetails {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub price: u64,
    pub location: String,
    pub km_driven: u64,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub owner: String,
    pub seats: u8,
    pub engine: String,
    pub max_power: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_viewer: Option<String>,
}

impl VehicleDetails {
    /// Checks the invariants serde cannot express on its own.
    pub fn validate(&self) -> Result<(), MarketError> {
        if self.brand.trim().is_empty() {
            return Err(MarketError::invalid("brand", &self.brand));
        }
        if self.seats == 0 {
            return Err(MarketError::invalid("seats", self.seats.to_string()));
        }
        Ok(())
    }
}

/// A listing held by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    #[serde(flatten)]
    pub details: VehicleDetails,
}

impl Vehicle {
    /// "Brand Model" as shown on listing cards.
    pub fn title(&self) -> String {
        format!("{} {}", self.details.brand, self.details.model)
    }
}

/// Listings available before anything has been sold through the marketplace.
pub fn seed_listings() -> Vec<VehicleDetails> {
    vec![
        VehicleDetails {
            brand: "Tesla".to_string(),
            model: "Model 3".to_string(),
            year: 2022,
            price: 45000,
            location: "San Francisco, CA".to_string(),
            km_driven: 15000,
            fuel_type: FuelType::Electric,
            transmission: Transmission::Automatic,
            owner: "First".to_string(),
            seats: 5,
            engine: "Electric Motor".to_string(),
            max_power: "283 kW".to_string(),
            images: vec![
                "https://images.unsplash.com/photo-1560958089-b8a1929cea89?auto=format&fit=crop&q=80"
                    .to_string(),
            ],
            video: None,
            model_viewer: Some(
                "https://modelviewer.dev/shared-assets/models/Astronaut.glb".to_string(),
            ),
        },
        VehicleDetails {
            brand: "BMW".to_string(),
            model: "M3".to_string(),
            year: 2021,
            price: 65000,
            location: "Los Angeles, CA".to_string(),
            km_driven: 25000,
            fuel_type: FuelType::Petrol,
            transmission: Transmission::Automatic,
            owner: "First".to_string(),
            seats: 5,
            engine: "3.0L Twin-Turbo".to_string(),
            max_power: "473 hp".to_string(),
            images: vec![
                "https://images.unsplash.com/photo-1555215695-3004980ad54e?auto=format&fit=crop&q=80"
                    .to_string(),
            ],
            video: None,
            model_viewer: None,
        },
    ]
}
