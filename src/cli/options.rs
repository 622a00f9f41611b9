use super::ui;
use crate::core::pricing::EXTERNAL_PLATFORMS;
use crate::core::sell::INTERNAL_PLATFORM;
use crate::core::vehicle::FuelType;
use crate::core::{Catalog, CatalogFacets};

impl CatalogFacets {
    pub fn display(&self) -> String {
        let years: Vec<String> = self.years.iter().map(i32::to_string).collect();
        let fuels: Vec<String> = FuelType::ALL.iter().map(FuelType::to_string).collect();
        let platforms: Vec<&str> = EXTERNAL_PLATFORMS
            .iter()
            .map(|p| p.name)
            .chain(std::iter::once(INTERNAL_PLATFORM))
            .collect();

        [
            ("Brands", self.brands.join(", ")),
            ("Locations", self.locations.join("; ")),
            ("Years", years.join(", ")),
            ("Fuel types", fuels.join(", ")),
            ("Offer platforms", platforms.join(", ")),
        ]
        .iter()
        .map(|(label, values)| {
            format!(
                "{}: {}",
                ui::style_text(label, ui::StyleType::Label),
                values
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
    }
}

pub fn run(catalog: &Catalog) {
    println!("{}", catalog.facets().display());
}
