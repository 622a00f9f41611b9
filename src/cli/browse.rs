use super::ui;
use crate::core::{Catalog, ListingFilter, Vehicle};
use anyhow::{Context, Result};
use comfy_table::{Cell, CellAlignment};

/// Renders listing cards as a table, one row per vehicle.
pub fn render_listings(vehicles: &[&Vehicle], currency: &str) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("ID"),
        ui::header_cell("Vehicle"),
        ui::header_cell("Year"),
        ui::header_cell("Km"),
        ui::header_cell("Fuel"),
        ui::header_cell("Location"),
        ui::header_cell("Price"),
    ]);

    for vehicle in vehicles {
        let details = &vehicle.details;
        table.add_row(vec![
            Cell::new(&vehicle.id),
            Cell::new(vehicle.title()),
            Cell::new(details.year),
            Cell::new(details.km_driven).set_alignment(CellAlignment::Right),
            Cell::new(details.fuel_type),
            Cell::new(&details.location),
            ui::price_cell(details.price, currency),
        ]);
    }

    table.to_string()
}

pub fn run(catalog: &Catalog, filter: &ListingFilter, currency: &str, json: bool) -> Result<()> {
    let matches = catalog.filter(filter);

    if json {
        let out = serde_json::to_string_pretty(&matches).context("Failed to serialize listings")?;
        println!("{out}");
        return Ok(());
    }

    if matches.is_empty() {
        println!(
            "{}",
            ui::style_text("No vehicles match your search.", ui::StyleType::Subtle)
        );
        return Ok(());
    }

    println!(
        "{}\n",
        ui::style_text("Vehicle Collection", ui::StyleType::Title)
    );
    println!("{}", render_listings(&matches, currency));
    println!(
        "\n{} of {} listings",
        ui::style_text(&matches.len().to_string(), ui::StyleType::Label),
        catalog.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_listings_shows_each_vehicle() {
        let catalog = Catalog::seeded();
        let all: Vec<&Vehicle> = catalog.iter().collect();
        let rendered = render_listings(&all, "$");

        assert!(rendered.contains("Tesla Model 3"));
        assert!(rendered.contains("BMW M3"));
        assert!(rendered.contains("San Francisco, CA"));
        assert!(rendered.contains("$45,000"));
        assert!(rendered.contains("$65,000"));
    }

    #[test]
    fn test_render_listings_keeps_large_prices_positive() {
        let mut details = crate::core::vehicle::seed_listings().remove(0);
        details.price = u64::MAX;
        let catalog = Catalog::with_listings(vec![details]);
        let all: Vec<&Vehicle> = catalog.iter().collect();
        let rendered = render_listings(&all, "$");

        assert!(rendered.contains("$18,446,744,073,709,551,615"));
        assert!(!rendered.contains("-$"));
    }

    #[test]
    fn test_run_with_no_matches() {
        let catalog = Catalog::seeded();
        let filter = ListingFilter {
            brand: Some("Lada".to_string()),
            ..Default::default()
        };
        assert!(run(&catalog, &filter, "$", false).is_ok());
        assert!(run(&catalog, &filter, "$", true).is_ok());
    }
}
