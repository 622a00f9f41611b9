use super::ui;
use crate::core::{Catalog, Vehicle};
use anyhow::Result;
use comfy_table::Cell;

impl Vehicle {
    pub fn display_as_table(&self, currency: &str) -> String {
        let details = &self.details;
        let mut table = ui::new_styled_table();
        table.set_header(vec![ui::header_cell("Spec"), ui::header_cell("Value")]);

        let rows: Vec<(&str, Cell)> = vec![
            ("Year", Cell::new(details.year)),
            ("Kilometers", Cell::new(format!("{} km", details.km_driven))),
            ("Fuel Type", Cell::new(details.fuel_type)),
            ("Transmission", Cell::new(details.transmission)),
            ("Owner", Cell::new(&details.owner)),
            ("Seats", Cell::new(details.seats)),
            ("Engine", Cell::new(&details.engine)),
            ("Max Power", Cell::new(&details.max_power)),
            ("Location", Cell::new(&details.location)),
            ("Photos", Cell::new(details.images.len())),
            (
                "Video",
                ui::format_optional_cell(details.video.as_deref(), str::to_string),
            ),
            (
                "3D Model",
                ui::format_optional_cell(details.model_viewer.as_deref(), str::to_string),
            ),
        ];
        for (label, value) in rows {
            table.add_row(vec![Cell::new(label), value]);
        }

        let price = ui::format_price(details.price, currency);
        format!(
            "{} {}\n\n{}\n\nPrice: {}",
            ui::style_text(&self.title(), ui::StyleType::Title),
            ui::style_text(&format!("#{}", self.id), ui::StyleType::Subtle),
            table,
            ui::style_text(&price, ui::StyleType::Highlight)
        )
    }
}

pub fn run(catalog: &Catalog, id: &str, currency: &str) -> Result<()> {
    match catalog.find(id) {
        Some(vehicle) => println!("{}", vehicle.display_as_table(currency)),
        None => println!(
            "{}",
            ui::style_text(&format!("Vehicle not found: {id}"), ui::StyleType::Error)
        ),
    }
    Ok(())
}
