use super::browse::render_listings;
use super::ui;
use crate::core::sell::{self, INTERNAL_PLATFORM};
use crate::core::{Catalog, OfferSheet, PriceEstimator, SaleForm};
use anyhow::{Context, Result};
use comfy_table::{Attribute, Cell, Color};
use rand::Rng;

impl OfferSheet {
    pub fn display_as_table(&self, currency: &str) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![
            ui::header_cell("Platform"),
            ui::header_cell("Offer"),
            ui::header_cell("Where"),
        ]);

        for quote in self.quotes() {
            let is_internal = quote.platform == INTERNAL_PLATFORM;
            let platform = if is_internal {
                Cell::new(format!("{} (Recommended)", quote.platform))
                    .fg(Color::Green)
                    .add_attribute(Attribute::Bold)
            } else {
                Cell::new(&quote.platform)
            };
            let target = if is_internal {
                Cell::new("List instantly with --accept")
            } else {
                Cell::new(&quote.url)
            };
            table.add_row(vec![platform, ui::price_cell(quote.price, currency), target]);
        }

        format!(
            "{}\n\n{}\n\n{}",
            ui::style_text("Instant Offers", ui::StyleType::Title),
            table,
            ui::style_text(
                "* These are estimated values. Final price may vary based on vehicle condition and market factors.",
                ui::StyleType::Subtle
            )
        )
    }
}

pub fn run<R: Rng + ?Sized>(
    catalog: &mut Catalog,
    estimator: &PriceEstimator,
    rng: &mut R,
    form: &SaleForm,
    accept: bool,
    currency: &str,
) -> Result<()> {
    let sale = form
        .validate(estimator.current_year())
        .context("Could not read the vehicle details")?;

    let offers = sell::request_offers(estimator, rng, &sale);
    println!("{}", offers.display_as_table(currency));

    if !accept {
        return Ok(());
    }

    let listed = sell::accept(catalog, &sale, &offers);
    println!(
        "\n{} {} is now listed as #{}.\n",
        ui::style_text("Successfully Listed!", ui::StyleType::Highlight),
        listed.title(),
        listed.id
    );
    println!("{}", render_listings(&sell::my_listings(catalog), currency));
    Ok(())
}
