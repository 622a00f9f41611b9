use super::browse::render_listings;
use super::ui;
use crate::core::Catalog;
use crate::core::sell::my_listings;

pub fn run(catalog: &Catalog, currency: &str) {
    let mine = my_listings(catalog);
    println!("{}\n", ui::style_text("My Listings", ui::StyleType::Title));

    if mine.is_empty() {
        println!(
            "{}",
            ui::style_text(
                "You haven't listed any vehicles yet. Run `autolink sell --accept` to list one.",
                ui::StyleType::Subtle
            )
        );
        return;
    }

    println!("{}", render_listings(&mine, currency));
}
