use autolink::AppCommand;
use autolink::core::config::AppConfig;
use autolink::core::sell::{self, LISTED_LOCATION};
use autolink::core::{Catalog, ListingFilter, PriceEstimator, SaleForm};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use tracing::info;

mod test_utils {
    use std::fs;

    pub fn write_config(content: &str) -> tempfile::NamedTempFile {
        let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        fs::write(config_file.path(), content).expect("Failed to write config file");
        config_file
    }

    pub const SHOWROOM: &str = r#"
catalog:
  - brand: "Mercedes-Benz"
    model: "S-Class"
    year: 2024
    price: 120000
    location: "Los Angeles, CA"
    kmDriven: 500
    fuelType: Petrol
    transmission: Automatic
    owner: "First"
    seats: 5
    engine: "3.0L Inline-6"
    maxPower: "429 hp"
  - brand: "BMW"
    model: "M8 Gran Coupe"
    year: 2024
    price: 140000
    location: "Miami, FL"
    kmDriven: 800
    fuelType: Petrol
    transmission: Automatic
    owner: "First"
    seats: 4
    engine: "4.4L Twin-Turbo V8"
    maxPower: "617 hp"
  - brand: "BMW"
    model: "X5"
    year: 2021
    price: 52000
    location: "Miami, FL"
    kmDriven: 41000
    fuelType: Diesel
    transmission: Automatic
    owner: "Second"
    seats: 5
    engine: "3.0L Diesel"
    maxPower: "282 hp"
currency: "$"
seed: 7
"#;
}

fn sale_form() -> SaleForm {
    SaleForm {
        brand: "Ford".to_string(),
        year: "2019".to_string(),
        km_driven: "60000".to_string(),
        fuel_type: "Petrol".to_string(),
        transmission: "Manual".to_string(),
        owner: "Second".to_string(),
        seats: "5".to_string(),
        engine: "1.5L EcoBoost".to_string(),
        max_power: "180 hp".to_string(),
        photos: vec!["side.jpg".to_string(), "rear.jpg".to_string()],
        video: Some("walkaround.mp4".to_string()),
    }
}

#[test_log::test]
fn test_browse_with_filters() {
    let config_file = test_utils::write_config(test_utils::SHOWROOM);
    let filter = ListingFilter {
        search: String::new(),
        brand: Some("BMW".to_string()),
        location: Some(String::new()),
        year: Some("2024".to_string()),
    };

    let result = autolink::run_command(
        AppCommand::Browse {
            filter,
            json: false,
        },
        Some(config_file.path().to_str().unwrap()),
        None,
    );
    assert!(result.is_ok(), "Browse failed with: {:?}", result.err());
}

#[test_log::test]
fn test_every_command_runs_against_config() {
    let config_file = test_utils::write_config(test_utils::SHOWROOM);
    let path = config_file.path().to_str().unwrap();

    let commands = vec![
        AppCommand::Browse {
            filter: ListingFilter::default(),
            json: true,
        },
        AppCommand::Show { id: "2".to_string() },
        AppCommand::Show {
            id: "99".to_string(),
        },
        AppCommand::Options,
        AppCommand::Sell {
            form: sale_form(),
            accept: true,
        },
        AppCommand::Listings,
    ];

    for command in commands {
        info!(?command, "Running command");
        let result = autolink::run_command(command, Some(path), Some(1));
        assert!(result.is_ok(), "Command failed with: {:?}", result.err());
    }
}

#[test_log::test]
fn test_sell_rejects_invalid_form() {
    let config_file = test_utils::write_config(test_utils::SHOWROOM);
    let form = SaleForm {
        fuel_type: "Coal".to_string(),
        ..sale_form()
    };

    let result = autolink::run_command(
        AppCommand::Sell {
            form,
            accept: true,
        },
        Some(config_file.path().to_str().unwrap()),
        None,
    );
    let err = result.expect_err("invalid fuel type should fail");
    assert!(format!("{err:#}").contains("fuelType"));
}

#[test_log::test]
fn test_missing_config_path_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("nope.yaml");

    let result = autolink::run_command(
        AppCommand::Listings,
        Some(missing.to_str().unwrap()),
        None,
    );
    assert!(result.is_err());
}

#[test_log::test]
fn test_malformed_config_fails() {
    let config_file = test_utils::write_config("catalog: [ { brand: 42 ");
    let result = autolink::run_command(
        AppCommand::Options,
        Some(config_file.path().to_str().unwrap()),
        None,
    );
    let err = result.expect_err("malformed yaml should fail");
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test_log::test]
fn test_sell_and_list_workflow() {
    let config_file = test_utils::write_config(test_utils::SHOWROOM);
    let config = AppConfig::load_from_path(config_file.path()).unwrap();
    let mut catalog = config.build_catalog();
    assert_eq!(catalog.len(), 3);

    let estimator = PriceEstimator::with_current_year(2024);
    let sale = sale_form().validate(estimator.current_year()).unwrap();
    let mut rng = StdRng::seed_from_u64(config.seed.unwrap());
    let offers = sell::request_offers(&estimator, &mut rng, &sale);

    let external: Vec<&str> = offers.external().map(|q| q.platform.as_str()).collect();
    assert_eq!(external, vec!["CarDekho", "Cars24", "Spinny"]);
    let first = offers.quotes()[0].price;
    let internal = offers.internal().unwrap();
    assert_eq!(internal.price, (first as f64 * 1.05).round() as i64);

    let listed = sell::accept(&mut catalog, &sale, &offers);
    assert_eq!(listed.id, "4");
    assert_eq!(listed.details.location, LISTED_LOCATION);
    assert_eq!(listed.details.model, "Ford");
    assert_eq!(listed.details.images, vec!["side.jpg", "rear.jpg"]);
    assert_eq!(listed.details.video.as_deref(), Some("walkaround.mp4"));
    assert_eq!(listed.details.price, internal.price.max(0) as u64);

    assert_eq!(catalog.find("4"), Some(&listed));
    let mine = sell::my_listings(&catalog);
    assert_eq!(mine.len(), 1);

    let fords = catalog.filter(&ListingFilter {
        search: "FORD".to_string(),
        ..Default::default()
    });
    assert_eq!(fords.len(), 1);
    assert_eq!(fords[0].id, "4");
}

#[test_log::test]
fn test_scenario_seeded_catalog() {
    let mut catalog = Catalog::seeded();
    let ids: Vec<&str> = catalog.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);

    let mut ford = catalog.find("2").unwrap().details.clone();
    ford.brand = "Ford".to_string();
    ford.model = "Focus".to_string();

    let added = catalog.append(ford);
    assert_eq!(added.id, "3");
    assert_eq!(catalog.find("3").map(|v| v.details.brand.as_str()), Some("Ford"));
    assert!(catalog.find("99").is_none());
}

#[test_log::test]
fn test_setup_writes_loadable_config() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("autolink").join("config.yaml");

    autolink::cli::setup::setup_at_path(&path).unwrap();
    assert!(fs::read_to_string(&path).unwrap().contains("catalog:"));

    let config = AppConfig::load_from_path(&path).unwrap();
    let result = autolink::run_command(
        AppCommand::Browse {
            filter: ListingFilter {
                search: "porsche".to_string(),
                ..Default::default()
            },
            json: false,
        },
        Some(path.to_str().unwrap()),
        None,
    );
    assert!(result.is_ok());
    assert_eq!(config.build_catalog().len(), 3);
}
