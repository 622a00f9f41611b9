pub mod browse;
pub mod listings;
pub mod options;
pub mod sell;
pub mod setup;
pub mod show;
pub mod ui;
