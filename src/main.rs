use anyhow::Result;
use autolink::core::log::init_logging;
use autolink::core::{ListingFilter, SaleForm};
use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Increase logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// Seed for the offer generator, for repeatable offers
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct BrowseArgs {
    /// Search text matched against brand or model
    #[arg(short, long, default_value = "")]
    search: String,
    /// Only show this brand
    #[arg(long)]
    brand: Option<String>,
    /// Only show this location
    #[arg(long)]
    location: Option<String>,
    /// Only show this model year
    #[arg(long)]
    year: Option<String>,
    /// Print matching listings as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct SellArgs {
    #[arg(long)]
    brand: String,
    #[arg(long)]
    year: String,
    /// Kilometers driven
    #[arg(long)]
    km: String,
    /// Petrol, Diesel, Electric or Hybrid
    #[arg(long)]
    fuel: String,
    /// Manual or Automatic
    #[arg(long)]
    transmission: String,
    /// Owner descriptor, e.g. First
    #[arg(long, default_value = "First")]
    owner: String,
    #[arg(long, default_value = "5")]
    seats: String,
    /// Engine description, e.g. "2.0L Turbo"
    #[arg(long, default_value = "")]
    engine: String,
    /// Peak power, e.g. "250 hp"
    #[arg(long, default_value = "")]
    max_power: String,
    /// Photo reference; repeat for more (up to 5 are kept)
    #[arg(long = "photo")]
    photos: Vec<String>,
    /// Video reference
    #[arg(long)]
    video: Option<String>,
    /// List the vehicle at the AutoLink offer
    #[arg(long)]
    accept: bool,
}

impl From<BrowseArgs> for autolink::AppCommand {
    fn from(args: BrowseArgs) -> autolink::AppCommand {
        autolink::AppCommand::Browse {
            filter: ListingFilter {
                search: args.search,
                brand: args.brand,
                location: args.location,
                year: args.year,
            },
            json: args.json,
        }
    }
}

impl From<SellArgs> for autolink::AppCommand {
    fn from(args: SellArgs) -> autolink::AppCommand {
        autolink::AppCommand::Sell {
            form: SaleForm {
                brand: args.brand,
                year: args.year,
                km_driven: args.km,
                fuel_type: args.fuel,
                transmission: args.transmission,
                owner: args.owner,
                seats: args.seats,
                engine: args.engine,
                max_power: args.max_power,
                photos: args.photos,
                video: args.video,
            },
            accept: args.accept,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Search and filter the vehicle catalog
    Browse(BrowseArgs),
    /// Show one listing in detail
    Show {
        /// Listing identifier
        id: String,
    },
    /// Show the brands, locations and years available to filter on
    Options,
    /// Get instant offers for your vehicle
    Sell(SellArgs),
    /// Show vehicles listed through AutoLink
    Listings,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let command = match cli.command {
        Some(Commands::Setup) => return report(autolink::cli::setup::setup()),
        Some(Commands::Browse(args)) => args.into(),
        Some(Commands::Show { id }) => autolink::AppCommand::Show { id },
        Some(Commands::Options) => autolink::AppCommand::Options,
        Some(Commands::Sell(args)) => args.into(),
        Some(Commands::Listings) => autolink::AppCommand::Listings,
        None => {
            Cli::command().print_help()?;
            return Ok(());
        }
    };

    report(autolink::run_command(
        command,
        cli.config_path.as_deref(),
        cli.seed,
    ))
}

fn report(result: Result<()>) -> Result<()> {
    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
