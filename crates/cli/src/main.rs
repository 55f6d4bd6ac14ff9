mod config;

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use collector::{BuiltRequest, CollectionRequestBuilder};
use colored::Colorize;
use config::AppConfig;
use data_loader::{export, District, Listing, ListingSet, ManWon, Pyeong};
use pipeline::{
    compliance_report, district_counts, filter_listings, sort_listings, summarize,
    DistrictSelection, FieldSummary, FilterCriteria, RangeConstraint, SortKey,
};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// rent-radar - Seoul store/office rental listing filter
#[derive(Parser)]
#[command(name = "rent-radar")]
#[command(about = "Build collection requests and filter, sort and summarize rental listings", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file (default: ./rent-radar.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listing CSV file; overrides the config file and RENT_RADAR_DATA
    #[arg(short, long)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the districts listings can be collected from
    Districts,

    /// Validate criteria and build a request for the collector
    Collect {
        /// District to collect (repeatable), e.g. --district 강남구
        #[arg(long = "district")]
        districts: Vec<District>,

        /// Collect from every district
        #[arg(long, conflicts_with = "districts")]
        all_districts: bool,

        #[command(flatten)]
        ranges: RangeArgs,

        /// Override the per-district size estimate
        #[arg(long)]
        per_district_estimate: Option<usize>,

        /// Write the request as JSON for the collector
        #[arg(long)]
        output: Option<PathBuf>,

        /// Print the per-district query parameters
        #[arg(long)]
        show_params: bool,
    },

    /// Filter and sort collected listings
    Results {
        /// District to show (repeatable); default is every district in the data
        #[arg(long = "district")]
        districts: Vec<District>,

        #[command(flatten)]
        ranges: RangeArgs,

        /// Sort key: deposit_asc, deposit_desc, rent_asc, rent_desc, area_asc, area_desc, registration_order
        #[arg(long)]
        sort: Option<SortKey>,

        /// Number of rows to print
        #[arg(long)]
        limit: Option<usize>,

        /// Write every matching listing, in sorted order, to this CSV file
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Summary, per-district and compliance statistics for collected listings
    Stats,

    /// Print the effective configuration as TOML
    Config,
}

/// Range flags shared by `collect` and `results`. Unset flags keep the
/// configured value.
#[derive(Args)]
struct RangeArgs {
    /// Minimum deposit (만원)
    #[arg(long)]
    deposit_min: Option<ManWon>,
    /// Maximum deposit (만원)
    #[arg(long)]
    deposit_max: Option<ManWon>,
    /// Minimum monthly rent (만원)
    #[arg(long)]
    rent_min: Option<ManWon>,
    /// Maximum monthly rent (만원)
    #[arg(long)]
    rent_max: Option<ManWon>,
    /// Minimum area (평)
    #[arg(long)]
    area_min: Option<Pyeong>,
    /// Maximum area (평)
    #[arg(long)]
    area_max: Option<Pyeong>,
}

impl RangeArgs {
    fn deposit(&self, default: RangeConstraint<ManWon>) -> RangeConstraint<ManWon> {
        override_range(default, self.deposit_min, self.deposit_max)
    }

    fn monthly_rent(&self, default: RangeConstraint<ManWon>) -> RangeConstraint<ManWon> {
        override_range(default, self.rent_min, self.rent_max)
    }

    fn area_pyeong(&self, default: RangeConstraint<Pyeong>) -> RangeConstraint<Pyeong> {
        override_range(default, self.area_min, self.area_max)
    }
}

fn override_range<T: Copy>(default: RangeConstraint<T>, min: Option<T>, max: Option<T>) -> RangeConstraint<T> {
    RangeConstraint {
        min: min.unwrap_or(default.min),
        max: max.unwrap_or(default.max),
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load_with_env(cli.config.as_deref())?;
    if let Some(data) = cli.data {
        config.data_path = data;
    }

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Districts => handle_districts(),
        Commands::Collect {
            districts,
            all_districts,
            ranges,
            per_district_estimate,
            output,
            show_params,
        } => {
            let selection = if all_districts {
                DistrictSelection::all()
            } else if districts.is_empty() {
                config.collection.districts.clone()
            } else {
                districts.into_iter().collect()
            };
            let estimate = per_district_estimate.unwrap_or(config.collection.per_district_estimate);
            handle_collect(&config, selection, &ranges, estimate, output.as_deref(), show_params)?
        }
        Commands::Results {
            districts,
            ranges,
            sort,
            limit,
            export,
        } => handle_results(&config, districts, &ranges, sort, limit, export.as_deref())?,
        Commands::Stats => handle_stats(&config)?,
        Commands::Config => print!("{}", config.to_toml()?),
    }

    Ok(())
}

/// Handle the 'districts' command
fn handle_districts() {
    println!("{}", "Districts:".bold().blue());
    for district in District::ALL {
        println!("  {} ({})", district, district.region_code());
    }
}

/// Handle the 'collect' command
fn handle_collect(
    config: &AppConfig,
    districts: DistrictSelection,
    ranges: &RangeArgs,
    per_district_estimate: usize,
    output: Option<&Path>,
    show_params: bool,
) -> Result<()> {
    let deposit = ranges.deposit(config.collection.deposit);
    let monthly_rent = ranges.monthly_rent(config.collection.monthly_rent);
    let area_pyeong = ranges.area_pyeong(config.collection.area_pyeong);

    let builder = CollectionRequestBuilder::new().with_per_district_estimate(per_district_estimate);
    let built = match builder.build(&districts, deposit, monthly_rent, area_pyeong) {
        Ok(built) => built,
        Err(errors) => {
            for error in errors.iter() {
                eprintln!("{} {}", "✗".red(), error);
            }
            return Err(anyhow!(
                "Collection request rejected ({} problem(s))",
                errors.errors.len()
            ));
        }
    };

    print_request(&built);

    if show_params {
        for (district, params) in built.request.district_queries() {
            let query = params
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join("&");
            println!("  {}: {}", district, query);
        }
    }

    if let Some(path) = output {
        let json = serde_json::to_string_pretty(&built).context("Failed to serialize request")?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write request to {}", path.display()))?;
        println!("{} Request written to {}", "✓".green(), path.display());
    }

    Ok(())
}

/// Handle the 'results' command
fn handle_results(
    config: &AppConfig,
    districts: Vec<District>,
    ranges: &RangeArgs,
    sort: Option<SortKey>,
    limit: Option<usize>,
    export_path: Option<&Path>,
) -> Result<()> {
    let set = load_listings(&config.data_path)?;

    let selection: DistrictSelection = if districts.is_empty() {
        set.districts().into()
    } else {
        districts.into_iter().collect()
    };
    let criteria = FilterCriteria::new(
        selection,
        ranges.deposit(config.results.deposit),
        ranges.monthly_rent(config.results.monthly_rent),
        ranges.area_pyeong(config.results.area_pyeong),
    );
    let sort = sort.unwrap_or(config.results.sort);
    let limit = limit.unwrap_or(config.results.limit);

    let filtered = filter_listings(set.listings(), &criteria).context("Invalid filter criteria")?;
    let sorted = sort_listings(&filtered, sort);

    println!(
        "{} {} of {} listings match (sorted by {})",
        "✓".green(),
        sorted.len(),
        set.len(),
        sort
    );

    if sorted.is_empty() {
        println!("No listings match these criteria. Try widening the ranges or adding districts.");
    } else {
        print_listings(&sorted, limit);
    }

    if let Some(path) = export_path {
        let file = File::create(path)
            .with_context(|| format!("Failed to create export file {}", path.display()))?;
        export::write_listings(BufWriter::new(file), &sorted)
            .with_context(|| format!("Failed to export listings to {}", path.display()))?;
        println!("{} Exported {} listings to {}", "✓".green(), sorted.len(), path.display());
    }

    Ok(())
}

/// Handle the 'stats' command
fn handle_stats(config: &AppConfig) -> Result<()> {
    let set = load_listings(&config.data_path)?;
    let listings = set.listings();

    let summary = summarize(listings);
    println!("{}", "Summary:".bold().blue());
    println!("{}Listings: {}", "• ".cyan(), summary.count);
    if summary.count == 0 {
        println!("No listings collected yet.");
        return Ok(());
    }
    print_field("Deposit (만원)", summary.deposit.as_ref());
    print_field("Monthly rent (만원)", summary.monthly_rent.as_ref());
    print_field("Area (평)", summary.area_pyeong.as_ref());

    // Most listings first, ties in district order
    let mut counts: Vec<(District, usize)> = district_counts(listings).into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    println!("{}", "Listings per district:".bold().blue());
    for (district, count) in counts {
        println!("  {:<6} {}", district.to_string(), count);
    }

    let reference = config.reference.criteria();
    let report = compliance_report(listings, &reference).context("Invalid reference criteria")?;
    println!("{}", "Compliance with reference criteria:".bold().blue());
    println!(
        "  deposit {} / rent {} / area {}",
        reference.deposit, reference.monthly_rent, reference.area_pyeong
    );
    for (category, count) in report.as_map() {
        println!("  {}: {}", category, count);
    }
    if let Some(rate) = report.compliance_rate() {
        println!("  {}: {:.1}%", "Compliance rate".green(), rate);
    }

    Ok(())
}

fn load_listings(path: &Path) -> Result<ListingSet> {
    let start = Instant::now();
    let set = ListingSet::load_from_file(path)
        .with_context(|| format!("Failed to load listings from {}", path.display()))?;
    tracing::debug!("Loaded {} listings in {:?}", set.len(), start.elapsed());
    Ok(set)
}

fn print_request(built: &BuiltRequest) {
    let request = &built.request;
    let names = request
        .districts()
        .iter()
        .map(|d| d.name())
        .collect::<Vec<_>>()
        .join(", ");

    println!("{}", "Collection request:".bold().blue());
    println!(
        "{}Category: {} / {}",
        "• ".green(),
        request.property_type(),
        request.transaction_type()
    );
    println!("{}Districts ({}): {}", "• ".green(), request.districts().len(), names);
    println!("{}Deposit: {}만원", "• ".green(), request.deposit());
    println!("{}Monthly rent: {}만원", "• ".green(), request.monthly_rent());
    println!("{}Area: {}평", "• ".green(), request.area_pyeong());
    println!("{}Estimated listings: {}", "• ".cyan(), built.estimated_count);
}

fn print_field(label: &str, field: Option<&FieldSummary>) {
    if let Some(f) = field {
        println!(
            "{}{}: mean {:.1}, stddev {:.1}, min {:.1}, max {:.1}",
            "• ".cyan(),
            label,
            f.mean,
            f.stddev,
            f.min,
            f.max
        );
    }
}

fn print_listings(listings: &[Listing], limit: usize) {
    println!(
        "{}",
        format!(
            "{:>4}  {:<6} {:>8} {:>6} {:>7}  {}",
            "#", "District", "Deposit", "Rent", "Area", "Link"
        )
        .bold()
    );
    for (rank, listing) in listings.iter().take(limit).enumerate() {
        println!(
            "{:>4}  {:<6} {:>8} {:>6} {:>7.1}  {}",
            (rank + 1).to_string().green(),
            listing.district.to_string(),
            listing.deposit,
            listing.monthly_rent,
            listing.area_pyeong,
            listing.naver_link
        );
    }
    if listings.len() > limit {
        println!("  ... {} more (use --limit or --export)", listings.len() - limit);
    }
}
