// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use docfinder::render::{self, LOAD_FAILED};
use docfinder::utils::logging::{format_error, format_info, format_success, format_warning};
use docfinder::{
    Config, DoctorFilters, DoctorService, JsonExporter, ListingState, NewDoctor, OperationTimer,
    PageEntry, PaginationControl, SimulatedLatency, build_page_index,
    models::{EXPERIENCE_SLIDER_MAX, FEE_SLIDER_MAX},
};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "docfinder")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Find doctors by location, experience, fee and availability", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Skip the simulated network delay
    #[arg(long, action = ArgAction::SetTrue)]
    no_delay: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the doctor listing
    Search {
        /// Listing URL query string, e.g. "location=Delhi&maxFee=1000"
        #[arg(long)]
        query: Option<String>,

        /// Specialty for this fetch only; the listing query always carries the default
        #[arg(long)]
        specialty: Option<String>,

        #[arg(short, long)]
        location: Option<String>,

        /// Minimum years of experience
        #[arg(long, allow_negative_numbers = true)]
        experience: Option<i64>,

        #[arg(long)]
        available_today: Option<bool>,

        /// Minimum rating for this fetch only; not part of the listing query
        #[arg(long)]
        min_rating: Option<f32>,

        #[arg(long, allow_negative_numbers = true)]
        max_fee: Option<i64>,

        /// Free text matched against name, specialty and location
        #[arg(short, long)]
        search: Option<String>,

        #[arg(short, long)]
        page: Option<u32>,

        #[arg(long)]
        limit: Option<u32>,

        /// Print the raw page as JSON
        #[arg(long)]
        json: bool,

        /// Write the page and a manifest into this directory
        #[arg(long, value_name = "DIR")]
        export: Option<PathBuf>,

        #[arg(long)]
        pretty: bool,
    },

    /// Show the abbreviated page index for a pagination control
    Pages { current: u32, total: u32 },

    /// Show one doctor by id
    Show { id: String },

    /// List filter options
    Options,

    /// Add a doctor profile and print it with its new id
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        specialty: String,

        #[arg(long)]
        experience: u32,

        #[arg(long = "qualification")]
        qualifications: Vec<String>,

        #[arg(long)]
        location: String,

        #[arg(long)]
        fee: u32,

        #[arg(long, default_value_t = 0.0)]
        rating: f32,

        #[arg(long)]
        available_today: bool,

        #[arg(long)]
        next_available: String,

        #[arg(long)]
        image_url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    docfinder::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Loading configuration from: {}", cli.config.display());

    let mut config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    if cli.no_delay {
        config.service.simulate_latency = false;
    }

    match cli.command {
        Commands::Search {
            query,
            specialty,
            location,
            experience,
            available_today,
            min_rating,
            max_fee,
            search,
            page,
            limit,
            json,
            export,
            pretty,
        } => {
            let listing = ListingState::from_query(
                query.as_deref().unwrap_or(""),
                config.dataset.default_specialty.as_str(),
                limit.unwrap_or(config.pagination.default_limit),
            );

            let mut filters = listing.filters().clone();
            filters.location = location.or(filters.location);
            filters.experience_min = experience.or(filters.experience_min);
            filters.available_today = available_today.or(filters.available_today);
            filters.max_fee = max_fee.or(filters.max_fee);
            filters.search_query = search.or(filters.search_query);

            let refinements = FetchRefinements {
                specialty,
                min_rating,
            };

            let options = SearchOutput {
                json,
                export,
                pretty,
            };
            cmd_search(&config, listing, filters, refinements, page, options).await?;
        }
        Commands::Pages { current, total } => {
            cmd_pages(current, total);
        }
        Commands::Show { id } => {
            cmd_show(&config, &id)?;
        }
        Commands::Options => {
            cmd_options(&config).await?;
        }
        Commands::Add {
            name,
            specialty,
            experience,
            qualifications,
            location,
            fee,
            rating,
            available_today,
            next_available,
            image_url,
        } => {
            let doctor = NewDoctor {
                name,
                specialty,
                experience,
                qualifications,
                location,
                consultation_fee: fee,
                rating,
                available_today,
                next_available,
                image_url,
            };
            cmd_add(&config, doctor).await?;
        }
    }

    Ok(())
}

/// Criteria the listing query cannot carry, applied on top of it per fetch.
struct FetchRefinements {
    specialty: Option<String>,
    min_rating: Option<f32>,
}

struct SearchOutput {
    json: bool,
    export: Option<PathBuf>,
    pretty: bool,
}

fn build_service(config: &Config) -> Result<DoctorService<SimulatedLatency>> {
    let timer = OperationTimer::new("load_catalog");
    let service = DoctorService::from_config(config).context("Failed to load doctor dataset")?;
    timer.finish();
    Ok(service)
}

async fn cmd_search(
    config: &Config,
    mut state: ListingState,
    filters: DoctorFilters,
    refinements: FetchRefinements,
    page: Option<u32>,
    output: SearchOutput,
) -> Result<()> {
    let service = build_service(config)?;

    let query = state.apply_filters(filters);
    state.go_to_page(page.unwrap_or(config.pagination.default_page));

    if !query.is_empty() {
        info!("Listing query: ?{}", query);
    }

    let mut fetch_filters = state.filters().clone();
    fetch_filters.specialty = refinements.specialty.or(fetch_filters.specialty);
    fetch_filters.min_rating = refinements.min_rating.or(fetch_filters.min_rating);

    let response = match service
        .fetch_doctors(&fetch_filters, state.page(), state.limit())
        .await
    {
        Ok(response) => response,
        Err(e) => {
            eprintln!("{}", format_error(LOAD_FAILED));
            return Err(e).context("Doctor search failed");
        }
    };

    if let Some(dir) = output.export {
        let exporter = JsonExporter::new(dir).context("Failed to create export directory")?;
        let manifest = exporter.export_page(&fetch_filters, &response, output.pretty)?;
        println!(
            "{}",
            format_success(&format!(
                "Exported {} doctors to {}",
                manifest.total_documents,
                exporter.output_dir().display()
            ))
        );
    }

    if output.json {
        let body = if output.pretty {
            serde_json::to_string_pretty(&response)?
        } else {
            serde_json::to_string(&response)?
        };
        println!("{}", body);
        return Ok(());
    }

    let control = state.control(&response);
    print!("{}", render::render_listing(&fetch_filters, &response, &control));

    Ok(())
}

fn cmd_pages(current: u32, total: u32) {
    let entries: Vec<String> = build_page_index(current, total)
        .iter()
        .map(PageEntry::to_string)
        .collect();
    println!("{}", entries.join(" "));

    let control = PaginationControl::new(current, total);
    if control.is_visible() {
        println!("{}", control);
    } else {
        println!("{}", format_info("Pagination control hidden (one page or less)"));
    }
}

fn cmd_show(config: &Config, id: &str) -> Result<()> {
    let service = build_service(config)?;
    match service.catalog().get(id) {
        Some(doctor) => println!("{}", render::render_card(doctor)),
        None => println!("{}", format_warning(&format!("No doctor with id {}", id))),
    }
    Ok(())
}

async fn cmd_options(config: &Config) -> Result<()> {
    let service = build_service(config)?;
    let options = service
        .fetch_filter_options()
        .await
        .context("Failed to fetch filter options")?;

    println!("Specialties:");
    for specialty in &options.specialties {
        println!("  {}", specialty);
    }

    println!("Locations:");
    for location in &options.locations {
        println!("  {}", location);
    }

    println!("Experience: 0-{} years", EXPERIENCE_SLIDER_MAX);
    println!("Consultation fee: up to ₹{}", FEE_SLIDER_MAX);

    Ok(())
}

async fn cmd_add(config: &Config, doctor: NewDoctor) -> Result<()> {
    let service = build_service(config)?;

    match service.add_doctor(doctor).await {
        Ok(doctor) => {
            println!("{}", format_success("Doctor added successfully"));
            println!("{}", serde_json::to_string_pretty(&doctor)?);
            Ok(())
        }
        Err(e) => {
            eprintln!(
                "{}",
                format_error("Failed to add doctor. Please try again later.")
            );
            Err(e).context("Adding doctor failed")
        }
    }
}
