// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use listing_normalizer::utils::logging::{
    format_error, format_field, format_info, format_step, format_success, format_warning,
    init_logger,
};
use listing_normalizer::{
    Config, ImageCatalog, LineupNormalizer, NormalizationPipeline, ReferenceData, Validator,
    VehicleNameParser,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "listing_normalizer")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Vehicle inventory listing parser, lineup normalizer and grouper", long_about = None)]
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

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize every listing file under the input directory and export the results
    Normalize {
        #[arg(short, long, value_name = "DIR")]
        input: Option<PathBuf>,

        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        #[arg(short, long)]
        pretty: bool,

        #[arg(long, value_name = "NUM")]
        limit: Option<usize>,
    },

    /// Parse one raw vehicle name
    Parse {
        /// Raw vehicle name, e.g. "더 뉴 아반떼 1.6 터보"
        name: String,
    },

    /// Normalize one lineup string for a vehicle
    Lineup {
        lineup: String,

        #[arg(long, value_name = "NAME")]
        vehicle: String,

        /// Full raw vehicle name, used for seat counts
        #[arg(long, value_name = "RAW")]
        raw: Option<String>,

        /// Second lineup to compare against
        #[arg(long, value_name = "LINEUP")]
        compare: Option<String>,
    },

    /// List known brands in display order
    Brands,

    /// List catalog vehicles of a brand, or resolve one image code
    Catalog {
        brand: String,

        #[arg(long)]
        code: Option<String>,
    },

    /// Dump the active reference tables as JSON
    Reference {
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger(cli.color, cli.verbose);

    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::default_config()
    };

    let reference = load_reference(&config)?;

    match cli.command {
        Commands::Normalize {
            input,
            output,
            pretty,
            limit,
        } => {
            cmd_normalize(config, reference, input, output, pretty, limit, cli.color).await?;
        }
        Commands::Parse { name } => {
            cmd_parse(reference, &name)?;
        }
        Commands::Lineup {
            lineup,
            vehicle,
            raw,
            compare,
        } => {
            cmd_lineup(reference, &lineup, &vehicle, raw.as_deref(), compare.as_deref());
        }
        Commands::Brands => {
            cmd_brands(reference);
        }
        Commands::Catalog { brand, code } => {
            cmd_catalog(reference, &brand, code.as_deref());
        }
        Commands::Reference { output } => {
            cmd_reference(&reference, output)?;
        }
    }

    Ok(())
}

fn load_reference(config: &Config) -> Result<Arc<ReferenceData>> {
    let Some(path) = config.reference.path.as_deref() else {
        return Ok(ReferenceData::builtin());
    };

    info!("Loading reference data from: {}", path.display());
    Validator::validate_file_path(path)?;
    Validator::validate_json_extension(path)?;

    ReferenceData::load(Some(path)).context("Failed to load reference data")
}

async fn cmd_normalize(
    mut config: Config,
    reference: Arc<ReferenceData>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    pretty: bool,
    limit: Option<usize>,
    colored: bool,
) -> Result<()> {
    let start_time = Instant::now();

    if let Some(input) = input {
        config.input.path = input;
    }
    if let Some(output) = output {
        config.output.dir = output;
    }
    let pretty = pretty || config.output.pretty;
    let output_dir = config.output.dir.clone();

    Validator::validate_directory(&config.input.path).context("Invalid input directory")?;

    eprintln!(
        "{}",
        format_step(1, 2, &format!("Normalizing listings in {}", config.input.path.display()))
    );

    let pipeline = NormalizationPipeline::new(config, reference).with_progress(true, colored);
    let manifest = pipeline
        .run_and_export(output_dir.clone(), pretty, limit)
        .await
        .context("Normalization run failed")?;

    eprintln!(
        "{}",
        format_step(2, 2, &format!("Exported to {}", output_dir.display()))
    );

    if manifest.stats.files_failed > 0 && manifest.stats.files_processed == 0 {
        eprintln!(
            "{}",
            format_error(&format!(
                "all {} listing file(s) failed, nothing was normalized",
                manifest.stats.files_failed
            ))
        );
    } else if manifest.stats.files_failed > 0 {
        eprintln!(
            "{}",
            format_warning(&format!(
                "{} file(s) failed, see log for details",
                manifest.stats.files_failed
            ))
        );
    }

    println!(
        "{}",
        format_success(&format!(
            "{} listings ({} unique) in {} groups across {} brands ({:.2}s)",
            manifest.total_listings,
            manifest.unique_listings,
            manifest.total_groups,
            manifest.total_brands,
            start_time.elapsed().as_secs_f64()
        ))
    );

    Ok(())
}

fn cmd_parse(reference: Arc<ReferenceData>, name: &str) -> Result<()> {
    Validator::validate_vehicle_name(name)?;

    let parser = VehicleNameParser::with_reference(reference);
    let parsed = parser.parse(name);

    println!("{}", serde_json::to_string_pretty(&parsed)?);
    Ok(())
}

fn cmd_lineup(
    reference: Arc<ReferenceData>,
    lineup: &str,
    vehicle: &str,
    raw: Option<&str>,
    compare: Option<&str>,
) {
    let normalizer = LineupNormalizer::with_reference(reference);
    let normalized = normalizer.normalize(lineup, vehicle, raw);

    println!("{}", normalized);

    if let Some(other) = compare {
        let other_normalized = normalizer.normalize(other, vehicle, raw);
        if normalizer.is_same_lineup(lineup, other, vehicle) {
            println!("{}", format_success(&format!("same lineup as \"{}\"", other)));
        } else {
            println!(
                "{}",
                format_info(&format!("differs from \"{}\" ({})", other, other_normalized))
            );
        }
    }
}

fn cmd_brands(reference: Arc<ReferenceData>) {
    let catalog = ImageCatalog::with_reference(Arc::clone(&reference));
    let parser = VehicleNameParser::with_reference(Arc::clone(&reference));

    let mut brands: Vec<String> = reference.brand_order.clone();
    for brand in parser.all_brands() {
        if !brands.contains(&brand) {
            brands.push(brand);
        }
    }

    for brand in &brands {
        let models = parser.reference().keywords_for(brand).len();
        println!(
            "{}",
            format_field(
                brand,
                &format!("{} ({} model keywords)", catalog.brand_logo_path(brand), models)
            )
        );
    }
}

fn cmd_catalog(reference: Arc<ReferenceData>, brand: &str, code: Option<&str>) {
    let catalog = ImageCatalog::with_reference(reference);

    if let Some(code) = code {
        match catalog.model_name_by_code(brand, code) {
            Some(name) => println!("{}", format_field(code, &name)),
            None => println!(
                "{}",
                format_warning(&format!("no {} model with code {}", brand, code))
            ),
        }
        return;
    }

    let vehicles = catalog.vehicles_by_brand(brand);
    if vehicles.is_empty() {
        println!("{}", format_warning(&format!("no catalog for brand {}", brand)));
        return;
    }

    for vehicle in vehicles {
        println!(
            "{}",
            format_field(
                &vehicle.code,
                &format!("{} -> {}", Validator::truncate_text(&vehicle.name, 30), vehicle.image)
            )
        );
    }
}

fn cmd_reference(reference: &ReferenceData, output: Option<PathBuf>) -> Result<()> {
    let json = reference.to_json(true)?;

    match output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "{}",
                format_success(&format!("Reference data written to {}", path.display()))
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}
