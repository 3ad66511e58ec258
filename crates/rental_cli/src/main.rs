use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use rental_core::config::RentalConfig;
use rental_core::export::{write_ledger_csv, write_ledger_json};
use rental_core::receipt::{write_receipt, JsonReceiptRenderer, ReceiptRenderer, TextReceiptRenderer};
use rental_core::request::{parse_plate, parse_zone, TripRequest};
use rental_core::seed::SeedData;
use rental_core::RentalService;
use tracing::{debug, info, Level};

mod output;
mod script;

use script::{load_script, run_script, ReceiptSink};

#[derive(Parser)]
#[command(
    name = "rentitnow",
    about = "RentItNow car-rental dispatch",
    long_about = "Fleet and account administration, vehicle selection and trip booking\n\
                  for the RentItNow three-zone city model."
)]
struct Cli {
    /// JSON configuration (service threshold, pricing, selection strategy)
    #[arg(long, global = true, env = "RENTITNOW_CONFIG")]
    config: Option<PathBuf>,
    /// JSON seed with the initial fleet and accounts; the demo fleet otherwise
    #[arg(long, global = true, env = "RENTITNOW_SEED")]
    seed: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every vehicle in the fleet
    Fleet,
    /// Select a vehicle for a request without booking it
    Quote {
        #[arg(long)]
        class: String,
        #[arg(long)]
        passengers: String,
        #[arg(long = "from")]
        origin: String,
    },
    /// Select, book and write a receipt
    Rent {
        #[arg(long)]
        account: String,
        #[arg(long)]
        class: String,
        #[arg(long)]
        passengers: String,
        #[arg(long = "from")]
        origin: String,
        #[arg(long = "to")]
        destination: String,
        /// Directory for the receipt; no receipt is written when omitted
        #[arg(long)]
        receipt_dir: Option<PathBuf>,
        #[arg(value_enum, long, default_value_t = ReceiptFormat::Txt)]
        format: ReceiptFormat,
    },
    /// Show where a vehicle is and its service counters
    Status {
        #[arg(long)]
        plate: String,
    },
    /// Run a JSON list of operations against one session
    Script {
        path: PathBuf,
        #[arg(long)]
        receipt_dir: Option<PathBuf>,
        #[arg(value_enum, long, default_value_t = ReceiptFormat::Txt)]
        format: ReceiptFormat,
    },
    /// Run a script, then export the trip ledger
    Export {
        script: PathBuf,
        #[arg(long)]
        csv: Option<PathBuf>,
        #[arg(long)]
        json: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ReceiptFormat {
    Txt,
    Json,
}

impl ReceiptFormat {
    fn renderer(self) -> &'static dyn ReceiptRenderer {
        match self {
            Self::Txt => &TextReceiptRenderer,
            Self::Json => &JsonReceiptRenderer,
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn build_service(config: Option<&Path>, seed: Option<&Path>) -> Result<RentalService, Box<dyn Error>> {
    let config = match config {
        Some(path) => RentalConfig::load(path)?,
        None => RentalConfig::default(),
    };
    let seed = match seed {
        Some(path) => SeedData::load(path)?,
        None => SeedData::demo(),
    };
    let service = RentalService::with_seed(config, seed);
    info!(
        vehicles = service.fleet().len(),
        accounts = service.accounts().len(),
        policy = service.dispatcher().policy_name(),
        "session ready"
    );
    Ok(service)
}

fn run_session(
    service: &mut RentalService,
    path: &Path,
    sink: Option<&ReceiptSink<'_>>,
) -> Result<(), Box<dyn Error>> {
    let commands = load_script(path)?;
    debug!(steps = commands.len(), path = %path.display(), "script loaded");
    let report = run_script(service, commands, sink);
    println!(
        "{} steps, {} failed, {} receipts",
        report.executed,
        report.failed,
        report.receipts.len()
    );
    output::print_ledger_summary(service.ledger());
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut service = build_service(cli.config.as_deref(), cli.seed.as_deref())?;

    match cli.command {
        Commands::Fleet => output::print_fleet(&service),
        Commands::Quote {
            class,
            passengers,
            origin,
        } => {
            let request = TripRequest::parse(
                &class,
                &passengers,
                &origin,
                service.dispatcher().pricing(),
            )?;
            let selection = service.select_vehicle(&request);
            output::print_selection(&service, &selection);
        }
        Commands::Rent {
            account,
            class,
            passengers,
            origin,
            destination,
            receipt_dir,
            format,
        } => {
            let request = TripRequest::parse(
                &class,
                &passengers,
                &origin,
                service.dispatcher().pricing(),
            )?;
            let destination = parse_zone(&destination)?;
            let selection = service.select_vehicle(&request);
            output::print_selection(&service, &selection);
            let binding = selection.into_binding(request.class, request.passengers)?;
            let record = service.book_trip(&binding, destination, account.trim())?;
            output::print_trip(&record);
            if let Some(dir) = receipt_dir {
                let receipt = service.receipt(&record)?;
                let path = write_receipt(&dir, &receipt, format.renderer())?;
                println!("receipt saved as {}", path.display());
            }
        }
        Commands::Status { plate } => {
            let status = service.status(&parse_plate(&plate)?)?;
            output::print_status(&status);
        }
        Commands::Script {
            path,
            receipt_dir,
            format,
        } => {
            let sink = receipt_dir.map(|dir| ReceiptSink {
                dir,
                renderer: format.renderer(),
            });
            run_session(&mut service, &path, sink.as_ref())?;
        }
        Commands::Export { script, csv, json } => {
            run_session(&mut service, &script, None)?;
            if let Some(path) = csv {
                write_ledger_csv(&path, service.ledger())?;
                println!("ledger written to {}", path.display());
            }
            if let Some(path) = json {
                write_ledger_json(&path, service.ledger())?;
                println!("ledger written to {}", path.display());
            }
        }
    }

    Ok(())
}
