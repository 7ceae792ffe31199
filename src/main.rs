//! # Recibo CLI
//!
//! Command-line interface for generating ESC/POS receipts.
//!
//! ## Usage
//!
//! ```bash
//! # List built-in printer profiles
//! recibo profiles
//!
//! # Dump a profile as JSON (a starting point for custom printers)
//! recibo profiles --json elgin-i9
//!
//! # Render a JSON receipt document to a file
//! recibo render receipt.json --profile 58mm --output receipt.bin
//!
//! # Render from stdin straight to a printer device
//! cat receipt.json | recibo render - --profile-file kiosk.json > /dev/usb/lp0
//!
//! # Render a demo receipt
//! recibo demo kitchen --profile bematech-mp4200 -o ticket.bin
//! ```

use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use recibo::{CapabilityProfile, ReceiptBuilder, ReciboError, json_api::JsonDocument, receipt};

/// Recibo - ESC/POS receipt generator
#[derive(Parser, Debug)]
#[command(name = "recibo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug output to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List built-in printer profiles
    Profiles {
        /// Print the named profile (or all of them) as JSON
        #[arg(long)]
        json: bool,

        /// Profile to show
        name: Option<String>,
    },

    /// Render a JSON receipt document to ESC/POS bytes
    Render {
        /// Document path, or `-` for stdin
        file: PathBuf,

        #[command(flatten)]
        target: Target,
    },

    /// Render a built-in demo receipt (omit the name to list them)
    Demo {
        name: Option<String>,

        #[command(flatten)]
        target: Target,
    },
}

/// Where the bytes go and which printer they are for.
#[derive(clap::Args, Debug)]
struct Target {
    /// Built-in profile slug or name
    #[arg(long, short)]
    profile: Option<String>,

    /// JSON file describing a custom profile
    #[arg(long, value_name = "FILE", conflicts_with = "profile")]
    profile_file: Option<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(long, short, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .init();
}

fn run(command: Commands) -> Result<(), ReciboError> {
    match command {
        Commands::Profiles { json, name } => {
            let profiles = match name {
                Some(name) => vec![CapabilityProfile::parse(&name)?],
                None => CapabilityProfile::built_in(),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&profiles)?);
                return Ok(());
            }

            println!("Available profiles:");
            for profile in &profiles {
                let slug = CapabilityProfile::SLUGS
                    .iter()
                    .find(|s| CapabilityProfile::parse(s).is_ok_and(|p| p == *profile))
                    .copied()
                    .unwrap_or("-");
                println!("  {:<16} {} ({} columns)", slug, profile.name, profile.width());
            }
        }

        Commands::Render { file, target } => {
            let source = if file.as_os_str() == "-" {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                buf
            } else {
                fs::read_to_string(&file)?
            };

            let doc: JsonDocument = serde_json::from_str(&source)?;
            let profile = doc.resolve_profile(target.load_profile()?)?;
            let builder = doc.render(profile)?;
            write_output(&builder, target.output.as_ref())?;
        }

        Commands::Demo { name, target } => {
            let Some(name) = name else {
                println!("Available receipts:");
                for name in receipt::list_receipts() {
                    println!("  {}", name);
                }
                return Ok(());
            };

            let builder = receipt::by_name(&name, target.load_profile()?).ok_or_else(|| {
                ReciboError::Document(format!(
                    "Unknown receipt '{}'. Run `recibo demo` to see available receipts.",
                    name
                ))
            })?;
            write_output(&builder, target.output.as_ref())?;
        }
    }

    Ok(())
}

impl Target {
    fn load_profile(&self) -> Result<CapabilityProfile, ReciboError> {
        if let Some(path) = &self.profile_file {
            return CapabilityProfile::from_json(&fs::read_to_string(path)?);
        }
        match &self.profile {
            Some(name) => CapabilityProfile::parse(name),
            None => Ok(CapabilityProfile::default()),
        }
    }
}

/// Write the finished receipt to a file or stdout, reporting diagnostics.
fn write_output(builder: &ReceiptBuilder, output: Option<&PathBuf>) -> Result<(), ReciboError> {
    for diagnostic in builder.diagnostics() {
        eprintln!("Warning: {}", diagnostic);
    }

    let bytes = builder.build_bytes();
    match output {
        Some(path) => {
            fs::write(path, &bytes)?;
            eprintln!("Wrote {} bytes to {}", bytes.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&bytes)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
