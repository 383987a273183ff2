//! touchstone: inspect and convert Touchstone (.sNp) files
//!
//! This is the main entry point for the command line tool.

mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use touchstone_core::{Touchstone, TouchstoneFormat, WriterOptions};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "touchstone")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Numeric representation of the data block
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum DataFormat {
    Ri,
    Ma,
    Db,
}

impl From<DataFormat> for TouchstoneFormat {
    fn from(format: DataFormat) -> Self {
        match format {
            DataFormat::Ri => TouchstoneFormat::RI,
            DataFormat::Ma => TouchstoneFormat::MA,
            DataFormat::Db => TouchstoneFormat::DB,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a Touchstone file
    Info {
        /// Path to the .sNp file
        file: PathBuf,

        /// Number of ports, overriding the file extension
        #[arg(short, long)]
        ports: Option<usize>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rewrite a Touchstone file, optionally in another data format
    Convert {
        /// Path to the input .sNp file
        input: PathBuf,

        /// Output file path
        #[arg(short, long)]
        output: PathBuf,

        /// Data format of the output, the input format when omitted
        #[arg(short, long)]
        format: Option<DataFormat>,

        /// Number of ports, overriding the input file extension
        #[arg(short, long)]
        ports: Option<usize>,

        /// Decimal places of each written value
        #[arg(long, default_value_t = WriterOptions::default().precision)]
        precision: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    match cli.command {
        Commands::Info { file, ports, json } => {
            info(&file, ports, json)?;
        }
        Commands::Convert {
            input,
            output,
            format,
            ports,
            precision,
        } => {
            convert(&input, &output, format.map(Into::into), ports, precision)?;
        }
    }

    Ok(())
}

/// Read a file, taking the port count from the extension unless given
fn load(file: &Path, ports: Option<usize>) -> Result<Touchstone> {
    tracing::info!("Parsing Touchstone file: {:?}", file);

    let ts = match ports {
        Some(nports) => Touchstone::from_file_with_ports(file, nports),
        None => Touchstone::from_file(file),
    };
    ts.with_context(|| format!("Failed to read {}", file.display()))
}

fn info(file: &Path, ports: Option<usize>, json: bool) -> Result<()> {
    let ts = load(file, ports)?;
    let summary = output::Summary::new(file, &ts);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary);
    }
    Ok(())
}

fn convert(
    input: &Path,
    output: &Path,
    format: Option<TouchstoneFormat>,
    ports: Option<usize>,
    precision: usize,
) -> Result<()> {
    let mut ts = load(input, ports)?;
    if let Some(format) = format {
        ts = ts.with_format(format);
    }

    let options = WriterOptions {
        precision,
        ..WriterOptions::default()
    };
    let file = std::fs::File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    let mut writer = std::io::BufWriter::new(file);
    ts.write_with(&mut writer, &options)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    std::io::Write::flush(&mut writer)?;

    tracing::info!("Wrote {:?} as {}", output, ts.format().unwrap_or(TouchstoneFormat::MA));
    Ok(())
}
