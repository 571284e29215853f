use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::error;
use tracing_subscriber::EnvFilter;

use xmlu::{sort_file, Newline, SortSpec, WriteOptions};

#[derive(Debug, Parser)]
#[command(name = "xmlu", version, about = "Sort Salesforce metadata XML records")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sort the <labels> records of a CustomLabels file by <fullName>
    Sort {
        /// Path to the CustomLabels metadata XML file
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Spaces per nesting level
        #[arg(long, default_value_t = 4)]
        indent: usize,
        /// Line terminator
        #[arg(long, value_enum, default_value_t = NewlineArg::Lf)]
        newline: NewlineArg,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum NewlineArg {
    Lf,
    Crlf,
}

impl From<NewlineArg> for Newline {
    fn from(value: NewlineArg) -> Self {
        match value {
            NewlineArg::Lf => Newline::Lf,
            NewlineArg::Crlf => Newline::CrLf,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run() {
        error!("{e:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Sort {
            file,
            indent,
            newline,
        } => {
            let options = WriteOptions {
                indent,
                newline: newline.into(),
                ..WriteOptions::default()
            };
            sort_file(&file, &SortSpec::custom_labels(), &options)
                .with_context(|| format!("failed to sort {}", file.display()))?;
            println!("Custom Label metadata is successfully sorted.");
            Ok(())
        }
    }
}
