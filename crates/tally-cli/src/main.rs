#![deny(warnings)]
#![deny(clippy::all)]

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tally_core::{ChecksumError, Crc16, TextEncoding, Variant};
use thiserror::Error;
use tracing::error;
use tracing_subscriber::EnvFilter;

const EXIT_SUCCESS: i32 = 0;
const EXIT_CLI: i32 = 2;
const EXIT_CHECKSUM: i32 = 3;
const EXIT_IO: i32 = 4;

const READ_BUF_LEN: usize = 8192;

#[derive(Parser, Debug)]
#[command(name = "tally", version, about = "CRC-16 checksum tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Checksum a file, or stdin when no path is given
    Sum {
        path: Option<PathBuf>,
        #[arg(long, default_value = "ieee")]
        variant: Variant,
    },
    /// Checksum literal text
    Text {
        text: String,
        #[arg(long, default_value = "ieee")]
        variant: Variant,
        /// Fold UTF-16 code units (big endian) instead of ASCII bytes
        #[arg(long)]
        utf16: bool,
    },
    /// List the variant catalog
    Variants,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("checksum error: {0}")]
    Checksum(#[from] ChecksumError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn main() {
    let exit_code = run();
    std::process::exit(exit_code);
}

fn run() -> i32 {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return EXIT_CLI;
        }
    };

    let result = match cli.command {
        Commands::Sum { path, variant } => cmd_sum(path.as_deref(), variant),
        Commands::Text {
            text,
            variant,
            utf16,
        } => cmd_text(&text, variant, utf16),
        Commands::Variants => cmd_variants(),
    };

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            report_error(&err);
            map_exit_code(&err)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn report_error(err: &CliError) {
    error!(error = %err, "command failed");
    eprintln!("error: {err}");
}

fn map_exit_code(err: &CliError) -> i32 {
    match err {
        CliError::Checksum(_) => EXIT_CHECKSUM,
        CliError::Io(_) => EXIT_IO,
    }
}

fn cmd_sum(path: Option<&Path>, variant: Variant) -> Result<(), CliError> {
    let mut crc = Crc16::with_variant(variant);

    match path {
        Some(path) => {
            let mut file = File::open(path)?;
            digest_reader(&mut crc, &mut file)?;
            println!("{:04X}  {}", crc.digest(), path.display());
        }
        None => {
            let stdin = io::stdin();
            digest_reader(&mut crc, &mut stdin.lock())?;
            println!("{:04X}  -", crc.digest());
        }
    }

    Ok(())
}

fn digest_reader<R: Read>(crc: &mut Crc16, reader: &mut R) -> io::Result<()> {
    let mut buffer = [0u8; READ_BUF_LEN];

    loop {
        let read = reader.read(&mut buffer)?;
        if read == 0 {
            return Ok(());
        }
        crc.update(&buffer[..read]);
    }
}

fn cmd_text(text: &str, variant: Variant, utf16: bool) -> Result<(), CliError> {
    let encoding = if utf16 {
        TextEncoding::Utf16Be
    } else {
        TextEncoding::Ascii
    };

    let mut crc = Crc16::with_variant(variant);
    crc.update_text(text, encoding)?;
    println!("{:04X}", crc.digest());

    Ok(())
}

fn cmd_variants() -> Result<(), CliError> {
    println!("name     poly    init    refin  refout  xorout");
    for variant in Variant::ALL {
        let config = variant.config();
        println!(
            "{:<8} 0x{:04X}  0x{:04X}  {:<5}  {:<6}  0x{:04X}",
            variant.name(),
            config.polynomial,
            config.initial_value,
            config.reflect_in,
            config.reflect_out,
            config.final_xor
        );
    }

    Ok(())
}
