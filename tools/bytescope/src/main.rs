//! bytescope - Binary File Inspector
//!
//! Loads a file into memory and looks at it through the bytekit codec:
//! hex dumps, typed integer arrays, single reads, bit strings, text
//! decoding and in-place integer patches.

mod commands;
mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use bytekit::option::value_or_default;
use bytekit::{hex, Endian, Width};
use clap::{Parser, Subcommand};
use colored::*;
use common::{init_logging, load_config, LogConfigBuilder};
use tracing::debug;

use crate::commands::{Encoding, IntsOptions};
use crate::config::{ScopeConfig, APP_NAME};

#[derive(Parser)]
#[command(name = "bytescope")]
#[command(about = "Inspect and patch binary files")]
#[command(long_about = "Inspect and patch binary files

Commands:
  hex      Hex dump with ASCII column
  ints     Decode a range as an array of integers
  read     Read one integer at an offset
  bits     Print bits as a 0/1 string, LSB of byte 0 first
  text     Decode as ASCII, UTF-8 or UTF-16
  patch    Write an integer at a (clamped) offset

Examples:
  bytescope hex firmware.bin --width 8
  bytescope ints frame.bin --type u16 --endian big --start 4 --end 20
  bytescope read frame.bin --type i32 --offset 12
  bytescope patch frame.bin --type u32 --offset 8 --value 0xDEADBEEF")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (toml, yaml or json)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    /// Log level or filter directive (overrides config)
    #[arg(long = "log-level", global = true)]
    log_level: Option<String>,

    /// Byte order: little/le or big/be (overrides config)
    #[arg(short = 'e', long, global = true)]
    endian: Option<Endian>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Hex dump of the file
    Hex {
        file: PathBuf,

        /// Uppercase hex digits
        #[arg(long)]
        upper: bool,

        /// Bytes per line
        #[arg(short, long)]
        width: Option<usize>,
    },

    /// Decode a byte range as integers
    Ints {
        file: PathBuf,

        /// Integer type: u8..u64, i8..i64 or byte/word/fword/dfword
        #[arg(short = 't', long = "type")]
        width: Width,

        /// First byte of the range
        #[arg(long)]
        start: Option<usize>,

        /// End of the range (exclusive)
        #[arg(long)]
        end: Option<usize>,

        /// Zero-pad a trailing partial element instead of dropping it
        #[arg(long)]
        padded: bool,

        /// Thousands separators in decimal output
        #[arg(long)]
        grouped: bool,
    },

    /// Read a single integer
    Read {
        file: PathBuf,

        #[arg(short = 't', long = "type")]
        width: Width,

        #[arg(short, long)]
        offset: usize,
    },

    /// Print bits as a 0/1 string
    Bits {
        file: PathBuf,

        /// First bit index
        #[arg(long, default_value_t = 0)]
        start: usize,

        /// End bit index (exclusive, default: end of file)
        #[arg(long)]
        end: Option<usize>,
    },

    /// Decode the file as text
    Text {
        file: PathBuf,

        #[arg(long, value_enum, default_value = "utf8")]
        encoding: Encoding,
    },

    /// Write an integer into the file
    Patch {
        file: PathBuf,

        #[arg(short = 't', long = "type")]
        width: Width,

        /// Byte offset, clamped so the value fits
        #[arg(short, long)]
        offset: usize,

        /// Decimal or 0x-prefixed hex value
        #[arg(short, long, allow_hyphen_values = true)]
        value: String,

        /// Write to this file instead of overwriting the input
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let mut config: ScopeConfig =
        load_config(APP_NAME, cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(level) = cli.log_level.clone() {
        config.log_level = level;
    }
    if let Some(endian) = cli.endian {
        config.endian = endian;
    }

    init_logging(
        &LogConfigBuilder::new()
            .level(config.log_level.clone())
            .format(config.log_format)
            .ansi(!cli.no_color)
            .build(),
    )?;
    debug!("Effective config: {:?}", config);

    run(cli.command, &config)
}

fn run(command: Commands, config: &ScopeConfig) -> Result<()> {
    match command {
        Commands::Hex { file, upper, width } => {
            let data = commands::load_file(&file)?;
            let width = value_or_default(width, config.hex_width);
            for line in hex::dump_lines(&data, width, upper || config.uppercase_hex) {
                println!("{}", line);
            }
        },
        Commands::Ints {
            file,
            width,
            start,
            end,
            padded,
            grouped,
        } => {
            let data = commands::load_file(&file)?;
            let range = commands::byte_range(start, end, data.len());
            let options = IntsOptions {
                width,
                endian: config.endian,
                padded,
                grouped,
            };
            println!(
                "{} {} values ({})",
                "▶".bright_blue(),
                width.to_string().bold(),
                config.endian
            );
            for line in commands::ints(&data, options, range)? {
                println!("{}", line);
            }
        },
        Commands::Read {
            file,
            width,
            offset,
        } => {
            let data = commands::load_file(&file)?;
            let rendered = commands::read(&data, width, offset, config.endian)?;
            println!("{} @ {}: {}", width, offset, rendered.green());
        },
        Commands::Bits { file, start, end } => {
            let data = commands::load_file(&file)?;
            let end = value_or_default(end, data.len() * 8);
            println!("{}", commands::bits(&data, start..end));
        },
        Commands::Text { file, encoding } => {
            let data = commands::load_file(&file)?;
            println!("{}", commands::decode_text(&data, encoding)?);
        },
        Commands::Patch {
            file,
            width,
            offset,
            value,
            output,
        } => {
            let outcome =
                commands::patch_file(&file, output.as_deref(), width, offset, &value)?;
            if outcome.was_clamped() {
                println!(
                    "{} offset {} clamped to {}",
                    "⚠".yellow(),
                    outcome.requested,
                    outcome.resolved
                );
            }
            println!(
                "{} wrote {} {} at offset {}",
                "✓".green(),
                width,
                outcome.rendered.bold(),
                outcome.resolved
            );
        },
    }
    Ok(())
}
