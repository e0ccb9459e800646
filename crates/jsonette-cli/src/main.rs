//! `jsonette` CLI — format, validate, and query JSON documents from the
//! command line.
//!
//! ## Usage
//!
//! ```sh
//! # Canonicalize JSON (stdin → stdout)
//! echo '{"b": 1, "a": 2}' | jsonette fmt
//!
//! # Format from file to file
//! jsonette fmt -i data.json -o canonical.json
//!
//! # Validate a file, reporting parse errors with byte offsets
//! jsonette check -i data.json
//!
//! # Deep keyed lookup through nested objects
//! jsonette get --path Columns.farm_name.type -i schema.json
//! ```

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use jsonette_core::Value;
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "jsonette",
    version,
    about = "Minimal JSON formatter and inspector"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse JSON and re-serialize it in canonical compact form
    Fmt {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Validate JSON, reporting the first parse error with its byte offset
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Print the value at a dot-separated key path
    Get {
        /// Dot-separated object keys, e.g. Columns.farm_name.type
        #[arg(long)]
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fmt { input, output } => {
            let text = read_input(input.as_deref())?;
            let value = jsonette_core::deserialize(&text).context("Failed to parse JSON")?;
            write_output(output.as_deref(), &jsonette_core::serialize(&value))?;
        }
        Commands::Check { input } => {
            let text = read_input(input.as_deref())?;
            match jsonette_core::deserialize(&text) {
                Ok(_) => println!("OK ({} bytes)", text.len()),
                Err(err) => bail!("invalid JSON: {err}"),
            }
        }
        Commands::Get { path, input } => {
            let text = read_input(input.as_deref())?;
            let value = jsonette_core::deserialize(&text).context("Failed to parse JSON")?;
            let found =
                lookup(&value, &path).with_context(|| format!("no value at path `{}`", path))?;
            println!("{found}");
        }
    }

    Ok(())
}

/// Walk a dot-separated key path through nested objects. `None` as soon as
/// a segment is missing or the current value is not an object.
fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for key in path.split('.') {
        current = current.get(key)?;
    }
    Some(current)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
