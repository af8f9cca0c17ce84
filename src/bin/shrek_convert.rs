//! Utility to run a single conversion from the command line
//!
//! Usage: shrek-convert <category> <unit> <amount> [--to-base | --to-unit]
//!
//! `--to-base` (the default, as in the MCP `convert` tool) reads the amount in
//! the unit and prints Shreks. `--to-unit` reads Shreks and prints the unit.

use std::process::ExitCode;

use shrekdroid::catalog::Catalog;
use shrekdroid::config::Config;
use shrekdroid::conversion::{ConversionRequest, Direction, DEFAULT_DIRECTION};

fn usage() -> ExitCode {
    eprintln!("Usage: shrek-convert <category> <unit> <amount> [--to-base | --to-unit]");
    ExitCode::from(2)
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let mut direction: Option<Direction> = None;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        let flag = match arg.as_str() {
            "--to-base" => Some(Direction::ToBase),
            "--to-unit" => Some(Direction::ToUnit),
            _ => None,
        };
        if let Some(flag) = flag {
            if direction.is_some_and(|d| d != flag) {
                return Ok(usage());
            }
            direction = Some(flag);
            continue;
        }
        match arg.as_str() {
            "-h" | "--help" => return Ok(usage()),
            _ => positional.push(arg),
        }
    }

    let [category, unit, amount] = match <[String; 3]>::try_from(positional) {
        Ok(args) => args,
        Err(_) => return Ok(usage()),
    };

    let config = Config::from_env();
    let catalog = Catalog::seeded()?;
    let direction = direction.unwrap_or(DEFAULT_DIRECTION);

    let unit = match catalog.unit(&category, &unit) {
        Ok(unit) => unit,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    match ConversionRequest::new(&amount, Some(unit), direction).execute() {
        Ok(result) => {
            println!("{}", result.format(config.precision));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
