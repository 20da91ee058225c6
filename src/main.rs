// Entry point: program main
// Handles --help, --catalog, --json, --log, then either resolves the given names or runs the TUI

use chips::catalog::Catalog;
use chips::config::{Settings, load_settings};
use chips::error::Result;
use chips::partition::Chip;
use chips::ui::model::Snapshot;
use std::env;
use std::path::{Path, PathBuf};
use std::process;

fn print_help() {
    println!("chips - pick items from a catalog as removable chips");
    println!();
    println!("Usage:");
    println!("  chips [options] [<name>...]");
    println!();
    println!("Options:");
    println!("  --catalog <file>  JSON array of items to pick from (default: built-in list).");
    println!("  --json            Print the final state as JSON instead of one name per line.");
    println!("  --log <filter>    Log filter, e.g. 'debug' or 'chips=trace'.");
    println!("  --help            Show this help message.");
    println!();
    println!("Description:");
    println!(
        "  With names, each one is added in order (exact, case-insensitive) and the selection is printed."
    );
    println!(
        "  Without names an interactive picker starts: type to filter, Enter adds the typed name, Tab adds the"
    );
    println!(
        "  highlighted suggestion, Backspace on an empty field removes the last chip, Esc finishes."
    );
    println!();
    println!("Settings are read from ./chips.toml and CHIPS_CATALOG, CHIPS_LOG, CHIPS_LOG_FILE.");
}

// Split argv into settings overrides and positional names.
fn parse_args(args: &[String], settings: &mut Settings) -> Result<Vec<String>, String> {
    let mut names = Vec::new();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--catalog" | "--log" => {
                let Some(v) = args.get(i + 1) else {
                    return Err(format!("{} requires a value", args[i]));
                };
                if args[i] == "--catalog" {
                    settings.catalog = Some(PathBuf::from(v));
                } else {
                    settings.log_filter = v.clone();
                }
                i += 2;
                continue;
            }
            "--json" => settings.json = true,
            "--" => {
                names.extend(args[i + 1..].iter().cloned());
                break;
            }
            s if s.starts_with("--") => return Err(format!("unknown option {s}")),
            _ => names.push(args[i].clone()),
        }
        i += 1;
    }
    Ok(names)
}

fn load_catalog(settings: &Settings) -> Result<Catalog> {
    match &settings.catalog {
        Some(path) => Ok(Catalog::load(path)?),
        None => Ok(Catalog::builtin()),
    }
}

fn print_chips(chips: &[Chip]) {
    for chip in chips {
        println!("{}", chip.item.display_name);
    }
}

fn print_json(snapshot: &Snapshot) -> Result<()> {
    let out = serde_json::to_string_pretty(snapshot)?;
    println!("{out}");
    Ok(())
}

async fn real_main(args: Vec<String>) -> Result<()> {
    let mut settings = load_settings(Path::new("."))?;
    let names = match parse_args(&args, &mut settings) {
        Ok(n) => n,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("try `chips --help`");
            process::exit(2);
        }
    };
    chips::logging::init(&settings, names.is_empty());
    let catalog = load_catalog(&settings)?;

    // If names provided, resolve them non-interactively, else run interactive TUI
    if !names.is_empty() {
        let selection = chips::ui::run(catalog, &names)?;
        if settings.json {
            return print_json(&chips::ui::model::from_selection(selection).snapshot());
        }
        print_chips(selection.selected());
        return Ok(());
    }

    let picked = chips::ui::run_interactive(catalog).await?;
    if settings.json {
        println!("{}", serde_json::to_string_pretty(&picked)?);
    } else {
        print_chips(&picked);
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return;
    }
    if let Err(e) = real_main(args).await {
        eprintln!("{e}");
        process::exit(2);
    }
}
