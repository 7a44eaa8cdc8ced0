//! Battle helper CLI
//!
//! Looks up each opponent named on the command line (or one per line on
//! stdin, skipping blank lines) and prints counter types, moves and
//! recommended Pokémon.
//!
//! ```text
//! battle-helper charizard gengar
//! battle-helper --json pikachu
//! echo onix | battle-helper
//! ```

use std::io;
use std::process;

use anyhow::{Context, Result};
use counterdex_client::input::query_names;
use counterdex_client::present::{TextReport, render_json};
use counterdex_client::{ClientConfig, PokeApiClient, battle_helper};
use rand::Rng;
use tracing_subscriber::EnvFilter;

struct Options {
    json: bool,
    names: Vec<String>,
}

fn parse_args() -> Option<Options> {
    let mut options = Options {
        json: false,
        names: Vec::new(),
    };

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => options.json = true,
            "-h" | "--help" => return None,
            _ => options.names.push(arg),
        }
    }

    Some(options)
}

fn print_usage() {
    println!("Usage: battle-helper [--json] [POKEMON ...]");
    println!();
    println!("With no names, reads one name per line from stdin.");
    println!();
    println!("Environment:");
    println!("  POKEAPI_URL               API root (default: https://pokeapi.co/api/v2)");
    println!("  POKEAPI_TIMEOUT_SECS      request timeout in seconds");
    println!("  COUNTERDEX_SPECIES_LIMIT  recommended Pokémon per query (default: 4)");
    println!("  RUST_LOG                  log filter (default: warn)");
}

/// Run one query, printing the result. Returns false if the opponent was not found.
async fn run_query<R: Rng>(
    client: &PokeApiClient,
    config: &ClientConfig,
    name: &str,
    json: bool,
    rng: &mut R,
) -> Result<bool> {
    match battle_helper(client, name, config.species_limit, rng).await {
        Ok(report) => {
            if json {
                println!("{}", render_json(&report).context("Failed to serialize report")?);
            } else {
                println!("{}", TextReport(&report));
            }
            Ok(true)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            Ok(false)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let Some(options) = parse_args() else {
        print_usage();
        return Ok(());
    };

    let config = ClientConfig::from_env();
    let client = PokeApiClient::new(&config).context("Failed to build HTTP client")?;
    tracing::debug!(base_url = client.base_url(), "Client ready");

    let mut rng = rand::thread_rng();
    let mut all_found = true;

    if options.names.is_empty() {
        for name in query_names(io::stdin().lock()) {
            let name = name.context("Failed to read stdin")?;
            all_found &= run_query(&client, &config, &name, options.json, &mut rng).await?;
        }
    } else {
        for name in &options.names {
            all_found &= run_query(&client, &config, name, options.json, &mut rng).await?;
        }
    }

    if !all_found {
        process::exit(1);
    }

    Ok(())
}
