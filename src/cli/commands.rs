use std::collections::BTreeMap;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::api::{DEFAULT_BASE_URL, PokeClient};
use crate::filters::filter_by_name;
use crate::squad::MAX_SQUAD_SIZE;
use crate::tui;
use crate::utils::format::summary_card;
use crate::utils::{capitalize, format_dex_number};

#[derive(Parser)]
#[command(name = "pokeverse")]
#[command(version = "0.1.0")]
#[command(about = "Browse the original 151 Pokemon and build a squad", long_about = None)]
pub struct Cli {
    /// API root to fetch the catalog from
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the roster, optionally filtered by name
    List {
        /// Case-insensitive substring filter
        #[arg(long)]
        search: Option<String>,
    },
    /// Print one entry's detail card by name or dex number
    Show { name_or_id: String },
    /// Show statistics about the roster
    Stats,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    let client = PokeClient::new(&cli.base_url)?;

    match &cli.command {
        Some(Commands::List { search }) => {
            list_roster(&client, search.as_deref().unwrap_or("")).await?;
        }
        Some(Commands::Show { name_or_id }) => {
            show_entry(&client, name_or_id).await?;
        }
        Some(Commands::Stats) => {
            show_stats(&client).await?;
        }
        None => {
            eprintln!("Loading roster...");
            let roster = client.fetch_roster().await?;
            tui::run_interactive(roster)?;
        }
    }

    Ok(())
}

async fn list_roster(client: &PokeClient, search: &str) -> Result<()> {
    let roster = client.fetch_roster().await?;
    let filtered = filter_by_name(&roster, search);

    for pokemon in &filtered {
        println!(
            "{} {} | {}",
            format_dex_number(pokemon.id),
            capitalize(&pokemon.name),
            pokemon.type_names().join(", ")
        );
    }
    println!();
    println!("Showing {} of {}", filtered.len(), roster.len());

    Ok(())
}

async fn show_entry(client: &PokeClient, name_or_id: &str) -> Result<()> {
    let pokemon = client.fetch_by_name_or_id(name_or_id).await?;
    println!("{}", summary_card(&pokemon));
    Ok(())
}

async fn show_stats(client: &PokeClient) -> Result<()> {
    let roster = client.fetch_roster().await?;

    let mut type_counts: BTreeMap<String, usize> = BTreeMap::new();
    for pokemon in &roster {
        for type_name in pokemon.type_names() {
            *type_counts.entry(type_name.to_string()).or_default() += 1;
        }
    }

    println!("Pokeverse Roster Statistics");
    println!("================================");
    println!("Total entries: {}", roster.len());
    println!("Squad capacity: {}", MAX_SQUAD_SIZE);
    println!();
    println!("Entries by type:");
    for (type_name, count) in &type_counts {
        println!("  {}: {}", type_name, count);
    }

    if let Some(first) = roster.first() {
        println!();
        println!("First entry: {} {}", format_dex_number(first.id), capitalize(&first.name));
    }
    if let Some(last) = roster.last() {
        println!("Last entry: {} {}", format_dex_number(last.id), capitalize(&last.name));
    }

    Ok(())
}
