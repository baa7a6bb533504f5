mod demo;
mod menu;
mod overlay;

use clap::{Parser, Subcommand};
use std::sync::Arc;
use wayaku_core::config;
use wayaku_core::table::TranslationTable;
use wayaku_dom::document::Document;

#[derive(Parser)]
#[command(
    name = "wayaku",
    version,
    about = "和 Wayaku — Japanese localization overlay for dashboard pages"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the overlay against the bundled sample page.
    Run,
    /// Translate a phrase from the command line.
    Lookup {
        /// The phrase to look up.
        #[arg(trailing_var_arg = true)]
        phrase: Vec<String>,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the translation table.
    Table {
        /// Print the table as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Print the translated sidebar menu.
    Menu,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match cli.command {
        Commands::Run => {
            let cfg = config::load(&cli.config)?;
            let table = Arc::new(TranslationTable::new(&cfg.table));

            let doc = Arc::new(Document::new("body"));
            demo::sample_page(&doc)?;

            println!("和 Wayaku — Starting overlay...");
            let overlay = overlay::Overlay::new(doc.clone(), table, cfg.overlay, cfg.sweep);
            tokio::spawn(demo::drive(doc));
            overlay.run().await?;
        }
        Commands::Lookup { phrase, json } => {
            if phrase.is_empty() {
                anyhow::bail!("no phrase provided. Usage: wayaku lookup <phrase>");
            }
            let phrase = phrase.join(" ");
            let cfg = config::load(&cli.config)?;
            let table = TranslationTable::new(&cfg.table);

            let matched = table.lookup(&phrase).is_some();
            let translated = table.translate(&phrase).to_string();
            if json {
                let out = serde_json::json!({
                    "phrase": phrase,
                    "translation": translated,
                    "matched": matched,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{translated}");
            }
        }
        Commands::Table { json } => {
            let cfg = config::load(&cli.config)?;
            let table = TranslationTable::new(&cfg.table);

            if json {
                println!("{}", table.to_json()?);
            } else {
                println!("和 Wayaku — {} phrases\n", table.len());
                let mut pairs: Vec<(&str, &str)> = table.entries().collect();
                pairs.sort_unstable();
                for (key, value) in pairs {
                    println!("  {key} → {value}");
                }
                let collisions = table.colliding_values();
                if !collisions.is_empty() {
                    println!();
                    for (key, value) in collisions {
                        println!("  warning: value \"{value}\" for \"{key}\" is itself a key");
                    }
                }
            }
        }
        Commands::Menu => {
            let cfg = config::load(&cli.config)?;
            let table = TranslationTable::new(&cfg.table);
            print_menu(&menu::items(&table), 0);
        }
    }

    Ok(())
}

fn print_menu(items: &[menu::MenuItem], depth: usize) {
    for item in items {
        println!("{}{}", "  ".repeat(depth), item.label);
        print_menu(&item.children, depth + 1);
    }
}
