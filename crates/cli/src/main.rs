use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use colored::Colorize;
use guide_core::{StreamingGuide, StreamingLookup, parse_service};

/// StreamGuide - find which services carry a movie
#[derive(Parser, Debug)]
#[command(name = "streamguide")]
#[command(about = "Look up which streaming services carry a movie", long_about = None)]
struct Cli {
    /// Streaming service as NAME=Title::Genre::Director::Year;... (repeatable)
    #[arg(short, long = "service", value_name = "SPEC", global = true)]
    services: Vec<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show which services carry a movie
    Lookup {
        /// Exact movie title
        #[arg(long)]
        title: String,

        /// Remove the first service with this name before the lookup (repeatable)
        #[arg(long = "drop", value_name = "NAME")]
        drop: Vec<String>,

        /// Remove a movie from a service before the lookup, as SERVICE::TITLE (repeatable)
        #[arg(long = "unlist", value_name = "SERVICE::TITLE")]
        unlist: Vec<String>,
    },

    /// List every service and its catalog
    Catalog,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut guide = build_guide(&cli.services)?;
    tracing::info!("Guide ready with {} services", guide.len());

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Lookup {
            title,
            drop,
            unlist,
        } => {
            apply_removals(&mut guide, &drop, &unlist)?;
            handle_lookup(&guide, &title, cli.json)?
        }
        Commands::Catalog => handle_catalog(&guide, cli.json)?,
    }

    Ok(())
}

/// Build a guide from the `--service` arguments, keeping their order
fn build_guide(specs: &[String]) -> Result<StreamingGuide> {
    let mut guide = StreamingGuide::new();
    for spec in specs {
        let service =
            parse_service(spec).with_context(|| format!("Invalid --service value {:?}", spec))?;
        guide.add_streaming_service(service);
    }
    Ok(guide)
}

/// Apply `--drop` and `--unlist` removals. Unknown names are ignored.
fn apply_removals(guide: &mut StreamingGuide, drop: &[String], unlist: &[String]) -> Result<()> {
    for name in drop {
        guide.delete_streaming_service(name);
    }

    for entry in unlist {
        let (service_name, title) = entry
            .split_once("::")
            .ok_or_else(|| anyhow!("Invalid --unlist value {:?}, expected SERVICE::TITLE", entry))?;
        match guide.get_streaming_service_mut(service_name) {
            Some(service) => service.delete_movie(title),
            None => tracing::debug!("No service named {:?}, nothing to unlist", service_name),
        }
    }
    Ok(())
}

/// Handle the 'lookup' command
fn handle_lookup(guide: &StreamingGuide, title: &str, json: bool) -> Result<()> {
    let found = guide.who_streams_this_movie(title);

    if json {
        // `null` is the not-found marker
        println!(
            "{}",
            serde_json::to_string_pretty(&found).context("Failed to serialize lookup result")?
        );
        return Ok(());
    }

    match found {
        Some(lookup) => print_lookup(&lookup),
        None => println!("{} {:?} is not streaming on any service", "✗".red(), title),
    }
    Ok(())
}

/// Handle the 'catalog' command
fn handle_catalog(guide: &StreamingGuide, json: bool) -> Result<()> {
    if json {
        let listing: Vec<_> = guide
            .get_services()
            .iter()
            .map(|service| {
                let mut movies: Vec<_> = service.get_catalog().values().collect();
                movies.sort_by(|a, b| a.get_title().cmp(b.get_title()));
                serde_json::json!({ "name": service.get_name(), "movies": movies })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&listing).context("Failed to serialize catalog")?
        );
        return Ok(());
    }

    if guide.is_empty() {
        println!("No streaming services configured");
        return Ok(());
    }

    for service in guide.get_services() {
        println!(
            "{} ({} movies)",
            service.get_name().bold().blue(),
            service.len()
        );
        let mut movies: Vec<_> = service.get_catalog().values().collect();
        movies.sort_by(|a, b| a.get_title().cmp(b.get_title()));
        for movie in movies {
            println!("  {}{}", "• ".green(), movie);
        }
    }
    Ok(())
}

/// Helper function to format and print a lookup result
fn print_lookup(lookup: &StreamingLookup) {
    println!(
        "{} {} ({})",
        "✓".green(),
        lookup.title.bold(),
        lookup.year
    );
    for (rank, name) in lookup.services.iter().enumerate() {
        println!("  {}. {}", (rank + 1).to_string().green(), name);
    }
}
