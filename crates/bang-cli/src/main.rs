//! Bangroute CLI
//!
//! CLI tool for resolving bang queries and building router links.

mod bench;

use clap::{Parser, Subcommand};

use bang_core::intercept::{detect_site, intercept};
use bang_core::redirect::DEFAULT_ROUTER_URL;
use bang_core::{RouterConfig, SearchHandler, SearchProvider};

use crate::bench::BenchOptions;

#[derive(Parser)]
#[command(name = "bang-cli")]
#[command(about = "Bangroute query resolver and tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a query to its destination URL
    Resolve {
        /// Query words, joined with spaces
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,

        /// Also print the matched provider
        #[arg(short, long)]
        verbose: bool,
    },

    /// List providers in match order
    Providers {
        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build a link that hands a query to the router
    Link {
        /// Query words, joined with spaces
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Router base URL
        #[arg(long, env = "BANG_ROUTER_URL", default_value = DEFAULT_ROUTER_URL)]
        router_url: String,
    },

    /// Translate a search engine results URL into a router link
    Intercept {
        /// Engine page URL, e.g. https://www.google.com/search?q=...
        page_url: String,

        /// Router base URL
        #[arg(long, env = "BANG_ROUTER_URL", default_value = DEFAULT_ROUTER_URL)]
        router_url: String,
    },

    /// Check dispatch latency against the performance budget
    Bench {
        /// Passes over the sample queries
        #[arg(short, long, default_value_t = 2000)]
        iterations: usize,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Resolve {
            query,
            json,
            verbose,
        } => cmd_resolve(&query.join(" "), json, verbose),
        Commands::Providers { json } => cmd_providers(json),
        Commands::Link { query, router_url } => cmd_link(&query.join(" "), &router_url),
        Commands::Intercept {
            page_url,
            router_url,
        } => cmd_intercept(&page_url, &router_url),
        Commands::Bench { iterations } => bench::run_bench(BenchOptions { iterations }),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn build_handler() -> Result<SearchHandler, String> {
    SearchHandler::builtin().map_err(|e| format!("Failed to build provider chain: {}", e))
}

fn build_router(router_url: &str) -> Result<RouterConfig, String> {
    let router = RouterConfig::new(router_url).map_err(|e| format!("Invalid router URL: {}", e))?;
    log::debug!("using router {}", router.url());
    Ok(router)
}

fn cmd_resolve(query: &str, json: bool, verbose: bool) -> Result<(), String> {
    let handler = build_handler()?;
    let result = handler.search(query);

    if json {
        let text = serde_json::to_string_pretty(&result)
            .map_err(|e| format!("Failed to serialize JSON: {}", e))?;
        println!("{}", text);
        return Ok(());
    }

    if verbose {
        eprintln!("{} - {}", result.provider_name, result.provider_description);
    }
    println!("{}", result.url);
    Ok(())
}

fn cmd_providers(json: bool) -> Result<(), String> {
    let handler = build_handler()?;
    let help = handler.providers_help();

    if json {
        let text = serde_json::to_string_pretty(&help)
            .map_err(|e| format!("Failed to serialize JSON: {}", e))?;
        println!("{}", text);
        return Ok(());
    }

    let default = handler.chain().default_provider();
    let width = help
        .iter()
        .map(|entry| entry.key.len())
        .chain(std::iter::once(default.key().len()))
        .max()
        .unwrap_or(0);

    println!("Providers (first match wins):");
    for entry in &help {
        println!("  {:width$}  {}", entry.key, entry.description, width = width);
    }
    println!("  {:width$}  {}", default.key(), default.description(), width = width);
    println!();
    println!("A leading # works in place of ! when no bang matches (#g = !g).");
    Ok(())
}

fn cmd_link(query: &str, router_url: &str) -> Result<(), String> {
    let router = build_router(router_url)?;
    let link = router
        .link(query)
        .ok_or_else(|| "Query is empty".to_string())?;
    println!("{}", link);
    Ok(())
}

fn cmd_intercept(page_url: &str, router_url: &str) -> Result<(), String> {
    let router = build_router(router_url)?;
    let site = detect_site(page_url)
        .ok_or_else(|| format!("'{}' is not a recognised search engine page", page_url))?;
    let link = intercept(page_url, &router)
        .ok_or_else(|| format!("No {} query found in '{}'", site.name, page_url))?;
    println!("{}", link);
    Ok(())
}
