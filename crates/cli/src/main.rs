use agent_catalog::{build_facets, popular_facets, CatalogLoader};
use agent_embedding::{EmbeddingClient, Provider};
use agent_protocol::Agent;
use agent_search::{
    extract_industries, extract_tools, match_agents, MatchOptions, SearchConfig, SearchEngine,
    SearchOptions, SemanticBooster,
};
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod download;
mod lead;
mod server;

const CATALOG_DIR_ENV: &str = "AGENT_FINDER_CATALOG_DIR";

#[derive(Parser)]
#[command(name = "agent-finder")]
#[command(about = "Hybrid relevance search over the automation-agent catalog", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for JSON)
    #[arg(long, global = true)]
    quiet: bool,

    /// Catalog directory (overrides AGENT_FINDER_CATALOG_DIR)
    #[arg(long, global = true)]
    catalog_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog with the hybrid ranking pipeline
    Search {
        query: String,

        /// Boost scores with an embedding provider: openai|gemini
        #[arg(long, value_name = "PROVIDER")]
        ai: Option<String>,

        /// Cap on returned results
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print catalog facets
    Facets {
        /// Frequency-ranked top facets instead of the full sets
        #[arg(long)]
        popular: bool,
    },
    /// Recommend agents for a structured problem statement
    Recommend {
        query: String,

        /// Industry the business operates in (repeatable)
        #[arg(long = "industry")]
        industries: Vec<String>,

        /// Tool already in use (repeatable)
        #[arg(long = "tool")]
        tools: Vec<String>,

        /// Desired agent category (repeatable)
        #[arg(long = "category")]
        categories: Vec<String>,
    },
    /// Run the HTTP API server
    Serve {
        /// Bind address
        #[arg(long, default_value = "127.0.0.1:3900")]
        addr: String,

        /// JSONL file captured leads are appended to
        #[arg(long, default_value = "leads.jsonl")]
        leads_file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let agents = load_catalog(&cli)?;

    match cli.command {
        Commands::Search { query, ai, limit } => run_search(agents, &query, ai, limit).await?,
        Commands::Facets { popular } => run_facets(&agents, popular)?,
        Commands::Recommend {
            query,
            industries,
            tools,
            categories,
        } => run_recommend(&agents, &query, industries, tools, categories)?,
        Commands::Serve { addr, leads_file } => {
            server::serve(&addr, agents, lead::LeadStore::new(leads_file)).await?
        }
    }

    Ok(())
}

fn load_catalog(cli: &Cli) -> Result<Vec<Agent>> {
    let dir = cli
        .catalog_dir
        .clone()
        .or_else(|| std::env::var(CATALOG_DIR_ENV).ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("data"));
    Ok(CatalogLoader::new(&dir).load()?)
}

async fn run_search(
    agents: Vec<Agent>,
    query: &str,
    ai: Option<String>,
    limit: Option<usize>,
) -> Result<()> {
    let provider = match ai.as_deref() {
        Some(raw) => match Provider::parse(raw) {
            Some(provider) => Some(provider),
            None => bail!("Unknown embedding provider {raw:?} (expected openai or gemini)"),
        },
        None => None,
    };

    let booster = match provider {
        Some(provider) => SemanticBooster::new(Some(EmbeddingClient::from_env(provider))),
        None => SemanticBooster::disabled(),
    };

    let config = match limit {
        Some(max_results) => SearchConfig {
            max_results,
            ..SearchConfig::default()
        },
        None => SearchConfig::default(),
    };

    let mut engine = SearchEngine::with_config(agents, booster, config);
    let options = SearchOptions {
        boost: provider.is_some(),
    };
    let response = engine.search(query, &options).await?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn run_facets(agents: &[Agent], popular: bool) -> Result<()> {
    let json = if popular {
        serde_json::to_string_pretty(&popular_facets(agents))?
    } else {
        serde_json::to_string_pretty(&build_facets(agents))?
    };
    println!("{json}");
    Ok(())
}

fn run_recommend(
    agents: &[Agent],
    query: &str,
    industries: Vec<String>,
    tools: Vec<String>,
    categories: Vec<String>,
) -> Result<()> {
    // Fall back to scanning the free text when no explicit facets are given.
    let industries = if industries.is_empty() {
        extract_industries(query)
    } else {
        industries
    };
    let tools = if tools.is_empty() {
        extract_tools(query)
    } else {
        tools
    };

    let options = MatchOptions {
        query: query.to_string(),
        industries,
        tools,
        categories,
    };
    let matches = match_agents(agents, &options);

    println!("{}", serde_json::to_string_pretty(&matches)?);
    Ok(())
}
