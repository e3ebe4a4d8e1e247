mod session;
mod view;

use std::sync::Arc;

use adresse_client::AdresseClient;
use adresse_core::{SearchInput, SearchType};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "adresse")]
#[command(about = "Explore the address-search API from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the request URL that would be issued for a query
    Url(QueryArgs),
    /// Run a search and print the result rows
    Search {
        #[command(flatten)]
        query: QueryArgs,
        /// Print the display records as JSON instead of rows
        #[arg(long)]
        json: bool,
    },
    /// Interactive session: edit the query and filters, watch results update
    Try,
}

#[derive(Debug, Args)]
struct QueryArgs {
    /// Free-text address
    text: String,
    /// Restrict results to one type (housenumber, street, locality, municipality)
    #[arg(long = "type")]
    search_type: Option<SearchType>,
    /// Disable prefix matching
    #[arg(long)]
    no_autocomplete: bool,
}

impl QueryArgs {
    fn to_input(&self) -> SearchInput {
        SearchInput::new(self.text.clone(), self.search_type, !self.no_autocomplete)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = adresse_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = AdresseClient::from_config(&config)
        .map_err(|e| anyhow::anyhow!("failed to build address-search client: {e}"))?;
    tracing::debug!(env = %config.env, base_url = %config.api_base_url, "configuration loaded");

    match cli.command {
        Some(Commands::Url(query)) => {
            println!("{}", client.build_query(&query.to_input()).url);
        }
        Some(Commands::Search { query, json }) => {
            run_search(&client, &config.theme, &query.to_input(), json).await?;
        }
        Some(Commands::Try) | None => {
            session::run(Arc::new(client), config.theme).await?;
        }
    }

    Ok(())
}

/// One-shot search: fetch, map and print.
///
/// # Errors
///
/// Returns an error if the request fails or the records cannot be serialized.
async fn run_search(
    client: &AdresseClient,
    theme: &adresse_core::Theme,
    input: &SearchInput,
    json: bool,
) -> anyhow::Result<()> {
    let records = client.search(input).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("no results");
        return Ok(());
    }

    for line in view::result_lines(&records, None, theme) {
        println!("{line}");
    }
    Ok(())
}
