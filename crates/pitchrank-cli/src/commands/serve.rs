//! Web server command.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use pitchrank_graph::{GraphClient, GraphConfig};

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "3030")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (implies --log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let config = GraphConfig::from_env();
    let graph = GraphClient::connect(&config)
        .await
        .context("Could not reach Neo4j; check NEO4J_URI/NEO4J_USER/NEO4J_PASSWORD")?;

    println!();
    println!("  {} {}", "Pitchrank".cyan().bold(), "Web Server".bold());
    println!();
    println!("  {}  http://{}:{}", "Dashboard".green(), args.host, args.port);
    println!("  {}    http://{}:{}/ranking", "Ranking".green(), args.host, args.port);
    println!("  {}      {}", "Neo4j".green(), config.uri);
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    pitchrank_web::run_server(graph, &args.host, args.port).await?;

    Ok(())
}
