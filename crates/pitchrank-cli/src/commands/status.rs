//! Graph status command.

use anyhow::{Context, Result};
use colored::Colorize;

use pitchrank_graph::{GraphClient, GraphConfig};

pub async fn execute() -> Result<()> {
    let config = GraphConfig::from_env();
    let graph = GraphClient::connect(&config)
        .await
        .context("Could not reach Neo4j; check NEO4J_URI/NEO4J_USER/NEO4J_PASSWORD")?;

    let counts = graph.get_counts().await?;

    println!();
    println!("  {} {}", "Pitchrank".cyan().bold(), "Graph Status".bold());
    println!();
    println!("  {}    {}", "Neo4j".green(), config.uri);
    println!("  {}    {}", "Teams".green(), counts.teams);
    println!("  {}  {}", "Matches".green(), counts.matches);
    println!();

    Ok(())
}
