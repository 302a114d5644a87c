//! # Pitchrank Graph
//!
//! Neo4j access layer for the soccer-statistics graph.
//!
//! Provides the connection client, the projection-and-ranking workflow,
//! the read queries behind the REST endpoints, and the match registry
//! write operations.

pub mod client;
pub mod queries;
pub mod ranking;
pub mod registry;

pub use client::{GraphClient, GraphConfig, GraphCounts};
pub use ranking::{rank_teams, RankingStore, ScoredTeam};
pub use registry::GraphWriter;
