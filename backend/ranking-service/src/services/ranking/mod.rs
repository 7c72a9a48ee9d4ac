/// Ranking Module
///
/// Blended heuristic scoring for video recommendation lists.
///
/// # Architecture
/// - **Weights**: tunable constants for every scoring term, validated up front
/// - **Context**: per-request view of the viewer (history categories, preferences)
/// - **Engine**: per-candidate scoring, diversity noise and descending sort
///
/// # Workflow
/// 1. Build a `UserContext` from watch history and preferences
/// 2. Score content affinity, social proof, recency, watch time and device
/// 3. Add uniform noise so repeated requests do not return identical lists
/// 4. Stable sort by descending composite score
pub mod context;
pub mod engine;
pub mod weights;

pub use context::UserContext;
pub use engine::RankingEngine;
pub use weights::RankingWeights;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RankingError {
    #[error("Invalid ranking weights: {0}")]
    InvalidWeights(String),

    #[error("Failed to load configuration: {0}")]
    Config(#[from] envy::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid rank request: {0}")]
    InvalidRequest(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RankingError>;
