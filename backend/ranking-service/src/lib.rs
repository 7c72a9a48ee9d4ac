pub mod config;
pub mod models;
pub mod services;
pub mod utils;

pub use config::Config;
pub use models::{RankRequest, RankResponse, ScoreBreakdown, ScoredVideo};
pub use services::ranking::{RankingError, Result};
pub use services::{RankingEngine, RankingWeights, UserContext};
pub use video_core::{UserPreferences, VideoRecord};
