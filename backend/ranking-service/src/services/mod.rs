pub mod ranking;

pub use ranking::{RankingEngine, RankingWeights, UserContext};
