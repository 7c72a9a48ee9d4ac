use crate::services::ranking::Result;
use serde::{Deserialize, Serialize};
use video_core::{UserPreferences, VideoRecord};

/// Deterministic scoring terms for one candidate
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub content_affinity: f64,
    pub social_proof: f64,
    pub recency: f64,
    pub watch_time: f64,
    pub personalization: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.content_affinity
            + self.social_proof
            + self.recency
            + self.watch_time
            + self.personalization
    }
}

/// Candidate paired with its composite score, valid for one ranking call
#[derive(Debug, Clone)]
pub struct ScoredVideo<'a> {
    pub video: &'a VideoRecord,
    pub score: f64,
    pub breakdown: ScoreBreakdown,
    /// Diversity noise added on top of the breakdown total
    pub noise: f64,
}

/// One-shot ranking request read by the ranking-service binary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankRequest {
    pub candidates: Vec<VideoRecord>,
    #[serde(default)]
    pub history: Vec<VideoRecord>,
    #[serde(default)]
    pub preferences: Option<UserPreferences>,
    /// When set, recommend videos related to the one currently playing
    #[serde(default)]
    pub current_video_id: Option<i64>,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl RankRequest {
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankResponse {
    pub video_ids: Vec<i64>,
}

impl RankResponse {
    pub fn from_videos(videos: &[&VideoRecord]) -> Self {
        Self {
            video_ids: videos.iter().map(|v| v.id).collect(),
        }
    }
}
