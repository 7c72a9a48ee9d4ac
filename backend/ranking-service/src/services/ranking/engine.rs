use super::{RankingWeights, Result, UserContext};
use crate::models::{ScoreBreakdown, ScoredVideo};
use crate::utils::{capped_ramp, linear_decay, log_ratio};
use chrono::{DateTime, Utc};
use rand::Rng;
use std::cmp::Ordering;
use tracing::{debug, info};
use video_core::constants::MILLIS_PER_DAY;
use video_core::{UserPreferences, VideoRecord};

/// Ranking Engine - blended heuristic scoring for video lists
///
/// Stateless apart from its weights; one engine can serve concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct RankingEngine {
    weights: RankingWeights,
}

impl RankingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom weights
    pub fn with_weights(weights: RankingWeights) -> Result<Self> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn weights(&self) -> &RankingWeights {
        &self.weights
    }

    /// Reorder `candidates` by descending relevance for this viewer
    ///
    /// Uses the wall clock and a thread-local RNG, so repeated calls with the
    /// same inputs may return different orders.
    pub fn rank<'a>(
        &self,
        candidates: &'a [VideoRecord],
        history: &[VideoRecord],
        preferences: Option<&UserPreferences>,
    ) -> Vec<&'a VideoRecord> {
        self.rank_with(
            candidates,
            history,
            preferences,
            Utc::now(),
            &mut rand::thread_rng(),
        )
    }

    /// Same as [`rank`](Self::rank) with an explicit clock instant and noise source
    pub fn rank_with<'a, R: Rng + ?Sized>(
        &self,
        candidates: &'a [VideoRecord],
        history: &[VideoRecord],
        preferences: Option<&UserPreferences>,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Vec<&'a VideoRecord> {
        self.score_candidates(candidates, history, preferences, now, rng)
            .into_iter()
            .map(|scored| scored.video)
            .collect()
    }

    /// Score and sort candidates, keeping the per-term breakdown
    pub fn score_candidates<'a, R: Rng + ?Sized>(
        &self,
        candidates: &'a [VideoRecord],
        history: &[VideoRecord],
        preferences: Option<&UserPreferences>,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Vec<ScoredVideo<'a>> {
        let context = UserContext::new(history, preferences);
        self.score_all(candidates.iter(), &context, now, rng)
    }

    /// Related videos for a watch page
    ///
    /// Drops the video currently playing, ranks the rest and keeps the top `limit`.
    pub fn recommend_related<'a>(
        &self,
        current_video_id: i64,
        candidates: &'a [VideoRecord],
        history: &[VideoRecord],
        preferences: Option<&UserPreferences>,
        limit: usize,
    ) -> Vec<&'a VideoRecord> {
        self.recommend_related_with(
            current_video_id,
            candidates,
            history,
            preferences,
            limit,
            Utc::now(),
            &mut rand::thread_rng(),
        )
    }

    #[allow(clippy::too_many_arguments)]
    pub fn recommend_related_with<'a, R: Rng + ?Sized>(
        &self,
        current_video_id: i64,
        candidates: &'a [VideoRecord],
        history: &[VideoRecord],
        preferences: Option<&UserPreferences>,
        limit: usize,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Vec<&'a VideoRecord> {
        if limit == 0 {
            return Vec::new();
        }

        let context = UserContext::new(history, preferences);
        let related = candidates.iter().filter(|v| v.id != current_video_id);

        self.score_all(related, &context, now, rng)
            .into_iter()
            .take(limit)
            .map(|scored| scored.video)
            .collect()
    }

    /// Deterministic part of the composite score (everything except noise)
    pub fn score_breakdown(
        &self,
        video: &VideoRecord,
        context: &UserContext<'_>,
        now: DateTime<Utc>,
    ) -> ScoreBreakdown {
        ScoreBreakdown {
            content_affinity: self.compute_content_affinity(video, context),
            social_proof: self.compute_social_proof(video),
            recency: self.compute_recency_score(video, now),
            watch_time: self.compute_watch_time_score(video),
            personalization: self.compute_personalization(context),
        }
    }

    fn score_all<'a, I, R>(
        &self,
        candidates: I,
        context: &UserContext<'_>,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Vec<ScoredVideo<'a>>
    where
        I: Iterator<Item = &'a VideoRecord>,
        R: Rng + ?Sized,
    {
        let mut scored: Vec<ScoredVideo<'a>> = candidates
            .map(|video| {
                let breakdown = self.score_breakdown(video, context, now);
                let noise = rng.gen::<f64>() * self.weights.noise_amplitude;
                let score = breakdown.total() + noise;

                debug!(
                    video_id = video.id,
                    content_affinity = breakdown.content_affinity,
                    social_proof = breakdown.social_proof,
                    recency = breakdown.recency,
                    watch_time = breakdown.watch_time,
                    personalization = breakdown.personalization,
                    noise = noise,
                    score = score,
                    "Video score computed"
                );

                ScoredVideo {
                    video,
                    score,
                    breakdown,
                    noise,
                }
            })
            .collect();

        // Stable: equal scores keep input order
        scored.sort_by(|a, b| descending(a.score, b.score));

        info!(
            candidate_count = scored.len(),
            history_categories = context.watched_category_count(),
            prefers_mobile = context.prefers_mobile(),
            "Video ranking completed"
        );

        scored
    }

    fn compute_content_affinity(&self, video: &VideoRecord, context: &UserContext<'_>) -> f64 {
        if context.has_watched_category(video.category_id) {
            self.weights.content_affinity
        } else {
            0.0
        }
    }

    /// Capped above, unbounded below: low counts pull the score negative
    fn compute_social_proof(&self, video: &VideoRecord) -> f64 {
        let w = &self.weights;
        let view_score = log_ratio(video.views, w.view_pivot) * w.view_scale;
        let like_score = log_ratio(video.likes, w.like_pivot) * w.like_scale;
        (view_score + like_score).min(w.social_cap)
    }

    /// Linear decay to zero over the recency window
    /// Unparseable timestamps count as old
    fn compute_recency_score(&self, video: &VideoRecord, now: DateTime<Utc>) -> f64 {
        let Some(created_at) = video.created_at_utc() else {
            return 0.0;
        };
        // Future timestamps clamp to age zero so the term stays within the
        // recency weight (0.2 by default)
        let age_millis = now
            .signed_duration_since(created_at)
            .num_milliseconds()
            .max(0);
        let age_days = age_millis as f64 / MILLIS_PER_DAY;

        linear_decay(
            age_days,
            self.weights.recency_window_days,
            self.weights.recency,
        )
    }

    fn compute_watch_time_score(&self, video: &VideoRecord) -> f64 {
        capped_ramp(
            video.duration,
            self.weights.watch_time_divisor_secs,
            self.weights.watch_time_cap,
        )
    }

    fn compute_personalization(&self, context: &UserContext<'_>) -> f64 {
        if context.prefers_mobile() {
            self.weights.mobile_bonus
        } else {
            0.0
        }
    }
}

/// Descending order; non-finite scores sort after every finite one
fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_finite(), b.is_finite()) {
        (true, true) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    }
}
