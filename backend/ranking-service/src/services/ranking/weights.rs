use super::{RankingError, Result};
use serde::{Deserialize, Serialize};

/// Tunable constants for every scoring term
///
/// Defaults reproduce the production recommendation blend. Each field can be
/// overridden from the environment with a `RANKING_` prefix, e.g.
/// `RANKING_NOISE_AMPLITUDE=0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingWeights {
    /// Bonus when the candidate's category appears in watch history
    pub content_affinity: f64,
    /// Multiplier applied to log10(views / view_pivot)
    pub view_scale: f64,
    /// View count at which the view sub-term crosses zero
    pub view_pivot: f64,
    /// Multiplier applied to log10(likes / like_pivot)
    pub like_scale: f64,
    /// Like count at which the like sub-term crosses zero
    pub like_pivot: f64,
    /// Ceiling on the combined social proof term (there is no floor)
    pub social_cap: f64,
    /// Recency bonus for a video published right now
    pub recency: f64,
    /// Age in days at which the recency bonus reaches zero
    pub recency_window_days: f64,
    /// Duration is divided by this many seconds before capping
    pub watch_time_divisor_secs: f64,
    /// Ceiling on the watch time term
    pub watch_time_cap: f64,
    /// Bonus when the viewer prefers the mobile device
    pub mobile_bonus: f64,
    /// Upper bound (exclusive) of the uniform diversity noise
    pub noise_amplitude: f64,
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            content_affinity: 0.3,
            view_scale: 0.2,
            view_pivot: 100.0,
            like_scale: 0.2,
            like_pivot: 10.0,
            social_cap: 0.3,
            recency: 0.2,
            recency_window_days: 30.0,
            watch_time_divisor_secs: 600.0,
            watch_time_cap: 0.1,
            mobile_bonus: 0.05,
            noise_amplitude: 0.1,
        }
    }
}

impl RankingWeights {
    /// Reject weights that could turn a composite score into NaN or infinity
    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("content_affinity", self.content_affinity),
            ("view_scale", self.view_scale),
            ("like_scale", self.like_scale),
            ("social_cap", self.social_cap),
            ("recency", self.recency),
            ("watch_time_cap", self.watch_time_cap),
            ("mobile_bonus", self.mobile_bonus),
            ("noise_amplitude", self.noise_amplitude),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(RankingError::InvalidWeights(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )));
            }
        }

        let positive = [
            ("view_pivot", self.view_pivot),
            ("like_pivot", self.like_pivot),
            ("recency_window_days", self.recency_window_days),
            ("watch_time_divisor_secs", self.watch_time_divisor_secs),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(RankingError::InvalidWeights(format!(
                    "{name} must be a finite positive number, got {value}"
                )));
            }
        }

        Ok(())
    }
}
