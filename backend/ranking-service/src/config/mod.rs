use crate::services::ranking::{RankingError, RankingWeights, Result};
use serde::Deserialize;
use std::env;

const DEFAULT_SERVICE_NAME: &str = "ranking-service";
const DEFAULT_RELATED_LIMIT: usize = 6;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub weights: RankingWeights,
    pub related: RelatedConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub service_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelatedConfig {
    /// Number of related videos shown next to the player
    pub limit: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(env::vars())
    }

    /// Build from an explicit set of variables (`RANKING_*` weights,
    /// `SERVICE_NAME`, `RELATED_LIMIT`)
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let vars: Vec<(String, String)> = vars.into_iter().collect();
        let lookup = |key: &str| {
            vars.iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        };

        let weights: RankingWeights = envy::prefixed("RANKING_").from_iter(vars.iter().cloned())?;
        weights.validate()?;

        let limit = match lookup("RELATED_LIMIT") {
            Some(raw) => raw.parse().map_err(|_| {
                RankingError::InvalidConfig(format!("RELATED_LIMIT must be a valid usize, got {raw}"))
            })?,
            None => DEFAULT_RELATED_LIMIT,
        };

        Ok(Config {
            service: ServiceConfig {
                service_name: lookup("SERVICE_NAME")
                    .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string()),
            },
            weights,
            related: RelatedConfig { limit },
        })
    }
}
