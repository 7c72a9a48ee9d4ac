use anyhow::{Context, Result};
use ranking_service::{Config, RankRequest, RankResponse, RankingEngine};
use std::io::{self, Read, Write};
use tracing::{info, info_span};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the JSON response
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    tracing_subscriber::registry()
        .with(json_logs.then(|| fmt::layer().json().with_writer(io::stderr)))
        .with((!json_logs).then(|| fmt::layer().with_writer(io::stderr)))
        .with(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env().context("Failed to load config")?;
    let engine =
        RankingEngine::with_weights(config.weights.clone()).context("Invalid ranking weights")?;

    let request_id = Uuid::new_v4();
    let span = info_span!(
        "rank_request",
        %request_id,
        service = %config.service.service_name
    );
    let _guard = span.enter();

    let input = read_input(std::env::args().nth(1))?;
    let request = RankRequest::from_json(&input).context("Failed to decode rank request")?;

    info!(
        candidates = request.candidates.len(),
        history = request.history.len(),
        current_video_id = ?request.current_video_id,
        "Ranking request received"
    );

    let ranked = match request.current_video_id {
        Some(current) => engine.recommend_related(
            current,
            &request.candidates,
            &request.history,
            request.preferences.as_ref(),
            request.limit.unwrap_or(config.related.limit),
        ),
        None => {
            let mut ranked = engine.rank(
                &request.candidates,
                &request.history,
                request.preferences.as_ref(),
            );
            if let Some(limit) = request.limit {
                ranked.truncate(limit);
            }
            ranked
        }
    };

    let response = RankResponse::from_videos(&ranked);
    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, &response).context("Failed to write response")?;
    writeln!(stdout)?;

    Ok(())
}

/// Read the request from a file path, or stdin when no path (or `-`) is given
fn read_input(path: Option<String>) -> Result<String> {
    match path.as_deref() {
        Some(path) if path != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read request file {path}")),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read request from stdin")?;
            Ok(buf)
        }
    }
}
