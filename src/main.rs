use std::io::Read;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use trade_grader::catalog::SignalCatalog;
use trade_grader::config::Config;
use trade_grader::core::conflicts::find_conflicts;
use trade_grader::core::engine::{AnalysisResult, GradingEngine};
use trade_grader::models::AnalysisInput;

#[derive(Debug, Serialize)]
struct Report {
    generated_at: DateTime<Utc>,
    result: AnalysisResult,
}

fn main() -> Result<()> {
    let cfg = Config::from_env();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let input_path = args.get(1).map(String::as_str).unwrap_or("-");

    let raw_input = if input_path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading analysis input from stdin")?;
        buf
    } else {
        std::fs::read_to_string(input_path)
            .with_context(|| format!("reading analysis input from {input_path}"))?
    };

    let input: AnalysisInput =
        serde_json::from_str(&raw_input).context("parsing analysis input")?;

    let catalog = match &cfg.catalog_path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading catalog from {path}"))?;
            let catalog = SignalCatalog::from_json_str(&raw)
                .with_context(|| format!("validating catalog from {path}"))?;
            tracing::info!(
                "loaded catalog from {path}: {} signals, {} no-go conditions",
                catalog.signal_count(),
                catalog.no_go_count()
            );
            catalog
        }
        None => SignalCatalog::builtin(),
    };

    let engine = GradingEngine::new(catalog);

    let active: Vec<_> = input
        .active_signal_ids
        .iter()
        .filter_map(|id| engine.catalog().lookup_signal(id).cloned())
        .collect();
    for conflict in find_conflicts(&active) {
        tracing::warn!(
            "conflicting signals active: {} vs {}",
            conflict.signal_a,
            conflict.signal_b
        );
    }

    let result = engine.analyze(&input);
    tracing::info!(
        "graded {} ({}) | net {} | enter: {}",
        result.grade,
        result.grade_label,
        result.total_score,
        result.should_enter
    );

    let report = Report {
        generated_at: Utc::now(),
        result,
    };

    let rendered = if cfg.compact_output {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    println!("{rendered}");

    Ok(())
}
