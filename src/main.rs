use std::io::{stderr, stdout};
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use risk_assessment_engine::engine::{write_assessments, AsyncEngine};
use risk_assessment_engine::scoring::{ArtifactModelLoader, ModelLoader, RuleModelLoader};
use risk_assessment_engine::{AppConfig, InMemoryHistory, ModelCache, RiskAssessmentPipeline};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: risk-assessment-engine [transactions].csv [log_level:optional] > [assessments].csv");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        eprintln!("Configuration is read from config/risk.toml or the path in RISK_ENGINE_CONFIG");
        exit(1);
    }

    let path = &args[1];
    let log_level = args.get(2)
        .map(|s| parse_log_level(s)).unwrap_or_else(|| LevelFilter::ERROR);

    setup_logging(log_level);

    let config = AppConfig::load()?;

    let history = match &config.history.snapshot_path {
        Some(snapshot_path) => InMemoryHistory::from_csv_path(snapshot_path)
            .context("Failed to load history snapshot")?,
        None => InMemoryHistory::new()
    };

    let loader: Arc<dyn ModelLoader> = match &config.model.artifact_path {
        Some(artifact_path) => Arc::new(ArtifactModelLoader::new(artifact_path)),
        None => Arc::new(RuleModelLoader::new(config.model.version.clone()))
    };

    let models = Arc::new(ModelCache::new(loader));
    let pipeline = RiskAssessmentPipeline::new(&config.risk, models, Arc::new(history));
    let engine = AsyncEngine::new(Arc::new(pipeline))
        .with_backpressure(config.engine.backpressure)
        .with_max_in_flight(config.engine.max_in_flight);

    let timer = Instant::now();
    let results = engine.run(path).await?;
    let duration = timer.elapsed();

    info!("Assessed transactions in: {duration:?}");

    write_assessments(stdout().lock(), &results)?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: Assessments are written to stdout, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
