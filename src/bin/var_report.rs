use ag_var::{
    ConfidenceLevel, EngineConfig, EstimateRequest, RiskEstimator, RiskReport, RiskSnapshot,
};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[clap(name = "var-report", about = "VaR/CVaR report over a seeded return sample")]
struct Args {
    /// YAML or JSON engine configuration
    #[clap(short, long)]
    config: Option<PathBuf>,

    /// historical, parametric or monte_carlo (defaults to the config value)
    #[clap(short, long)]
    method: Option<String>,

    /// Confidence level in percent, 1-99 (defaults to the config value)
    #[clap(long)]
    confidence: Option<u32>,

    /// Report every method at the chosen confidence level
    #[clap(long)]
    all: bool,

    /// Print JSON instead of text
    #[clap(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            EngineConfig::load(path)?
        }
        None => EngineConfig::default(),
    };

    let snapshot = RiskSnapshot::generate(&config.sample)?;
    let estimator = RiskEstimator::new(config.estimator_config());

    let confidence_percent = args
        .confidence
        .unwrap_or(config.defaults.confidence_percent);

    if args.all {
        let confidence = ConfidenceLevel::from_percent(confidence_percent)?;
        let summary = snapshot.summary(&estimator, confidence)?;

        if args.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            for (method, estimate) in summary {
                println!(
                    "{:<12} VaR {:>8.4}   CVaR {:>8.4}",
                    method.label(),
                    estimate.var,
                    estimate.cvar
                );
            }
        }
        return Ok(());
    }

    let method = args
        .method
        .unwrap_or_else(|| config.defaults.method.as_str().to_string());
    let request = EstimateRequest::new(method, confidence_percent);
    let report = RiskReport::evaluate(&snapshot, &estimator, &request)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.var_line());
        println!("{}", report.cvar_line());
    }

    Ok(())
}
