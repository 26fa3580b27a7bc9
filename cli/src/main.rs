//! CLI entrypoint for lateral-thinking
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use lateral_application::{GenerationLogger, NoGenerationLogger, RunAnalysisUseCase};
use lateral_domain::{MAX_PROBLEM_LENGTH, MIN_PROBLEM_LENGTH, OutputFormat, ProblemStatement};
use lateral_infrastructure::{
    ConfigLoader, FileAnalysisConfig, FileConfig, JsonlGenerationLogger, OpenAiTextGenerator,
};
use lateral_presentation::{Cli, ConsoleFormatter, ProgressReporter};
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate().context("Invalid configuration")?;

    let log_dir = cli.log_dir.clone().or_else(|| config.logging.dir.clone());
    let _log_guard = init_logging(cli.verbose, log_dir.as_deref())?;

    info!("Starting lateral-thinking");

    if !config.output.color {
        colored::control::set_override(false);
    }

    // Resolve the problem statement
    let problem = match cli.problem.clone().or_else(|| config.analysis.problem.clone()) {
        Some(p) => p,
        None => bail!("A problem statement is required (argument or analysis.problem in config)"),
    };
    let problem = ProblemStatement::try_new(problem)?;
    if !cli.allow_any_length {
        problem.check_length(MIN_PROBLEM_LENGTH, MAX_PROBLEM_LENGTH)?;
    }

    let analysis_config = resolve_analysis_config(&cli, &config);
    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    // === Dependency Injection ===
    let generator = Arc::new(OpenAiTextGenerator::new(
        config.provider.to_openai_config()?,
    )?);
    info!("Using model {}", generator.model());

    let transcript = cli
        .transcript
        .clone()
        .or_else(|| config.logging.transcript.clone());
    let logger: Arc<dyn GenerationLogger> = match transcript {
        Some(path) => match JsonlGenerationLogger::open(&path) {
            Some(logger) => Arc::new(logger),
            None => bail!("Could not open transcript file {}", path.display()),
        },
        None => Arc::new(NoGenerationLogger),
    };

    let use_case = RunAnalysisUseCase::new(generator, config.generation.to_generation_params())
        .with_fallbacks(config.fallbacks.to_fallbacks())
        .with_logger(logger);

    // Print header
    if !cli.quiet && format != OutputFormat::Json {
        println!();
        println!("+============================================================+");
        println!("|           Lateral Thinking - Root Causes & Metaphors       |");
        println!("+============================================================+");
        println!();
        println!("Problem: {}", problem.content());
        println!(
            "Plan: {} domain(s), {} cause(s), depth {}, {} leaf cause(s), {} solution(s) per domain",
            analysis_config.num_domains,
            analysis_config.num_initial_causes,
            analysis_config.root_cause_depth,
            analysis_config.max_leaf_causes,
            analysis_config.solutions_per_domain
        );
        println!(
            "Up to {} generation calls",
            analysis_config.estimated_generation_calls(config.fallbacks.causes.len())
        );
        println!();
    }

    // Execute with or without progress reporting
    let result = if cli.quiet {
        use_case
            .analyze(problem.content(), &analysis_config)
            .await?
    } else {
        let progress = ProgressReporter::new();
        use_case
            .analyze_with_progress(problem.content(), &analysis_config, &progress)
            .await?
    };

    // Output results
    let output = match format {
        OutputFormat::Full => ConsoleFormatter::format(&result),
        OutputFormat::Summary => ConsoleFormatter::format_summary(&result),
        OutputFormat::Json => ConsoleFormatter::format_json(&result),
    };

    println!("{}", output);

    Ok(())
}

/// Install the tracing subscriber, optionally teeing to daily log files.
///
/// The returned guard must live until exit so buffered file logs flush.
fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    // Initialize logging based on verbosity level
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Could not create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, "lateral-thinking.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Config file analysis settings with command-line overrides applied
fn resolve_analysis_config(cli: &Cli, config: &FileConfig) -> lateral_domain::AnalysisConfig {
    let mut analysis: FileAnalysisConfig = config.analysis.clone();

    if let Some(level) = cli.level {
        analysis.level = level.into();
    }
    if cli.domains.is_some() {
        analysis.num_domains = cli.domains;
    }
    if cli.causes.is_some() {
        analysis.num_initial_causes = cli.causes;
    }
    if cli.depth.is_some() {
        analysis.root_cause_depth = cli.depth;
    }
    if cli.max_leaves.is_some() {
        analysis.max_leaf_causes = cli.max_leaves;
    }
    if cli.solutions_per_domain.is_some() {
        analysis.solutions_per_domain = cli.solutions_per_domain;
    }

    analysis.to_analysis_config()
}
