use super::cli::{Args, FileConfig, RunSettings};
use super::error::AppError;
use crate::core::error_handling::{fatal_message, log_error_with_context};
use crate::core::logging::init_logging;
use crate::core::version;
use crate::fixture::{FixtureEmitter, Provenance};
use crate::pipeline::{GenerateError, GenerationSummary, Pipeline};
use crate::scanner::ProcessScanner;
use clap::Parser;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::sync::Arc;

/// Application entry point: parse arguments, load configuration, run
pub fn startup() {
    let args = Args::parse();

    // Logging is configured from the settings, so problems up to here go to stderr directly
    let settings = match load_settings(&args) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", fatal_message(&e, "Loading configuration"));
            std::process::exit(1);
        }
    };

    if let Err(e) = init_logging(&settings.logging) {
        eprintln!("FATAL: Failed to initialise logging: {}", e);
        std::process::exit(1);
    }

    log::info!(
        "{} starting (built {})",
        version::tool_identity(),
        version::build_time()
    );
    log::debug!("Run settings: {:#?}", settings);

    match run(&settings, Provenance::current()) {
        Ok(summary) => {
            log::info!(
                "Generated {} test fixtures with {} results",
                summary.records,
                summary.hits
            );
            if summary.partial_groups > 0 {
                log::info!(
                    "Ignored {} incomplete test case(s) at the end of {}",
                    summary.partial_groups,
                    settings.corpus.display()
                );
            }
        }
        Err(e) => {
            log_error_with_context(&e, "Generating fixtures");
            std::process::exit(1);
        }
    }
}

/// Merge the configuration file and command line into run settings
pub fn load_settings(args: &Args) -> Result<RunSettings, AppError> {
    let config = FileConfig::discover(args.config_file.as_deref())?;
    Ok(args.resolve(&config)?)
}

/// Generate fixtures for the configured corpus with the external scanner
pub fn run(settings: &RunSettings, provenance: Provenance) -> Result<GenerationSummary, AppError> {
    let corpus = File::open(&settings.corpus).map_err(|source| AppError::OpenCorpus {
        path: settings.corpus.clone(),
        source,
    })?;

    let output: Box<dyn Write> = match &settings.output {
        Some(path) => Box::new(File::create(path).map_err(|source| AppError::CreateOutput {
            path: path.clone(),
            source,
        })?),
        None => Box::new(std::io::stdout().lock()),
    };

    let scanner = Arc::new(ProcessScanner::new(settings.scanner.clone()));
    let pipeline = Pipeline::new(scanner, provenance).with_jobs(settings.jobs);
    let mut emitter = FixtureEmitter::new(BufWriter::new(output), settings.fixture.clone());

    let summary = pipeline.run(BufReader::new(corpus), &mut emitter)?;
    emitter.finish().map_err(GenerateError::from)?;
    Ok(summary)
}
