//! Resume analyzer: heuristic resume quality and ATS compatibility analysis

mod cli;
mod config;
mod error;
mod input;
mod output;
mod processing;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{Result, ResumeAnalyzerError};
use input::manager::InputManager;
use log::{error, info};
use output::formatter::ReportGenerator;
use processing::analyzer::AnalysisEngine;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            output,
            detailed,
            save,
        } => {
            let output_format =
                cli::parse_output_format(&output).map_err(ResumeAnalyzerError::InvalidInput)?;

            info!("Analyzing resume: {}", resume.display());

            let manager = InputManager::new();
            let document = manager.load_document(&resume).await?;

            let job_description = match &job {
                Some(path) => {
                    info!("Matching against job description: {}", path.display());
                    Some(manager.load_text(path).await?)
                }
                None => None,
            };

            let engine = AnalysisEngine::with_config(&config);
            let result = engine.analyze(&document, job_description.as_deref())?;

            let generator = ReportGenerator::new(
                config.output.color_output,
                detailed || config.output.detailed,
            );
            let rendered = generator.generate(&result, output_format)?;
            println!("{}", rendered);

            if let Some(path) = save {
                generator.save_to_file(&rendered, &path)?;
                info!("Report saved to: {}", path.display());
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Current configuration\n");
                println!(
                    "Additional skills: {}",
                    if config.analysis.additional_skills.is_empty() {
                        "(none)".to_string()
                    } else {
                        config.analysis.additional_skills.join(", ")
                    }
                );
                println!("Default output format: {:?}", config.output.format);
                println!("Detailed output: {}", config.output.detailed);
                println!("Color output: {}", config.output.color_output);
            }

            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("Configuration reset to defaults");
            }
        },
    }

    Ok(())
}
