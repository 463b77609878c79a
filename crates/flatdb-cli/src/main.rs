//! flatdb CLI - Main entry point

use clap::Parser;
use flatdb_cli::commands::get::FieldView;
use flatdb_cli::{Cli, Commands, Config};
use flatdb_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use std::process;
use tracing::error;

fn main() {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if cli.markdown_help {
        println!("{}", clap_markdown::help_markdown::<Cli>());
        return;
    }

    let Some(command) = cli.command.as_ref() else {
        eprintln!("Error: A subcommand is required");
        eprintln!();
        eprintln!("For more information, try '--help'.");
        process::exit(2);
    };

    // Verbose mode logs debug to the console; otherwise warnings only.
    // LOG_* environment variables take precedence over both.
    let log_config = LogConfig::builder()
        .level(if cli.verbose { LogLevel::Debug } else { LogLevel::Warn })
        .output(LogOutput::Console)
        .log_file_prefix("flatdb-cli")
        .build();
    let log_config = log_config.clone().merge_env().unwrap_or(log_config);

    // The CLI works without logging, so a failed init is not fatal
    let _guard = init_logging(&log_config).ok();

    if let Err(e) = execute_command(command) {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Execute the CLI command
fn execute_command(command: &Commands) -> flatdb_cli::Result<()> {
    let config = Config::from_env()?;

    match command {
        Commands::Tags { input } => flatdb_cli::commands::tags::run(input, &config),

        Commands::Get {
            input,
            tag,
            skip,
            raw,
            lines,
        } => flatdb_cli::commands::get::run(
            input,
            &config,
            tag,
            FieldView::from_flags(*skip, *raw, *lines),
        ),

        Commands::Show { input } => flatdb_cli::commands::show::run(input, &config),
    }
}
