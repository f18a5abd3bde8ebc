mod cli;
mod color;
mod commands;
mod config;
mod logging;
mod output;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use gitlab_client::GitLabClient;
use output::output_error;
use std::process::ExitCode;
use std::time::Duration;

fn main() -> ExitCode {
    let cli = Cli::parse();
    color::init(cli.color);
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        output_error(&e, cli.format);
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

fn run(cli: &Cli) -> Result<()> {
    if let Commands::Completions { shell } = &cli.command {
        Cli::generate_completions(*shell);
        return Ok(());
    }

    let mut config = Config::load(cli.config.as_deref())?;
    config.merge_with_cli(cli.url.clone(), cli.token.clone(), cli.project.clone());

    // Config commands don't need a token or project
    if let Commands::Config { action } = &cli.command {
        return commands::config::handle_config(action, cli.config.as_deref(), &config, cli.format);
    }

    config.validate()?;

    let client = GitLabClient::builder()
        .base_url(&config.url)
        .token(config.token.as_deref().unwrap_or_default())
        .timeout(Duration::from_secs(config.timeout_secs))
        .build();
    let project = commands::draft::parse_project(config.project.as_deref().unwrap_or_default());

    commands::draft::handle_draft(client.draft_notes(), &project, &cli.command, cli.format)
}
