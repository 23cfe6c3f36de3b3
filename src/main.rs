use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

use event_scout::config::config::Cli;
use event_scout::errors::errors::AppError;
use event_scout::events::events::{filter_events, merge_responses, FilterOptions, SearchResponse};
use event_scout::export::export::{file_name, render};
use event_scout::institutions::institutions::InstitutionList;

fn read_response(path: &Path) -> Result<SearchResponse, AppError> {
    let body = fs::read_to_string(path).map_err(|err| AppError::Read(path.to_path_buf(), err))?;
    serde_json::from_str(&body).map_err(|err| AppError::Parse(path.to_path_buf(), err))
}

fn run(cli: Cli) -> Result<(), AppError> {
    let clock = cli.clock();

    let mut institutions = InstitutionList::new();
    for url in &cli.institutions {
        if let Err(err) = institutions.add(url) {
            tracing::warn!("skipping institution: {}", err);
        }
    }

    let responses = cli
        .responses
        .iter()
        .map(|path| read_response(path))
        .collect::<Result<Vec<_>, _>>()?;
    let results = merge_responses(responses);
    tracing::info!(
        "{} unique results from {} response(s)",
        results.len(),
        cli.responses.len()
    );

    let exclude = cli.exclude_keywords();
    let report = filter_events(
        &results,
        &FilterOptions {
            exclude: &exclude,
            scope: cli.scope(),
            institutions: &institutions,
            pages: None,
            clock: clock.as_ref(),
        },
    );

    for row in &report.raw {
        tracing::debug!("raw: [{}] {} <{}>", row.date, row.event, row.link);
    }
    tracing::info!(
        "kept {} event(s): {} excluded by keyword, {} outside institutions, {} past",
        report.kept.len(),
        report.excluded,
        report.out_of_scope,
        report.past
    );

    let output = render(&report.kept, cli.format)?;
    match cli.out_dir {
        Some(ref dir) => {
            let path = dir.join(file_name(cli.format, clock.today()));
            fs::write(&path, output)?;
            tracing::info!("wrote {}", path.display());
        }
        None => io::stdout().write_all(output.as_bytes())?,
    }

    Ok(())
}

fn main() -> ExitCode {
    dotenv().ok();
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
