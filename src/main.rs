//! `content-finder` command line entry point.
//!
//! Replays a script of finder events against a TOML catalog and prints one
//! report per step, so URL/filter synchronization can be inspected without a
//! browser.
//!
//! # Script Format
//!
//! One JSON object per line, tagged by `event`:
//!
//! ```text
//! {"event": "visit", "path": "/shop/red"}
//! {"event": "query", "text": "boot"}
//! {"event": "add_filter", "url_title": "large"}
//! {"event": "remove_filter", "url_title": "red"}
//! {"event": "reset"}
//! {"event": "load_more"}
//! {"event": "toggle_favorite", "id": "boot-1"}
//! {"event": "back"}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use content_finder::provider::{Catalog, InMemorySearch};
use content_finder::router::{HistoryRouter, RecordingDocument, Router};
use content_finder::ui::{render_to_string, FinderViewModel};
use content_finder::{Config, ContentFinder, DisplayState, Result};
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

type Finder = ContentFinder<InMemorySearch, HistoryRouter, RecordingDocument>;

#[derive(Debug, Parser)]
#[command(name = "content-finder", version, about = "Replay filter/URL synchronization scripts")]
struct Cli {
    /// Catalog of dropdowns, filters and items (TOML).
    #[arg(long)]
    catalog: PathBuf,

    /// Finder configuration (TOML).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Event script (JSON lines). Reads stdin when omitted.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Initial location. Defaults to the base URL.
    #[arg(long)]
    start: Option<String>,

    /// Print the rendered view instead of JSON reports.
    #[arg(long)]
    render: bool,
}

/// One script step.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum ScriptEvent {
    Visit { path: String },
    Query { text: String },
    AddFilter { url_title: String },
    RemoveFilter { url_title: String },
    Reset,
    LoadMore,
    ToggleFavorite { id: String },
    Back,
}

/// State printed after each step.
#[derive(Debug, Serialize)]
struct Report<'a> {
    step: usize,
    pathname: &'a str,
    history_len: usize,
    title: &'a str,
    display: &'a DisplayState,
    visible: Vec<&'a str>,
    total_matches: usize,
    has_more: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "content-finder failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    content_finder::observability::init_tracing(&config);
    tracing::debug!(config = ?config, "configuration loaded");

    let catalog = Catalog::from_file(&cli.catalog)?;
    let start = cli.start.clone().unwrap_or_else(|| {
        if config.base_url.is_empty() {
            "/".to_string()
        } else {
            config.base_url.clone()
        }
    });

    let mut finder = ContentFinder::new(
        &config,
        InMemorySearch::new(catalog),
        HistoryRouter::new(start),
        RecordingDocument::default(),
        config.headings(),
    );
    finder.mount()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report(&mut out, &finder, 0, cli.render)?;

    let input: Box<dyn BufRead> = match &cli.script {
        Some(path) => Box::new(BufReader::new(std::fs::File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let event: ScriptEvent = serde_json::from_str(trimmed)?;
        tracing::debug!(line = index + 1, event = ?event, "applying script event");
        apply(&mut finder, &event)?;
        report(&mut out, &finder, index + 1, cli.render)?;
    }

    Ok(())
}

fn apply(finder: &mut Finder, event: &ScriptEvent) -> Result<()> {
    match event {
        ScriptEvent::Visit { path } => finder.visit(path),
        ScriptEvent::Query { text } => finder.set_query(text),
        ScriptEvent::AddFilter { url_title } => finder.add_filter(url_title),
        ScriptEvent::RemoveFilter { url_title } => finder.remove_filter(url_title),
        ScriptEvent::Reset => finder.reset_search(),
        ScriptEvent::LoadMore => {
            finder.load_more();
            Ok(())
        }
        ScriptEvent::ToggleFavorite { id } => finder.toggle_favorite(id),
        ScriptEvent::Back => {
            if !finder.back()? {
                tracing::debug!("already at the start of history");
            }
            Ok(())
        }
    }
}

fn report(out: &mut impl Write, finder: &Finder, step: usize, render: bool) -> Result<()> {
    let vm: FinderViewModel = finder.view_model();

    if render {
        writeln!(out, "-- step {step}: {}", finder.router().pathname())?;
        out.write_all(render_to_string(&vm).as_bytes())?;
        return Ok(());
    }

    let report = Report {
        step,
        pathname: finder.router().pathname(),
        history_len: finder.router().history().len(),
        title: &finder.document().title,
        display: finder.display(),
        visible: vm.cards.iter().map(|c| c.id.as_str()).collect(),
        total_matches: vm.total_matches,
        has_more: vm.has_more,
    };
    let line = serde_json::to_string(&report)?;
    writeln!(out, "{line}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_script_events() {
        let event: ScriptEvent =
            serde_json::from_str(r#"{"event": "add_filter", "url_title": "red"}"#).unwrap();
        assert_eq!(
            event,
            ScriptEvent::AddFilter {
                url_title: "red".to_string()
            }
        );
        let event: ScriptEvent = serde_json::from_str(r#"{"event": "load_more"}"#).unwrap();
        assert_eq!(event, ScriptEvent::LoadMore);
        let event: ScriptEvent = serde_json::from_str(r#"{"event": "back"}"#).unwrap();
        assert_eq!(event, ScriptEvent::Back);
    }

    #[test]
    fn cli_requires_catalog() {
        assert!(Cli::try_parse_from(["content-finder"]).is_err());
        let cli = Cli::try_parse_from(["content-finder", "--catalog", "c.toml", "--render"]).unwrap();
        assert!(cli.render);
    }
}
