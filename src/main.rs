//! Terminal front end and entry point.
//!
//! This module provides the thin integration layer between the rickdex library
//! and the terminal. It reads commands from standard input, runs catalog
//! requests on a tokio worker and writes rendered frames to standard output.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────┐
//! │        Event Loop            │
//! │  ┌───────────────────────┐   │
//! │  │  AppState (library)   │   │  ← UI state, event handling
//! │  └───────────────────────┘   │
//! │       │            ▲         │
//! │ spawn │            │ mpsc    │
//! │       ▼            │         │
//! │  ┌───────────────────────┐   │
//! │  │ CatalogWorker tasks   │   │  ← HTTP requests
//! │  └───────────────────────┘   │
//! └──────────────────────────────┘
//! ```
//!
//! # Lifecycle
//!
//! 1. **Load**: Parse flags and config file, initialize tracing, create `AppState`
//! 2. **Bootstrap**: Request the first page and the routed character
//! 3. **Update**: Translate command lines and worker responses into events
//! 4. **Render**: Write the frame and a prompt line after every state change
//!
//! # Commands
//!
//! - `n`/`next`, `p`/`prev`: Page forward and back
//! - `s <term>`: Search by name (`s` alone returns to the listing)
//! - `o <id>` or `?characterId=<id>`: Open a character
//! - `f <id>`, `u <id>`: Toggle or remove a favorite
//! - `v`, `c`: Favorites list, catalog
//! - `size <n>`, `resize <rows>`: Change the UI page size
//! - `r`: Reload, `q`: Quit

use clap::Parser;
use rickdex::api::HttpCatalogClient;
use rickdex::observability::init_tracing;
use rickdex::ui::CHROME_ROWS;
use rickdex::worker::{CatalogWorker, WorkerResponse};
use rickdex::{handle_event, initialize, Action, AppState, Config, Event, Result};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{self, UnboundedSender};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML configuration file
    #[clap(short = 'c', long)]
    config: Option<PathBuf>,

    /// Base URL of the catalog API
    #[clap(long)]
    api_base_url: Option<String>,

    /// Characters per UI page
    #[clap(short = 's', long)]
    page_size: Option<usize>,

    /// Per-request timeout in seconds
    #[clap(long)]
    timeout: Option<u64>,

    /// Directory for favorites and logs
    #[clap(long)]
    data_dir: Option<String>,

    /// Built-in theme name
    #[clap(short = 't', long)]
    theme: Option<String>,

    /// Custom TOML theme file
    #[clap(long)]
    theme_file: Option<String>,

    /// Tracing level (trace, debug, info, warn, error)
    #[clap(long)]
    trace_level: Option<String>,

    /// Character to open at startup, as an id or a `?characterId=N` route
    #[clap(long)]
    character: Option<String>,

    /// Terminal height used for rendering
    #[clap(long, default_value_t = 24)]
    rows: usize,

    /// Terminal width used for rendering
    #[clap(long, default_value_t = 100)]
    cols: usize,
}

impl Args {
    /// Flags that override configuration file values, keyed like the file.
    fn overrides(&self) -> BTreeMap<String, String> {
        let page_size = self.page_size.map(|n| n.to_string());
        let timeout = self.timeout.map(|n| n.to_string());

        [
            ("api_base_url", self.api_base_url.as_ref()),
            ("ui_page_size", page_size.as_ref()),
            ("request_timeout_secs", timeout.as_ref()),
            ("data_dir", self.data_dir.as_ref()),
            ("theme", self.theme.as_ref()),
            ("theme_file", self.theme_file.as_ref()),
            ("trace_level", self.trace_level.as_ref()),
            ("character_id", self.character.as_ref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key.to_string(), v.clone())))
        .collect()
    }

    fn load_config(&self) -> Result<Config> {
        let mut map = match &self.config {
            Some(path) => Config::read_map(path)?,
            None => BTreeMap::new(),
        };
        map.extend(self.overrides());

        let config = Config::from_map(&map)?;
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "rickdex exited with an error");
            eprintln!("rickdex: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<()> {
    let config = args.load_config()?;
    init_tracing(&config);
    tracing::info!(api_base_url = %config.api_base_url, data_dir = ?config.data_dir, "rickdex starting");

    let client = HttpCatalogClient::new(&config.api_base_url, config.request_timeout())?;
    let worker = CatalogWorker::new(Arc::new(client));
    let mut state = initialize(&config)?;

    let (responses_tx, mut responses_rx) = mpsc::unbounded_channel();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut rows = args.rows.max(CHROME_ROWS + 1);
    let cols = args.cols;

    let actions = state.bootstrap(config.initial_route());
    execute(&worker, &responses_tx, actions);
    draw(&state, rows, cols)?;

    loop {
        let event = tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::debug!("stdin closed");
                    break;
                };
                match Event::from_command(&line) {
                    Some(event) => event,
                    None => {
                        if !line.trim().is_empty() {
                            state.notice = Some(format!("Unknown command: {}", line.trim()));
                        }
                        draw(&state, rows, cols)?;
                        continue;
                    }
                }
            }
            Some(response) = responses_rx.recv() => Event::WorkerResponse(response),
        };

        if let Event::Resize { rows: new_rows } = event {
            rows = new_rows.max(CHROME_ROWS + 1);
        }

        let (should_render, actions) = handle_event(&mut state, &event)?;
        if execute(&worker, &responses_tx, actions) {
            break;
        }
        if should_render {
            draw(&state, rows, cols)?;
        }
    }

    tracing::info!("rickdex stopped");
    Ok(())
}

/// Runs actions; returns `true` when the application should quit.
fn execute(
    worker: &CatalogWorker<HttpCatalogClient>,
    responses: &UnboundedSender<WorkerResponse>,
    actions: Vec<Action>,
) -> bool {
    for action in actions {
        match action {
            Action::PostToWorker(message) => {
                tracing::debug!(kind = message.kind(), seq = ?message.seq(), "posting to worker");
                worker.spawn(message, responses.clone());
            }
            Action::Quit => return true,
        }
    }
    false
}

fn draw(state: &AppState, rows: usize, cols: usize) -> Result<()> {
    let frame = rickdex::ui::render(state, rows, cols);

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(frame.as_bytes())?;
    write!(stdout, "\u{1b}[{rows};1H> ")?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_become_config_overrides() {
        let args = Args::parse_from(["rickdex", "-s", "4", "--character", "?characterId=2", "-t", "catppuccin-latte"]);
        let overrides = args.overrides();

        assert_eq!(overrides.get("ui_page_size").map(String::as_str), Some("4"));
        assert_eq!(overrides.get("character_id").map(String::as_str), Some("?characterId=2"));
        assert_eq!(overrides.get("theme").map(String::as_str), Some("catppuccin-latte"));
        assert!(!overrides.contains_key("api_base_url"));
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rickdex.toml");
        std::fs::write(&path, "ui_page_size = 6\ntrace_level = \"warn\"\n").unwrap();

        let args = Args::parse_from(["rickdex", "--config", path.to_str().unwrap(), "--page-size", "3"]);
        let config = args.load_config().unwrap();

        assert_eq!(config.ui_page_size, 3);
        assert_eq!(config.trace_level.as_deref(), Some("warn"));
    }

    #[test]
    fn invalid_flags_fail_validation() {
        let args = Args::parse_from(["rickdex", "--page-size", "0"]);
        assert!(args.load_config().is_err());
    }
}
