//! Warehouse request builder
//!
//! A Ratatui-based form for assembling warehouse query request documents.
//! With `--form` it runs headless and prints the document instead.

mod app;
mod catalog;
mod clipboard;
mod config;
mod platform;
mod request;
mod state;
mod ui;

use anyhow::{bail, Context, Result};
use app::App;
use clap::Parser;
use config::BuilderConfig;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use request::{build_request_document, preview_sql, FormState, RequestError};
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "warehouse_request_tui=info";

#[derive(Parser, Debug)]
#[command(name = "warehouse-request-tui")]
#[command(about = "Build warehouse query request documents")]
struct Args {
    /// Form JSON to build headless; `-` reads stdin
    #[arg(long, value_name = "PATH")]
    form: Option<PathBuf>,

    /// Print the SQL preview instead of the document (with --form)
    #[arg(long, requires = "form")]
    sql: bool,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH", env = "WAREHOUSE_REQUEST_CONFIG")]
    config: Option<PathBuf>,

    /// Write the default config file and exit
    #[arg(long, conflicts_with = "form")]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let headless = args.form.is_some() || args.init_config;
    init_logging(headless);

    let config_path = args.config.clone().or_else(BuilderConfig::config_path);

    if args.init_config {
        let Some(path) = config_path else {
            bail!("No config location available on this platform; pass --config");
        };
        BuilderConfig::default().save_to(&path)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    let config = match &config_path {
        Some(path) => BuilderConfig::load_from(path)?,
        None => BuilderConfig::default(),
    };

    if let Some(form_path) = &args.form {
        let input = read_form_input(form_path)?;
        let output = render_headless(&input, args.sql, config.results_table())?;
        println!("{output}");
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Log to a file while the terminal UI owns the screen, to stderr otherwise
fn init_logging(headless: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);

    let log_file = if headless {
        None
    } else {
        BuilderConfig::log_path().and_then(|path| open_log_file(&path).ok())
    };

    match log_file {
        Some(file) => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init(),
        None => registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init(),
    }
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::options().create(true).append(true).open(path)?;
    Ok(file)
}

fn read_form_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read form from stdin")?;
        return Ok(input);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read form {}", path.display()))
}

/// Build the document for a form JSON value and render it as JSON or SQL
fn render_headless(input: &str, sql: bool, results_table: &str) -> Result<String> {
    let form: FormState = serde_json::from_str(input).context("Invalid form JSON")?;
    let document = match build_request_document(&form) {
        Ok(document) => document,
        Err(e) => {
            if let RequestError::Validation { missing } = &e {
                bail!("{e} Missing: {}", missing.join(", "));
            }
            return Err(e.into());
        }
    };
    tracing::info!("Built request headless");

    if sql {
        Ok(preview_sql(&document, results_table))
    } else {
        Ok(document.to_pretty_json()?)
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.tick();

        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases too
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                // Global quit: Ctrl+C
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(());
                }
                app.handle_key(key);
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_headless_json() {
        let output = render_headless(
            r#"{"jobIds": "1, 2", "exportFormat": "csv"}"#,
            false,
            "t",
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["jobIds"], serde_json::json!(["1", "2"]));
        assert_eq!(value["exportFormat"], "csv");
        assert_eq!(value["pivot"], serde_json::json!({}));
    }

    #[test]
    fn test_render_headless_sql() {
        let output = render_headless(
            r#"{"valueCols": [{"field": "Result_price"}]}"#,
            true,
            "warehouse.results",
        )
        .unwrap();
        assert_eq!(output, "SELECT Result.price FROM warehouse.results");
    }

    #[test]
    fn test_render_headless_reports_missing_fields() {
        let err = render_headless(
            r#"{"filters": [{"field": "x", "filterType": "", "value": "1"}]}"#,
            false,
            "t",
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please fill in all required fields. Missing: filters[0].filterType"
        );
    }

    #[test]
    fn test_render_headless_accepts_reset_form_value() {
        let output = render_headless(
            r#"{"official": false, "invalidateCache": false, "jobIds": null,
                "valueCols": [], "aggregation": null, "filters": [],
                "pivotGroup": {"aggColumn": null, "pivotColumn": null, "pivotValues": null},
                "distinct": false, "exportFormat": "avro"}"#,
            false,
            "t",
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["jobIds"], serde_json::json!([]));
        assert_eq!(value["aggregation"], serde_json::json!([]));
        assert_eq!(value["pivot"], serde_json::json!({}));
    }

    #[test]
    fn test_render_headless_rejects_bad_json() {
        let err = render_headless("not json", false, "t").unwrap_err();
        assert_eq!(err.to_string(), "Invalid form JSON");
    }

    #[test]
    fn test_args_sql_requires_form() {
        assert!(Args::try_parse_from(["warehouse-request-tui", "--sql"]).is_err());
        let args =
            Args::try_parse_from(["warehouse-request-tui", "--form", "-", "--sql"]).unwrap();
        assert!(args.sql);
        assert_eq!(args.form, Some(PathBuf::from("-")));
    }
}
