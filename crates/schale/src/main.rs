use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

mod calendar;
mod config;
mod data;
mod error;
mod html;
mod server;
mod state;
mod types;

use calendar::{parse_week_start, MonthView, YearMonth};
use config::Settings;
use state::ViewState;

#[derive(Parser, Debug)]
#[command(name = "schale")]
#[command(about = "Month calendar view for game and real-world schedule events")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON events file (defaults to the built-in schedule)
    #[arg(short, long, global = true)]
    events: Option<PathBuf>,

    /// First day of the week (sun, mon, ...)
    #[arg(long, global = true)]
    week_start: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the web server (default)
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Render one month to a static HTML file (no server)
    Build {
        /// Month to render (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<YearMonth>,

        /// Event id to show in the detail panel
        #[arg(long)]
        select: Option<u32>,

        /// Render with the dark theme
        #[arg(long)]
        dark: bool,

        /// Output directory for index.html
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Log the grid and pickup events for a month
    Show {
        /// Month to show (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<YearMonth>,
    },
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level))
        .add_directive("hyper=warn".parse()?)
        .add_directive("tower_http=warn".parse()?);

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_max_level(Level::TRACE)
        .init();

    Ok(())
}

/// Environment settings with command line flags applied on top
fn resolve_settings(args: &Args) -> Result<Settings> {
    let mut settings = Settings::from_env().context("Failed to load settings")?;

    if let Some(events) = &args.events {
        settings.events_file = Some(events.clone());
    }
    if let Some(day) = &args.week_start {
        settings.week_start = parse_week_start(day)?;
    }
    if let Some(Commands::Serve { port: Some(port) }) = &args.command {
        settings.port = *port;
    }

    Ok(settings)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    init_tracing(&args.log_level)?;

    let settings = resolve_settings(&args)?;
    let today = Local::now().date_naive();

    match args.command {
        // Default to serve if no command specified
        None | Some(Commands::Serve { .. }) => {
            server::serve(settings).await?;
        }
        Some(Commands::Build {
            month,
            select,
            dark,
            output,
        }) => {
            let events = data::load_or_builtin(settings.events_file.as_deref())?;

            let mut view = ViewState::new(month.unwrap_or_else(|| YearMonth::from_date(today)));
            if let Some(id) = select {
                view = view.select(id);
            }
            if dark {
                view = view.toggle_dark();
            }

            if !output.exists() {
                std::fs::create_dir_all(&output).context("Failed to create output directory")?;
            }
            let html_path = output.join("index.html");
            html::generate_html(&events, view, settings.week_start, today, &html_path)?;
            info!(path = %html_path.display(), month = %view.month, "HTML saved");
        }
        Some(Commands::Show { month }) => {
            let events = data::load_or_builtin(settings.events_file.as_deref())?;
            let month = month.unwrap_or_else(|| YearMonth::from_date(today));
            let view = MonthView::build(&events, month, settings.week_start, None, today);

            info!(month = %view.month.label(), weeks = view.weeks().count(), "Calendar");
            for cell in view.cells.iter().filter(|c| !c.events.is_empty()) {
                let titles: Vec<&str> = cell.events.iter().map(|e| e.title.as_str()).collect();
                info!(
                    date = %cell.day.date,
                    in_month = cell.day.in_month,
                    events = ?titles,
                    "Day"
                );
            }

            if view.pickups.is_empty() {
                info!("No pickup events this month");
            }
            for event in &view.pickups {
                info!(
                    id = event.id,
                    title = %event.title,
                    start = %event.start.format("%m/%d"),
                    end = %event.end.format("%m/%d"),
                    "Pickup"
                );
            }
        }
    }

    Ok(())
}
