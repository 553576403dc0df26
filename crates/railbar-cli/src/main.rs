//! Railbar - terminal file viewer with a custom scrollbar overlay
//!
//! Renders a text file in the terminal and drives its scrollbar with
//! railbar-core: thumb drag, track click, step buttons and resize handling.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use railbar_core::{geometry, thumb, ScrollbarConfig};

mod tui;

/// Railbar - custom scrollbar overlay viewer
#[derive(Parser)]
#[command(name = "railbar")]
#[command(about = "View a file with a custom scrollbar overlay", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// File to view (shorthand for `railbar view <FILE>`)
    file: Option<PathBuf>,

    /// Config file (defaults to the platform config dir)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a file in the viewer
    View { file: PathBuf },

    /// Print the thumb geometry for the given extents
    Geometry {
        #[arg(long, default_value_t = 0.0)]
        scroll_top: f64,
        #[arg(long)]
        scroll_height: f64,
        #[arg(long)]
        client_height: f64,
        #[arg(long)]
        track_height: f64,
    },

    /// Print the effective configuration as TOML
    Config,
}

/// Directory for log files (`<data dir>/railbar/logs`)
fn logs_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("railbar")
        .join("logs")
}

/// Log to a file, never to stdout/stderr which the TUI owns
fn init_logging() {
    let log_dir = logs_dir();
    std::fs::create_dir_all(&log_dir).ok();

    let Ok(log_file) = std::fs::File::create(log_dir.join("railbar.log")) else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();
}

/// Restore terminal state - called on panic or unexpected exit
fn restore_terminal() {
    use crossterm::{
        event::{DisableFocusChange, DisableMouseCapture},
        execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };
    let _ = disable_raw_mode();
    let _ = execute!(
        std::io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    );
}

fn print_geometry(
    config: &ScrollbarConfig,
    scroll_top: f64,
    scroll_height: f64,
    client_height: f64,
    track_height: f64,
) -> Result<()> {
    let height =
        thumb::compute_thumb_height(client_height, scroll_height, track_height, config.min_thumb)
            .context("extents must be positive numbers")?;
    let top = geometry::content_offset_to_track_offset(
        scroll_top,
        scroll_height,
        track_height,
        height,
    )
    .context("extents must be positive numbers")?;

    println!("thumb height: {height}");
    println!("thumb top:    {top}");
    println!("track travel: {}", (track_height - height).max(0.0));
    Ok(())
}

async fn view(path: &Path, config: ScrollbarConfig) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let title = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    tracing::info!(path = %path.display(), bytes = text.len(), "Opening viewer");
    let mut app = tui::App::new(title, text, config);
    app.run().await
}

#[tokio::main]
async fn main() -> Result<()> {
    // Set up panic hook to restore terminal state
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    init_logging();

    let cli = Cli::parse();
    let config = ScrollbarConfig::load_or_default(cli.config.as_deref())?;

    match (cli.command, cli.file) {
        (Some(Commands::View { file }), _) | (None, Some(file)) => view(&file, config).await?,
        (
            Some(Commands::Geometry {
                scroll_top,
                scroll_height,
                client_height,
                track_height,
            }),
            _,
        ) => print_geometry(
            &config,
            scroll_top,
            scroll_height,
            client_height,
            track_height,
        )?,
        (Some(Commands::Config), _) => print!("{}", config.to_toml()?),
        (None, None) => {
            anyhow::bail!("no file given; run `railbar <FILE>` or `railbar --help`")
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_file_is_view_shorthand() {
        let cli = Cli::try_parse_from(["railbar", "notes.md"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.file, Some(PathBuf::from("notes.md")));
    }

    #[test]
    fn test_geometry_args() {
        let cli = Cli::try_parse_from([
            "railbar",
            "geometry",
            "--scroll-height",
            "1000",
            "--client-height",
            "200",
            "--track-height",
            "300",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Geometry {
                scroll_top,
                scroll_height,
                ..
            }) => {
                assert_eq!(scroll_top, 0.0);
                assert_eq!(scroll_height, 1000.0);
            }
            _ => panic!("expected geometry command"),
        }
    }

    #[test]
    fn test_global_config_flag_loads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "min_thumb = 32.0\n").unwrap();

        let cli =
            Cli::try_parse_from(["railbar", "config", "--config", path.to_str().unwrap()]).unwrap();
        let config = ScrollbarConfig::load_or_default(cli.config.as_deref()).unwrap();
        assert_eq!(config.min_thumb, 32.0);
    }

    #[test]
    fn test_geometry_rejects_degenerate_extents() {
        let config = ScrollbarConfig::default();
        assert!(print_geometry(&config, 0.0, 0.0, 200.0, 300.0).is_err());
    }
}
