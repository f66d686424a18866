mod app;
mod config;
mod confetti;
mod error;
mod events;
mod log;
mod selector;
mod store;
mod tui;

use std::io::stdout;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::prelude::*;
use tokio::sync::mpsc;

use app::{App, Command};
use config::Config;
use events::EventHandler;
use selector::{SpinEvent, timeline};
use store::Store;

const USAGE: &str = "\
Usage: lunchpick [OPTIONS]

Options:
  -s, --stores <PATH>    JSON file with the store list
  -c, --config <PATH>    Config file (default: ~/.config/lunchpick/config.toml)
      --no-avoid-repeat  Allow the same store to come up twice in a row
      --seed <N>         Seed the random generator (reproducible picks)
  -h, --help             Print this help";

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    stores_file: Option<PathBuf>,
    config_file: Option<PathBuf>,
    no_avoid_repeat: bool,
    seed: Option<u64>,
    help: bool,
}

impl CliArgs {
    fn parse(args: &[String]) -> Self {
        let mut cli = CliArgs::default();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--stores" | "-s" | "--config" | "-c" | "--seed" => {
                    let Some(value) = args.get(i + 1) else {
                        eprintln!("Warning: {} requires an argument", args[i]);
                        i += 1;
                        continue;
                    };
                    match args[i].as_str() {
                        "--stores" | "-s" => cli.stores_file = Some(PathBuf::from(value)),
                        "--config" | "-c" => cli.config_file = Some(PathBuf::from(value)),
                        _ => match value.parse() {
                            Ok(seed) => cli.seed = Some(seed),
                            Err(_) => eprintln!("Warning: invalid seed '{}', ignoring", value),
                        },
                    }
                    i += 2;
                    continue;
                }
                "--no-avoid-repeat" => cli.no_avoid_repeat = true,
                "--help" | "-h" => cli.help = true,
                other => {
                    eprintln!("Warning: unknown argument '{}', ignoring", other);
                }
            }
            i += 1;
        }

        cli
    }
}

/// Resolve the configuration and load the candidate list.
///
/// Runs before the terminal switches to raw mode so errors print normally.
fn prepare(cli: &CliArgs) -> error::Result<(Config, Vec<Store>, String)> {
    let file_config = match &cli.config_file {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    let config = file_config
        .with_env()
        .with_overrides(cli.stores_file.clone(), cli.no_avoid_repeat);

    let source = config.store_source();
    let stores = store::load_candidates(&source)?;
    log::log(&format!(
        "Loaded {} stores from {}",
        stores.len(),
        source.describe()
    ));

    Ok((config, stores, source.describe()))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = CliArgs::parse(&args);
    if cli.help {
        println!("{}", USAGE);
        return Ok(());
    }

    // Initialize logging and panic hook
    if let Ok(log_path) = log::init() {
        log::log(&format!("Log file: {}", log_path.display()));
    }
    log::install_panic_hook();

    let (config, stores, source_label) = prepare(&cli)?;

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut app = App::new(stores, &config, source_label, rng);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log::log("=== lunchpick exited ===");
    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Spin timeline events (frames, then settle)
    let (spin_tx, mut spin_rx) = mpsc::channel::<SpinEvent>(32);

    // Event stream for keyboard and mouse
    let mut event_stream = EventStream::new();

    loop {
        // Render
        terminal.draw(|frame| tui::ui::render(frame, app))?;

        tokio::select! {
            // Terminal events (keyboard, mouse, resize)
            maybe_event = event_stream.next() => {
                let Some(event) = maybe_event else {
                    return Ok(());
                };
                let action = EventHandler::handle_event(app, &event?);
                match app.dispatch(action) {
                    Command::Quit => return Ok(()),
                    Command::StartSpin => {
                        timeline::spawn(spin_tx.clone());
                    }
                    Command::None => {}
                }
            }

            // Shuffle frames and the final reveal
            Some(event) = spin_rx.recv() => {
                app.on_spin_event(event, Instant::now());
            }

            // Timeout to keep the confetti falling
            _ = tokio::time::sleep(Duration::from_millis(80)) => {
                app.tick(Instant::now());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = CliArgs::parse(&args(&[
            "--stores",
            "/tmp/s.json",
            "-c",
            "/tmp/c.toml",
            "--no-avoid-repeat",
            "--seed",
            "42",
        ]));

        assert_eq!(cli.stores_file, Some(PathBuf::from("/tmp/s.json")));
        assert_eq!(cli.config_file, Some(PathBuf::from("/tmp/c.toml")));
        assert!(cli.no_avoid_repeat);
        assert_eq!(cli.seed, Some(42));
        assert!(!cli.help);
    }

    #[test]
    fn test_parse_tolerates_bad_input() {
        let cli = CliArgs::parse(&args(&["--seed", "abc", "--bogus", "-s"]));
        assert_eq!(cli, CliArgs::default());

        assert!(CliArgs::parse(&args(&["-h"])).help);
    }

    #[test]
    fn test_prepare_with_missing_store_file_fails() {
        let cli = CliArgs {
            stores_file: Some(PathBuf::from("/definitely/not/here.json")),
            ..Default::default()
        };
        assert!(matches!(
            prepare(&cli),
            Err(error::PickerError::Store(error::StoreError::Read { .. }))
        ));
    }
}
