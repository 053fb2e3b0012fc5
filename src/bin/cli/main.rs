use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use quizcards_lib::config::{DEFAULT_CARDS_FILE, DEFAULT_PROGRESS_FILE};
use quizcards_lib::console::StdConsole;
use quizcards_lib::{App, Config};

#[derive(Parser)]
#[command(name = "quizcards", about = "Flashcard study tool with quiz mode", version)]
struct Cli {
    /// Flashcard file
    #[arg(long, default_value = DEFAULT_CARDS_FILE)]
    cards: PathBuf,

    /// Quiz progress file
    #[arg(long, default_value = DEFAULT_PROGRESS_FILE)]
    progress: PathBuf,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let use_color = !cli.no_color && std::io::stdout().is_terminal();

    for path in [&cli.cards, &cli.progress] {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    let config = Config {
        cards_path: cli.cards,
        progress_path: cli.progress,
        use_color,
    };

    let console = StdConsole::new(config.use_color);
    let mut app = App::new(config, console, rand::thread_rng());
    app.run();

    Ok(())
}
