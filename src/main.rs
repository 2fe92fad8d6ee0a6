use anyhow::Result;
use clap::Parser;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;

use var_app::Session;
use var_config::Config;
use var_logger::LogLevel;

/// Minimal terminal text editor
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    /// File to edit
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    let min_level = config
        .logging
        .min_level
        .parse()
        .unwrap_or(LogLevel::Info);
    var_logger::init(config.log_file_path(), min_level);
    var_logger::info(format!("var {} starting", env!("CARGO_PKG_VERSION")));
    if let Some(e) = config_error {
        var_logger::warn(format!("Using default config: {:#}", e));
    }

    let mut session = Session::new(&config.editor);
    if let Some(path) = &cli.file {
        session.open(path);
    }

    enable_raw_mode()?;
    let result = run_editor(&mut session);

    // Restore terminal on every path, before anything is printed
    let restored = restore_terminal();

    // Print error if there was one
    if let Err(err) = &result {
        var_logger::error(format!("Editor stopped: {:?}", err));
        eprintln!("Error: {:?}", err);
    }

    var_logger::info("var exiting");
    restored?;
    Ok(())
}

/// Enter the alternate screen and run the input loop until quit
fn run_editor(session: &mut Session) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    var_app::run(&mut terminal, session)
}

/// Leave raw mode and the alternate screen, attempting every step
fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, Show);
    raw.and(screen)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_without_raw_mode_succeeds() {
        // Startup can fail before raw mode or the alternate screen is active
        assert!(restore_terminal().is_ok());
    }

    #[test]
    fn test_cli_file_argument() {
        let cli = Cli::try_parse_from(["var", "notes.txt"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("notes.txt")));

        let cli = Cli::try_parse_from(["var"]).unwrap();
        assert!(cli.file.is_none());
    }
}
