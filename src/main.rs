use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{info, warn};

use wordflip::app::App;
use wordflip::config::Config;
use wordflip::event::{AppEvent, EventHandler};
use wordflip::navigation::Section;
use wordflip::ui;
use wordflip::ui::theme::Theme;
use wordflip::vocab::Catalog;

#[derive(Parser)]
#[command(name = "wordflip", version, about = "Vocabulary flashcards for words, phrasal verbs, and idioms")]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "Section to open (vocabulary, phrasal-verbs, idioms, ...)")]
    section: Option<Section>,

    #[arg(long, value_name = "PATH", help = "Write logs to this file")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, config_err) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    if let Some(path) = &cli.log_file {
        init_logging(path, config.log_level())?;
    }
    if let Some(err) = config_err {
        warn!(error = %err, path = %Config::config_path().display(), "config unreadable, using defaults");
    }

    if let Some(theme) = cli.theme {
        if Theme::load(&theme).is_some() {
            config.theme = theme;
        } else {
            warn!(theme = %theme, "unknown theme, keeping configured one");
        }
    }
    if let Some(section) = cli.section {
        config.start_section = section.as_tag().to_string();
    }

    let catalog = Catalog::load().context("built-in catalog is corrupt")?;
    let mut app = App::new(config, catalog);
    app.config_path = Some(Config::config_path());
    info!(section = %app.section(), theme = %app.theme.name, "starting");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new();
    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn init_logging(path: &Path, level: tracing::Level) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .init();
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::screen::render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => app.handle_key(key),
            AppEvent::Resize => {}
        }

        if app.should_quit {
            info!(custom_words = app.custom.len(), "quitting");
            return Ok(());
        }
    }
}
