mod cli;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossbeam_channel::bounded;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quotebook::favorites::{FavoritesStore, ToggleOutcome};
use quotebook::quote::{Category, QuoteCatalog, QuoteId, QuoteSource};
use quotebook::selection::SelectionController;

use quotebook_app::app::{AppCommand, AppController, AppSnapshot};
use quotebook_app::config::controller::{COMMAND_QUEUE, UPDATE_WAIT_MS};
use quotebook_app::data::{config_dir, FileStore, Settings};
use quotebook_app::providers::source_for;

use cli::ShellInput;

/// Browse quotes by category and keep a short list of favorites
#[derive(Parser)]
#[command(name = "quotebook", version, about)]
struct Cli {
    /// Directory holding favorites and settings [default: platform config dir]
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Quote list URL or local JSON file (overrides settings)
    #[arg(long, global = true)]
    quotes_url: Option<String>,

    /// Maximum number of favorites (overrides settings)
    #[arg(long, global = true)]
    max_faves: Option<usize>,

    /// Also notify when a favorite is removed
    #[arg(long, global = true)]
    notify_on_remove: bool,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the category vocabulary
    Categories,
    /// Fetch quotes and show those in a category
    List {
        #[arg(short, long, default_value = "All")]
        category: Category,
    },
    /// Show favorite quotes (no network needed)
    Favorites,
    /// Add a quote to favorites, or remove it if already there
    Toggle { id: QuoteId },
    /// Remove a quote from favorites
    Remove { id: QuoteId },
    /// Interactive session
    Shell,
}

/// Everything a command needs, built from settings and flags
struct Session {
    selection: SelectionController,
    source: Arc<dyn QuoteSource>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("quotebook={level},quotebook_app={level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Command::Categories = cli.command {
        for category in Category::ALL {
            println!("{category}");
        }
        return Ok(());
    }

    let mut session = open_session(&cli)?;

    match cli.command {
        Command::Categories => {}
        Command::List { category } => {
            load_catalog(&mut session);
            session.selection.set_category(category);
            let selection = &session.selection;
            println!(
                "{}",
                cli::render_quotes(selection.visible_quotes(), |id| selection.is_favorite(id))
            );
        }
        Command::Favorites => {
            let favorites = session.selection.favorites();
            println!("{}", cli::render_favorites(favorites.list(), favorites.max_faves()));
        }
        Command::Toggle { id } => {
            // Removing needs no catalog; adding does
            if !session.selection.is_favorite(id) {
                load_catalog(&mut session);
            }
            let outcome = session.selection.toggle(id)?;
            match session.selection.notification() {
                Some(n) => println!("{}", cli::render_notification(n)),
                None if outcome == ToggleOutcome::Removed => println!("Removed {id} from favorites"),
                None => {}
            }
            report_persist_error(&session);
        }
        Command::Remove { id } => {
            if session.selection.remove(id) {
                println!("Removed {id} from favorites");
            } else {
                println!("{id} is not a favorite");
            }
            report_persist_error(&session);
        }
        Command::Shell => run_shell(session)?,
    }

    Ok(())
}

fn open_session(cli: &Cli) -> Result<Session> {
    let dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => config_dir()?,
    };

    let mut settings = Settings::load_in(&dir)
        .with_context(|| format!("loading settings from {}", dir.display()))?;
    if let Some(url) = &cli.quotes_url {
        settings.quotes_url = url.clone();
    }
    if let Some(max) = cli.max_faves {
        settings.max_faves = max;
    }
    if cli.notify_on_remove {
        settings.notify_on_remove = true;
    }
    settings.validate()?;

    let favorites = FavoritesStore::hydrate(Box::new(FileStore::at(&dir)), settings.favorites_config());
    let source: Arc<dyn QuoteSource> = Arc::from(source_for(&settings.quotes_url)?);

    Ok(Session {
        selection: SelectionController::new(QuoteCatalog::new(), favorites),
        source,
    })
}

/// Fetch once; a failure leaves the catalog empty and is reported, not fatal
fn load_catalog(session: &mut Session) {
    if let Err(e) = session.selection.load_catalog(session.source.as_ref()) {
        eprintln!("Could not load quotes: {e}");
    }
}

fn report_persist_error(session: &Session) {
    if let Some(e) = session.selection.favorites().last_persist_error() {
        eprintln!("Favorites were not saved: {e}");
    }
}

fn run_shell(session: Session) -> Result<()> {
    let (cmd_tx, cmd_rx) = bounded(COMMAND_QUEUE);
    let shared_state = Arc::new(Mutex::new(AppSnapshot::default()));

    let ctrl_state = shared_state.clone();
    let ctrl_tx = cmd_tx.clone();
    let controller = std::thread::Builder::new()
        .name("controller".into())
        .spawn(move || {
            let mut ctrl = AppController::new(cmd_rx, ctrl_tx, ctrl_state, session.selection, session.source);
            ctrl.run();
        })
        .context("spawning controller thread")?;

    let snapshot = || shared_state.lock().unwrap_or_else(|e| e.into_inner()).clone();
    let sync = || -> Result<()> {
        let (reply_tx, reply_rx) = bounded(1);
        cmd_tx.send(AppCommand::Sync(reply_tx))?;
        reply_rx
            .recv_timeout(Duration::from_millis(UPDATE_WAIT_MS))
            .context("controller did not respond")?;
        Ok(())
    };

    println!("{}", cli::SHELL_HELP);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;

        match cli::parse_shell_line(&line) {
            Ok(ShellInput::Empty) => continue,
            Ok(ShellInput::Quit) => break,
            Ok(ShellInput::Help) => println!("{}", cli::SHELL_HELP),
            Ok(ShellInput::ShowQuotes) => {
                sync()?;
                let snap = snapshot();
                println!("{}", cli::render_quotes(&snap.visible, |id| snap.is_favorite(id)));
                println!("{}", cli::render_status(&snap));
            }
            Ok(ShellInput::ShowFavorites) => {
                sync()?;
                let snap = snapshot();
                println!("{}", cli::render_favorites(&snap.favorites, snap.max_faves));
            }
            Ok(ShellInput::Command(cmd)) => {
                cmd_tx.send(cmd)?;
                sync()?;
                println!("{}", cli::render_status(&snapshot()));
            }
            Err(msg) => println!("{msg}"),
        }
    }

    let _ = cmd_tx.send(AppCommand::Shutdown);
    let _ = controller.join();
    Ok(())
}
