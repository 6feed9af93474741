//! Text rendering and shell parsing for the `quotebook` binary

use quotebook::notification::{Notification, NotificationKind};
use quotebook::quote::{Category, Quote, QuoteId};

use quotebook_app::app::{AppCommand, AppSnapshot};

/// One line of input in the interactive shell
#[derive(Debug)]
pub enum ShellInput {
    Command(AppCommand),
    ShowQuotes,
    ShowFavorites,
    Help,
    Quit,
    Empty,
}

pub const SHELL_HELP: &str = "\
commands:
  list               show quotes in the current category
  favs               show favorites
  category <name>    filter by category (All, Leadership, Empathy, ...)
  fav <id>           toggle a quote as favorite
  rm <id>            remove a favorite
  ok                 dismiss the notification
  reload             fetch the quote list again
  quit               leave the shell";

/// Parse a shell line
pub fn parse_shell_line(line: &str) -> Result<ShellInput, String> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Ok(ShellInput::Empty);
    };
    let arg = parts.collect::<Vec<_>>().join(" ");

    let input = match verb.to_ascii_lowercase().as_str() {
        "list" | "ls" => ShellInput::ShowQuotes,
        "favs" | "favorites" => ShellInput::ShowFavorites,
        "help" | "?" => ShellInput::Help,
        "quit" | "exit" | "q" => ShellInput::Quit,
        "ok" | "dismiss" => ShellInput::Command(AppCommand::DismissNotification),
        "reload" => ShellInput::Command(AppCommand::ReloadCatalog),
        "category" | "cat" => {
            let category = arg.parse::<Category>().map_err(|e| e.to_string())?;
            ShellInput::Command(AppCommand::SetCategory(category))
        }
        "fav" | "toggle" => ShellInput::Command(AppCommand::ToggleFavorite(parse_id(&arg)?)),
        "rm" | "remove" => ShellInput::Command(AppCommand::RemoveFavorite(parse_id(&arg)?)),
        other => return Err(format!("unknown command {other:?}, try `help`")),
    };
    Ok(input)
}

fn parse_id(arg: &str) -> Result<QuoteId, String> {
    arg.parse::<QuoteId>()
        .map_err(|_| format!("expected a quote id, got {arg:?}"))
}

/// One line per quote, favorites starred
pub fn render_quotes<'a>(
    quotes: impl IntoIterator<Item = &'a Quote>,
    is_favorite: impl Fn(QuoteId) -> bool,
) -> String {
    quotes
        .into_iter()
        .map(|q| {
            let star = if is_favorite(q.id) { '*' } else { ' ' };
            format!(
                "{star} {:>4}  \"{}\" ({}) [{}]",
                q.id,
                q.text,
                q.author,
                q.categories.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_favorites(favorites: &[Quote], max_faves: usize) -> String {
    let mut out = format!("Top {max_faves} favorite quotes ({}/{max_faves})", favorites.len());
    for q in favorites {
        out.push_str(&format!("\n  x {:>4}  \"{}\" ({})", q.id, q.text, q.author));
    }
    out
}

pub fn render_notification(notification: &Notification) -> String {
    let tag = match notification.kind {
        NotificationKind::Success => "ok",
        NotificationKind::Warning => "!!",
        NotificationKind::Info => "--",
    };
    format!("[{tag}] {}", notification.text)
}

/// Status line shown after every shell command
pub fn render_status(snap: &AppSnapshot) -> String {
    let mut out = format!(
        "category: {} | showing {} of {} | favorites {}/{}",
        snap.category,
        snap.visible.len(),
        snap.catalog_size,
        snap.favorites.len(),
        snap.max_faves
    );
    if snap.is_loading {
        out.push_str(" | loading...");
    }
    if let Some(n) = &snap.notification {
        out.push('\n');
        out.push_str(&render_notification(n));
    }
    if let Some(e) = &snap.last_error {
        out.push_str(&format!("\nerror: {e}"));
    }
    out
}
