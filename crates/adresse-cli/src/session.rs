//! Interactive `try` session.
//!
//! Reads one command per line from stdin, feeds it to the [`Mediator`], and
//! redraws the widget whenever the input changes or a fetch outcome arrives.

use std::sync::Arc;

use adresse_client::{AdresseClient, Mediator};
use adresse_core::{SearchInput, SearchType, Theme};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::view;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const HELP: &str = "commands: <text> search | :type <housenumber|street|locality|municipality> toggle filter | \
:auto toggle autocomplete | :up / :down move highlight | :select [n] pick a result | :quit";

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Text(String),
    Type(SearchType),
    Autocomplete,
    Up,
    Down,
    Select(Option<usize>),
    Help,
    Quit,
    Invalid(String),
}

impl Command {
    /// Lines starting with `:` are commands; anything else is the new query
    /// text, including the empty line.
    pub(crate) fn parse(line: &str) -> Self {
        let Some(rest) = line.strip_prefix(':') else {
            return Command::Text(line.to_string());
        };

        let mut parts = rest.split_whitespace();
        let name = parts.next().unwrap_or_default();
        let arg = parts.next();
        match (name, arg) {
            ("type" | "t", Some(raw)) => match raw.parse::<SearchType>() {
                Ok(t) => Command::Type(t),
                Err(e) => Command::Invalid(e.to_string()),
            },
            ("type" | "t", None) => Command::Invalid(":type needs a value".to_string()),
            ("auto" | "a", _) => Command::Autocomplete,
            ("up" | "k", _) => Command::Up,
            ("down" | "j", _) => Command::Down,
            ("select" | "s", None) => Command::Select(None),
            ("select" | "s", Some(raw)) => match raw.parse::<usize>() {
                Ok(n) => Command::Select(Some(n)),
                Err(_) => Command::Invalid(format!("not a result number: {raw}")),
            },
            ("help" | "h" | "?", _) => Command::Help,
            ("quit" | "q", _) => Command::Quit,
            (other, _) => Command::Invalid(format!("unknown command :{other}")),
        }
    }
}

/// Moves the highlight one step within `len` rows, starting from the first
/// row when nothing is highlighted.
pub(crate) fn move_highlight(current: Option<usize>, len: usize, down: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match (current, down) {
        (None, _) => 0,
        (Some(i), true) => (i + 1).min(len - 1),
        (Some(i), false) => i.saturating_sub(1),
    })
}

fn redraw(mediator: &Mediator, highlighted: Option<usize>, theme: &Theme, notice: Option<&str>) {
    let surface = view::render_surface(
        mediator.input(),
        mediator.descriptor(),
        mediator.state(),
        highlighted,
        theme,
    );
    println!("{CLEAR_SCREEN}{surface}");
    println!();
    println!("{}", notice.unwrap_or(HELP));
}

/// Runs the session until `:quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading stdin fails.
pub(crate) async fn run(client: Arc<AdresseClient>, theme: Theme) -> anyhow::Result<()> {
    let (mut mediator, mut outcomes) = Mediator::new(client, SearchInput::default());
    let mut highlighted: Option<usize> = None;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    mediator.start();
    redraw(&mediator, highlighted, &theme, None);

    loop {
        let mut notice: Option<String> = None;
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match Command::parse(&line) {
                    Command::Quit => break,
                    Command::Text(text) => {
                        mediator.set_text(text);
                        highlighted = None;
                    }
                    Command::Type(t) => {
                        mediator.toggle_type(t);
                        highlighted = None;
                    }
                    Command::Autocomplete => {
                        mediator.toggle_autocomplete();
                        highlighted = None;
                    }
                    Command::Up => {
                        highlighted =
                            move_highlight(highlighted, mediator.state().list.len(), false);
                    }
                    Command::Down => {
                        highlighted =
                            move_highlight(highlighted, mediator.state().list.len(), true);
                    }
                    Command::Select(index) => {
                        match index.or(highlighted) {
                            Some(i) if i < mediator.state().list.len() => {
                                mediator.select(i);
                                highlighted = None;
                            }
                            Some(i) => notice = Some(format!("no result #{i}")),
                            None => notice = Some("nothing highlighted".to_string()),
                        }
                    }
                    Command::Help => notice = Some(HELP.to_string()),
                    Command::Invalid(msg) => notice = Some(msg),
                }
            }
            Some(outcome) = outcomes.recv() => {
                mediator.apply(outcome);
                let len = mediator.state().list.len();
                highlighted = highlighted.filter(|i| *i < len);
            }
        }
        redraw(&mediator, highlighted, &theme, notice.as_deref());
    }

    tracing::debug!("session ended");
    Ok(())
}
