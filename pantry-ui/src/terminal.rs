//! Terminal front end
//!
//! Stands in for the page: typed commands become [`UiEvent`]s and panels
//! are printed as text.
//!
//! Commands:
//! - `toggle <item>`: click a catalog item
//! - `add <text>`: type into the custom field and press Enter
//! - `remove <name>`: remove a selected ingredient
//! - `generate`, `clear`, `help`, `quit`

use crate::app::View;
use crate::events::UiEvent;
use crate::render::{CatalogPanel, RecipePanel, SelectionPanel};
use std::io::Write;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{debug, warn};

pub const HELP_TEXT: &str = "\
Commands:
  toggle <item>   select/deselect a catalog item
  add <text>      add a custom ingredient
  remove <name>   remove a selected ingredient
  generate        generate recipes for the selection
  clear           clear the selection and hide recipes
  help            show this help
  quit            exit";

/// Parsed terminal input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Events to forward to the app, in order
    Events(Vec<UiEvent>),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown command: {0} (type 'help')")]
    UnknownCommand(String),

    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
}

/// Parse one input line; blank lines yield `Ok(None)`
pub fn parse_command(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.trim().is_empty() {
        return Ok(None);
    }

    let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest),
        None => (trimmed, ""),
    };

    let command = match keyword.to_lowercase().as_str() {
        "toggle" => Command::Events(vec![UiEvent::CatalogItemClicked(
            required("toggle", rest)?.to_string(),
        )]),
        // Free text goes to the field untouched; normalizing is the store's job
        "add" => Command::Events(vec![
            UiEvent::CustomInputChanged(rest.to_string()),
            UiEvent::CustomInputSubmitted,
        ]),
        "remove" => Command::Events(vec![UiEvent::RemoveClicked(
            required("remove", rest)?.to_string(),
        )]),
        "generate" => Command::Events(vec![UiEvent::GenerateClicked]),
        "clear" => Command::Events(vec![UiEvent::ClearClicked]),
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };

    Ok(Some(command))
}

fn required<'a>(keyword: &'static str, rest: &'a str) -> Result<&'a str, ParseError> {
    let value = rest.trim();
    if value.is_empty() {
        Err(ParseError::MissingArgument(keyword))
    } else {
        Ok(value)
    }
}

/// Read commands from `input` and forward their events until quit or EOF
///
/// Help and parse errors are written to `out`. Dropping the sender on return
/// closes the UI event source.
pub async fn read_commands<R, W>(input: R, mut out: W, events: mpsc::Sender<UiEvent>)
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                debug!("Input closed");
                break;
            }
            Err(e) => {
                warn!("Failed to read input: {}", e);
                break;
            }
        };

        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(Command::Events(batch))) => {
                for event in batch {
                    if events.send(event).await.is_err() {
                        return;
                    }
                }
            }
            Ok(Some(Command::Help)) => print_block(&mut out, HELP_TEXT),
            Ok(Some(Command::Quit)) => break,
            Err(e) => print_block(&mut out, &e.to_string()),
        }
    }
}

fn print_block<W: Write>(out: &mut W, text: &str) {
    if let Err(e) = writeln!(out, "{}", text).and_then(|_| out.flush()) {
        warn!("Failed to write output: {}", e);
    }
}

/// Text view writing each updated panel to `out`
///
/// Unchanged panels are not reprinted.
pub struct TerminalView<W: Write> {
    out: W,
    last_catalog: Option<CatalogPanel>,
    last_selection: Option<SelectionPanel>,
    last_recipes: Option<RecipePanel>,
    generate_enabled: Option<bool>,
}

impl TerminalView<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            last_catalog: None,
            last_selection: None,
            last_recipes: None,
            generate_enabled: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn section(&mut self, heading: &str, body: &str) {
        let text = if body.is_empty() {
            format!("-- {} --", heading)
        } else {
            format!("-- {} --\n{}", heading, body.trim_end())
        };
        print_block(&mut self.out, &text);
    }
}

impl<W: Write> View for TerminalView<W> {
    fn show_catalog(&mut self, panel: &CatalogPanel) {
        if self.last_catalog.as_ref() == Some(panel) {
            return;
        }
        self.section("Catalog", &panel.to_string());
        self.last_catalog = Some(panel.clone());
    }

    fn show_selection(&mut self, panel: &SelectionPanel) {
        if self.last_selection.as_ref() == Some(panel) {
            return;
        }
        self.section("Selected", &panel.to_string());
        self.last_selection = Some(panel.clone());
    }

    fn show_recipes(&mut self, panel: &RecipePanel) {
        if self.last_recipes.as_ref() == Some(panel) {
            return;
        }
        // Printing "hidden" before anything was ever shown is noise
        if panel.is_visible() || self.last_recipes.is_some() {
            let body = if panel.is_visible() {
                panel.to_string()
            } else {
                "(hidden)".to_string()
            };
            self.section("Recipes", &body);
        }
        self.last_recipes = Some(panel.clone());
    }

    fn set_generate_enabled(&mut self, enabled: bool) {
        if self.generate_enabled == Some(enabled) {
            return;
        }
        let state = if enabled { "enabled" } else { "disabled" };
        print_block(&mut self.out, &format!("[generate: {}]", state));
        self.generate_enabled = Some(enabled);
    }

    fn set_custom_input(&mut self, _text: &str) {
        // The terminal line is the input field; it is already empty once the
        // command has been read.
    }
}
