//! Line-oriented front end: turns typed commands into widget events and
//! drives a controller from any buffered reader.

use std::io::BufRead;

use crate::controller::{Controller, Event};
use crate::error::{CommandError, WidgetError};
use crate::models::FormField;
use crate::state::WidgetState;
use crate::view::WidgetView;

pub const HELP: &str = "\
Commands:
  search <text>        filter the symptom list (empty text shows all)
  focus                reopen the list with the current filter
  add <text>           type <text> and press Enter (catalog match or free text)
  check <n>            tick entry n of the list
  uncheck <n>          untick entry n of the list
  remove <n|name>      remove a selected symptom by chip number or name
  age|sex|weight|height <text>
                       set a demographic field (empty text clears it)
  close                click outside the list (hides it)
  analyze              run the analysis
  reset                clear everything
  help                 show this text
  quit                 exit";

/// What a parsed line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Widget events to apply, in order.
    Events(Vec<Event>),
    Help,
    Quit,
    /// Blank line.
    Nothing,
}

/// Parses one line of input against the current state.
///
/// Positions refer to what is currently on screen, so the state is needed
/// to turn `check 3` into a concrete symptom.
pub fn parse(line: &str, state: &WidgetState) -> Result<Command, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Nothing);
    }
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let event = match verb.to_lowercase().as_str() {
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),
        "search" | "/" => Event::QueryInput {
            text: rest.to_string(),
        },
        "focus" => Event::QueryFocus,
        "add" => {
            let text = required(rest, "add", "some text")?;
            return Ok(Command::Events(vec![
                Event::QueryInput {
                    text: text.to_string(),
                },
                Event::QueryCommit,
            ]));
        }
        "check" | "uncheck" => {
            let checked = verb.eq_ignore_ascii_case("check");
            let arg = required(rest, if checked { "check" } else { "uncheck" }, "a list position")?;
            let position = parse_position(arg)?;
            let entry = state
                .dropdown
                .entry_at(position)
                .ok_or(CommandError::NoSuchEntry {
                    list: "symptom list",
                    index: position,
                })?;
            Event::Toggle {
                symptom: entry.symptom.clone(),
                checked,
            }
        }
        "remove" | "rm" => {
            let arg = required(rest, "remove", "a chip number or name")?;
            let symptom = match arg.parse::<usize>() {
                Ok(position) => position
                    .checked_sub(1)
                    .and_then(|i| state.chosen.as_slice().get(i))
                    .cloned()
                    .ok_or(CommandError::NoSuchEntry {
                        list: "selected symptoms",
                        index: position,
                    })?,
                Err(_) => arg.to_string(),
            };
            Event::RemoveChip { symptom }
        }
        "close" => Event::ClickOutside,
        "analyze" | "analyse" => Event::Analyze,
        "reset" => Event::Reset,
        other => match other.parse::<FormField>() {
            Ok(field) => Event::SetField {
                field,
                text: rest.to_string(),
            },
            Err(_) => return Err(CommandError::Unknown(verb.to_string())),
        },
    };
    Ok(Command::Events(vec![event]))
}

fn required<'a>(
    arg: &'a str,
    command: &'static str,
    expected: &'static str,
) -> Result<&'a str, CommandError> {
    if arg.is_empty() {
        Err(CommandError::MissingArgument { command, expected })
    } else {
        Ok(arg)
    }
}

fn parse_position(arg: &str) -> Result<usize, CommandError> {
    arg.parse::<usize>()
        .map_err(|_| CommandError::InvalidIndex(arg.to_string()))
}

/// Reads commands line by line until `quit` or end of input.
pub fn run_session<V, R>(controller: &mut Controller<V>, input: R) -> Result<(), WidgetError>
where
    V: WidgetView,
    R: BufRead,
{
    for line in input.lines() {
        let line = line?;
        match parse(&line, controller.state()) {
            Ok(Command::Events(events)) => {
                for event in events {
                    controller.handle(event)?;
                }
            }
            Ok(Command::Help) => controller.view_mut().notice(HELP)?,
            Ok(Command::Quit) => {
                tracing::debug!("Quit requested");
                break;
            }
            Ok(Command::Nothing) => {}
            Err(e) => {
                tracing::warn!(input = %line, "Rejected command: {e}");
                controller.view_mut().notice(&e.to_string())?;
            }
        }
    }
    Ok(())
}
