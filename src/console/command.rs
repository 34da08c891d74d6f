use std::str::FromStr;

use super::error::ConsoleError;
use crate::model::{Filter, ItemId};

pub const DEFAULT_USER_LIMIT: usize = 5;

pub const HELP: &str = "\
add <text>        add a task
toggle <id>       mark a task done / not done
edit <id> <text>  change the text of a task
rm <id>           delete a task
list [filter]     show tasks: all, pending (incomplete) or completed
weather <city>    look up the current weather of a city
users [limit]     load the user directory
user <id>         load one user profile
status            show the state of the lookups
clear             reset the lookups
help              show this message
quit              leave";

/// One line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Toggle(ItemId),
    Edit(ItemId, String),
    Remove(ItemId),
    List(Filter),
    Weather(String),
    Users(usize),
    User(u64),
    Status,
    Clear,
    Help,
    Quit,
}

fn parse_id(command: &'static str, arg: Option<&str>) -> Result<ItemId, ConsoleError> {
    let arg = arg.ok_or(ConsoleError::MissingArgument(command, "<id>"))?;
    arg.parse::<ItemId>()
        .map_err(|_| ConsoleError::InvalidArgument(command, arg.to_string()))
}

fn required<'a>(
    command: &'static str,
    what: &'static str,
    arg: Option<&'a str>,
) -> Result<&'a str, ConsoleError> {
    arg.map(str::trim)
        .filter(|a| !a.is_empty())
        .ok_or(ConsoleError::MissingArgument(command, what))
}

impl FromStr for Command {
    type Err = ConsoleError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Err(ConsoleError::Empty);
        }
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, Some(rest.trim())),
            None => (line, None),
        };

        match name.to_ascii_lowercase().as_str() {
            "add" => Ok(Command::Add(required("add", "<text>", rest)?.to_string())),
            "toggle" => Ok(Command::Toggle(parse_id("toggle", rest)?)),
            "edit" => {
                let rest = required("edit", "<id> <text>", rest)?;
                let (id, text) = match rest.split_once(char::is_whitespace) {
                    Some((id, text)) => (id, Some(text)),
                    None => (rest, None),
                };
                let id = parse_id("edit", Some(id))?;
                let text = required("edit", "<text>", text)?;
                Ok(Command::Edit(id, text.to_string()))
            }
            "rm" | "remove" | "delete" => Ok(Command::Remove(parse_id("rm", rest)?)),
            "list" | "ls" => match rest.filter(|r| !r.is_empty()) {
                Some(filter) => filter
                    .parse::<Filter>()
                    .map(Command::List)
                    .map_err(|err| ConsoleError::InvalidArgument("list", err.to_string())),
                None => Ok(Command::List(Filter::All)),
            },
            "weather" => Ok(Command::Weather(
                required("weather", "<city>", rest)?.to_string(),
            )),
            "users" => match rest.filter(|r| !r.is_empty()) {
                Some(limit) => limit
                    .parse::<usize>()
                    .map(Command::Users)
                    .map_err(|_| ConsoleError::InvalidArgument("users", limit.to_string())),
                None => Ok(Command::Users(DEFAULT_USER_LIMIT)),
            },
            "user" => {
                let id = required("user", "<id>", rest)?;
                id.parse::<u64>()
                    .map(Command::User)
                    .map_err(|_| ConsoleError::InvalidArgument("user", id.to_string()))
            }
            "status" => Ok(Command::Status),
            "clear" => Ok(Command::Clear),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(ConsoleError::UnknownCommand(other.to_string())),
        }
    }
}
