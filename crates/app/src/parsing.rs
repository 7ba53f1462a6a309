use std::str::SplitWhitespace;

use engine::{EngineError, MoneyCents, NewExpense};

/// One line of shell input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ShellCommand {
    Register {
        username: Option<String>,
        email: Option<String>,
        password: Option<String>,
        confirm: Option<String>,
    },
    Login {
        email: Option<String>,
        password: Option<String>,
    },
    Add(NewExpense),
    List {
        json: bool,
    },
    Total,
    /// 1-based position in the list.
    Delete(usize),
    Clear,
    Yes,
    No,
    About,
    Logout,
    Help,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub(crate) enum ParseError {
    #[error("empty line")]
    Empty,
    #[error("unknown command '{0}', type 'help'")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error(transparent)]
    Amount(#[from] EngineError),
}

pub(crate) const HELP: &str = "\
register <username> <email> <password> <confirm>
login <email> <password>
add <amount> <category> <date> [description...]
list [--json]
total
delete <n>
clear
yes | no
about
logout
help
quit";

const ADD_USAGE: &str = "add <amount> <category> <date> [description...]";
const DELETE_USAGE: &str = "delete <n>";

pub(crate) fn parse_line(line: &str) -> Result<ShellCommand, ParseError> {
    let mut tokens = line.split_whitespace();
    let Some(keyword) = tokens.next() else {
        return Err(ParseError::Empty);
    };

    let command = match keyword.to_ascii_lowercase().as_str() {
        "register" => ShellCommand::Register {
            username: word(&mut tokens),
            email: word(&mut tokens),
            password: word(&mut tokens),
            confirm: word(&mut tokens),
        },
        "login" => ShellCommand::Login {
            email: word(&mut tokens),
            password: word(&mut tokens),
        },
        "add" => {
            let amount = word(&mut tokens);
            let category = word(&mut tokens);
            let date = word(&mut tokens);
            let (Some(amount), Some(category), Some(date)) = (amount, category, date) else {
                return Err(ParseError::Usage(ADD_USAGE));
            };
            let amount: MoneyCents = amount.parse()?;
            let description = tokens.collect::<Vec<_>>().join(" ");
            ShellCommand::Add(NewExpense::new(description, amount, category, date))
        }
        "list" | "ls" => ShellCommand::List {
            json: word(&mut tokens).as_deref() == Some("--json"),
        },
        "total" => ShellCommand::Total,
        "delete" | "rm" => {
            let position = word(&mut tokens)
                .and_then(|raw| raw.parse::<usize>().ok())
                .filter(|&n| n > 0)
                .ok_or(ParseError::Usage(DELETE_USAGE))?;
            ShellCommand::Delete(position)
        }
        "clear" => ShellCommand::Clear,
        "yes" | "y" => ShellCommand::Yes,
        "no" | "n" => ShellCommand::No,
        "about" => ShellCommand::About,
        "logout" => ShellCommand::Logout,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        other => return Err(ParseError::Unknown(other.to_string())),
    };
    Ok(command)
}

fn word(tokens: &mut SplitWhitespace<'_>) -> Option<String> {
    tokens.next().map(str::to_string)
}
