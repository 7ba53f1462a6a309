//! Line-oriented front end.
//!
//! Reads one command per line, routes it to the account directory while
//! signed out and to the [`Tracker`] while signed in, and prints the result.

use std::io::{BufRead, Write};

use engine::{Command, ExpenseRecord, Gate, Ledger, Outcome, Tracker};

use crate::{
    accounts::Accounts,
    error::Result,
    parsing::{HELP, ParseError, ShellCommand, parse_line},
};

const PROMPT: &str = "> ";

enum Mode {
    SignedOut,
    Main(Tracker),
}

pub struct Shell {
    accounts: Accounts,
    mode: Mode,
}

impl Shell {
    pub fn new(accounts: Accounts) -> Self {
        Self {
            accounts,
            mode: Mode::SignedOut,
        }
    }

    /// Processes input until `quit` or end of input.
    pub fn run<R, W>(&mut self, input: R, out: &mut W) -> Result<()>
    where
        R: BufRead,
        W: Write,
    {
        self.enter(out)?;
        write!(out, "{PROMPT}")?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            match parse_line(&line) {
                Ok(ShellCommand::Quit) => break,
                Ok(command) => self.execute(command, out)?,
                Err(ParseError::Empty) => {}
                Err(err) => writeln!(out, "{err}")?,
            }
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }
        writeln!(out)?;
        Ok(())
    }

    /// Session gate: open the main screen if someone is signed in.
    fn enter<W: Write>(&mut self, out: &mut W) -> Result<()> {
        match Tracker::open(&self.accounts) {
            Some((tracker, welcome)) => {
                writeln!(out, "{welcome}")?;
                self.mode = Mode::Main(tracker);
            }
            None => {
                self.mode = Mode::SignedOut;
                writeln!(out, "Please log in or register (type 'help').")?;
            }
        }
        Ok(())
    }

    fn execute<W: Write>(&mut self, command: ShellCommand, out: &mut W) -> Result<()> {
        if command == ShellCommand::Help {
            writeln!(out, "{HELP}")?;
            return Ok(());
        }

        if let Mode::Main(tracker) = &mut self.mode
            && tracker.resume(&self.accounts) == Gate::RedirectToLogin
        {
            return self.enter(out);
        }

        if matches!(self.mode, Mode::SignedOut) {
            self.execute_signed_out(command, out)
        } else {
            self.execute_main(command, out)
        }
    }

    fn execute_signed_out<W: Write>(
        &mut self,
        command: ShellCommand,
        out: &mut W,
    ) -> Result<()> {
        let result = match command {
            ShellCommand::Register {
                username,
                email,
                password,
                confirm,
            } => self.accounts.register(
                username.as_deref(),
                email.as_deref(),
                password.as_deref(),
                confirm.as_deref(),
            ),
            ShellCommand::Login { email, password } => self
                .accounts
                .sign_in(email.as_deref(), password.as_deref()),
            _ => {
                writeln!(out, "Please log in first.")?;
                return Ok(());
            }
        };

        match result {
            Ok(()) => self.enter(out),
            Err(err) => {
                writeln!(out, "{err}")?;
                Ok(())
            }
        }
    }

    fn execute_main<W: Write>(&mut self, command: ShellCommand, out: &mut W) -> Result<()> {
        let Mode::Main(tracker) = &mut self.mode else {
            return Ok(());
        };

        let engine_command = match command {
            ShellCommand::Register { .. } | ShellCommand::Login { .. } => {
                writeln!(out, "Already logged in.")?;
                return Ok(());
            }
            ShellCommand::List { json } => {
                let records = tracker.ledger().records();
                if json {
                    writeln!(out, "{}", serde_json::to_string_pretty(records)?)?;
                } else {
                    write_list(out, records)?;
                }
                write_total(out, tracker.ledger())?;
                return Ok(());
            }
            ShellCommand::Total => {
                write_total(out, tracker.ledger())?;
                return Ok(());
            }
            ShellCommand::Add(expense) => Command::AddExpense(expense),
            ShellCommand::Delete(position) => {
                match tracker.ledger().records().get(position - 1) {
                    Some(record) => Command::DeleteExpense(record.id()),
                    None => {
                        writeln!(out, "No expense at position {position}.")?;
                        return Ok(());
                    }
                }
            }
            ShellCommand::Clear => Command::DeleteAll,
            ShellCommand::Yes => Command::Confirm,
            ShellCommand::No => Command::Cancel,
            ShellCommand::About => Command::About,
            ShellCommand::Logout => Command::Logout,
            ShellCommand::Help | ShellCommand::Quit => return Ok(()),
        };

        let outcome = match tracker.apply(engine_command, &mut self.accounts) {
            Ok(outcome) => outcome,
            Err(err) => {
                writeln!(out, "{err}")?;
                return Ok(());
            }
        };

        match &outcome {
            Outcome::ConfirmationRequired(pending) => {
                writeln!(out, "{}: {} (yes/no)", pending.title(), pending.prompt())?;
            }
            Outcome::Added(_) | Outcome::Deleted(_) | Outcome::DeletedAll(_) => {
                if let Some(message) = outcome.message() {
                    writeln!(out, "{message}")?;
                }
                write_total(out, tracker.ledger())?;
            }
            Outcome::LoggedOut => {
                if let Some(message) = outcome.message() {
                    writeln!(out, "{message}")?;
                }
                self.enter(out)?;
            }
            Outcome::Cancelled | Outcome::Notice(_) => {
                if let Some(message) = outcome.message() {
                    writeln!(out, "{message}")?;
                }
            }
        }
        Ok(())
    }
}

fn write_total<W: Write>(out: &mut W, ledger: &Ledger) -> Result<()> {
    match ledger.total() {
        Ok(total) => writeln!(out, "Total: {total}")?,
        Err(err) => writeln!(out, "Total unavailable: {err}")?,
    }
    Ok(())
}

fn write_list<W: Write>(out: &mut W, records: &[ExpenseRecord]) -> Result<()> {
    if records.is_empty() {
        writeln!(out, "No expenses yet.")?;
        return Ok(());
    }
    for (position, record) in records.iter().enumerate() {
        writeln!(
            out,
            "{:>3}. {} [{} / {}] {} {}",
            position + 1,
            record.description(),
            record.category(),
            record.category_tag().color(),
            record.date(),
            record.amount(),
        )?;
    }
    Ok(())
}
