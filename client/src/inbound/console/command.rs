//! Console command parsing.
//!
//! Parsing is a pure function over one input line so the interactive loop
//! stays free of string handling and the grammar is unit-testable.

/// One parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Re-render the locally cached record list.
    List,
    /// Prompt for the draft fields and submit a new record.
    Add,
    /// Delete the record with the given store-assigned id.
    Remove { id: String },
    /// Show who the gate resolved at startup.
    WhoAmI,
    /// Clear the session locally and revoke it remotely.
    SignOut,
    /// Show the command summary.
    Help,
    /// Leave the loop.
    Quit,
    /// An empty line; the loop re-prompts without output.
    Blank,
    /// Anything the grammar does not recognise, kept verbatim.
    Unknown { input: String },
}

/// Parse one line of console input.
///
/// The verb is case-insensitive; `remove` takes exactly one argument and
/// anything else falls through to [`Command::Unknown`] so the loop can point
/// at `help`.
#[must_use]
pub fn parse_command(line: &str) -> Command {
    let mut tokens = line.split_whitespace();
    let Some(verb) = tokens.next() else {
        return Command::Blank;
    };
    let argument = tokens.next();
    if tokens.next().is_some() {
        return unknown(line);
    }

    match (verb.to_ascii_lowercase().as_str(), argument) {
        ("list", None) => Command::List,
        ("add", None) => Command::Add,
        ("remove", Some(id)) => Command::Remove { id: id.to_owned() },
        ("whoami", None) => Command::WhoAmI,
        ("signout", None) => Command::SignOut,
        ("help", None) => Command::Help,
        ("quit" | "exit", None) => Command::Quit,
        _ => unknown(line),
    }
}

fn unknown(line: &str) -> Command {
    Command::Unknown {
        input: line.trim().to_owned(),
    }
}
