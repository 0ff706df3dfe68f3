//! Plain-text rendering for the console surface.
//!
//! Every function here is a pure map from local state to a string, so the
//! interactive loop only writes and the exact output stays pinned by tests.

use crate::domain::record::Record;
use crate::domain::session::Session;

/// Sign-in prompt, shown in place of any authenticated affordance.
pub const SIGN_IN_PROMPT: &str = "Please sign in to add restaurants.";

/// Heading printed once when the console starts.
#[must_use]
pub fn welcome_banner() -> &'static str {
    "Welcome to the IM 2025 restaurant board"
}

/// One line naming the resolved session, or the sign-in prompt.
#[must_use]
pub fn session_line(session: Option<&Session>) -> String {
    match session {
        Some(session) => format!("Signed in as {}", session.display_label()),
        None => SIGN_IN_PROMPT.to_owned(),
    }
}

/// The numbered record list, in the order the store returned it.
#[must_use]
pub fn record_list(records: &[Record]) -> String {
    if records.is_empty() {
        return "No restaurants yet.".to_owned();
    }
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            format!(
                "{}. {} - {} [{}]",
                index + 1,
                record.name(),
                record.description(),
                record.id()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The command summary shown by `help`.
#[must_use]
pub fn help_text() -> &'static str {
    "Commands:
  list         show the restaurant list
  add          add a restaurant (prompts for name and description)
  remove <id>  delete the restaurant with that id
  whoami       show who is signed in
  signout      sign out
  help         show this summary
  quit         leave the console"
}
