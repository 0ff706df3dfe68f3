//! Interactive console loop.
//!
//! Drives the session gate and the sync controller from line-oriented
//! input. The loop owns no policy: operations log and absorb their own
//! failures, and the loop re-renders whatever state is left. Only IO
//! errors on the console itself can end the loop early.

use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use super::command::{Command, parse_command};
use super::render;
use crate::domain::ports::{IdentityProvider, RecordStore};
use crate::domain::record::RecordId;
use crate::domain::record_sync::RecordSyncController;
use crate::domain::session_gate::SessionGate;

/// The console surface: one gate, one controller, one input loop.
pub struct Console<P, S> {
    gate: SessionGate<P>,
    controller: RecordSyncController<S>,
}

impl<P, S> Console<P, S> {
    /// Assemble the surface from its two services.
    pub fn new(gate: SessionGate<P>, controller: RecordSyncController<S>) -> Self {
        Self { gate, controller }
    }

    /// Read access to the session gate.
    #[must_use]
    pub fn gate(&self) -> &SessionGate<P> {
        &self.gate
    }

    /// Read access to the sync controller.
    #[must_use]
    pub fn controller(&self) -> &RecordSyncController<S> {
        &self.controller
    }
}

impl<P, S> Console<P, S>
where
    P: IdentityProvider,
    S: RecordStore,
{
    /// Resolve the session and fetch the first record list.
    ///
    /// Runs once, before the loop. Both steps tolerate failure: the board
    /// then starts signed out or empty, and the causes are already logged.
    pub async fn initialise(&mut self) {
        self.gate.resolve().await;
        if self.controller.refresh().await.is_err() {
            debug!("initial record fetch failed; starting with an empty list");
        }
    }

    /// Drive the command loop until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error only when console IO itself fails. Operation
    /// failures leave state unchanged and the board re-renders.
    pub async fn run<R, W>(&mut self, mut input: R, mut output: W) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        write_line(&mut output, render::welcome_banner()).await?;
        self.render_board(&mut output).await?;

        loop {
            prompt(&mut output, "> ").await?;
            let Some(line) = read_line(&mut input).await? else {
                break;
            };

            match parse_command(&line) {
                Command::List => self.render_board(&mut output).await?,
                Command::Add => self.add(&mut input, &mut output).await?,
                Command::Remove { id } => self.remove(&id, &mut output).await?,
                Command::WhoAmI => {
                    write_line(&mut output, &render::session_line(self.gate.session())).await?;
                }
                Command::SignOut => self.sign_out(&mut output).await?,
                Command::Help => write_line(&mut output, render::help_text()).await?,
                Command::Quit => break,
                Command::Blank => {}
                Command::Unknown { input: raw } => {
                    let hint = format!("Unrecognised command: {raw} (try `help`)");
                    write_line(&mut output, &hint).await?;
                }
            }
        }

        write_line(&mut output, "Bye.").await
    }

    /// Prompt for the two draft fields, submit, and re-render.
    ///
    /// An empty answer keeps the retained draft value, so a failed
    /// submission can be retried without retyping. End of input mid-form
    /// abandons the submission.
    async fn add<R, W>(&mut self, input: &mut R, output: &mut W) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        if !self.gate.is_authenticated() {
            return write_line(output, render::SIGN_IN_PROMPT).await;
        }

        let retained = self.controller.draft().name().to_owned();
        let Some(entered) = prompt_field(input, output, "name", &retained).await? else {
            return Ok(());
        };
        if !entered.trim().is_empty() {
            self.controller.draft_mut().set_name(entered);
        }

        let retained = self.controller.draft().description().to_owned();
        let Some(entered) = prompt_field(input, output, "description", &retained).await? else {
            return Ok(());
        };
        if !entered.trim().is_empty() {
            self.controller.draft_mut().set_description(entered);
        }

        let _ = self.controller.submit_draft(self.gate.session()).await;
        self.render_board(output).await
    }

    async fn remove<W>(&mut self, raw_id: &str, output: &mut W) -> io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        if !self.gate.is_authenticated() {
            return write_line(output, render::SIGN_IN_PROMPT).await;
        }

        // The parser only yields whitespace-free tokens, so this cannot
        // fail on parsed input; stay total anyway.
        match RecordId::new(raw_id) {
            Ok(id) => {
                let _ = self.controller.remove(&id).await;
            }
            Err(err) => debug!(error = %err, "remove argument is not a usable id"),
        }
        self.render_board(output).await
    }

    async fn sign_out<W>(&mut self, output: &mut W) -> io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        if !self.gate.is_authenticated() {
            return write_line(output, render::SIGN_IN_PROMPT).await;
        }

        self.gate.sign_out().await;
        self.render_board(output).await
    }

    async fn render_board<W>(&self, output: &mut W) -> io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        write_line(output, &render::session_line(self.gate.session())).await?;
        write_line(output, &render::record_list(self.controller.records())).await
    }
}

async fn prompt_field<R, W>(
    input: &mut R,
    output: &mut W,
    label: &str,
    retained: &str,
) -> io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let text = if retained.is_empty() {
        format!("{label}: ")
    } else {
        format!("{label} [{retained}]: ")
    };
    prompt(output, &text).await?;
    read_line(input).await
}

async fn write_line<W>(output: &mut W, text: &str) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await
}

async fn prompt<W>(output: &mut W, text: &str) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.flush().await
}

async fn read_line<R>(input: &mut R) -> io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    if input.read_line(&mut line).await? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
}

#[cfg(test)]
#[path = "repl_tests.rs"]
mod tests;
