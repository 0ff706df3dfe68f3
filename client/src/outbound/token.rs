//! Access-token source shared by the outbound adapters.
//!
//! The external authenticator shell signs the user in and leaves an access
//! token on disk. Both adapters read it per request so a rotated token is
//! picked up without restarting; the buffer is zeroised once dropped.

use std::io;
use std::path::{Path, PathBuf};

use zeroize::Zeroizing;

/// File-backed source for the shell-issued access token.
#[derive(Debug, Clone)]
pub struct AccessTokenFile {
    path: PathBuf,
}

impl AccessTokenFile {
    /// Create a source reading from the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path the token is read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the current token.
    ///
    /// A missing file or a blank token reads as `None`; only unexpected IO
    /// failures surface as errors.
    pub fn read(&self) -> io::Result<Option<Zeroizing<String>>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(contents) => Zeroizing::new(contents),
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err),
        };

        let token = raw.trim();
        if token.is_empty() {
            return Ok(None);
        }
        Ok(Some(Zeroizing::new(token.to_owned())))
    }
}
