use std::{io, path::PathBuf};
use thiserror::Error;

/// Failure to get the companion binary running.
///
/// A companion that ran and exited, with any code, is never one of these.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error(
        "{name} binary not found at `{}`. Ensure it was built correctly.",
        .path.display(),
        name = crate::COMPANION_NAME
    )]
    NotFound { path: PathBuf },

    #[error(
        "{name} binary not found as a runnable program at `{}` ({source}). Ensure it was built \
         correctly.",
        .path.display(),
        name = crate::COMPANION_NAME
    )]
    Spawn { path: PathBuf, source: io::Error },

    #[error("failed to wait for `{}`: {source}", .path.display())]
    Wait { path: PathBuf, source: io::Error },

    #[error("refusing to run `{}`: it is the launcher itself", .path.display())]
    SelfLaunch { path: PathBuf },

    #[error("failed to determine the launcher's location: {0}")]
    CurrentExe(#[source] io::Error),

    #[error("launcher path `{}` has no parent directory", .path.display())]
    NoParentDir { path: PathBuf },
}

impl LaunchError {
    pub const EXIT_CODE: i32 = 1;

    #[must_use]
    #[expect(clippy::unused_self)]
    pub fn exit_code(&self) -> i32 {
        Self::EXIT_CODE
    }
}
