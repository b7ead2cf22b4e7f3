use log::debug;
use std::{
    ffi::{OsStr, OsString},
    io::ErrorKind,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

mod error;
pub use error::LaunchError;

mod reentrancy_guard;
use reentrancy_guard::check_self_launch;

mod status;
pub use status::relay_code;

/// Base name of the companion binary installed next to the launcher
pub const COMPANION_NAME: &str = "clodo";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Platform {
    Windows,
    Other,
}

impl Platform {
    /// Identify a platform from a `std::env::consts::OS`-style name
    #[must_use]
    pub fn from_target_os(os: &str) -> Self {
        if os == "windows" {
            Platform::Windows
        } else {
            Platform::Other
        }
    }

    #[must_use]
    pub fn current() -> Self {
        Self::from_target_os(std::env::consts::OS)
    }

    #[must_use]
    pub fn executable_suffix(self) -> &'static str {
        match self {
            Platform::Windows => ".exe",
            Platform::Other => "",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Windows => f.write_str("windows"),
            Platform::Other => f.write_str("other"),
        }
    }
}

#[must_use]
pub fn executable_name(platform: Platform) -> String {
    format!("{COMPANION_NAME}{}", platform.executable_suffix())
}

#[must_use]
pub fn companion_path(dir: &Path, platform: Platform) -> PathBuf {
    dir.join(executable_name(platform))
}

pub struct Launcher {
    dir: PathBuf,
    platform: Platform,
    launcher_path: Option<PathBuf>,
    args: Vec<OsString>,
}

impl Launcher {
    /// Launch the companion binary found in `dir`
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Launcher {
        Launcher {
            dir: dir.into(),
            platform: Platform::current(),
            launcher_path: None,
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn platform(mut self, platform: Platform) -> Launcher {
        self.platform = platform;
        self
    }

    /// Path of the running launcher; the companion must not resolve to it
    #[must_use]
    pub fn launcher_path(mut self, path: impl Into<PathBuf>) -> Launcher {
        self.launcher_path = Some(path.into());
        self
    }

    /// Pass `arg` to the companion binary
    #[must_use]
    pub fn arg<S>(mut self, arg: S) -> Launcher
    where
        S: AsRef<OsStr>,
    {
        self.args.push(arg.as_ref().to_owned());
        self
    }

    /// Pass `args` to the companion binary
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Launcher
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|arg| arg.as_ref().to_owned()));
        self
    }

    #[must_use]
    pub fn companion_path(&self) -> PathBuf {
        companion_path(&self.dir, self.platform)
    }

    /// Build the command that [`Launcher::status`] would spawn.
    ///
    /// The companion inherits the launcher's standard streams, environment, and working directory.
    pub fn command(&self) -> Result<Command, LaunchError> {
        let path = self.companion_path();
        if let Some(launcher_path) = &self.launcher_path {
            check_self_launch(launcher_path, &path)?;
        }
        let mut command = Command::new(&path);
        command.args(&self.args);
        command.stdin(Stdio::inherit());
        command.stdout(Stdio::inherit());
        command.stderr(Stdio::inherit());
        Ok(command)
    }

    /// Run the companion binary to completion and return the exit code to relay.
    ///
    /// A companion that exits with a non-zero code is not an error; its code is returned as is.
    pub fn status(&self) -> Result<i32, LaunchError> {
        let path = self.companion_path();
        debug!("companion ({} platform): {}", self.platform, path.display());
        let mut command = self.command()?;
        debug!("{command:?}");
        let mut child = command.spawn().map_err(|source| {
            // ENOENT also covers an existing script whose interpreter is missing.
            if source.kind() == ErrorKind::NotFound && !matches!(path.try_exists(), Ok(true)) {
                LaunchError::NotFound { path: path.clone() }
            } else {
                LaunchError::Spawn {
                    path: path.clone(),
                    source,
                }
            }
        })?;
        let status = child
            .wait()
            .map_err(|source| LaunchError::Wait { path, source })?;
        debug!("companion finished: {status}");
        Ok(relay_code(status))
    }
}
