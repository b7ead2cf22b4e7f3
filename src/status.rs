use std::process::ExitStatus;

const UNKNOWN_STATUS_CODE: i32 = 1;

/// Exit code the launcher should terminate with after the companion finished with `status`.
///
/// A normal exit relays the companion's code unchanged. On Unix, termination by signal `n` relays
/// `-n`, which the OS truncates to `256 - n` when passed to `exit`.
#[must_use]
pub fn relay_code(status: ExitStatus) -> i32 {
    status
        .code()
        .or_else(|| os_specific::signal_code(status))
        .unwrap_or(UNKNOWN_STATUS_CODE)
}

#[cfg(unix)]
mod os_specific {
    use std::{os::unix::process::ExitStatusExt, process::ExitStatus};

    pub fn signal_code(status: ExitStatus) -> Option<i32> {
        status.signal().map(|signal| -signal)
    }
}

#[cfg(not(unix))]
mod os_specific {
    use std::process::ExitStatus;

    // Outside Unix, every finished process has a code.
    pub fn signal_code(_status: ExitStatus) -> Option<i32> {
        None
    }
}
