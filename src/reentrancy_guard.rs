use super::LaunchError;
use std::path::Path;

/// Fail if `companion` is the running launcher, which would otherwise spawn itself forever.
///
/// Files that cannot be inspected (typically a missing companion) pass; spawning reports the
/// actual problem.
pub fn check_self_launch(launcher: &Path, companion: &Path) -> Result<(), LaunchError> {
    if os_specific::same_file(launcher, companion) {
        return Err(LaunchError::SelfLaunch {
            path: companion.to_owned(),
        });
    }

    Ok(())
}

#[cfg(unix)]
mod os_specific {
    use log::debug;
    use std::{fs::metadata, os::unix::fs::MetadataExt, path::Path};

    // Device and inode numbers also catch hard links and symlinks.
    pub fn same_file(lhs: &Path, rhs: &Path) -> bool {
        match (metadata(lhs), metadata(rhs)) {
            (Ok(lhs), Ok(rhs)) => (lhs.dev(), lhs.ino()) == (rhs.dev(), rhs.ino()),
            (lhs, rhs) => {
                debug!("not comparing files: {lhs:?}, {rhs:?}");
                false
            }
        }
    }
}

#[cfg(not(unix))]
mod os_specific {
    use log::debug;
    use std::{fs::canonicalize, path::Path};

    pub fn same_file(lhs: &Path, rhs: &Path) -> bool {
        match (canonicalize(lhs), canonicalize(rhs)) {
            (Ok(lhs), Ok(rhs)) => lhs == rhs,
            (lhs, rhs) => {
                debug!("not comparing paths: {lhs:?}, {rhs:?}");
                false
            }
        }
    }
}
