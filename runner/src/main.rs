//! Stand-in for the `clodo` binary, driven by environment variables:
//!
//! - `RUNNER_ECHO_STDIN`: copy stdin to stdout instead of reporting arguments
//! - `RUNNER_EXIT_CODE`: exit with this code
//! - `RUNNER_ABORT`: abort after reporting

use anyhow::{Context, Result};
use std::{
    env::{args, var},
    io::{Write, copy, stdin, stdout},
    process::{abort, exit},
};

fn main() -> Result<()> {
    let mut stdout = stdout().lock();

    if enabled("RUNNER_ECHO_STDIN") {
        copy(&mut stdin().lock(), &mut stdout)?;
    } else {
        let args = args().skip(1).collect::<Vec<_>>();
        writeln!(stdout, "{}", serde_json::to_string(&args)?)?;
    }
    stdout.flush()?;

    if enabled("RUNNER_ABORT") {
        abort();
    }

    if let Ok(code) = var("RUNNER_EXIT_CODE") {
        let code = code
            .parse::<i32>()
            .with_context(|| format!("failed to parse `RUNNER_EXIT_CODE`: {code:?}"))?;
        exit(code);
    }

    Ok(())
}

fn enabled(key: &str) -> bool {
    var(key).is_ok_and(|value| value != "0")
}
