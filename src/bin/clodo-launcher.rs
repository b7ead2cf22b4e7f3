use anstyle::Style;
use clodo_launcher::{LaunchError, Launcher};
use std::{
    env::{args_os, current_exe},
    io::{IsTerminal, Write},
    path::Path,
    process::exit,
};

fn main() {
    env_logger::try_init().unwrap_or_default();

    let code = run().unwrap_or_else(|error| {
        report(&error);
        error.exit_code()
    });

    exit(code);
}

fn run() -> Result<i32, LaunchError> {
    let launcher_path = current_exe().map_err(LaunchError::CurrentExe)?;
    let Some(dir) = launcher_path.parent().map(Path::to_path_buf) else {
        return Err(LaunchError::NoParentDir {
            path: launcher_path,
        });
    };

    Launcher::new(dir)
        .args(args_os().skip(1))
        .launcher_path(&launcher_path)
        .status()
}

fn report(error: &LaunchError) {
    let style = if std::io::stderr().is_terminal() {
        Style::new().bold()
    } else {
        Style::new()
    };
    let _: std::io::Result<()> = writeln!(std::io::stderr(), "{style}Error:{style:#} {error}");
}
