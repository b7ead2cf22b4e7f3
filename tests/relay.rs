#![cfg(unix)]

use clodo_launcher::relay_code;
use std::{os::unix::process::ExitStatusExt, process::ExitStatus};

// Raw wait statuses: exit code in the second byte, terminating signal in the low bits.
fn exited(code: i32) -> ExitStatus {
    ExitStatus::from_raw(code << 8)
}

fn signaled(signal: i32) -> ExitStatus {
    ExitStatus::from_raw(signal)
}

#[test]
fn exit_codes_are_relayed_unchanged() {
    for code in [0, 1, 2, 42, 127, 255] {
        assert_eq!(code, relay_code(exited(code)), "failed for {code}");
    }
}

#[test]
fn signals_are_relayed_negated() {
    const SIGKILL: i32 = 9;
    const SIGTERM: i32 = 15;

    assert_eq!(-SIGKILL, relay_code(signaled(SIGKILL)));
    assert_eq!(-SIGTERM, relay_code(signaled(SIGTERM)));
}
