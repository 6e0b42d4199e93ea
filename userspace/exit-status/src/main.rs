//! Exits with a status chosen at build time.
//!
//! Linked without the C runtime: the loader enters at `_start` from
//! `rawstart-rt`, which calls `main` below and passes its return value to the
//! raw `exit` syscall. Build with `RAWSTART_STATUS=<i32>` to pick the status.

#![no_std]
#![no_main]

// Pulls in `_start` and the panic handler.
use rawstart_rt as _;

include!(concat!(env!("OUT_DIR"), "/status.rs"));

/// Program logic: report the configured status.
#[unsafe(no_mangle)]
pub extern "C" fn main() -> i32 {
    STATUS
}
