//! Minimal process runtime for `#![no_std]`, `#![no_main]` Linux binaries.
//!
//! Provides the `_start` entry point (feature `start`), the raw `exit`
//! syscall that ends the process, and optionally a panic handler (feature
//! `panic-handler`). Nothing else runs before `main` or after it returns:
//! no argument parsing, no TLS, no atexit handlers, no stdio flushing.

#![cfg_attr(not(test), no_std)]

#[cfg(not(all(
    target_os = "linux",
    any(target_arch = "x86_64", target_arch = "aarch64", target_arch = "riscv64")
)))]
compile_error!("rawstart-rt supports Linux on x86_64, aarch64 and riscv64 only");

mod arch;
pub mod exit;
#[cfg(all(feature = "panic-handler", not(test)))]
mod panic;
#[cfg(all(feature = "start", not(test)))]
pub mod start;

pub use exit::{exit, terminate};
pub use rawstart_abi::{Arch, ExitCode, Selector};
