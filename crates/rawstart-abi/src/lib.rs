//! Definitions shared between the rawstart runtime and its host tooling.
//!
//! Everything that crosses the program/kernel boundary when a process ends
//! lives here:
//! - [`ExitCode`]: the status `main` returns, and how the kernel truncates it
//! - [`Selector`]: the syscall number that asks the kernel to end the process
//! - [`Arch`]: which registers and trap instruction carry the request

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

pub mod arch;
pub mod exit_code;
pub mod selector;

pub use arch::Arch;
pub use exit_code::ExitCode;
pub use selector::Selector;
