//! Per-architecture raw exit syscall.

#[cfg(target_arch = "aarch64")]
mod aarch64;
#[cfg(target_arch = "riscv64")]
mod riscv64;
#[cfg(target_arch = "x86_64")]
mod x86_64;

#[cfg(target_arch = "aarch64")]
pub(crate) use aarch64::raw_exit;
#[cfg(target_arch = "riscv64")]
pub(crate) use riscv64::raw_exit;
#[cfg(target_arch = "x86_64")]
pub(crate) use x86_64::raw_exit;
