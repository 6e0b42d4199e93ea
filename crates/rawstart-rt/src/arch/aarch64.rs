//! aarch64 Linux: `X8` = syscall number, first argument in `X0`, trap with
//! `svc #0`.

/// Issue `selector` with `status` as its first argument and never return.
///
/// # Safety
///
/// `selector` must be a syscall that does not return to this thread.
#[inline(always)]
pub(crate) unsafe fn raw_exit(status: usize, selector: usize) -> ! {
    // SAFETY: `svc #0` enters the kernel's syscall vector; the caller
    // guarantees the kernel tears this thread down.
    unsafe {
        core::arch::asm!(
            "svc #0",
            in("x0") status,
            in("x8") selector,
            options(noreturn, nostack),
        );
    }
}
