//! riscv64 Linux: `a7` = syscall number, first argument in `a0`, trap with
//! `ecall`.

/// Issue `selector` with `status` as its first argument and never return.
///
/// # Safety
///
/// `selector` must be a syscall that does not return to this thread.
#[inline(always)]
pub(crate) unsafe fn raw_exit(status: usize, selector: usize) -> ! {
    // SAFETY: `ecall` from U-mode traps to the kernel; the caller guarantees
    // the kernel tears this thread down.
    unsafe {
        core::arch::asm!(
            "ecall",
            in("a0") status,
            in("a7") selector,
            options(noreturn, nostack),
        );
    }
}
