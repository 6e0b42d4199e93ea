//! x86_64 Linux: `RAX` = syscall number, first argument in `RDI`, trap with
//! `syscall`. `RCX` and `R11` are clobbered, which is moot since the call
//! never returns.

/// Issue `selector` with `status` as its first argument and never return.
///
/// # Safety
///
/// `selector` must be a syscall that does not return to this thread.
#[inline(always)]
pub(crate) unsafe fn raw_exit(status: usize, selector: usize) -> ! {
    // SAFETY: `syscall` is the defined userspace-to-kernel transition; the
    // caller guarantees the kernel tears this thread down.
    unsafe {
        core::arch::asm!(
            "syscall",
            in("rdi") status,
            in("rax") selector,
            options(noreturn, nostack),
        );
    }
}
