//! Process termination through the raw `exit` syscall.

use rawstart_abi::{ExitCode, Selector};

/// Ask the kernel to run `selector` with `code` as its only argument.
///
/// The status goes in the first argument register, the selector in the
/// register the kernel dispatches on, and the trap follows immediately in
/// the same `asm!` block.
///
/// # Safety
///
/// `selector` must name a syscall that does not return to the caller, and
/// every other thread must tolerate this one vanishing.
pub unsafe fn terminate(code: ExitCode, selector: Selector) -> ! {
    // SAFETY: Forwarded from the caller.
    unsafe { crate::arch::raw_exit(code.register_value(), selector.number()) }
}

/// Terminate the process with the given exit status.
///
/// Uses [`Selector::EXIT`], which ends only the calling thread, so this is
/// meant for single-threaded processes. Nothing runs afterwards: no
/// destructors, no atexit handlers, no buffered output flushes.
pub fn exit(code: ExitCode) -> ! {
    // SAFETY: `exit` never returns to the calling thread.
    unsafe { terminate(code, Selector::EXIT) }
}
