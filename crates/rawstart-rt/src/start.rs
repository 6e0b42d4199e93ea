//! Entry point for binaries linked without the C runtime's startup files.
//!
//! The loader jumps to `_start` with the stack pointer at `argc`, aligned to
//! 16 bytes, and no return address. `_start` terminates the frame chain and
//! calls [`start_rust`] with a proper call instruction so the callee sees the
//! alignment the C ABI promises. argc, argv and envp are left untouched.

use rawstart_abi::ExitCode;

/// Process entry symbol named by the ELF header.
#[cfg(target_arch = "x86_64")]
#[unsafe(no_mangle)]
#[unsafe(naked)]
pub extern "C" fn _start() -> ! {
    core::arch::naked_asm!(
        "xor ebp, ebp",
        "call {start_rust}",
        "ud2",
        start_rust = sym start_rust,
    );
}

/// Process entry symbol named by the ELF header.
#[cfg(target_arch = "aarch64")]
#[unsafe(no_mangle)]
#[unsafe(naked)]
pub extern "C" fn _start() -> ! {
    core::arch::naked_asm!(
        "mov x29, xzr",
        "mov x30, xzr",
        "bl {start_rust}",
        "udf #0",
        start_rust = sym start_rust,
    );
}

/// Process entry symbol named by the ELF header.
///
/// Also loads `gp`, which the linker may relax accesses against.
#[cfg(target_arch = "riscv64")]
#[unsafe(no_mangle)]
#[unsafe(naked)]
pub extern "C" fn _start() -> ! {
    core::arch::naked_asm!(
        ".option push",
        ".option norelax",
        "la gp, __global_pointer$",
        ".option pop",
        "mv s0, zero",
        "call {start_rust}",
        "unimp",
        start_rust = sym start_rust,
    );
}

/// Runs the binary's `main` and ends the process with its result.
extern "C" fn start_rust() -> ! {
    unsafe extern "C" {
        fn main() -> i32;
    }
    // SAFETY: The binary defines `main` as `#[unsafe(no_mangle)] pub extern "C" fn main() -> i32`.
    let status = unsafe { main() };
    crate::exit(ExitCode::new(status));
}
