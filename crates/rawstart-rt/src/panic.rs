//! Panic handler for binaries without `std`.

use rawstart_abi::ExitCode;

#[panic_handler]
fn panic(_info: &core::panic::PanicInfo<'_>) -> ! {
    crate::exit(ExitCode::PANIC);
}

/// Personality routine referenced by the unwind tables of the prebuilt
/// `core`, even when the binary itself is built with `panic = "abort"`.
/// Nothing unwinds, so it is never called.
#[unsafe(no_mangle)]
pub extern "C" fn rust_eh_personality() {}
