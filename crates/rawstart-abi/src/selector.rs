//! Syscall selectors.
//!
//! Numbers come from [`syscalls::Sysno`] for the compile target, so the
//! value tracks the platform's ABI table instead of a literal here.

use core::fmt;

use syscalls::Sysno;

/// Number identifying a kernel service in the syscall dispatch table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selector {
    sysno: Sysno,
}

impl Selector {
    /// Terminate the calling thread. For a single-threaded process this
    /// ends the process.
    pub const EXIT: Self = Self { sysno: Sysno::exit };

    /// Returns the value loaded into the syscall-number register.
    #[must_use]
    pub const fn number(self) -> usize {
        self.sysno as usize
    }

    /// Returns the platform name of the syscall.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.sysno.name()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_is_named_exit() {
        assert_eq!(Selector::EXIT.name(), "exit");
    }

    #[cfg(all(target_os = "linux", target_arch = "x86_64"))]
    #[test]
    fn exit_number_on_x86_64() {
        assert_eq!(Selector::EXIT.number(), 60);
    }

    #[cfg(all(target_os = "linux", any(target_arch = "aarch64", target_arch = "riscv64")))]
    #[test]
    fn exit_number_on_generic_table() {
        assert_eq!(Selector::EXIT.number(), 93);
    }

    #[test]
    fn display_includes_number() {
        let text = format!("{}", Selector::EXIT);
        assert!(text.starts_with("exit ("));
        assert!(text.ends_with(&format!("{})", Selector::EXIT.number())));
    }
}
