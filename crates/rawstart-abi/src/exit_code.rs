//! Process exit status.

use core::fmt;

/// Status value produced by a program's `main` and handed to the kernel.
///
/// The kernel keeps only the low 8 bits, so a parent waiting on the process
/// observes [`ExitCode::observed`] rather than the full value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Normal termination.
    pub const SUCCESS: Self = Self(0);
    /// Generic failure.
    pub const FAILURE: Self = Self(1);
    /// Termination after a panic.
    pub const PANIC: Self = Self(101);

    /// Wraps a raw status value.
    #[must_use]
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Returns the status exactly as `main` produced it.
    #[must_use]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Returns the value placed in the first syscall argument register.
    ///
    /// The status is sign-extended to the register width, matching what a C
    /// caller passing an `int` would leave there.
    #[must_use]
    #[expect(
        clippy::cast_sign_loss,
        reason = "register carries the two's complement bit pattern"
    )]
    pub const fn register_value(self) -> usize {
        self.0 as isize as usize
    }

    /// Returns the status a waiting parent observes after 8-bit truncation.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "truncation mirrors the kernel's exit status encoding"
    )]
    pub const fn observed(self) -> u8 {
        self.0 as u8
    }

    /// Returns `true` if the observed status reports success.
    #[must_use]
    pub const fn is_success(self) -> bool {
        self.observed() == 0
    }
}

impl From<i32> for ExitCode {
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if i32::from(self.observed()) == self.0 {
            write!(f, "{}", self.0)
        } else {
            write!(f, "{} (observed as {})", self.0, self.observed())
        }
    }
}
