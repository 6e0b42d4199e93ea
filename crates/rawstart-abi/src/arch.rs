//! Raw syscall conventions for the supported Linux architectures.
//!
//! | arch    | status | selector | trap      | ELF machine |
//! |---------|--------|----------|-----------|-------------|
//! | x86_64  | `rdi`  | `rax`    | `syscall` | 62          |
//! | aarch64 | `x0`   | `x8`     | `svc #0`  | 183         |
//! | riscv64 | `a0`   | `a7`     | `ecall`   | 243         |

use core::fmt;

/// A CPU architecture with a known raw syscall convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    /// AMD64 / Intel 64.
    X86_64,
    /// ARMv8-A, 64-bit.
    Aarch64,
    /// RISC-V, 64-bit.
    Riscv64,
}

impl Arch {
    /// Every supported architecture.
    pub const ALL: [Self; 3] = [Self::X86_64, Self::Aarch64, Self::Riscv64];

    /// The architecture this crate was compiled for, if supported.
    #[must_use]
    pub const fn current() -> Option<Self> {
        if cfg!(target_arch = "x86_64") {
            Some(Self::X86_64)
        } else if cfg!(target_arch = "aarch64") {
            Some(Self::Aarch64)
        } else if cfg!(target_arch = "riscv64") {
            Some(Self::Riscv64)
        } else {
            None
        }
    }

    /// Derives the architecture from the first component of a target triple.
    ///
    /// `riscv64gc-unknown-linux-gnu` and `riscv64imac-...` both map to
    /// [`Arch::Riscv64`].
    #[must_use]
    pub fn from_target_triple(triple: &str) -> Option<Self> {
        let cpu = triple.split('-').next()?;
        match cpu {
            "x86_64" => Some(Self::X86_64),
            "aarch64" => Some(Self::Aarch64),
            _ if cpu.starts_with("riscv64") => Some(Self::Riscv64),
            _ => None,
        }
    }

    /// Looks up an architecture by its ELF `e_machine` value.
    #[must_use]
    pub fn from_elf_machine(machine: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|arch| arch.elf_machine() == machine)
    }

    /// ELF `e_machine` value for binaries targeting this architecture.
    #[must_use]
    pub const fn elf_machine(self) -> u16 {
        match self {
            Self::X86_64 => 62,
            Self::Aarch64 => 183,
            Self::Riscv64 => 243,
        }
    }

    /// Register holding the first syscall argument (the exit status).
    #[must_use]
    pub const fn status_register(self) -> &'static str {
        match self {
            Self::X86_64 => "rdi",
            Self::Aarch64 => "x0",
            Self::Riscv64 => "a0",
        }
    }

    /// Register the kernel inspects to select the syscall.
    #[must_use]
    pub const fn selector_register(self) -> &'static str {
        match self {
            Self::X86_64 => "rax",
            Self::Aarch64 => "x8",
            Self::Riscv64 => "a7",
        }
    }

    /// Instruction that traps into the kernel.
    #[must_use]
    pub const fn trap_instruction(self) -> &'static str {
        match self {
            Self::X86_64 => "syscall",
            Self::Aarch64 => "svc #0",
            Self::Riscv64 => "ecall",
        }
    }

    /// Short architecture name as used in target triples.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::X86_64 => "x86_64",
            Self::Aarch64 => "aarch64",
            Self::Riscv64 => "riscv64",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
