//! ELF64 reader for checking how a binary will be entered.
//!
//! Answers the questions the loader asks before the first instruction runs:
//! which machine the image targets, where execution starts, whether a
//! dynamic loader (`PT_INTERP`) gets control first, and which symbol sits at
//! the entry address. No unsafe code, no allocation, no panics on malformed
//! input.
//!
//! # Usage
//!
//! ```
//! use rawstart_elf::ElfFile;
//!
//! fn entered_at_start(data: &[u8]) -> bool {
//!     let Ok(elf) = ElfFile::parse(data) else { return false };
//!     elf.is_static_executable()
//!         && elf.entry_symbol().is_some_and(|sym| sym.name == "_start")
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
mod fixture;
pub mod header;
pub mod program;
pub mod symbol;

pub use header::{EM_AARCH64, EM_RISCV, EM_X86_64, ET_DYN, ET_EXEC, ElfError, FileHeader, Table};
pub use program::{ElfFile, PF_R, PF_W, PF_X, PT_DYNAMIC, PT_INTERP, PT_LOAD, PT_NOTE, Segment};
pub use symbol::{
    SHN_UNDEF, SHT_DYNSYM, SHT_STRTAB, SHT_SYMTAB, STB_GLOBAL, STB_LOCAL, STB_WEAK, STT_FUNC,
    STT_NOTYPE, Symbol, SymbolTable,
};
