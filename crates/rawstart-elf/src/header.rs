//! ELF64 file header and the bounds of the tables it points at.

use core::fmt;

/// ELF magic bytes: `\x7fELF`.
pub(crate) const ELF_MAGIC: [u8; 4] = [0x7f, b'E', b'L', b'F'];

/// `EI_CLASS` value for 64-bit objects.
pub(crate) const ELFCLASS64: u8 = 2;

/// `EI_DATA` value for little-endian objects.
pub(crate) const ELFDATA2LSB: u8 = 1;

/// ELF type: executable with fixed load addresses.
pub const ET_EXEC: u16 = 2;

/// ELF type: shared object, which includes position-independent executables.
pub const ET_DYN: u16 = 3;

/// ELF machine: x86-64.
pub const EM_X86_64: u16 = 62;

/// ELF machine: `AArch64`.
pub const EM_AARCH64: u16 = 183;

/// ELF machine: RISC-V.
pub const EM_RISCV: u16 = 243;

pub(crate) const EHDR_SIZE: usize = 64;
pub(crate) const PHDR_SIZE: usize = 56;
pub(crate) const SHDR_SIZE: usize = 64;

/// Little-endian field reads that fail instead of panicking.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Bytes<'a>(pub(crate) &'a [u8]);

impl<'a> Bytes<'a> {
    fn field<const N: usize>(self, off: usize) -> Option<[u8; N]> {
        self.0.get(off..)?.first_chunk().copied()
    }

    pub(crate) fn u8(self, off: usize) -> Option<u8> {
        self.0.get(off).copied()
    }

    pub(crate) fn u16(self, off: usize) -> Option<u16> {
        self.field(off).map(u16::from_le_bytes)
    }

    pub(crate) fn u32(self, off: usize) -> Option<u32> {
        self.field(off).map(u32::from_le_bytes)
    }

    pub(crate) fn u64(self, off: usize) -> Option<u64> {
        self.field(off).map(u64::from_le_bytes)
    }

    /// `len` bytes at file offset `off`, if the whole range is present.
    pub(crate) fn range(self, off: u64, len: u64) -> Option<&'a [u8]> {
        let start = usize::try_from(off).ok()?;
        let end = start.checked_add(usize::try_from(len).ok()?)?;
        self.0.get(start..end)
    }
}

/// Reasons a file is rejected before any of its contents are trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElfError {
    /// Shorter than the fixed ELF64 header.
    Truncated,
    /// Missing the `\x7fELF` magic.
    NotElf,
    /// A 32-bit object.
    Not64Bit,
    /// A big-endian object.
    BigEndian,
    /// `e_machine` is not x86-64, `AArch64` or RISC-V.
    Machine(u16),
    /// `e_type` is not `ET_EXEC` or `ET_DYN`, so it cannot be executed.
    FileType(u16),
    /// The program or section header table runs past the end of the file.
    TableOutOfBounds,
}

impl fmt::Display for ElfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated => f.write_str("file is shorter than an ELF64 header"),
            Self::NotElf => f.write_str("not an ELF file"),
            Self::Not64Bit => f.write_str("not a 64-bit ELF file"),
            Self::BigEndian => f.write_str("big-endian ELF files are not supported"),
            Self::Machine(machine) => write!(f, "unsupported machine type {machine}"),
            Self::FileType(ty) => write!(f, "ELF type {ty} is not an executable"),
            Self::TableOutOfBounds => f.write_str("header table lies outside the file"),
        }
    }
}

impl core::error::Error for ElfError {}

/// Location of a table of fixed-size entries (program or section headers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Table {
    /// File offset of the first entry.
    pub offset: u64,
    /// Size of each entry.
    pub entsize: u16,
    /// Number of entries.
    pub count: u16,
}

impl Table {
    /// File offset of entry `index`, or `None` past the end of the table.
    #[must_use]
    pub fn entry(&self, index: usize) -> Option<u64> {
        if index >= usize::from(self.count) {
            return None;
        }
        let index = u64::try_from(index).ok()?;
        self.offset.checked_add(index * u64::from(self.entsize))
    }

    fn validate(&self, file_len: usize, min_entsize: usize) -> Result<(), ElfError> {
        if self.count == 0 {
            return Ok(());
        }
        if usize::from(self.entsize) < min_entsize {
            return Err(ElfError::TableOutOfBounds);
        }
        let end = self
            .offset
            .checked_add(u64::from(self.count) * u64::from(self.entsize))
            .ok_or(ElfError::TableOutOfBounds)?;
        if end > file_len as u64 {
            return Err(ElfError::TableOutOfBounds);
        }
        Ok(())
    }
}

/// The parts of the ELF64 file header that decide how a process starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    /// `e_type`: `ET_EXEC` or `ET_DYN`.
    pub file_type: u16,
    /// `e_machine`.
    pub machine: u16,
    /// `e_entry`: address of the first instruction.
    pub entry: u64,
    /// Program header table.
    pub program_headers: Table,
    /// Section header table.
    pub section_headers: Table,
}

impl FileHeader {
    /// Parse and validate the header at the start of `data`.
    ///
    /// Both header tables are checked to lie inside `data`, so entries can
    /// be read afterwards without further bounds errors.
    ///
    /// # Errors
    ///
    /// Returns the first [`ElfError`] that applies.
    pub fn parse(data: &[u8]) -> Result<Self, ElfError> {
        if data.len() < EHDR_SIZE {
            return Err(ElfError::Truncated);
        }
        if data[..4] != ELF_MAGIC {
            return Err(ElfError::NotElf);
        }
        if data[4] != ELFCLASS64 {
            return Err(ElfError::Not64Bit);
        }
        if data[5] != ELFDATA2LSB {
            return Err(ElfError::BigEndian);
        }

        let b = Bytes(&data[..EHDR_SIZE]);
        let u16_at = |off| b.u16(off).ok_or(ElfError::Truncated);
        let u64_at = |off| b.u64(off).ok_or(ElfError::Truncated);

        let file_type = u16_at(16)?;
        if file_type != ET_EXEC && file_type != ET_DYN {
            return Err(ElfError::FileType(file_type));
        }
        let machine = u16_at(18)?;
        if !matches!(machine, EM_X86_64 | EM_AARCH64 | EM_RISCV) {
            return Err(ElfError::Machine(machine));
        }

        let header = Self {
            file_type,
            machine,
            entry: u64_at(24)?,
            program_headers: Table {
                offset: u64_at(32)?,
                entsize: u16_at(54)?,
                count: u16_at(56)?,
            },
            section_headers: Table {
                offset: u64_at(40)?,
                entsize: u16_at(58)?,
                count: u16_at(60)?,
            },
        };
        header.program_headers.validate(data.len(), PHDR_SIZE)?;
        header.section_headers.validate(data.len(), SHDR_SIZE)?;
        Ok(header)
    }

    /// Returns `true` for `ET_EXEC`, an image linked at fixed addresses.
    #[must_use]
    pub fn is_fixed_address(&self) -> bool {
        self.file_type == ET_EXEC
    }
}
