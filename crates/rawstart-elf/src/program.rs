//! Program headers and the [`ElfFile`] handle.
//!
//! Program headers are what the kernel reads at `execve` time. A `PT_INTERP`
//! entry hands control to a dynamic loader before the entry point runs; a
//! `PT_DYNAMIC` entry means the image expects relocation at load time.

use crate::header::{Bytes, ElfError, FileHeader, PHDR_SIZE};

/// Program header type: loadable segment.
pub const PT_LOAD: u32 = 1;

/// Program header type: dynamic linking information.
pub const PT_DYNAMIC: u32 = 2;

/// Program header type: path of the program interpreter.
pub const PT_INTERP: u32 = 3;

/// Program header type: auxiliary notes.
pub const PT_NOTE: u32 = 4;

/// Segment flag: executable.
pub const PF_X: u32 = 1;

/// Segment flag: writable.
pub const PF_W: u32 = 2;

/// Segment flag: readable.
pub const PF_R: u32 = 4;

/// One program header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// `p_type`: `PT_LOAD`, `PT_INTERP`, ...
    pub kind: u32,
    /// `p_flags`: `PF_R`, `PF_W`, `PF_X`.
    pub flags: u32,
    /// File offset of the segment contents.
    pub offset: u64,
    /// Virtual address the segment is mapped at.
    pub vaddr: u64,
    /// Bytes taken from the file.
    pub filesz: u64,
    /// Bytes occupied in memory.
    pub memsz: u64,
}

impl Segment {
    fn read(b: Bytes<'_>) -> Option<Self> {
        Some(Self {
            kind: b.u32(0)?,
            flags: b.u32(4)?,
            offset: b.u64(8)?,
            vaddr: b.u64(16)?,
            filesz: b.u64(32)?,
            memsz: b.u64(40)?,
        })
    }

    /// Returns `true` if `vaddr` falls inside the segment's memory image.
    #[must_use]
    pub fn contains(&self, vaddr: u64) -> bool {
        vaddr
            .checked_sub(self.vaddr)
            .is_some_and(|delta| delta < self.memsz)
    }

    /// Returns `true` if the segment is mapped executable.
    #[must_use]
    pub fn is_executable(&self) -> bool {
        self.flags & PF_X != 0
    }
}

/// A parsed ELF64 executable borrowing the file contents.
#[derive(Debug, Clone, Copy)]
pub struct ElfFile<'a> {
    data: &'a [u8],
    header: FileHeader,
}

impl<'a> ElfFile<'a> {
    /// Parse the file header of `data`.
    ///
    /// # Errors
    ///
    /// Returns [`ElfError`] if `data` is not a supported ELF64 executable.
    pub fn parse(data: &'a [u8]) -> Result<Self, ElfError> {
        let header = FileHeader::parse(data)?;
        Ok(Self { data, header })
    }

    /// Address of the first instruction the kernel jumps to.
    #[must_use]
    pub fn entry_point(&self) -> u64 {
        self.header.entry
    }

    /// `e_machine`.
    #[must_use]
    pub fn machine(&self) -> u16 {
        self.header.machine
    }

    /// The validated file header.
    #[must_use]
    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    pub(crate) fn bytes(&self) -> Bytes<'a> {
        Bytes(self.data)
    }

    /// Iterate over the program headers.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + use<'a> {
        let table = self.header.program_headers;
        let bytes = self.bytes();
        (0..usize::from(table.count)).filter_map(move |i| {
            let entry = bytes.range(table.entry(i)?, PHDR_SIZE as u64)?;
            Segment::read(Bytes(entry))
        })
    }

    /// Path named by `PT_INTERP`, without its trailing NUL.
    ///
    /// A path that lies outside the file or is not UTF-8 comes back as
    /// `Some("")`: the kernel would still try to load an interpreter.
    #[must_use]
    pub fn interpreter(&self) -> Option<&'a str> {
        let segment = self.segments().find(|s| s.kind == PT_INTERP)?;
        let raw = self
            .bytes()
            .range(segment.offset, segment.filesz)
            .unwrap_or_default();
        let path = raw.split(|&b| b == 0).next().unwrap_or_default();
        Some(core::str::from_utf8(path).unwrap_or_default())
    }

    /// Returns `true` if the image carries a `PT_DYNAMIC` segment.
    #[must_use]
    pub fn has_dynamic_segment(&self) -> bool {
        self.segments().any(|s| s.kind == PT_DYNAMIC)
    }

    /// Returns `true` for an image the kernel starts at its own entry point
    /// with nothing to relocate: fixed addresses, no interpreter and no
    /// dynamic section.
    #[must_use]
    pub fn is_static_executable(&self) -> bool {
        self.header.is_fixed_address()
            && self.interpreter().is_none()
            && !self.has_dynamic_segment()
    }

    /// The `PT_LOAD` segment mapping the entry point.
    #[must_use]
    pub fn entry_segment(&self) -> Option<Segment> {
        let entry = self.entry_point();
        let maps_entry = |s: &Segment| s.kind == PT_LOAD && s.contains(entry);
        self.segments().find(maps_entry)
    }
}
