//! Symbol lookup through `.symtab` or `.dynsym`.
//!
//! Only what is needed to name the code at an address: section headers are
//! scanned for a symbol table, whose `sh_link` names its string table.

use crate::header::{Bytes, SHDR_SIZE};
use crate::program::ElfFile;

/// Section type: string table.
pub const SHT_STRTAB: u32 = 3;

/// Section type: full symbol table, removed by `strip`.
pub const SHT_SYMTAB: u32 = 2;

/// Section type: dynamic symbol table.
pub const SHT_DYNSYM: u32 = 11;

/// Symbol type: unspecified.
pub const STT_NOTYPE: u8 = 0;

/// Symbol type: function.
pub const STT_FUNC: u8 = 2;

/// Symbol binding: local.
pub const STB_LOCAL: u8 = 0;

/// Symbol binding: global.
pub const STB_GLOBAL: u8 = 1;

/// Symbol binding: weak.
pub const STB_WEAK: u8 = 2;

/// Section index of undefined symbols.
pub const SHN_UNDEF: u16 = 0;

pub(crate) const SYM_SIZE: usize = 24;

/// A symbol with its name resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol<'a> {
    /// Name from the linked string table.
    pub name: &'a str,
    /// `st_value`: the address for a symbol in an executable.
    pub value: u64,
    /// `st_size`.
    pub size: u64,
    /// `st_info`: type in the low nibble, binding in the high nibble.
    pub info: u8,
    /// `st_shndx`: defining section, or [`SHN_UNDEF`].
    pub section: u16,
}

impl Symbol<'_> {
    /// Symbol type (`STT_*`).
    #[must_use]
    pub fn kind(&self) -> u8 {
        self.info & 0xf
    }

    /// Symbol binding (`STB_*`).
    #[must_use]
    pub fn binding(&self) -> u8 {
        self.info >> 4
    }

    /// Returns `true` if this file defines the symbol rather than importing it.
    #[must_use]
    pub fn is_defined(&self) -> bool {
        self.section != SHN_UNDEF
    }

    /// Returns `true` for a symbol that can name code: a function, or an
    /// assembly label with no type.
    #[must_use]
    pub fn is_code(&self) -> bool {
        matches!(self.kind(), STT_FUNC | STT_NOTYPE)
    }
}

/// A symbol table section and the string table it links to.
#[derive(Debug, Clone, Copy)]
pub struct SymbolTable<'a> {
    entries: &'a [u8],
    strings: &'a [u8],
}

impl<'a> SymbolTable<'a> {
    /// Iterate over the named symbols, skipping the null entry and any
    /// whose name does not resolve.
    pub fn iter(&self) -> impl Iterator<Item = Symbol<'a>> + use<'a> {
        let strings = self.strings;
        self.entries
            .chunks_exact(SYM_SIZE)
            .filter_map(move |entry| read_symbol(Bytes(entry), strings))
            .filter(|sym| !sym.name.is_empty())
    }
}

fn read_symbol<'a>(b: Bytes<'_>, strings: &'a [u8]) -> Option<Symbol<'a>> {
    let name_off = usize::try_from(b.u32(0)?).ok()?;
    let tail = strings.get(name_off..)?;
    let len = tail.iter().position(|&c| c == 0)?;
    Some(Symbol {
        name: core::str::from_utf8(&tail[..len]).ok()?,
        info: b.u8(4)?,
        section: b.u16(6)?,
        value: b.u64(8)?,
        size: b.u64(16)?,
    })
}

/// The fields of a section header this crate reads.
#[derive(Debug, Clone, Copy)]
struct SectionHeader {
    kind: u32,
    offset: u64,
    size: u64,
    link: u32,
}

impl<'a> ElfFile<'a> {
    fn section(&self, index: usize) -> Option<SectionHeader> {
        let entry = self.header().section_headers.entry(index)?;
        let b = Bytes(self.bytes().range(entry, SHDR_SIZE as u64)?);
        Some(SectionHeader {
            kind: b.u32(4)?,
            offset: b.u64(24)?,
            size: b.u64(32)?,
            link: b.u32(40)?,
        })
    }

    /// The first section of type `sh_type` (`SHT_SYMTAB` or `SHT_DYNSYM`)
    /// as a [`SymbolTable`].
    #[must_use]
    pub fn symbol_table(&self, sh_type: u32) -> Option<SymbolTable<'a>> {
        let count = usize::from(self.header().section_headers.count);
        let table = (0..count)
            .filter_map(|i| self.section(i))
            .find(|s| s.kind == sh_type)?;
        let strtab = self
            .section(usize::try_from(table.link).ok()?)
            .filter(|s| s.kind == SHT_STRTAB)?;
        Some(SymbolTable {
            entries: self.bytes().range(table.offset, table.size)?,
            strings: self.bytes().range(strtab.offset, strtab.size)?,
        })
    }

    /// Find a defined symbol by name, in `.symtab` and then `.dynsym`.
    #[must_use]
    pub fn find_symbol(&self, name: &str) -> Option<Symbol<'a>> {
        self.defined_symbols().find(|sym| sym.name == name)
    }

    /// The symbol naming the entry point.
    ///
    /// Global and weak symbols win over local labels at the same address.
    #[must_use]
    pub fn entry_symbol(&self) -> Option<Symbol<'a>> {
        let entry = self.entry_point();
        let mut at_entry = self
            .defined_symbols()
            .filter(|sym| sym.value == entry && sym.is_code());
        let first = at_entry.next()?;
        if first.binding() != STB_LOCAL {
            return Some(first);
        }
        Some(at_entry.find(|sym| sym.binding() != STB_LOCAL).unwrap_or(first))
    }

    fn defined_symbols(&self) -> impl Iterator<Item = Symbol<'a>> + use<'a> {
        let this = *self;
        [SHT_SYMTAB, SHT_DYNSYM]
            .into_iter()
            .filter_map(move |sh_type| this.symbol_table(sh_type))
            .flat_map(|table| table.iter())
            .filter(Symbol::is_defined)
    }
}
