//! Byte-level ELF64 images for tests.

use crate::header::{
    EHDR_SIZE, ELF_MAGIC, ELFCLASS64, ELFDATA2LSB, EM_X86_64, ET_EXEC, PHDR_SIZE, SHDR_SIZE,
};
use crate::program::{PF_R, PT_INTERP};
use crate::symbol::{SHN_UNDEF, SHT_STRTAB, SHT_SYMTAB, STB_GLOBAL, STT_FUNC, SYM_SIZE};

struct FixtureSymbol {
    name: String,
    info: u8,
    shndx: u16,
    value: u64,
}

/// Assembles a little-endian ELF64 image: header, program headers, then an
/// optional interpreter path, string table, symbol table and section headers.
pub(crate) struct ElfBuilder {
    file_type: u16,
    machine: u16,
    entry: u64,
    segments: Vec<[u8; PHDR_SIZE]>,
    interpreter: Option<Vec<u8>>,
    symbols: Vec<FixtureSymbol>,
    symbol_section: u32,
}

impl ElfBuilder {
    /// Default entry point, where tests usually put `_start`.
    pub(crate) const ENTRY: u64 = 0x40_1000;

    pub(crate) fn new() -> Self {
        Self {
            file_type: ET_EXEC,
            machine: EM_X86_64,
            entry: Self::ENTRY,
            segments: Vec::new(),
            interpreter: None,
            symbols: Vec::new(),
            symbol_section: SHT_SYMTAB,
        }
    }

    pub(crate) fn file_type(mut self, file_type: u16) -> Self {
        self.file_type = file_type;
        self
    }

    pub(crate) fn machine(mut self, machine: u16) -> Self {
        self.machine = machine;
        self
    }

    pub(crate) fn entry(mut self, entry: u64) -> Self {
        self.entry = entry;
        self
    }

    /// Add a program header with no file contents.
    pub(crate) fn segment(mut self, kind: u32, flags: u32, vaddr: u64, memsz: u64) -> Self {
        self.segments.push(phdr(kind, flags, 0, vaddr, 0, memsz));
        self
    }

    /// Add a `PT_INTERP` segment naming `path`.
    pub(crate) fn interpreter(mut self, path: &str) -> Self {
        let mut bytes = path.as_bytes().to_vec();
        bytes.push(0);
        self.interpreter = Some(bytes);
        self
    }

    /// Add a defined global function symbol.
    pub(crate) fn symbol(self, name: &str, value: u64) -> Self {
        self.raw_symbol(name, (STB_GLOBAL << 4) | STT_FUNC, 1, value)
    }

    /// Add a symbol with explicit `st_info` and section index.
    pub(crate) fn raw_symbol(mut self, name: &str, info: u8, shndx: u16, value: u64) -> Self {
        self.symbols.push(FixtureSymbol {
            name: name.to_string(),
            info,
            shndx,
            value,
        });
        self
    }

    /// Add an undefined global symbol, as left by a dynamic import.
    pub(crate) fn undefined(self, name: &str) -> Self {
        self.raw_symbol(name, (STB_GLOBAL << 4) | STT_FUNC, SHN_UNDEF, 0)
    }

    /// Section type for the symbol table (`SHT_SYMTAB` by default).
    pub(crate) fn symbol_section(mut self, sh_type: u32) -> Self {
        self.symbol_section = sh_type;
        self
    }

    pub(crate) fn build(&self) -> Vec<u8> {
        let phnum = self.segments.len() + usize::from(self.interpreter.is_some());
        let interp_off = EHDR_SIZE + phnum * PHDR_SIZE;
        let interp = self.interpreter.as_deref().unwrap_or_default();

        let mut strtab = vec![0u8];
        let mut symtab = vec![0u8; SYM_SIZE];
        for sym in &self.symbols {
            let name = u32::try_from(strtab.len()).unwrap();
            strtab.extend_from_slice(sym.name.as_bytes());
            strtab.push(0);

            let mut entry = [0u8; SYM_SIZE];
            entry[0..4].copy_from_slice(&name.to_le_bytes());
            entry[4] = sym.info;
            entry[6..8].copy_from_slice(&sym.shndx.to_le_bytes());
            entry[8..16].copy_from_slice(&sym.value.to_le_bytes());
            symtab.extend_from_slice(&entry);
        }
        let strtab_off = interp_off + interp.len();
        let symtab_off = strtab_off + strtab.len();
        let shoff = symtab_off + symtab.len();
        let shnum: u16 = if self.symbols.is_empty() { 0 } else { 3 };

        let mut buf = vec![0u8; EHDR_SIZE];
        buf[0..4].copy_from_slice(&ELF_MAGIC);
        buf[4] = ELFCLASS64;
        buf[5] = ELFDATA2LSB;
        buf[6] = 1;
        buf[16..18].copy_from_slice(&self.file_type.to_le_bytes());
        buf[18..20].copy_from_slice(&self.machine.to_le_bytes());
        buf[20..24].copy_from_slice(&1u32.to_le_bytes());
        buf[24..32].copy_from_slice(&self.entry.to_le_bytes());
        buf[32..40].copy_from_slice(&(EHDR_SIZE as u64).to_le_bytes());
        buf[40..48].copy_from_slice(&(shoff as u64).to_le_bytes());
        buf[52..54].copy_from_slice(&(EHDR_SIZE as u16).to_le_bytes());
        buf[54..56].copy_from_slice(&(PHDR_SIZE as u16).to_le_bytes());
        buf[56..58].copy_from_slice(&u16::try_from(phnum).unwrap().to_le_bytes());
        buf[58..60].copy_from_slice(&(SHDR_SIZE as u16).to_le_bytes());
        buf[60..62].copy_from_slice(&shnum.to_le_bytes());

        for segment in &self.segments {
            buf.extend_from_slice(segment);
        }
        if !interp.is_empty() {
            let len = interp.len() as u64;
            buf.extend_from_slice(&phdr(PT_INTERP, PF_R, interp_off as u64, 0, len, len));
        }
        buf.extend_from_slice(interp);

        if shnum > 0 {
            buf.extend_from_slice(&strtab);
            buf.extend_from_slice(&symtab);
            buf.extend_from_slice(&[0u8; SHDR_SIZE]);
            buf.extend_from_slice(&shdr(SHT_STRTAB, strtab_off, strtab.len(), 0));
            buf.extend_from_slice(&shdr(self.symbol_section, symtab_off, symtab.len(), 1));
        }
        buf
    }
}

fn phdr(kind: u32, flags: u32, offset: u64, vaddr: u64, filesz: u64, memsz: u64) -> [u8; PHDR_SIZE] {
    let mut b = [0u8; PHDR_SIZE];
    b[0..4].copy_from_slice(&kind.to_le_bytes());
    b[4..8].copy_from_slice(&flags.to_le_bytes());
    b[8..16].copy_from_slice(&offset.to_le_bytes());
    b[16..24].copy_from_slice(&vaddr.to_le_bytes());
    b[32..40].copy_from_slice(&filesz.to_le_bytes());
    b[40..48].copy_from_slice(&memsz.to_le_bytes());
    b
}

fn shdr(kind: u32, offset: usize, size: usize, link: u32) -> [u8; SHDR_SIZE] {
    let mut b = [0u8; SHDR_SIZE];
    b[4..8].copy_from_slice(&kind.to_le_bytes());
    b[24..32].copy_from_slice(&(offset as u64).to_le_bytes());
    b[32..40].copy_from_slice(&(size as u64).to_le_bytes());
    b[40..44].copy_from_slice(&link.to_le_bytes());
    b[56..64].copy_from_slice(&(SYM_SIZE as u64).to_le_bytes());
    b
}
