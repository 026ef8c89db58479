use rvamo_core::common::{PhysAddr, Xlen};
use rvamo_core::config::Config;
use rvamo_core::core::{Hart, Retire};
use rvamo_core::isa::abi::Reg;
use rvamo_core::isa::disasm::assemble;
use rvamo_core::soc::System;

/// Base of the default RAM window.
pub const RAM: u64 = 0x8000_0000;

/// A hart wired to the default platform.
pub struct TestContext {
    /// Hart under test.
    pub hart: Hart,
    /// RAM, translator, hooks and trap log the hart runs against.
    pub sys: System,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// RV64 hart with the full A extension.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Hart and platform built from `config`.
    pub fn with_config(config: &Config) -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::TRACE)
            .try_init();

        Self {
            hart: Hart::new(config),
            sys: System::new(config),
        }
    }

    /// RV32 hart with the full A extension.
    pub fn rv32() -> Self {
        let mut config = Config::default();
        config.isa.xlen = Xlen::Rv32;
        Self::with_config(&config)
    }

    /// Executes one instruction given as assembly text.
    pub fn run(&mut self, text: &str) -> Retire {
        let insn = assemble(text).unwrap_or_else(|e| panic!("bad test asm `{text}`: {e}"));
        let mut platform = self.sys.platform();
        self.hart.execute(&insn, &mut platform)
    }

    /// Decodes and executes a raw instruction word.
    pub fn step(&mut self, raw: u32) -> Option<Retire> {
        let mut platform = self.sys.platform();
        self.hart.step(raw, &mut platform)
    }

    /// Writes an integer register.
    pub fn set_reg(&mut self, reg: Reg, val: u64) {
        self.hart.regs.write(reg.idx(), val);
    }

    /// Reads an integer register.
    pub fn get_reg(&self, reg: Reg) -> u64 {
        self.hart.regs.read(reg.idx())
    }

    /// Stores `width` bytes little-endian at physical `addr`.
    pub fn write_mem(&mut self, addr: u64, width: u64, val: u64) {
        assert!(
            self.sys.ram.poke(PhysAddr::new(addr), width, val),
            "address {addr:#x} outside test RAM"
        );
    }

    /// Loads `width` bytes little-endian from physical `addr`.
    pub fn read_mem(&self, addr: u64, width: u64) -> u64 {
        self.sys
            .ram
            .peek(PhysAddr::new(addr), width)
            .unwrap_or_else(|| panic!("address {addr:#x} outside test RAM"))
    }

    /// Number of exceptions delivered to the trap handler so far.
    pub fn traps(&self) -> usize {
        self.sys.traps.taken().len()
    }
}
