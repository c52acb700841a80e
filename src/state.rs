//! # Machine State
//!
//! The register file plus memory. This module has no behaviour beyond
//! storage; all instruction semantics live in [`crate::cpu`] and
//! [`crate::instructions`].

use crate::memory::Memory;
use crate::registers::{FLAGS_REGISTER, PC_REGISTER, REGISTER_COUNT};
use crate::LoadError;

/// Registers and memory of one emulation run.
///
/// # Examples
///
/// ```
/// use aurora_vm::MachineState;
///
/// let mut state = MachineState::new();
/// assert_eq!(state.pc(), 0);
///
/// state.set_register(3, 0x123456);
/// assert_eq!(state.register(3), 0x123456);
/// ```
#[derive(Debug, Default)]
pub struct MachineState {
    registers: [u32; REGISTER_COUNT],
    memory: Memory,
}

impl MachineState {
    /// Creates a state with every register and memory cell zero.
    pub fn new() -> Self {
        Self {
            registers: [0; REGISTER_COUNT],
            memory: Memory::new(),
        }
    }

    /// Returns register `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 16`.
    pub fn register(&self, index: usize) -> u32 {
        self.registers[index]
    }

    /// Sets register `index` to `value`. No masking is applied.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 16`.
    pub fn set_register(&mut self, index: usize, value: u32) {
        self.registers[index] = value;
    }

    /// Returns the whole register file.
    pub fn registers(&self) -> &[u32; REGISTER_COUNT] {
        &self.registers
    }

    /// Returns the program counter.
    pub fn pc(&self) -> u32 {
        self.registers[PC_REGISTER]
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, pc: u32) {
        self.registers[PC_REGISTER] = pc;
    }

    /// Returns the flags register.
    pub fn flags(&self) -> u32 {
        self.registers[FLAGS_REGISTER]
    }

    /// Sets the flags register.
    pub fn set_flags(&mut self, flags: u32) {
        self.registers[FLAGS_REGISTER] = flags;
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    /// Copies a program image into memory at `offset`.
    ///
    /// Registers are untouched; the caller chooses the entry point with
    /// [`set_pc`](Self::set_pc).
    pub fn load_program(&mut self, offset: u32, program: &[u8]) -> Result<(), LoadError> {
        self.memory.load(offset, program)
    }
}
