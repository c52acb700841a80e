//! # Aurora Register Machine
//!
//! An emulator for a small register machine: sixteen 24-bit registers, a
//! flat 16 MiB byte memory, and a compact instruction encoding of two bytes
//! (four for immediate loads).
//!
//! ## Quick Start
//!
//! ```rust
//! use aurora_vm::{BufferConsole, Cpu, StopReason};
//!
//! let program = [
//!     0xF3, 0x08, 0x00, 0x00, // r3 := 0x000008
//!     0xEF, 0x30,             // print string at r3
//!     0xE0, 0x00,             // halt
//!     b'h', b'i', 0x00,
//! ];
//!
//! let mut cpu = Cpu::new(BufferConsole::new());
//! cpu.state_mut().load_program(0, &program).unwrap();
//!
//! let summary = cpu.run(16);
//! assert_eq!(summary.stop, StopReason::Halted);
//! assert_eq!(cpu.console().lines(), ["hi"]);
//! ```
//!
//! ## Modules
//!
//! - `registers` - register indices, flag bits and register validity rules
//! - `memory` - flat memory and address validity
//! - `state` - the machine state (registers + memory)
//! - `opcodes` - instruction encoding and decode
//! - `cpu` - fetch-decode-execute and the run loop
//! - `console` - the print side channel
//! - `dump` - hex dump diagnostics
//! - `sample` - the hello-world sample image

use thiserror::Error;

pub mod console;
pub mod cpu;
pub mod dump;
pub mod memory;
pub mod opcodes;
pub mod registers;
pub mod sample;
pub mod state;

// Internal instruction implementations (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use console::{BufferConsole, Console, StdoutConsole};
pub use cpu::{Cpu, RunStatus, RunSummary, StepOutcome, StopReason};
pub use memory::{Memory, MEMORY_SIZE};
pub use opcodes::Instruction;
pub use state::MachineState;

/// Faults raised while executing an instruction.
///
/// Any fault ends the run; the machine is left as the faulting step found
/// it, apart from bytes already fetched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// An instruction byte was fetched from outside memory.
    #[error("program counter 0x{pc:08X} is outside memory")]
    PcOutOfBounds { pc: u32 },

    /// A transfer touched a cell past the end of memory.
    #[error("memory access at 0x{addr:08X} is outside memory")]
    MemoryOutOfBounds { addr: u64 },

    /// Division or modulo with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// The print instruction found no NUL before the end of memory.
    #[error("string at 0x{addr:08X} is not terminated before the end of memory")]
    UnterminatedString { addr: u32 },
}

/// Errors from placing a program image in memory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("program of {len} bytes at offset 0x{offset:06X} does not fit in memory")]
    ProgramTooLarge { offset: u32, len: usize },
}
