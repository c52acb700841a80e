//! Fuzz target for machine execution.
//!
//! Builds an arbitrary register file and a small program, places it
//! anywhere in memory (including the last few bytes), then runs a bounded
//! number of steps looking for panics.

#![no_main]

use arbitrary::Arbitrary;
use aurora_vm::registers::REGISTER_COUNT;
use aurora_vm::{BufferConsole, Cpu, StepOutcome, MEMORY_SIZE};
use libfuzzer_sys::fuzz_target;

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    /// Register file, PC excluded
    registers: [u32; REGISTER_COUNT - 1],
    /// Where the program is placed; reduced into memory
    load_address: u32,
    /// Program bytes
    program: Vec<u8>,
    /// Data placed at the start of memory for loads and prints
    data: [u8; 64],
}

fuzz_target!(|input: FuzzInput| {
    let mut cpu = Cpu::new(BufferConsole::new());
    let state = cpu.state_mut();

    for (index, value) in input.registers.iter().enumerate() {
        state.set_register(index, *value);
    }

    let _ = state.load_program(0, &input.data);

    let program = &input.program[..input.program.len().min(256)];
    let load_address = (input.load_address as usize % (MEMORY_SIZE - program.len())) as u32;
    let _ = state.load_program(load_address, program);
    state.set_pc(load_address);

    for _ in 0..64 {
        match cpu.step() {
            Ok(StepOutcome::Continue) => {}
            Ok(StepOutcome::Halt) | Err(_) => break,
        }
    }
});
