//! # ALU Instructions (class 0x4)
//!
//! `regA := (regA op regB) & 0xFFFFFF`. Unary operations (not, increment,
//! decrement) ignore `regB`. Flags are never touched.

use crate::opcodes::AluOp;
use crate::registers::WORD_MASK;
use crate::{ExecutionError, MachineState};

/// Computes `op` on two register values, masked to 24 bits.
///
/// Shifts by 64 or more produce 0, matching the exact result truncated to
/// 24 bits. Division and modulo by zero fault.
pub(crate) fn compute(op: AluOp, a: u32, b: u32) -> Result<u32, ExecutionError> {
    let result = match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        AluOp::Mul => a.wrapping_mul(b),
        AluOp::Div => a.checked_div(b).ok_or(ExecutionError::DivisionByZero)?,
        AluOp::Mod => a.checked_rem(b).ok_or(ExecutionError::DivisionByZero)?,
        AluOp::Shl => (a as u64).checked_shl(b).unwrap_or(0) as u32,
        AluOp::Shr => a.checked_shr(b).unwrap_or(0),
        AluOp::Or => a | b,
        AluOp::And => a & b,
        AluOp::Xor => a ^ b,
        AluOp::Not => !a,
        AluOp::Inc => a.wrapping_add(1),
        AluOp::Dec => a.wrapping_sub(1),
    };

    Ok(result & WORD_MASK)
}

/// Executes an ALU instruction.
///
/// On a fault `regA` is left unchanged.
pub(crate) fn execute_alu(
    state: &mut MachineState,
    op: AluOp,
    reg_a: u8,
    reg_b: u8,
) -> Result<(), ExecutionError> {
    let a = state.register(reg_a as usize);
    let b = state.register(reg_b as usize);

    let result = compute(op, a, b)?;
    state.set_register(reg_a as usize, result);

    Ok(())
}
