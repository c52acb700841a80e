//! # Compare Instruction (class 0x2)
//!
//! The only instruction that writes the flags register.

use crate::registers::{FLAG_EQUAL, FLAG_GREATER, FLAG_LESS};
use crate::MachineState;

/// Clears the flags register, then sets exactly one of equal, greater or
/// less from an unsigned comparison of `regA` against `regB`.
pub(crate) fn execute_compare(state: &mut MachineState, reg_a: u8, reg_b: u8) {
    let a = state.register(reg_a as usize);
    let b = state.register(reg_b as usize);

    let flags = match a.cmp(&b) {
        std::cmp::Ordering::Equal => FLAG_EQUAL,
        std::cmp::Ordering::Greater => FLAG_GREATER,
        std::cmp::Ordering::Less => FLAG_LESS,
    };

    state.set_flags(flags);
}
