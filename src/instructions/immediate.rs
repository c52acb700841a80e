//! # Immediate Load (class 0xF)
//!
//! The only instruction that validates its register operand. A destination
//! in the reserved range 10-13 turns the whole instruction into a no-op;
//! its four bytes are still consumed.

use crate::registers::is_general_register;
use crate::MachineState;

/// Writes `value` to `register` if it is a general register.
///
/// Targeting register 15 is a jump; targeting 14 overwrites the flags.
pub(crate) fn execute_load_immediate(state: &mut MachineState, register: u8, value: u32) {
    let index = register as usize;
    if !is_general_register(index) {
        tracing::debug!(register, value, "ignoring immediate load into reserved register");
        return;
    }

    state.set_register(index, value);
}
