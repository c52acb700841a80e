//! # Jump Instructions (class 0x3)
//!
//! The target is always the raw value of `regA`. Conditions compare the
//! whole flags register against the `p2` field, so `p2 = 3` and `p2 = 5`
//! can never fire: compare only ever leaves 1, 2 or 4 there.

use crate::opcodes::JumpCondition;
use crate::registers::FLAG_EQUAL;
use crate::MachineState;

/// Returns true if `condition` holds for `flags`.
pub(crate) fn condition_met(condition: JumpCondition, flags: u32) -> bool {
    match condition {
        JumpCondition::Always => true,
        JumpCondition::FlagsEqual(expected) => flags == expected,
        JumpCondition::NotEqual => flags != FLAG_EQUAL,
    }
}

/// Sets PC to `regA`'s value if `condition` holds.
///
/// The target is not checked here; an invalid target faults on the next
/// fetch.
pub(crate) fn execute_jump(state: &mut MachineState, condition: JumpCondition, reg_a: u8) {
    if condition_met(condition, state.flags()) {
        let target = state.register(reg_a as usize);
        state.set_pc(target);
    }
}
