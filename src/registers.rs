//! # Register File Layout
//!
//! The machine has 16 registers, each logically 24 bits wide:
//!
//! | Index  | Role                                   |
//! |--------|----------------------------------------|
//! | 0-9    | General purpose                        |
//! | 10-13  | Reserved (rejected by validated decode) |
//! | 14     | Flags (set only by compare)            |
//! | 15     | Program counter                        |
//!
//! Two validity rules exist and they are deliberately different. Raw 4-bit
//! operand fields only need to be addressable, while the immediate-load form
//! checks its destination against the general set.

/// Number of registers in the register file.
pub const REGISTER_COUNT: usize = 16;

/// Index of the flags register.
pub const FLAGS_REGISTER: usize = 14;

/// Index of the program counter.
pub const PC_REGISTER: usize = 15;

/// Mask applied to every arithmetic and logic result.
pub const WORD_MASK: u32 = 0x00FF_FFFF;

/// Flags bit 0: operands were equal.
pub const FLAG_EQUAL: u32 = 0b001;

/// Flags bit 1: left operand was greater.
pub const FLAG_GREATER: u32 = 0b010;

/// Flags bit 2: left operand was less.
pub const FLAG_LESS: u32 = 0b100;

/// Returns true if `index` names any slot of the register file.
///
/// This is the only rule applied to the raw `regA`/`regB` fields of the
/// two-byte instruction form, so reserved registers 10-13 pass.
///
/// # Examples
///
/// ```
/// use aurora_vm::registers::is_addressable_register;
///
/// assert!(is_addressable_register(11));
/// assert!(!is_addressable_register(16));
/// ```
pub fn is_addressable_register(index: usize) -> bool {
    index < REGISTER_COUNT
}

/// Returns true if `index` may be targeted by the immediate-load form.
///
/// Accepts 0-9, the flags register and the program counter.
///
/// # Examples
///
/// ```
/// use aurora_vm::registers::is_general_register;
///
/// assert!(is_general_register(9));
/// assert!(!is_general_register(12));
/// assert!(is_general_register(15));
/// ```
pub fn is_general_register(index: usize) -> bool {
    is_addressable_register(index) && !(10..=13).contains(&index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_registers_are_addressable_but_not_general() {
        for index in 10..=13 {
            assert!(is_addressable_register(index));
            assert!(!is_general_register(index));
        }
    }

    #[test]
    fn test_general_set() {
        let general: Vec<usize> = (0..32).filter(|&i| is_general_register(i)).collect();
        assert_eq!(general, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 14, 15]);
    }

    #[test]
    fn test_flag_bits_are_disjoint() {
        assert_eq!(FLAG_EQUAL & FLAG_GREATER, 0);
        assert_eq!(FLAG_EQUAL & FLAG_LESS, 0);
        assert_eq!(FLAG_GREATER & FLAG_LESS, 0);
    }
}
