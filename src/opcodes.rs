//! # Instruction Decoding
//!
//! Every instruction starts with two bytes, `b0` and `b1`. The high nibble of
//! `b0` selects the opcode class:
//!
//! | Class | Name      | Sub-opcode field             |
//! |-------|-----------|------------------------------|
//! | 0x0   | NOP       | -                            |
//! | 0x1   | Transfer  | bits 3-2 of `b0`             |
//! | 0x2   | Compare   | -                            |
//! | 0x3   | Jump      | low nibble of `b0` (`p2`)    |
//! | 0x4   | ALU       | low nibble of `b0` (`p2`)    |
//! | 0xE   | System    | low nibble of `b0` (`p2`)    |
//! | 0xF   | Load imm. | low nibble of `b0` = dest    |
//!
//! In the two-byte form `b1` carries two raw register fields: `regA` in the
//! high nibble and `regB` in the low nibble. Class 0xF extends the
//! instruction to four bytes and reuses `b1` as the low byte of a 24-bit
//! immediate: `value = (b3 << 16) | (b2 << 8) | b1`.
//!
//! Sub-opcodes a class does not define, and the reserved classes 0x5-0xD,
//! decode to [`Instruction::Unassigned`] and execute as no-ops.

/// High nibble marking the four-byte immediate-load form.
pub const EXTENDED_CLASS: u8 = 0xF;

/// Returns true if `b0` starts a four-byte instruction.
///
/// # Examples
///
/// ```
/// use aurora_vm::opcodes::is_extended;
///
/// assert!(is_extended(0xF3));
/// assert!(!is_extended(0xE0));
/// ```
pub fn is_extended(b0: u8) -> bool {
    b0 >> 4 == EXTENDED_CLASS
}

/// Memory/register transfer selected by bits 3-2 of `b0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferOp {
    /// Three bytes at `regA`'s address, big-endian, into `regB`.
    Load,
    /// Three bytes derived from `regA` to memory at `regB`'s address.
    Store,
    /// `regB := regA`.
    Copy,
}

/// Condition tested by the jump class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpCondition {
    Always,
    /// Jump when the flags register equals this value exactly (1-5).
    FlagsEqual(u32),
    /// Jump when the flags register is not exactly [`FLAG_EQUAL`](crate::registers::FLAG_EQUAL).
    NotEqual,
}

/// ALU operation selected by `p2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AluOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Shl,
    Shr,
    Or,
    And,
    Xor,
    Not,
    Inc,
    Dec,
}

impl AluOp {
    /// Maps a `p2` field to its operation.
    pub fn from_p2(p2: u8) -> Option<Self> {
        let op = match p2 {
            0x0 => AluOp::Add,
            0x1 => AluOp::Sub,
            0x2 => AluOp::Mul,
            0x3 => AluOp::Div,
            0x4 => AluOp::Mod,
            0x5 => AluOp::Shl,
            0x6 => AluOp::Shr,
            0x7 => AluOp::Or,
            0x8 => AluOp::And,
            0x9 => AluOp::Xor,
            0xA => AluOp::Not,
            0xB => AluOp::Inc,
            0xC => AluOp::Dec,
            _ => return None,
        };
        Some(op)
    }
}

/// A decoded instruction.
///
/// Register fields are raw 4-bit values. Only `LoadImmediate` has its
/// destination validated, and that happens at execution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// Four-byte form: `register := value`.
    LoadImmediate { register: u8, value: u32 },
    Nop,
    Transfer { op: TransferOp, reg_a: u8, reg_b: u8 },
    Compare { reg_a: u8, reg_b: u8 },
    Jump { condition: JumpCondition, reg_a: u8 },
    Alu { op: AluOp, reg_a: u8, reg_b: u8 },
    Halt,
    /// Print the NUL-terminated string at `reg_a`'s address.
    Print { reg_a: u8 },
    /// Reserved class or undefined sub-opcode; executes as a no-op.
    Unassigned { opcode: u8 },
}

impl Instruction {
    /// Decodes the two-byte form.
    ///
    /// `b0` must not start an extended instruction; an extended `b0` decodes
    /// as `Unassigned`. Use [`decode_extended`](Self::decode_extended) for
    /// class 0xF.
    ///
    /// # Examples
    ///
    /// ```
    /// use aurora_vm::opcodes::{AluOp, Instruction};
    ///
    /// assert_eq!(
    ///     Instruction::decode(0x4B, 0x10),
    ///     Instruction::Alu { op: AluOp::Inc, reg_a: 1, reg_b: 0 }
    /// );
    /// assert_eq!(Instruction::decode(0xE0, 0x00), Instruction::Halt);
    /// ```
    pub fn decode(b0: u8, b1: u8) -> Self {
        let p2 = b0 & 0x0F;
        let reg_a = b1 >> 4;
        let reg_b = b1 & 0x0F;
        let unassigned = Instruction::Unassigned { opcode: b0 };

        match b0 >> 4 {
            0x0 => Instruction::Nop,
            0x1 => {
                let op = match (b0 & 0x0C) >> 2 {
                    0 => TransferOp::Load,
                    1 => TransferOp::Store,
                    2 => TransferOp::Copy,
                    _ => return unassigned,
                };
                Instruction::Transfer { op, reg_a, reg_b }
            }
            0x2 => Instruction::Compare { reg_a, reg_b },
            0x3 => {
                let condition = match p2 {
                    0x0 => JumpCondition::Always,
                    0x1..=0x5 => JumpCondition::FlagsEqual(p2 as u32),
                    0xF => JumpCondition::NotEqual,
                    _ => return unassigned,
                };
                Instruction::Jump { condition, reg_a }
            }
            0x4 => match AluOp::from_p2(p2) {
                Some(op) => Instruction::Alu { op, reg_a, reg_b },
                None => unassigned,
            },
            0xE => match p2 {
                0x0 => Instruction::Halt,
                0xF => Instruction::Print { reg_a },
                _ => unassigned,
            },
            _ => unassigned,
        }
    }

    /// Decodes the four-byte immediate-load form.
    ///
    /// `b1` is both the second instruction byte and the low byte of the
    /// immediate.
    ///
    /// # Examples
    ///
    /// ```
    /// use aurora_vm::opcodes::Instruction;
    ///
    /// assert_eq!(
    ///     Instruction::decode_extended(0xF3, 0x56, 0x34, 0x12),
    ///     Instruction::LoadImmediate { register: 3, value: 0x123456 }
    /// );
    /// ```
    pub fn decode_extended(b0: u8, b1: u8, b2: u8, b3: u8) -> Self {
        let value = ((b3 as u32) << 16) | ((b2 as u32) << 8) | b1 as u32;
        Instruction::LoadImmediate {
            register: b0 & 0x0F,
            value,
        }
    }

    /// Returns the encoded length in bytes.
    pub fn size_bytes(&self) -> u32 {
        match self {
            Instruction::LoadImmediate { .. } => 4,
            _ => 2,
        }
    }
}
