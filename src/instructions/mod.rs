//! # Instruction Implementations
//!
//! One module per opcode class. Each handler takes the machine state after
//! fetch (PC already past the instruction) and the decoded operand fields.
//!
//! - **transfer**: memory/register transfers (class 0x1)
//! - **compare**: flag-setting compare (class 0x2)
//! - **jump**: conditional and unconditional jumps (class 0x3)
//! - **alu**: arithmetic and logic (class 0x4)
//! - **system**: halt and print (class 0xE)
//! - **immediate**: four-byte register load (class 0xF)

pub mod alu;
pub mod compare;
pub mod immediate;
pub mod jump;
pub mod system;
pub mod transfer;
