//! Tests for the compare instruction (class 0x2).

use aurora_vm::registers::{FLAG_EQUAL, FLAG_GREATER, FLAG_LESS};
use aurora_vm::{BufferConsole, Cpu, StepOutcome};

fn compare(a: u32, b: u32) -> u32 {
    let mut cpu = Cpu::new(BufferConsole::new());
    cpu.state_mut().load_program(0, &[0x20, 0x12]).unwrap();
    cpu.state_mut().set_register(1, a);
    cpu.state_mut().set_register(2, b);

    assert_eq!(cpu.step(), Ok(StepOutcome::Continue));
    assert_eq!(cpu.state().register(1), a);
    assert_eq!(cpu.state().register(2), b);

    cpu.state().flags()
}

#[test]
fn test_compare_equal() {
    assert_eq!(compare(0, 0), FLAG_EQUAL);
    assert_eq!(compare(0xFFFFFF, 0xFFFFFF), FLAG_EQUAL);
}

#[test]
fn test_compare_greater() {
    assert_eq!(compare(2, 1), FLAG_GREATER);
    assert_eq!(compare(0xFFFFFF, 0), FLAG_GREATER);
}

#[test]
fn test_compare_less() {
    assert_eq!(compare(1, 2), FLAG_LESS);
    assert_eq!(compare(0, 0xFFFFFF), FLAG_LESS);
}

#[test]
fn test_compare_is_unsigned() {
    // 0x800000 would be negative as a signed 24-bit value
    assert_eq!(compare(0x800000, 1), FLAG_GREATER);
}

#[test]
fn test_other_instructions_leave_flags() {
    let mut cpu = Cpu::new(BufferConsole::new());
    // cmp r1, r2; inc r1; nop
    cpu.state_mut()
        .load_program(0, &[0x20, 0x12, 0x4B, 0x10, 0x00, 0x00])
        .unwrap();

    cpu.step().unwrap();
    assert_eq!(cpu.state().flags(), FLAG_EQUAL);

    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.state().flags(), FLAG_EQUAL);
}
