//! Execution loop tests
//!
//! Verifies fetch bounds checking, PC advancement, step counting and the
//! run loop's stop reasons.

use aurora_vm::{
    BufferConsole, Cpu, ExecutionError, MachineState, RunStatus, StepOutcome, StopReason,
    MEMORY_SIZE,
};

fn setup_cpu(program: &[u8]) -> Cpu<BufferConsole> {
    let mut cpu = Cpu::new(BufferConsole::new());
    cpu.state_mut().load_program(0, program).unwrap();
    cpu
}

#[test]
fn test_new_machine_is_zeroed() {
    let cpu = Cpu::new(BufferConsole::new());

    assert!(cpu.state().registers().iter().all(|&r| r == 0));
    assert_eq!(cpu.steps(), 0);
}

#[test]
fn test_two_byte_instruction_advances_pc_by_two() {
    let mut cpu = setup_cpu(&[0x4B, 0x10, 0x00, 0x00]);

    cpu.step().unwrap();
    assert_eq!(cpu.state().pc(), 2);

    cpu.step().unwrap();
    assert_eq!(cpu.state().pc(), 4);
    assert_eq!(cpu.steps(), 2);
}

#[test]
fn test_pc_at_end_of_memory_faults() {
    let mut cpu = setup_cpu(&[]);
    cpu.state_mut().set_pc(MEMORY_SIZE as u32);

    let result = cpu.step();

    assert_eq!(RunStatus::from(&result), RunStatus::Fault);
    assert_eq!(cpu.state().pc(), MEMORY_SIZE as u32);
}

#[test]
fn test_instruction_straddling_end_of_memory_faults() {
    let mut cpu = setup_cpu(&[]);
    let last = (MEMORY_SIZE - 1) as u32;
    cpu.state_mut().memory_mut().write(last, 0x4B);
    cpu.state_mut().set_pc(last);

    assert_eq!(
        cpu.step(),
        Err(ExecutionError::PcOutOfBounds {
            pc: MEMORY_SIZE as u32
        })
    );
    assert!(cpu.state().registers()[..15].iter().all(|&r| r == 0));
}

#[test]
fn test_last_instruction_in_memory_executes() {
    let mut cpu = setup_cpu(&[]);
    let start = (MEMORY_SIZE - 2) as u32;
    cpu.state_mut().load_program(start, &[0x4B, 0x10]).unwrap();
    cpu.state_mut().set_pc(start);

    assert_eq!(cpu.step(), Ok(StepOutcome::Continue));
    assert_eq!(cpu.state().register(1), 1);
    assert_eq!(cpu.state().pc(), MEMORY_SIZE as u32);

    assert!(cpu.step().is_err());
}

#[test]
fn test_run_until_halt() {
    // inc r1 three times, halt
    let mut cpu = setup_cpu(&[0x4B, 0x10, 0x4B, 0x10, 0x4B, 0x10, 0xE0, 0x00]);

    let summary = cpu.run(100);

    assert_eq!(summary.steps, 4);
    assert_eq!(summary.stop, StopReason::Halted);
    assert_eq!(cpu.state().register(1), 3);
}

#[test]
fn test_run_step_limit_is_resumable() {
    let mut cpu = setup_cpu(&[0x4B, 0x10, 0x4B, 0x10, 0xE0, 0x00]);

    let first = cpu.run(1);
    assert_eq!(first.stop, StopReason::StepLimit);
    assert_eq!(cpu.state().register(1), 1);

    let second = cpu.run(10);
    assert_eq!(second.steps, 2);
    assert_eq!(second.stop, StopReason::Halted);
    assert_eq!(cpu.state().register(1), 2);
    assert_eq!(cpu.steps(), 3);
}

#[test]
fn test_loop_with_countdown() {
    // r1 := 5; r2 := 0x08 (loop head); r3 := 0 ; loop: dec r1; cmp r1, r3; jne r2; halt
    let program = [
        0xF1, 0x05, 0x00, 0x00, // r1 := 5
        0xF2, 0x08, 0x00, 0x00, // r2 := 0x08
        0x4C, 0x10, // 0x08: dec r1
        0x20, 0x13, // cmp r1, r3
        0x3F, 0x20, // jne r2
        0xE0, 0x00, // halt
    ];
    let mut cpu = setup_cpu(&program);

    let summary = cpu.run(1000);

    assert_eq!(summary.stop, StopReason::Halted);
    assert_eq!(summary.steps, 2 + 5 * 3 + 1);
    assert_eq!(cpu.state().register(1), 0);
}

#[test]
fn test_with_state_keeps_preloaded_state() {
    let mut state = MachineState::new();
    state.load_program(0x200, &[0xE0, 0x00]).unwrap();
    state.set_pc(0x200);

    let mut cpu = Cpu::with_state(state, BufferConsole::new());

    assert_eq!(cpu.step(), Ok(StepOutcome::Halt));
    assert_eq!(cpu.state().pc(), 0x202);
}
