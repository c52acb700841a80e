//! End-to-end run of the hello-world sample image.

use aurora_vm::registers::FLAG_EQUAL;
use aurora_vm::sample::{SAMPLE_PROGRAM, SAMPLE_STRING_ADDR};
use aurora_vm::{BufferConsole, Cpu, RunStatus, StepOutcome, StopReason};

fn sample_cpu() -> Cpu<BufferConsole> {
    let mut cpu = Cpu::new(BufferConsole::new());
    cpu.state_mut().load_program(0, &SAMPLE_PROGRAM).unwrap();
    cpu
}

#[test]
fn test_sample_runs_to_halt() {
    let mut cpu = sample_cpu();

    let summary = cpu.run(32);

    assert_eq!(summary.stop, StopReason::Halted);
    assert_eq!(summary.steps, 10);
    assert_eq!(cpu.console().lines(), ["Hello World"]);
}

#[test]
fn test_sample_step_by_step() {
    let mut cpu = sample_cpu();

    // r0 := 0x18
    assert_eq!(cpu.step(), Ok(StepOutcome::Continue));
    assert_eq!(cpu.state().register(0), 0x18);
    assert_eq!(cpu.state().pc(), 0x04);

    // inc r1, inc r2
    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.state().register(1), 1);
    assert_eq!(cpu.state().register(2), 1);

    // cmp r1, r2
    cpu.step().unwrap();
    assert_eq!(cpu.state().flags(), FLAG_EQUAL);

    // jmp r0 skips the inline string
    cpu.step().unwrap();
    assert_eq!(cpu.state().pc(), 0x18);

    // separator nop, then r0 := string address
    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.state().register(0), SAMPLE_STRING_ADDR);

    // print
    cpu.step().unwrap();
    assert_eq!(cpu.console().lines(), ["Hello World"]);

    // nop, halt
    assert_eq!(cpu.step(), Ok(StepOutcome::Continue));
    assert_eq!(cpu.step(), Ok(StepOutcome::Halt));
    assert_eq!(cpu.state().pc(), 0x24);
}

#[test]
fn test_sample_never_faults() {
    let mut cpu = sample_cpu();
    let mut statuses = Vec::new();

    loop {
        let status = RunStatus::from(&cpu.step());
        statuses.push(status);
        if status != RunStatus::Continue || statuses.len() > 32 {
            break;
        }
    }

    assert_eq!(statuses.last(), Some(&RunStatus::Halt));
    assert!(!statuses.contains(&RunStatus::Fault));
}
