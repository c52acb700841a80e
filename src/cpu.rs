//! # Fetch-Decode-Execute
//!
//! [`Cpu`] owns one [`MachineState`] and the console the print instruction
//! writes to. Each call to [`Cpu::step`] runs exactly one instruction:
//!
//! 1. Fetch `b0` and `b1`, advancing PC past each. A fetch from outside
//!    memory faults and leaves PC at the bad address.
//! 2. If `b0`'s high nibble is 0xF, fetch `b2` and `b3` the same way and
//!    decode the immediate-load form; otherwise decode the two-byte form.
//! 3. Dispatch to the class handler in [`crate::instructions`].
//!
//! The step result doubles as the machine's run status: `Ok(Continue)`,
//! `Ok(Halt)`, or `Err(fault)`.

use crate::instructions::{alu, compare, immediate, jump, system, transfer};
use crate::opcodes::{is_extended, Instruction};
use crate::{Console, ExecutionError, MachineState};

/// Successful result of one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    Halt,
}

/// Flat view of a step result, for drivers that only need the signal.
///
/// # Examples
///
/// ```
/// use aurora_vm::{ExecutionError, RunStatus, StepOutcome};
///
/// let ok: Result<StepOutcome, ExecutionError> = Ok(StepOutcome::Halt);
/// assert_eq!(RunStatus::from(&ok), RunStatus::Halt);
///
/// let fault: Result<StepOutcome, ExecutionError> = Err(ExecutionError::DivisionByZero);
/// assert_eq!(RunStatus::from(&fault), RunStatus::Fault);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Continue,
    Halt,
    Fault,
}

impl From<&Result<StepOutcome, ExecutionError>> for RunStatus {
    fn from(result: &Result<StepOutcome, ExecutionError>) -> Self {
        match result {
            Ok(StepOutcome::Continue) => RunStatus::Continue,
            Ok(StepOutcome::Halt) => RunStatus::Halt,
            Err(_) => RunStatus::Fault,
        }
    }
}

/// Why [`Cpu::run`] stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    Halted,
    Faulted(ExecutionError),
    /// The step budget ran out while the machine was still running.
    StepLimit,
}

/// Result of [`Cpu::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Steps taken during this run, including a faulting one.
    pub steps: u64,
    pub stop: StopReason,
}

/// The machine: state plus the print side channel.
///
/// # Examples
///
/// ```
/// use aurora_vm::{BufferConsole, Cpu, StepOutcome};
///
/// let mut cpu = Cpu::new(BufferConsole::new());
/// cpu.state_mut()
///     .load_program(0, &[0x4B, 0x10, 0xE0, 0x00]) // inc r1; halt
///     .unwrap();
///
/// assert_eq!(cpu.step(), Ok(StepOutcome::Continue));
/// assert_eq!(cpu.step(), Ok(StepOutcome::Halt));
/// assert_eq!(cpu.state().register(1), 1);
/// assert_eq!(cpu.state().pc(), 4);
/// ```
#[derive(Debug)]
pub struct Cpu<C: Console> {
    state: MachineState,
    console: C,
    steps: u64,
}

impl<C: Console> Cpu<C> {
    /// Creates a machine with zeroed registers and memory.
    pub fn new(console: C) -> Self {
        Self::with_state(MachineState::new(), console)
    }

    /// Creates a machine around an existing state.
    pub fn with_state(state: MachineState, console: C) -> Self {
        Self {
            state,
            console,
            steps: 0,
        }
    }

    /// Executes one instruction.
    ///
    /// # Returns
    ///
    /// - `Ok(StepOutcome::Continue)` for every instruction other than halt,
    ///   including ignored and unassigned ones
    /// - `Ok(StepOutcome::Halt)` for `E0`
    /// - `Err(_)` on a fault; the driver must stop
    pub fn step(&mut self) -> Result<StepOutcome, ExecutionError> {
        let pc = self.state.pc();
        self.steps += 1;

        let result = self.fetch().and_then(|instruction| {
            tracing::trace!(pc, ?instruction, "execute");
            self.execute(instruction)
        });

        if let Err(err) = &result {
            tracing::warn!(pc, %err, "machine fault");
        }

        result
    }

    /// Steps until halt, fault, or `max_steps` steps have been taken.
    ///
    /// # Examples
    ///
    /// ```
    /// use aurora_vm::{BufferConsole, Cpu, StopReason};
    ///
    /// // Memory is all NOPs
    /// let mut cpu = Cpu::new(BufferConsole::new());
    /// let summary = cpu.run(10);
    ///
    /// assert_eq!(summary.steps, 10);
    /// assert_eq!(summary.stop, StopReason::StepLimit);
    /// assert_eq!(cpu.state().pc(), 20);
    /// ```
    pub fn run(&mut self, max_steps: u64) -> RunSummary {
        let mut steps = 0;

        while steps < max_steps {
            steps += 1;
            match self.step() {
                Ok(StepOutcome::Continue) => {}
                Ok(StepOutcome::Halt) => {
                    tracing::info!(steps, pc = self.state.pc(), "machine halted");
                    return RunSummary {
                        steps,
                        stop: StopReason::Halted,
                    };
                }
                Err(err) => {
                    return RunSummary {
                        steps,
                        stop: StopReason::Faulted(err),
                    };
                }
            }
        }

        RunSummary {
            steps,
            stop: StopReason::StepLimit,
        }
    }

    /// Executes an already-decoded instruction against the current state.
    ///
    /// PC is not advanced; [`step`](Self::step) does that during fetch.
    pub fn execute(&mut self, instruction: Instruction) -> Result<StepOutcome, ExecutionError> {
        match instruction {
            Instruction::LoadImmediate { register, value } => {
                immediate::execute_load_immediate(&mut self.state, register, value);
            }
            Instruction::Nop | Instruction::Unassigned { .. } => {}
            Instruction::Transfer { op, reg_a, reg_b } => {
                transfer::execute_transfer(&mut self.state, op, reg_a, reg_b)?;
            }
            Instruction::Compare { reg_a, reg_b } => {
                compare::execute_compare(&mut self.state, reg_a, reg_b);
            }
            Instruction::Jump { condition, reg_a } => {
                jump::execute_jump(&mut self.state, condition, reg_a);
            }
            Instruction::Alu { op, reg_a, reg_b } => {
                alu::execute_alu(&mut self.state, op, reg_a, reg_b)?;
            }
            Instruction::Halt => return Ok(StepOutcome::Halt),
            Instruction::Print { reg_a } => {
                system::execute_print(&self.state, &mut self.console, reg_a)?;
            }
        }

        Ok(StepOutcome::Continue)
    }

    fn fetch(&mut self) -> Result<Instruction, ExecutionError> {
        let b0 = self.fetch_byte()?;
        let b1 = self.fetch_byte()?;

        if !is_extended(b0) {
            return Ok(Instruction::decode(b0, b1));
        }

        let b2 = self.fetch_byte()?;
        let b3 = self.fetch_byte()?;
        Ok(Instruction::decode_extended(b0, b1, b2, b3))
    }

    /// Reads the byte at PC and advances PC, or faults with PC untouched.
    fn fetch_byte(&mut self) -> Result<u8, ExecutionError> {
        let pc = self.state.pc();
        let byte = self
            .state
            .memory()
            .get(pc)
            .ok_or(ExecutionError::PcOutOfBounds { pc })?;

        self.state.set_pc(pc.wrapping_add(1));
        Ok(byte)
    }

    // ========== Accessors ==========

    pub fn state(&self) -> &MachineState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut MachineState {
        &mut self.state
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    /// Returns the number of steps attempted since creation.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Splits the machine back into its state and console.
    pub fn into_parts(self) -> (MachineState, C) {
        (self.state, self.console)
    }
}
