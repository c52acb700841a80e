//! WASM API for the Aurora machine.
//!
//! Provides JavaScript-callable interfaces for loading a program, stepping
//! and inspecting registers and memory.

use crate::{Console, Cpu, ExecutionError, StepOutcome, StopReason};
use wasm_bindgen::prelude::*;

/// Console that forwards each print to a JavaScript function as
/// `(register, text)`.
struct JsConsole {
    on_print: js_sys::Function,
}

impl Console for JsConsole {
    fn print(&mut self, register: u8, text: &[u8]) {
        let text = String::from_utf8_lossy(text);
        let _ = self.on_print.call2(
            &JsValue::NULL,
            &JsValue::from(register),
            &JsValue::from_str(&text),
        );
    }
}

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

/// Step status codes returned to JavaScript.
const STATUS_CONTINUE: i32 = 0;
const STATUS_HALT: i32 = 1;
const STATUS_FAULT: i32 = -1;

/// Main machine interface for JavaScript
#[wasm_bindgen]
pub struct WasmMachine {
    cpu: Cpu<JsConsole>,
    last_error: Option<ExecutionError>,
}

#[wasm_bindgen]
impl WasmMachine {
    /// Create a machine whose print instruction calls `on_print(register, text)`
    #[wasm_bindgen(constructor)]
    pub fn new(on_print: js_sys::Function) -> Self {
        WasmMachine {
            cpu: Cpu::new(JsConsole { on_print }),
            last_error: None,
        }
    }

    /// Copy `program` into memory at `offset` and point PC at it
    pub fn load_program(&mut self, program: &[u8], offset: u32) -> Result<(), JsError> {
        let state = self.cpu.state_mut();
        state
            .load_program(offset, program)
            .map_err(|e| JsError::new(&e.to_string()))?;
        state.set_pc(offset);
        self.last_error = None;
        Ok(())
    }

    /// Execute one instruction: 0 = continue, 1 = halt, -1 = fault
    pub fn step(&mut self) -> i32 {
        match self.cpu.step() {
            Ok(StepOutcome::Continue) => STATUS_CONTINUE,
            Ok(StepOutcome::Halt) => STATUS_HALT,
            Err(err) => {
                self.last_error = Some(err);
                STATUS_FAULT
            }
        }
    }

    /// Run up to `max_steps` instructions, returning the final status code
    pub fn run(&mut self, max_steps: u32) -> i32 {
        match self.cpu.run(max_steps as u64).stop {
            StopReason::StepLimit => STATUS_CONTINUE,
            StopReason::Halted => STATUS_HALT,
            StopReason::Faulted(err) => {
                self.last_error = Some(err);
                STATUS_FAULT
            }
        }
    }

    /// Description of the most recent fault, if any
    #[wasm_bindgen(getter)]
    pub fn last_error(&self) -> Option<String> {
        self.last_error.as_ref().map(|e| e.to_string())
    }

    /// Read register `index` (0-15); out-of-range indices read as 0
    pub fn register(&self, index: usize) -> u32 {
        self.cpu
            .state()
            .registers()
            .get(index)
            .copied()
            .unwrap_or(0)
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u32 {
        self.cpu.state().pc()
    }

    #[wasm_bindgen(getter)]
    pub fn flags(&self) -> u32 {
        self.cpu.state().flags()
    }

    #[wasm_bindgen(getter)]
    pub fn steps(&self) -> f64 {
        self.cpu.steps() as f64
    }

    pub fn set_pc(&mut self, pc: u32) {
        self.cpu.state_mut().set_pc(pc);
    }

    /// Read up to `len` bytes starting at `addr`, clipped to the end of memory
    pub fn read_memory(&self, addr: u32, len: u32) -> Vec<u8> {
        let memory = self.cpu.state().memory().as_slice();
        let start = (addr as usize).min(memory.len());
        let end = start.saturating_add(len as usize).min(memory.len());
        memory[start..end].to_vec()
    }
}
