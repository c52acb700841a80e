//! WebAssembly bindings for the Aurora machine.
//!
//! This module exposes a JavaScript-callable machine whose print
//! instruction is routed to a JS callback.

pub mod api;

pub use api::WasmMachine;
