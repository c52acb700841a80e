//! # System Instructions (class 0xE)
//!
//! - `E0`: halt
//! - `EF`: print the NUL-terminated string at `regA`'s address

use crate::{Console, ExecutionError, MachineState};

/// Sends the string at `regA`'s address to `console`.
///
/// Scanning stops at the first zero byte. If memory ends first, or the
/// start address is outside memory, the instruction faults and nothing is
/// printed.
pub(crate) fn execute_print<C: Console>(
    state: &MachineState,
    console: &mut C,
    reg_a: u8,
) -> Result<(), ExecutionError> {
    let start = state.register(reg_a as usize);
    let text = state
        .memory()
        .c_string(start)
        .ok_or(ExecutionError::UnterminatedString { addr: start })?;

    console.print(reg_a, text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MEMORY_SIZE;
    use crate::BufferConsole;

    #[test]
    fn test_print_stops_at_nul() {
        let mut state = MachineState::new();
        state.load_program(0x0C, b"Hello World\0junk\0").unwrap();
        let mut console = BufferConsole::new();

        state.set_register(0, 0x0C);
        execute_print(&state, &mut console, 0).unwrap();

        assert_eq!(console.lines(), ["Hello World"]);
    }

    #[test]
    fn test_print_empty_string() {
        let state = MachineState::new();
        let mut console = BufferConsole::new();

        execute_print(&state, &mut console, 3).unwrap();

        assert_eq!(console.lines(), [""]);
    }

    #[test]
    fn test_print_unterminated_faults() {
        let mut state = MachineState::new();
        let start = (MEMORY_SIZE - 3) as u32;
        state.load_program(start, b"abc").unwrap();
        state.set_register(2, start);
        let mut console = BufferConsole::new();

        let result = execute_print(&state, &mut console, 2);

        assert_eq!(result, Err(ExecutionError::UnterminatedString { addr: start }));
        assert!(console.lines().is_empty());
    }

    #[test]
    fn test_print_start_outside_memory_faults() {
        let mut state = MachineState::new();
        state.set_register(1, MEMORY_SIZE as u32);
        let mut console = BufferConsole::new();

        assert!(matches!(
            execute_print(&state, &mut console, 1),
            Err(ExecutionError::UnterminatedString { .. })
        ));
    }
}
