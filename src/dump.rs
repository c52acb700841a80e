//! # Hex Dump Diagnostics
//!
//! Read-only formatting of register and memory bytes, printed by the
//! command-line driver between steps.
//!
//! ```text
//! regs:
//!   0000  18 00 00 00 01 00 00 00 01 00 00 00 00 00 00 00  ................
//! ```

use crate::MachineState;
use std::fmt::Write;

/// Formats `bytes` as a hex dump: offset, sixteen hex bytes, then the
/// printable ASCII characters with everything else shown as `.`.
///
/// # Examples
///
/// ```
/// use aurora_vm::dump::hex_dump;
///
/// let text = hex_dump(Some("greeting"), b"Hi!\n");
/// assert_eq!(
///     text,
///     "greeting:\n  0000  48 69 21 0a                                      Hi!.\n"
/// );
/// ```
pub fn hex_dump(description: Option<&str>, bytes: &[u8]) -> String {
    let mut out = String::new();

    if let Some(description) = description {
        let _ = writeln!(out, "{}:", description);
    }

    if bytes.is_empty() {
        out.push_str("  ZERO LENGTH\n");
        return out;
    }

    for (line, chunk) in bytes.chunks(16).enumerate() {
        let _ = write!(out, "  {:04x} ", line * 16);

        for byte in chunk {
            let _ = write!(out, " {:02x}", byte);
        }
        for _ in chunk.len()..16 {
            out.push_str("   ");
        }

        out.push_str("  ");
        out.extend(chunk.iter().map(|&b| printable(b)));
        out.push('\n');
    }

    out
}

fn printable(byte: u8) -> char {
    if (0x20..=0x7E).contains(&byte) {
        byte as char
    } else {
        '.'
    }
}

/// Returns the register file as 64 little-endian bytes, register 0 first.
pub fn register_bytes(state: &MachineState) -> Vec<u8> {
    state
        .registers()
        .iter()
        .flat_map(|reg| reg.to_le_bytes())
        .collect()
}
