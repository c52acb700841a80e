//! The hello-world sample image.
//!
//! Loaded at address 0 with PC 0, it runs:
//!
//! | Addr | Bytes         | Effect                                  |
//! |------|---------------|-----------------------------------------|
//! | 0x00 | `F0 18 00 00` | r0 := 0x18                              |
//! | 0x04 | `4B 10`       | r1 += 1                                 |
//! | 0x06 | `4B 20`       | r2 += 1                                 |
//! | 0x08 | `20 12`       | compare r1, r2 (equal)                  |
//! | 0x0A | `30 00`       | jump to r0 (0x18), over the string      |
//! | 0x0C | `Hello World\0` | data                                  |
//! | 0x18 | `00 00`       | nop (separator)                         |
//! | 0x1A | `F0 0C 00 00` | r0 := 0x0C                              |
//! | 0x1E | `EF 00`       | print string at r0                      |
//! | 0x20 | `00 00`       | nop                                     |
//! | 0x22 | `E0 00`       | halt                                    |

/// Address of the `Hello World` string inside [`SAMPLE_PROGRAM`].
pub const SAMPLE_STRING_ADDR: u32 = 0x0C;

pub const SAMPLE_PROGRAM: [u8; 38] = [
    0xF0, 0x18, 0x00, 0x00, // r0 := 0x18
    0x4B, 0x10, // inc r1
    0x4B, 0x20, // inc r2
    0x20, 0x12, // cmp r1, r2
    0x30, 0x00, // jmp r0
    b'H', b'e', b'l', b'l', b'o', b' ', b'W', b'o', b'r', b'l', b'd', 0x00,
    0x00, 0x00, // separator
    0xF0, 0x0C, 0x00, 0x00, // r0 := 0x0C
    0xEF, 0x00, // print r0
    0x00, 0x00, // nop
    0xE0, 0x00, // halt
    0x00, 0x00,
];
