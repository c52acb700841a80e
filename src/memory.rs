//! # Flat Machine Memory
//!
//! The machine sees a single 16 MiB byte array. There is no mapping, no
//! banking and no wrap-around: an address is either inside the array or it
//! is not, and the executor turns "not" into a fault.
//!
//! Raw `read`/`write` treat an out-of-range address as a caller bug and
//! panic like slice indexing. The executor only uses the checked `get`
//! path.

use crate::LoadError;

/// Number of addressable memory cells (16 MiB).
pub const MEMORY_SIZE: usize = 16_777_216;

/// Returns true if `addr` names a cell of machine memory.
///
/// # Examples
///
/// ```
/// use aurora_vm::memory::is_valid_address;
///
/// assert!(is_valid_address(0x00FF_FFFF));
/// assert!(!is_valid_address(0x0100_0000));
/// ```
pub fn is_valid_address(addr: u32) -> bool {
    (addr as usize) < MEMORY_SIZE
}

/// Zero-initialised flat byte memory.
///
/// # Examples
///
/// ```
/// use aurora_vm::Memory;
///
/// let mut mem = Memory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// assert_eq!(mem.get(0x0100_0000), None);
/// ```
pub struct Memory {
    data: Box<[u8]>,
}

impl Memory {
    /// Creates a memory with every cell set to zero.
    pub fn new() -> Self {
        Self {
            data: vec![0; MEMORY_SIZE].into_boxed_slice(),
        }
    }

    /// Reads the byte at `addr`.
    ///
    /// # Panics
    ///
    /// Panics if `addr` is outside memory.
    pub fn read(&self, addr: u32) -> u8 {
        self.data[addr as usize]
    }

    /// Writes `value` at `addr`.
    ///
    /// # Panics
    ///
    /// Panics if `addr` is outside memory.
    pub fn write(&mut self, addr: u32, value: u8) {
        self.data[addr as usize] = value;
    }

    /// Reads the byte at `addr`, or `None` if `addr` is outside memory.
    pub fn get(&self, addr: u32) -> Option<u8> {
        self.data.get(addr as usize).copied()
    }

    /// Copies `bytes` into memory starting at `offset`.
    ///
    /// Nothing is written if the image does not fit.
    ///
    /// # Examples
    ///
    /// ```
    /// use aurora_vm::{LoadError, Memory};
    ///
    /// let mut mem = Memory::new();
    /// mem.load(0x10, &[0xE0, 0x00]).unwrap();
    /// assert_eq!(mem.read(0x10), 0xE0);
    ///
    /// assert!(matches!(
    ///     mem.load(0x00FF_FFFF, &[1, 2]),
    ///     Err(LoadError::ProgramTooLarge { .. })
    /// ));
    /// ```
    pub fn load(&mut self, offset: u32, bytes: &[u8]) -> Result<(), LoadError> {
        let start = offset as usize;
        let end = start
            .checked_add(bytes.len())
            .filter(|&end| end <= MEMORY_SIZE)
            .ok_or(LoadError::ProgramTooLarge {
                offset,
                len: bytes.len(),
            })?;

        self.data[start..end].copy_from_slice(bytes);
        Ok(())
    }

    /// Returns the bytes from `start` up to, but not including, the next NUL.
    ///
    /// Returns `None` when `start` is outside memory or when memory ends
    /// before a terminator is found.
    pub fn c_string(&self, start: u32) -> Option<&[u8]> {
        let tail = self.data.get(start as usize..)?;
        let len = tail.iter().position(|&b| b == 0)?;
        Some(&tail[..len])
    }

    /// Returns the whole memory as a byte slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Memory")
            .field("size", &self.data.len())
            .finish()
    }
}
