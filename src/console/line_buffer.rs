//! Line buffer for console input
//!
//! Fixed capacity chosen at construction. The last byte is reserved for the
//! terminator, so at most `capacity - 1` characters are ever stored.

use alloc::vec;
use alloc::vec::Vec;

/// Line input buffer
pub struct LineBuffer {
    /// Always zero at `len` and beyond
    buf: Vec<u8>,
    len: usize,
}

impl LineBuffer {
    /// Create empty buffer of `capacity` bytes (terminator included)
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: vec![0u8; capacity.max(1)],
            len: 0,
        }
    }

    /// Push a character
    ///
    /// Returns false (and drops `c`) when the buffer is full.
    pub fn push(&mut self, c: u8) -> bool {
        if self.is_full() {
            return false;
        }
        self.buf[self.len] = c;
        self.len += 1;
        self.buf[self.len] = 0;
        true
    }

    /// Remove last character
    ///
    /// Returns false if the buffer was already empty.
    pub fn backspace(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        self.len -= 1;
        self.buf[self.len] = 0;
        true
    }

    /// Clear buffer
    pub fn clear(&mut self) {
        self.buf.fill(0);
        self.len = 0;
    }

    /// Overwrite contents from a raw history slot
    ///
    /// Copies bytes up to the first zero (or until full) and returns the
    /// bytes now in the buffer, ready to be echoed.
    pub fn load(&mut self, slot: &[u8]) -> &[u8] {
        self.buf.fill(0);
        let len = slot
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(slot.len())
            .min(self.capacity() - 1);
        self.buf[..len].copy_from_slice(&slot[..len]);
        self.len = len;
        &self.buf[..len]
    }

    /// Get buffer as string slice
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }

    /// Get raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Whole backing store, zero fill included
    pub fn raw(&self) -> &[u8] {
        &self.buf
    }

    /// Get buffer length
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total size in bytes, terminator included
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// No room left for another character
    pub fn is_full(&self) -> bool {
        self.len + 1 >= self.buf.len()
    }
}
