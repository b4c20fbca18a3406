//! Command history with ring buffer
//!
//! `depth` slots of `width` bytes each, allocated once. Every slot holds a
//! raw copy of a submitted line, zero-filled past its end.

use alloc::vec;
use alloc::vec::Vec;

use crate::config::HistoryMode;

/// Cursor movement through the ring
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Toward higher slot indices (wraps `depth - 1 -> 0`)
    Forward,
    /// Toward lower slot indices (wraps `0 -> depth - 1`)
    Backward,
}

/// Command history ring buffer
pub struct History {
    /// `depth * width` bytes, slot `i` at `i * width`
    slots: Vec<u8>,
    width: usize,
    depth: usize,
    /// Next slot to write
    pointer: usize,
    /// Recall position, only distinct from `pointer` in `SeparateCursor` mode
    browse: usize,
    mode: HistoryMode,
}

impl History {
    /// Create empty history with `depth` slots of `width` bytes
    pub fn new(depth: usize, width: usize, mode: HistoryMode) -> Self {
        let depth = depth.max(1);
        let width = width.max(1);
        Self {
            slots: vec![0u8; depth * width],
            width,
            depth,
            pointer: 0,
            browse: 0,
            mode,
        }
    }

    /// Copy `line` into the current write slot without moving any cursor
    ///
    /// Short lines are zero-filled, long ones cut at `width`.
    pub fn save(&mut self, line: &[u8]) {
        let width = self.width;
        let slot = &mut self.slots[self.pointer * width..(self.pointer + 1) * width];
        let len = line.len().min(width);
        slot[..len].copy_from_slice(&line[..len]);
        slot[len..].fill(0);
    }

    /// Move the recall cursor one slot
    ///
    /// In `SharedCursor` mode this is also the write cursor.
    pub fn advance(&mut self, direction: Direction) {
        match self.mode {
            HistoryMode::SharedCursor => self.pointer = self.step(self.pointer, direction),
            HistoryMode::SeparateCursor => self.browse = self.step(self.browse, direction),
        }
        log::debug!("history cursor -> {}", self.cursor());
    }

    /// Store a submitted line and prepare the next write slot
    pub fn record(&mut self, line: &[u8]) {
        self.save(line);
        self.pointer = self.step(self.pointer, Direction::Forward);
        self.browse = self.pointer;
    }

    /// Raw bytes of the slot at the recall cursor
    pub fn current(&self) -> &[u8] {
        self.slot(self.cursor())
    }

    /// Raw bytes of slot `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= depth`.
    pub fn slot(&self, index: usize) -> &[u8] {
        &self.slots[index * self.width..(index + 1) * self.width]
    }

    /// Next slot to write
    pub fn pointer(&self) -> usize {
        self.pointer
    }

    /// Slot shown on recall
    pub fn cursor(&self) -> usize {
        match self.mode {
            HistoryMode::SharedCursor => self.pointer,
            HistoryMode::SeparateCursor => self.browse,
        }
    }

    /// Number of slots
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn mode(&self) -> HistoryMode {
        self.mode
    }

    fn step(&self, index: usize, direction: Direction) -> usize {
        match direction {
            Direction::Forward if index + 1 < self.depth => index + 1,
            Direction::Forward => 0,
            Direction::Backward if index == 0 => self.depth - 1,
            Direction::Backward => index - 1,
        }
    }
}
