//! The program store: five fixed-capacity instruction sequences.
//!
//! Capacities are fixed when a puzzle loads and never resized during play.
//! Out-of-range writes are bounds-checked no-ops: the editing UI enumerates
//! valid slots, so a bad index is caller misuse, not an error condition.

use crate::instruction::{FuncName, Instruction, ALL_FUNCTIONS};

/// Number of player-editable functions (F1..F5).
pub const FUNCTION_COUNT: usize = 5;

/// A program: per-function fixed-length sequences of optional instructions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    slots: [Vec<Option<Instruction>>; FUNCTION_COUNT],
}

impl Program {
    /// Create an all-empty program with the given per-function capacities.
    pub fn new(capacities: [usize; FUNCTION_COUNT]) -> Self {
        Self {
            slots: capacities.map(|cap| vec![None; cap]),
        }
    }

    /// Slot capacity of one function.
    pub fn capacity(&self, function: FuncName) -> usize {
        self.slots[function.index()].len()
    }

    /// Per-function capacities, in F1..F5 order.
    pub fn capacities(&self) -> [usize; FUNCTION_COUNT] {
        let mut caps = [0; FUNCTION_COUNT];
        for func in ALL_FUNCTIONS {
            caps[func.index()] = self.capacity(func);
        }
        caps
    }

    /// Sum of all function capacities.
    pub fn total_capacity(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }

    /// The instruction at a slot, or `None` when the slot is empty or the
    /// index is out of range.
    pub fn get(&self, function: FuncName, index: usize) -> Option<Instruction> {
        self.slots[function.index()].get(index).copied().flatten()
    }

    /// Write a slot. Out-of-range indices are silently ignored.
    pub fn set(&mut self, function: FuncName, index: usize, slot: Option<Instruction>) {
        if let Some(entry) = self.slots[function.index()].get_mut(index) {
            *entry = slot;
        }
    }

    /// Empty every slot, keeping capacities.
    pub fn clear(&mut self) {
        for func_slots in &mut self.slots {
            func_slots.fill(None);
        }
    }

    /// Count of non-empty slots across all functions.
    pub fn non_empty_count(&self) -> usize {
        self.slots
            .iter()
            .map(|f| f.iter().filter(|s| s.is_some()).count())
            .sum()
    }

    /// Iterate the slots of one function in order.
    pub fn function_slots(&self, function: FuncName) -> &[Option<Instruction>] {
        &self.slots[function.index()]
    }
}
