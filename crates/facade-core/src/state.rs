use std::cell::Cell;

use serde::Serialize;

/// Pair of process-wide flags shared between the driver and the orchestrator.
///
/// Each flag is an independent cell. Setters take `&self` so every holder of
/// the shared handle observes writes immediately; `Cell` keeps the type
/// confined to a single thread.
#[derive(Debug)]
pub struct SharedState {
    is_loading: Cell<bool>,
    is_saving: Cell<bool>,
}

impl SharedState {
    pub fn new(is_loading: bool, is_saving: bool) -> Self {
        Self {
            is_loading: Cell::new(is_loading),
            is_saving: Cell::new(is_saving),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading.get()
    }

    pub fn is_saving(&self) -> bool {
        self.is_saving.get()
    }

    pub fn set_is_loading(&self, value: bool) {
        self.is_loading.set(value);
    }

    pub fn set_is_saving(&self, value: bool) {
        self.is_saving.set(value);
    }

    /// Copies both flags out at once.
    pub fn flags(&self) -> Flags {
        Flags {
            is_loading: self.is_loading(),
            is_saving: self.is_saving(),
        }
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Flags::default().into()
    }
}

impl From<Flags> for SharedState {
    fn from(flags: Flags) -> Self {
        Self::new(flags.is_loading, flags.is_saving)
    }
}

/// Plain copy of the flag pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Flags {
    pub is_loading: bool,
    pub is_saving: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            is_loading: true,
            is_saving: true,
        }
    }
}
