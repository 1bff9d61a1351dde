use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

/// Progress while playing a move list.
#[derive(Debug)]
pub struct MoveProgress {
    done: AtomicU32,
    total: AtomicU32,
    active: AtomicBool,
}
impl Default for MoveProgress {
    fn default() -> Self {
        Self {
            done: AtomicU32::new(0),
            total: AtomicU32::new(1),
            active: AtomicBool::new(false),
        }
    }
}
impl MoveProgress {
    /// Constructs a new `MoveProgress`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the progress as a fraction: completed moves / total moves.
    pub fn fraction(&self) -> (u32, u32) {
        (
            self.done.load(Ordering::Relaxed),
            self.total.load(Ordering::Relaxed),
        )
    }
    /// Returns whether a move list is being played.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }

    pub(crate) fn start(&self, total: u32) {
        self.done.store(0, Ordering::Relaxed);
        self.total.store(total, Ordering::Relaxed);
        self.active.store(true, Ordering::Relaxed);
    }
    pub(crate) fn set_progress(&self, moves_done: u32) {
        self.done.store(moves_done, Ordering::Relaxed);
    }
    pub(crate) fn finish(&self) {
        let total = self.total.load(Ordering::Relaxed);
        self.done.store(total, Ordering::Relaxed);
        self.active.store(false, Ordering::Relaxed);
    }
}
