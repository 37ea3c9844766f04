//! Styling marker on the document root.
//!
//! In the browser this is a class on `<html>` (see `web::RootElement`).

#[cfg(test)]
#[path = "target_test.rs"]
mod target_test;

/// Something that carries a single on/off styling marker.
pub trait StyleTarget {
    fn has_marker(&self) -> bool;
    fn set_marker(&mut self, present: bool);
}

/// In-memory [`StyleTarget`] that counts mutations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoryTarget {
    marked: bool,
    writes: usize,
}

impl MemoryTarget {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set_marker` calls so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl StyleTarget for MemoryTarget {
    fn has_marker(&self) -> bool {
        self.marked
    }

    fn set_marker(&mut self, present: bool) {
        self.marked = present;
        self.writes += 1;
    }
}
