//! Staggered reveal timing for section items.
//!
//! Each section reveals its items one after another once it scrolls into
//! view. The page script only toggles the section; the per-item delays are
//! rendered here as `transition-delay`.

use std::{borrow::Borrow, time::Duration};

/// About-section stat bars.
pub const STATS: Stagger = Stagger::new(Duration::from_millis(200));
/// Skill cards.
pub const SKILLS: Stagger = Stagger::new(Duration::from_millis(100));
/// Project cards.
pub const PROJECTS: Stagger = Stagger::new(Duration::from_millis(200));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stagger {
    step: Duration,
}

impl Stagger {
    pub const fn new(step: Duration) -> Self {
        Self { step }
    }

    pub fn delay(&self, index: usize) -> Duration {
        self.step * index as u32
    }

    /// Delay in milliseconds for the item at `index`.
    ///
    /// Takes the loop index either by value or by reference, as templates hand it over.
    pub fn delay_ms(&self, index: impl Borrow<usize>) -> u128 {
        self.delay(*index.borrow()).as_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_grow_by_step() {
        assert_eq!(SKILLS.delay_ms(0), 0);
        assert_eq!(SKILLS.delay_ms(3), 300);
        assert_eq!(PROJECTS.delay_ms(2), 400);
        assert_eq!(STATS.delay(5), Duration::from_millis(1000));
    }

    #[test]
    fn loop_index_by_reference() {
        let index = 4usize;
        assert_eq!(STATS.delay_ms(&index), 800);
    }
}
