//! Capacity planning.
//!
//! Every technique stores one bit per unit (word boundary, pixel or sample),
//! so a message needs `chars * 8 + 16` units.

use crate::codec::{self, Message};
use crate::error::StegoError;
use crate::medium::Cover;

/// Units needed to carry `message` including its terminator.
pub fn required_units(message: &Message) -> usize {
    codec::framed_len(message)
}

/// Outcome of checking a message against a cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityReport {
    pub fits: bool,
    pub available: usize,
    pub required: usize,
}

impl CapacityReport {
    pub fn new(available: usize, required: usize) -> Self {
        Self {
            fits: available >= required,
            available,
            required,
        }
    }

    /// Units the cover is short by, 0 when the message fits.
    pub fn deficit(&self) -> usize {
        self.required.saturating_sub(self.available)
    }

    /// Units left over after embedding, 0 when the message does not fit.
    pub fn spare(&self) -> usize {
        self.available.saturating_sub(self.required)
    }

    /// Turns a failed plan into [`StegoError::InsufficientCapacity`].
    pub fn ensure_fits(&self) -> Result<(), StegoError> {
        if self.fits {
            Ok(())
        } else {
            Err(StegoError::InsufficientCapacity {
                required: self.required,
                available: self.available,
            })
        }
    }
}

/// Plans `message` against a raw unit count.
pub fn plan(available: usize, message: &Message) -> CapacityReport {
    CapacityReport::new(available, required_units(message))
}

/// Plans `message` against `cover` without touching either.
pub fn can_embed<C: Cover>(cover: &C, message: &Message) -> CapacityReport {
    plan(cover.available_units(), message)
}
