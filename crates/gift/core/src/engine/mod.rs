//! Modifier resolution engine.
//!
//! Computes the final FXP/RXP a character receives from a gift:
//!
//! ```text
//! final = gift base + Σ deltas of every modifier of that gift matching the character
//! ```
//!
//! ## Principles
//!
//! 1. **Pure**: no I/O, no shared state, inputs are never mutated
//! 2. **Total**: every input shape yields a result; nothing panics or errors
//! 3. **Order-free**: accumulation is a sum, so modifier order never matters
//! 4. **Unclamped**: negative totals are valid results
mod resolve;

pub use resolve::{
    AppliedModifier, EffectBreakdown, MatchReason, explain_effect, match_modifier, resolve_effect,
};

use core::ops::{Add, AddAssign};

/// A pair of reward values: friendship (FXP) and relationship (RXP) experience.
///
/// Used both for base values and for modifier deltas. Arithmetic saturates at
/// the `i64` bounds instead of overflowing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Effect {
    pub fxp: i64,
    pub rxp: i64,
}

impl Effect {
    pub const ZERO: Self = Self { fxp: 0, rxp: 0 };

    pub const fn new(fxp: i64, rxp: i64) -> Self {
        Self { fxp, rxp }
    }

    /// Base values of a gift.
    pub const fn base_of(gift: &crate::Gift) -> Self {
        Self::new(gift.base_fxp, gift.base_rxp)
    }

    /// Deltas carried by a modifier.
    pub const fn delta_of(modifier: &crate::Modifier) -> Self {
        Self::new(modifier.fxp_delta, modifier.rxp_delta)
    }

    /// Combined FXP + RXP, used to rank results.
    pub const fn total(&self) -> i64 {
        self.fxp.saturating_add(self.rxp)
    }
}

impl Add for Effect {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            fxp: self.fxp.saturating_add(rhs.fxp),
            rxp: self.rxp.saturating_add(rhs.rxp),
        }
    }
}

impl AddAssign for Effect {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
