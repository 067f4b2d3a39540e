//! 32-bit linear congruential generator used to shuffle permutation tables.

/// Linear congruential generator with the Numerical Recipes constants.
///
/// `state = state * 1664525 + 1013904223 (mod 2^32)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    /// Multiplier of the recurrence.
    pub const MULTIPLIER: u32 = 1_664_525;
    /// Increment of the recurrence.
    pub const INCREMENT: u32 = 1_013_904_223;

    /// Creates a generator whose state is exactly `seed`.
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advances the recurrence and returns the new state.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        self.state
    }

    /// Returns the current state without advancing.
    pub const fn state(&self) -> u32 {
        self.state
    }
}
