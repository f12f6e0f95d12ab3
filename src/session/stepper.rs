//! Paged movement across the selected assets ("Asset 1 of 3").

/// One-based cursor over a fixed number of steps, clamped to `[1, total]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetStepper {
    cursor: usize,
    total: usize,
}

impl AssetStepper {
    /// Create a stepper at step 1. `total` is fixed for the session; a zero
    /// total is coerced to 1 so the invariant `1 <= cursor <= total` holds.
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            cursor: 1,
            total: total.max(1),
        }
    }

    /// Current step, always in `[1, total]`.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Move to the next step; no-op on the last one.
    pub fn advance(&mut self) {
        if self.cursor < self.total {
            self.cursor += 1;
        }
    }

    /// Move to the previous step; no-op on the first one.
    pub fn retreat(&mut self) {
        if self.cursor > 1 {
            self.cursor -= 1;
        }
    }

    /// Jump directly to step `k`; no-op outside `[1, total]`.
    pub fn jump_to(&mut self, k: usize) {
        if (1..=self.total).contains(&k) {
            self.cursor = k;
        }
    }

    /// True on the last step, where the page swaps "next" for "proceed".
    #[must_use]
    pub const fn is_final_step(&self) -> bool {
        self.cursor == self.total
    }
}

impl Default for AssetStepper {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_clamps_at_total() {
        let mut stepper = AssetStepper::new(3);
        stepper.advance();
        stepper.advance();
        assert_eq!(stepper.cursor(), 3);
        assert!(stepper.is_final_step());

        stepper.advance();
        assert_eq!(stepper.cursor(), 3);
    }

    #[test]
    fn test_retreat_clamps_at_one() {
        let mut stepper = AssetStepper::new(3);
        stepper.retreat();
        assert_eq!(stepper.cursor(), 1);
    }

    #[test]
    fn test_jump_to_bounds() {
        let mut stepper = AssetStepper::new(3);
        stepper.jump_to(2);
        assert_eq!(stepper.cursor(), 2);

        stepper.jump_to(0);
        assert_eq!(stepper.cursor(), 2);
        stepper.jump_to(4);
        assert_eq!(stepper.cursor(), 2);
    }

    #[test]
    fn test_zero_total_coerced() {
        let stepper = AssetStepper::new(0);
        assert_eq!(stepper.total(), 1);
        assert_eq!(stepper.cursor(), 1);
        assert!(stepper.is_final_step());
    }

    #[test]
    fn test_final_step_flag() {
        let mut stepper = AssetStepper::new(2);
        assert!(!stepper.is_final_step());
        stepper.advance();
        assert!(stepper.is_final_step());
    }
}
