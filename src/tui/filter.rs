//! Cycling display selectors for chart views.
//!
//! Provides generic selector cycling that works with any enum-based
//! selector, so each chart page does not duplicate toggle logic.

/// Trait for selector types that cycle through a fixed set of options.
pub trait CycleFilter: Clone + Copy + Default {
    /// Get the next option in the cycle.
    #[must_use]
    fn next(&self) -> Self;

    /// Get the previous option in the cycle.
    #[must_use]
    fn prev(&self) -> Self;

    /// Get a display name for the option.
    fn display_name(&self) -> &str;
}

/// Generic selector state that works with any `CycleFilter` enum.
#[derive(Debug, Clone)]
pub struct FilterState<F: CycleFilter> {
    /// Current selector value
    pub current: F,
}

impl<F: CycleFilter> Default for FilterState<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: CycleFilter> FilterState<F> {
    /// Create a new selector state with the default option.
    pub fn new() -> Self {
        Self {
            current: F::default(),
        }
    }

    /// Cycle to the next option.
    pub fn next(&mut self) {
        self.current = self.current.next();
    }

    /// Cycle to the previous option.
    pub fn prev(&mut self) {
        self.current = self.current.prev();
    }

    /// Reset to the default option.
    pub fn reset(&mut self) {
        self.current = F::default();
    }

    /// Get the current option's display name.
    pub fn display_name(&self) -> &str {
        self.current.display_name()
    }
}

// ============================================================================
// Concrete selectors
// ============================================================================

/// Climate scenario selector on the asset view page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClimateScenario {
    #[default]
    NetZero2050,
    DelayedTransition,
    CurrentPolicies,
}

impl CycleFilter for ClimateScenario {
    fn next(&self) -> Self {
        match self {
            Self::NetZero2050 => Self::DelayedTransition,
            Self::DelayedTransition => Self::CurrentPolicies,
            Self::CurrentPolicies => Self::NetZero2050,
        }
    }

    fn prev(&self) -> Self {
        match self {
            Self::NetZero2050 => Self::CurrentPolicies,
            Self::DelayedTransition => Self::NetZero2050,
            Self::CurrentPolicies => Self::DelayedTransition,
        }
    }

    fn display_name(&self) -> &str {
        match self {
            Self::NetZero2050 => "Net Zero 2050",
            Self::DelayedTransition => "Delayed Transition",
            Self::CurrentPolicies => "Current Policies",
        }
    }
}

/// Payment plan selector emphasizing one of the projection lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaymentPlan {
    #[default]
    Baseline,
    PayFines,
    Retrofit,
}

impl CycleFilter for PaymentPlan {
    fn next(&self) -> Self {
        match self {
            Self::Baseline => Self::PayFines,
            Self::PayFines => Self::Retrofit,
            Self::Retrofit => Self::Baseline,
        }
    }

    fn prev(&self) -> Self {
        match self {
            Self::Baseline => Self::Retrofit,
            Self::PayFines => Self::Baseline,
            Self::Retrofit => Self::PayFines,
        }
    }

    fn display_name(&self) -> &str {
        match self {
            Self::Baseline => "Baseline",
            Self::PayFines => "Pay Fines",
            Self::Retrofit => "Retrofit",
        }
    }
}

/// Portfolio chart split selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SplitMethod {
    #[default]
    Geography,
    PropertyType,
    RiskRating,
}

impl CycleFilter for SplitMethod {
    fn next(&self) -> Self {
        match self {
            Self::Geography => Self::PropertyType,
            Self::PropertyType => Self::RiskRating,
            Self::RiskRating => Self::Geography,
        }
    }

    fn prev(&self) -> Self {
        match self {
            Self::Geography => Self::RiskRating,
            Self::PropertyType => Self::Geography,
            Self::RiskRating => Self::PropertyType,
        }
    }

    fn display_name(&self) -> &str {
        match self {
            Self::Geography => "Geography",
            Self::PropertyType => "Property Type",
            Self::RiskRating => "Risk Rating",
        }
    }
}

/// Portfolio table grouping selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GroupingDimension {
    #[default]
    PostalCode,
    Region,
    LineOfBusiness,
}

impl CycleFilter for GroupingDimension {
    fn next(&self) -> Self {
        match self {
            Self::PostalCode => Self::Region,
            Self::Region => Self::LineOfBusiness,
            Self::LineOfBusiness => Self::PostalCode,
        }
    }

    fn prev(&self) -> Self {
        match self {
            Self::PostalCode => Self::LineOfBusiness,
            Self::Region => Self::PostalCode,
            Self::LineOfBusiness => Self::Region,
        }
    }

    fn display_name(&self) -> &str {
        match self {
            Self::PostalCode => "Postal Code",
            Self::Region => "Region",
            Self::LineOfBusiness => "Line of Business",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_state_cycling() {
        let mut state = FilterState::<PaymentPlan>::new();

        assert_eq!(state.current, PaymentPlan::Baseline);
        assert_eq!(state.display_name(), "Baseline");

        state.next();
        assert_eq!(state.current, PaymentPlan::PayFines);

        state.next();
        assert_eq!(state.current, PaymentPlan::Retrofit);

        state.next();
        assert_eq!(state.current, PaymentPlan::Baseline);

        state.prev();
        assert_eq!(state.current, PaymentPlan::Retrofit);
    }

    #[test]
    fn test_scenario_cycle_is_closed() {
        let mut s = ClimateScenario::default();
        for _ in 0..3 {
            s = s.next();
        }
        assert_eq!(s, ClimateScenario::default());
    }

    #[test]
    fn test_filter_state_reset() {
        let mut state = FilterState::<SplitMethod>::new();
        state.next();
        assert_eq!(state.current, SplitMethod::PropertyType);

        state.reset();
        assert_eq!(state.current, SplitMethod::Geography);
    }
}
