//! Named constants for TUI layout and navigation.

/// Number of items to scroll per page-up/page-down action.
pub(crate) const PAGE_SIZE: usize = 10;

/// Number of steps in the per-asset walkthrough on the overview page.
pub(crate) const TOTAL_ASSET_STEPS: usize = 3;

/// Status messages disappear after this many seconds.
pub(crate) const STATUS_CLEAR_SECS: u64 = 4;

/// Minimum terminal width before the size warning replaces the UI.
pub(crate) const MIN_WIDTH: u16 = 80;

/// Minimum terminal height before the size warning replaces the UI.
pub(crate) const MIN_HEIGHT: u16 = 24;
