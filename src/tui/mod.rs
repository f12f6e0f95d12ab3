//! Terminal dashboard built on ratatui.
//!
//! `app` holds the cross-page session state, `views` the per-page
//! rendering, `events` the input thread and key dispatch, and `ui` the
//! terminal lifecycle. `theme`, `state`, and `filter` are the shared
//! building blocks the pages are assembled from.

pub mod app;
pub mod constants;
pub mod events;
pub mod export;
pub mod filter;
pub mod state;
pub mod status;
pub mod theme;
pub mod ui;
pub mod views;
pub mod widgets;

pub use app::App;
pub use events::{handle_key_event, Event, EventHandler};
pub use export::{export_kpis, export_portfolio, export_projections, ExportResult};
pub use filter::{
    ClimateScenario, CycleFilter, FilterState, GroupingDimension, PaymentPlan, SplitMethod,
};
pub use state::{ListNavigation, ListState};
pub use status::StatusMessage;
pub use theme::{colors, set_theme, toggle_theme, Theme};
pub use ui::run_tui;
