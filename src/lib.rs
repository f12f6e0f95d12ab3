//! **Climate transition risk dashboard for commercial real estate portfolios.**
//!
//! `arc-console` is a terminal dashboard prototype for exploring how climate
//! transition scenarios reshape the economics of a commercial real estate
//! book. It models a small portfolio of Canadian properties and lets an
//! analyst select assets, review and correct their records, project net
//! operating income under competing abatement plans, and slice the portfolio
//! with multi-category filters.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: The fixed domain data: assets, editable record forms,
//!   filter catalogs, and the projection series the charts draw from.
//! - **[`session`]**: The interaction state machines. [`session::SelectionSet`]
//!   bounds asset selection at three, [`session::PortfolioFilters`] holds
//!   multi-select filters per category with a derived summary,
//!   [`session::FieldEditor`] provides draft/save/cancel editing over a
//!   record, [`session::BreakdownRelay`] links chart clicks to a
//!   revenue-vs-opex popover, and [`session::AssetStepper`] drives the
//!   overview walkthrough. [`session::RouteGate`] decides which pages are
//!   reachable from the current session facts.
//! - **[`tui`]**: The ratatui front end: one view per page plus the shared
//!   theme, list navigation, and status-message plumbing.
//! - **[`reports`]**: CSV renderings of the portfolio table and projection
//!   series.
//! - **[`config`]**: YAML configuration discovery, parsing, and validation.
//!
//! ## Getting Started
//!
//! ```no_run
//! use arc_console::config::AppConfig;
//! use arc_console::tui::{run_tui, App};
//!
//! fn main() -> std::io::Result<()> {
//!     let config = AppConfig::default();
//!     let mut app = App::new(&config);
//!     run_tui(&mut app)
//! }
//! ```
//!
//! ## Driving the Session Without a Terminal
//!
//! The session layer is independent of the TUI and can be exercised
//! directly:
//!
//! ```
//! use arc_console::model::{fixtures, FilterCategory};
//! use arc_console::session::{PortfolioFilters, SelectionSet};
//!
//! let mut selection = SelectionSet::new();
//! for asset in fixtures::sample_assets() {
//!     selection.select(asset);
//! }
//! // Capacity is bounded at three.
//! assert!(selection.len() <= 3);
//!
//! let mut filters = PortfolioFilters::new();
//! filters.toggle(FilterCategory::Geography, "toronto");
//! filters.toggle(FilterCategory::Geography, "toronto");
//! assert!(filters.is_empty());
//! ```

#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod reports;
pub mod session;
pub mod tui;

pub use error::{ArcError, Result};
pub use model::{Asset, AssetId, RiskRating};
pub use session::{PortfolioFilters, Route, SelectionSet};
