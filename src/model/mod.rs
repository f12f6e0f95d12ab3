//! Domain model for arc-console.
//!
//! All data in this crate originates from static fixture tables (see
//! [`fixtures`]); the model types give them stable, typed shape. Assets are
//! created from fixtures at load, mutated only through the asset form
//! editor, and never deleted in-session.

mod asset;
mod catalog;
pub mod fixtures;
mod form;
mod series;

pub use asset::{Asset, AssetId, RiskRating};
pub use catalog::{FilterCatalog, FilterCategory, FilterOption};
pub use form::{AssetRecord, FieldId, FormSection};
pub use series::{GeographyExposure, KpiRow, NoiPoint, PortfolioRow, RevenueOpex, RiskSlice, Trend};
