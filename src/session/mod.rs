//! Page-scoped session state machines.
//!
//! Every transition here runs synchronously in response to one discrete user
//! action and completes before the next event; there is exactly one logical
//! actor, so no locking or transactional discipline is needed. Boundary
//! violations (over-limit selection, out-of-range cursor, missing breakdown
//! entry) are silent no-ops or empty renders, never errors; the console
//! fails soft to a safe default everywhere.

mod breakdown;
mod editor;
mod filters;
mod routes;
mod search;
mod selection;
mod stepper;

pub use breakdown::BreakdownRelay;
pub use editor::{EditorState, FieldEditor};
pub use filters::{search_options, FilterSummary, PortfolioFilters, SummaryModel};
pub use routes::{Route, RouteGate};
pub use search::AddressSearch;
pub use selection::{SelectionSet, MAX_SELECTED};
pub use stepper::AssetStepper;
