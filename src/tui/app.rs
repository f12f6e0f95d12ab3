//! Application state for the console.
//!
//! `App` owns the session state machines plus one state struct per page.
//! All transitions are synchronous; boundary violations (full selection,
//! unreachable page) surface as status messages, never as errors.

use crate::config::AppConfig;
use crate::model::{fixtures, Asset, FieldId, FilterCatalog, FilterCategory, NoiPoint, RevenueOpex};
use crate::session::{
    search_options, AddressSearch, AssetStepper, BreakdownRelay, FieldEditor, PortfolioFilters,
    Route, RouteGate, SelectionSet, SummaryModel,
};
use crate::tui::constants::{STATUS_CLEAR_SECS, TOTAL_ASSET_STEPS};
use crate::tui::export::{export_portfolio, export_projections};
use crate::tui::filter::{
    ClimateScenario, FilterState, GroupingDimension, PaymentPlan, SplitMethod,
};
use crate::tui::state::{ListNavigation, ListState};
use crate::tui::status::StatusMessage;
use std::path::PathBuf;
use std::time::Duration;

/// Main application state.
pub struct App {
    /// Current page
    pub route: Route,

    /// Selected assets (bounded at three)
    pub selection: SelectionSet,

    /// Active portfolio filters
    pub filters: PortfolioFilters,

    /// Coefficients for the derived filter summary
    pub summary_model: SummaryModel,

    /// Fixed filter option catalog
    pub catalog: FilterCatalog,

    /// Selectable assets
    pub assets: Vec<Asset>,

    /// Per-page state
    pub home: HomeState,
    pub search: SearchPageState,
    pub overview: OverviewState,
    pub asset_view: AssetViewState,
    pub filter_page: FilterPageState,
    pub portfolio: PortfolioState,

    /// Temporary status message (auto-clears)
    pub status: StatusMessage,

    /// Directory for CSV exports (None = current directory)
    pub export_dir: Option<PathBuf>,

    /// Show help overlay
    pub show_help: bool,

    /// Should quit
    pub should_quit: bool,

    /// Animation tick counter
    pub tick: u64,
}

impl App {
    /// Create the app with fixture data and the given configuration.
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            route: Route::Home,
            selection: SelectionSet::new(),
            filters: PortfolioFilters::new(),
            summary_model: config.summary.clone(),
            catalog: fixtures::filter_catalog(),
            assets: fixtures::sample_assets(),
            home: HomeState::new(),
            search: SearchPageState::new(),
            overview: OverviewState::new(),
            asset_view: AssetViewState::new(),
            filter_page: FilterPageState::new(),
            portfolio: PortfolioState::new(),
            status: StatusMessage::with_auto_clear(Duration::from_secs(STATUS_CLEAR_SECS)),
            export_dir: config.export.output_dir.clone(),
            show_help: false,
            should_quit: false,
            tick: 0,
        }
    }

    /// Reachability predicate derived from current session state.
    #[must_use]
    pub fn gate(&self) -> RouteGate {
        RouteGate {
            has_selection: !self.selection.is_empty(),
            has_portfolio: self.portfolio.uploaded || !self.filters.is_empty(),
        }
    }

    /// Switch pages, honoring reachability. Blocked switches leave the
    /// route unchanged and explain why in the status line.
    pub fn goto(&mut self, route: Route) {
        if self.gate().is_reachable(route) {
            self.route = route;
            self.refresh_page_totals();
        } else {
            let reason = match route {
                Route::AssetOverview | Route::AssetView => "Select an asset first",
                Route::PortfolioView => "Upload a portfolio CSV or set filters first",
                _ => "Page unavailable",
            };
            self.status.set(reason);
        }
    }

    /// Cycle forward to the next reachable page.
    pub fn next_route(&mut self) {
        self.step_route(1);
    }

    /// Cycle backward to the previous reachable page.
    pub fn prev_route(&mut self) {
        self.step_route(Route::ALL.len() - 1);
    }

    fn step_route(&mut self, step: usize) {
        let gate = self.gate();
        let count = Route::ALL.len();
        let mut idx = self.route.index();
        for _ in 0..count {
            idx = (idx + step) % count;
            if let Some(route) = Route::from_index(idx) {
                if gate.is_reachable(route) {
                    self.route = route;
                    self.refresh_page_totals();
                    return;
                }
            }
        }
    }

    /// Recompute derived list bounds after state changes.
    pub fn refresh_page_totals(&mut self) {
        self.search.refresh(&self.selection);
        self.filter_page.refresh(&self.catalog);
        self.overview.fields.set_total(FieldId::ALL.len());
        self.overview.fields.clamp_selection();
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    // ========================================================================
    // Asset search page actions
    // ========================================================================

    /// Select the asset behind the highlighted suggestion.
    pub fn select_highlighted_suggestion(&mut self) {
        let suggestions = self.search.input.suggestions(&fixtures::ADDRESS_BOOK);
        let Some(address) = suggestions.get(self.search.suggestions.selected).copied() else {
            return;
        };

        let Some(asset) = self.assets.iter().find(|a| a.address == address).cloned() else {
            self.status.set(format!("No asset record for {address}"));
            return;
        };

        if self.selection.contains(asset.id) {
            self.status.set("Asset already selected");
        } else if self.selection.is_full() {
            self.status.set("Selection limit reached (3 assets)");
        } else {
            let address = asset.address.clone();
            self.selection.select(asset);
            self.status.set(format!("Added {address}"));
        }
        self.search.refresh(&self.selection);
    }

    /// Remove the highlighted asset from the selection.
    pub fn remove_highlighted_selection(&mut self) {
        let Some(asset) = self
            .selection
            .list()
            .get(self.search.selected_list.selected)
            .cloned()
        else {
            return;
        };
        self.selection.remove(asset.id);
        self.status.set(format!("Removed {}", asset.address));
        self.search.refresh(&self.selection);
    }

    // ========================================================================
    // Filter page actions
    // ========================================================================

    /// Currently highlighted filter category.
    #[must_use]
    pub fn current_category(&self) -> FilterCategory {
        FilterCategory::ALL[self.filter_page.category.selected % FilterCategory::ALL.len()]
    }

    /// Option values visible under the current category search.
    #[must_use]
    pub fn visible_option_values(&self) -> Vec<String> {
        let category = self.current_category();
        search_options(&self.catalog, category, &self.filter_page.search_query)
            .into_iter()
            .map(|o| o.value.clone())
            .collect()
    }

    /// Toggle the highlighted filter option.
    pub fn toggle_highlighted_option(&mut self) {
        let category = self.current_category();
        let values = self.visible_option_values();
        if let Some(value) = values.get(self.filter_page.options.selected) {
            self.filters.toggle(category, value.clone());
        }
    }

    // ========================================================================
    // Chart drill-down actions
    // ========================================================================

    /// Open the breakdown popover for the year under the asset view cursor.
    pub fn open_asset_breakdown(&mut self) {
        if let Some(point) = self.asset_view.series.get(self.asset_view.year_cursor) {
            self.asset_view.relay.select_year(point.year);
        }
    }

    /// Open the breakdown popover for the year under the portfolio cursor.
    pub fn open_portfolio_breakdown(&mut self) {
        if let Some(point) = self.portfolio.series.get(self.portfolio.year_cursor) {
            self.portfolio.relay.select_year(point.year);
        }
    }

    // ========================================================================
    // Exports and stubs
    // ========================================================================

    /// Export the asset projection series; outcome goes to the status line.
    pub fn export_asset_csv(&mut self) {
        let result = export_projections(&self.asset_view.series, self.export_dir.as_deref());
        self.status.set(result.message);
    }

    /// Export the portfolio table; outcome goes to the status line.
    pub fn export_portfolio_csv(&mut self) {
        let result = export_portfolio(&self.portfolio.table_rows, self.export_dir.as_deref());
        self.status.set(result.message);
    }

    /// CSV upload stub: marks the portfolio as loaded.
    pub fn upload_portfolio_stub(&mut self) {
        self.portfolio.uploaded = true;
        tracing::info!("portfolio CSV upload requested (stub)");
        self.status.set("Portfolio CSV uploaded (sample data)");
    }

    /// PDF extraction stub on the overview page.
    pub fn extract_from_pdf_stub(&mut self) {
        tracing::info!("PDF extraction requested (stub)");
        self.status.set("Extract from PDF is not available in the console");
    }
}

// ============================================================================
// Per-page state
// ============================================================================

/// Home page: geography table navigation.
#[derive(Debug, Clone)]
pub struct HomeState {
    pub geography: ListState,
}

impl HomeState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            geography: ListState::with_total(fixtures::home_geography().len()),
        }
    }
}

impl Default for HomeState {
    fn default() -> Self {
        Self::new()
    }
}

/// Asset search page: query input, suggestion list, selected-asset list.
#[derive(Debug, Clone, Default)]
pub struct SearchPageState {
    pub input: AddressSearch,
    pub suggestions: ListState,
    pub selected_list: ListState,
    /// Which panel arrow keys act on
    pub focus: SearchFocus,
    /// Whether keystrokes edit the address query
    pub query_active: bool,
}

/// Focused panel on the search page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchFocus {
    #[default]
    Suggestions,
    Selected,
}

impl SearchPageState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-derive list bounds from the query and selection.
    pub fn refresh(&mut self, selection: &SelectionSet) {
        let count = self.input.suggestions(&fixtures::ADDRESS_BOOK).len();
        self.suggestions.set_total(count);
        self.suggestions.clamp_selection();
        self.selected_list.set_total(selection.len());
        self.selected_list.clamp_selection();
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            SearchFocus::Suggestions => SearchFocus::Selected,
            SearchFocus::Selected => SearchFocus::Suggestions,
        };
    }
}

/// Asset overview page: editable form, field cursor, walkthrough stepper.
#[derive(Debug, Clone)]
pub struct OverviewState {
    pub editor: FieldEditor,
    pub fields: ListState,
    pub stepper: AssetStepper,
}

impl OverviewState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            editor: FieldEditor::new(fixtures::asset_record()),
            fields: ListState::with_total(FieldId::ALL.len()),
            stepper: AssetStepper::new(TOTAL_ASSET_STEPS),
        }
    }

    /// Field under the cursor.
    #[must_use]
    pub fn highlighted_field(&self) -> FieldId {
        FieldId::ALL[self.fields.selected % FieldId::ALL.len()]
    }
}

impl Default for OverviewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Asset view page: projection chart, breakdown relay, selectors.
#[derive(Debug, Clone)]
pub struct AssetViewState {
    pub series: Vec<NoiPoint>,
    pub detail: Vec<RevenueOpex>,
    pub relay: BreakdownRelay,
    pub year_cursor: usize,
    pub scenario: FilterState<ClimateScenario>,
    pub plan: FilterState<PaymentPlan>,
}

impl AssetViewState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            series: fixtures::asset_noi_projection(),
            detail: fixtures::asset_revenue_opex(),
            relay: BreakdownRelay::new(),
            year_cursor: 0,
            scenario: FilterState::new(),
            plan: FilterState::new(),
        }
    }

    pub fn year_next(&mut self) {
        if self.year_cursor + 1 < self.series.len() {
            self.year_cursor += 1;
        }
    }

    pub fn year_prev(&mut self) {
        self.year_cursor = self.year_cursor.saturating_sub(1);
    }
}

impl Default for AssetViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Filter page: category/option cursors and in-category option search.
#[derive(Debug, Clone, Default)]
pub struct FilterPageState {
    pub category: ListState,
    pub options: ListState,
    pub search_query: String,
    pub search_active: bool,
}

impl FilterPageState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            category: ListState::with_total(FilterCategory::ALL.len()),
            options: ListState::new(),
            search_query: String::new(),
            search_active: false,
        }
    }

    /// Re-derive the option list bound for the current category and search.
    pub fn refresh(&mut self, catalog: &FilterCatalog) {
        let category = FilterCategory::ALL[self.category.selected % FilterCategory::ALL.len()];
        let count = search_options(catalog, category, &self.search_query).len();
        self.options.set_total(count);
        self.options.clamp_selection();
    }

    pub fn start_search(&mut self) {
        self.search_active = true;
        self.search_query.clear();
    }

    pub fn stop_search(&mut self) {
        self.search_active = false;
    }

    pub fn clear_search(&mut self) {
        self.search_active = false;
        self.search_query.clear();
    }
}

/// Portfolio view page: charts, performance table, upload flag.
#[derive(Debug, Clone)]
pub struct PortfolioState {
    pub series: Vec<NoiPoint>,
    pub detail: Vec<RevenueOpex>,
    pub relay: BreakdownRelay,
    pub year_cursor: usize,
    pub table: ListState,
    pub table_rows: Vec<crate::model::PortfolioRow>,
    pub split: FilterState<SplitMethod>,
    pub grouping: FilterState<GroupingDimension>,
    /// Set by the CSV upload stub; unlocks the page without filters
    pub uploaded: bool,
}

impl PortfolioState {
    #[must_use]
    pub fn new() -> Self {
        let table_rows = fixtures::portfolio_table();
        Self {
            series: fixtures::portfolio_noi_projection(),
            detail: fixtures::portfolio_revenue_opex(),
            relay: BreakdownRelay::new(),
            year_cursor: 0,
            table: ListState::with_total(table_rows.len()),
            table_rows,
            split: FilterState::new(),
            grouping: FilterState::new(),
            uploaded: false,
        }
    }

    pub fn year_next(&mut self) {
        if self.year_cursor + 1 < self.series.len() {
            self.year_cursor += 1;
        }
    }

    pub fn year_prev(&mut self) {
        self.year_cursor = self.year_cursor.saturating_sub(1);
    }
}

impl Default for PortfolioState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(&AppConfig::default())
    }

    #[test]
    fn test_gated_routes_blocked_without_selection() {
        let mut app = app();
        app.goto(Route::AssetView);
        assert_eq!(app.route, Route::Home);
        assert!(app.status.has_message());

        app.goto(Route::PortfolioView);
        assert_eq!(app.route, Route::Home);
    }

    #[test]
    fn test_selection_unlocks_asset_pages() {
        let mut app = app();
        let asset = app.assets[0].clone();
        app.selection.select(asset);

        app.goto(Route::AssetView);
        assert_eq!(app.route, Route::AssetView);

        app.goto(Route::AssetOverview);
        assert_eq!(app.route, Route::AssetOverview);
    }

    #[test]
    fn test_filters_unlock_portfolio_view() {
        let mut app = app();
        app.filters.toggle(FilterCategory::Geography, "toronto");

        app.goto(Route::PortfolioView);
        assert_eq!(app.route, Route::PortfolioView);
    }

    #[test]
    fn test_upload_stub_unlocks_portfolio_view() {
        let mut app = app();
        app.upload_portfolio_stub();

        app.goto(Route::PortfolioView);
        assert_eq!(app.route, Route::PortfolioView);
    }

    #[test]
    fn test_route_cycle_skips_unreachable() {
        let mut app = app();
        // Home -> AssetSearch -> (skip locked) -> Filter -> Home
        app.next_route();
        assert_eq!(app.route, Route::AssetSearch);
        app.next_route();
        assert_eq!(app.route, Route::Filter);
        app.next_route();
        assert_eq!(app.route, Route::Home);
    }

    #[test]
    fn test_select_suggestion_adds_asset() {
        let mut app = app();
        for c in "king".chars() {
            app.search.input.push_char(c);
        }
        app.search.refresh(&app.selection);
        assert_eq!(app.search.suggestions.total, 1);

        app.select_highlighted_suggestion();
        assert_eq!(app.selection.len(), 1);
        assert!(app.selection.contains(app.assets[0].id));
    }

    #[test]
    fn test_suggestion_without_record_sets_status() {
        let mut app = app();
        for c in "elgin".chars() {
            app.search.input.push_char(c);
        }
        app.search.refresh(&app.selection);
        assert_eq!(app.search.suggestions.total, 1);

        app.select_highlighted_suggestion();
        assert!(app.selection.is_empty());
        assert!(app.status.peek().is_some_and(|m| m.contains("No asset record")));
    }

    #[test]
    fn test_toggle_highlighted_option_roundtrip() {
        let mut app = app();
        app.filter_page.refresh(&app.catalog);

        app.toggle_highlighted_option();
        assert_eq!(app.filters.active_count(), 1);

        app.toggle_highlighted_option();
        assert!(app.filters.is_empty());
    }

    #[test]
    fn test_open_breakdown_uses_cursor_year() {
        let mut app = app();
        app.asset_view.year_next();
        app.open_asset_breakdown();

        assert_eq!(app.asset_view.relay.detail_year(), Some(2030));
        let pair = app.asset_view.relay.breakdown(&app.asset_view.detail);
        assert!(pair.is_some());
    }

    #[test]
    fn test_year_cursor_clamped_to_series() {
        let mut app = app();
        for _ in 0..20 {
            app.asset_view.year_next();
        }
        assert_eq!(app.asset_view.year_cursor, app.asset_view.series.len() - 1);

        for _ in 0..20 {
            app.asset_view.year_prev();
        }
        assert_eq!(app.asset_view.year_cursor, 0);
    }
}
