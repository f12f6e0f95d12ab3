//! Named routes and their reachability.
//!
//! The session owns only the reachability predicate; actual page switching
//! lives in the TUI layer, which queries [`RouteGate`] before honoring a
//! navigation request.

/// The fixed set of console pages, in sidebar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    AssetSearch,
    AssetOverview,
    AssetView,
    Filter,
    PortfolioView,
}

impl Route {
    /// All routes in sidebar order.
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::AssetSearch,
        Self::AssetOverview,
        Self::AssetView,
        Self::Filter,
        Self::PortfolioView,
    ];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::AssetSearch => "Asset Search",
            Self::AssetOverview => "Asset Overview",
            Self::AssetView => "Asset View",
            Self::Filter => "Filters",
            Self::PortfolioView => "Portfolio View",
        }
    }

    /// Index in sidebar order (for the tab bar and number-key shortcuts).
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|r| *r == self).unwrap_or(0)
    }

    #[must_use]
    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }
}

/// Session facts the routing layer consults to decide which pages are
/// reachable.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteGate {
    /// At least one asset selected on the search page.
    pub has_selection: bool,
    /// At least one filter active, or a portfolio CSV was loaded.
    pub has_portfolio: bool,
}

impl RouteGate {
    /// Whether `route` can be entered given the current session state.
    ///
    /// Unreachable routes stay visible in the tab bar but disabled;
    /// requesting one is a silent no-op.
    #[must_use]
    pub const fn is_reachable(&self, route: Route) -> bool {
        match route {
            Route::Home | Route::AssetSearch | Route::Filter => true,
            Route::AssetOverview | Route::AssetView => self.has_selection,
            Route::PortfolioView => self.has_portfolio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_reachable_routes() {
        let gate = RouteGate::default();
        assert!(gate.is_reachable(Route::Home));
        assert!(gate.is_reachable(Route::AssetSearch));
        assert!(gate.is_reachable(Route::Filter));
    }

    #[test]
    fn test_asset_pages_require_selection() {
        let mut gate = RouteGate::default();
        assert!(!gate.is_reachable(Route::AssetOverview));
        assert!(!gate.is_reachable(Route::AssetView));

        gate.has_selection = true;
        assert!(gate.is_reachable(Route::AssetOverview));
        assert!(gate.is_reachable(Route::AssetView));
    }

    #[test]
    fn test_portfolio_requires_filters_or_upload() {
        let mut gate = RouteGate::default();
        assert!(!gate.is_reachable(Route::PortfolioView));

        gate.has_portfolio = true;
        assert!(gate.is_reachable(Route::PortfolioView));
    }

    #[test]
    fn test_index_roundtrip() {
        for route in Route::ALL {
            assert_eq!(Route::from_index(route.index()), Some(route));
        }
        assert_eq!(Route::from_index(6), None);
    }
}
