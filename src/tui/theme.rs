//! Centralized theme and color scheme for the TUI.
//!
//! This module provides consistent styling across all pages.

use crate::model::{RiskRating, Trend};
use ratatui::prelude::*;
use std::sync::RwLock;

/// Color scheme for the TUI application.
/// Provides semantic colors for different UI elements.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    // Risk rating colors
    pub risk_low: Color,
    pub risk_medium: Color,
    pub risk_high: Color,

    // Projection line colors
    pub baseline: Color,
    pub pay_fines: Color,
    pub retrofit: Color,

    // Trend colors
    pub trend_up: Color,
    pub trend_down: Color,
    pub trend_flat: Color,

    // UI element colors
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub background_alt: Color,
    pub text: Color,
    pub text_muted: Color,
    pub selection: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// Const dark theme for static initialization
    const fn dark_const() -> Self {
        Self {
            risk_low: Color::Green,
            risk_medium: Color::Yellow,
            risk_high: Color::Red,

            baseline: Color::Cyan,
            pay_fines: Color::Red,
            retrofit: Color::Green,

            trend_up: Color::Green,
            trend_down: Color::Red,
            trend_flat: Color::Gray,

            primary: Color::Cyan,
            secondary: Color::Blue,
            accent: Color::Yellow,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            background: Color::Reset,
            background_alt: Color::Rgb(30, 30, 40),
            text: Color::White,
            text_muted: Color::Gray,
            selection: Color::DarkGray,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }

    /// Dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self::dark_const()
    }

    /// Light theme
    #[must_use]
    pub const fn light() -> Self {
        Self {
            risk_low: Color::Rgb(0, 128, 0),
            risk_medium: Color::Rgb(180, 140, 0),
            risk_high: Color::Rgb(200, 0, 0),

            baseline: Color::Rgb(0, 100, 150),
            pay_fines: Color::Rgb(200, 0, 0),
            retrofit: Color::Rgb(0, 128, 0),

            trend_up: Color::Rgb(0, 128, 0),
            trend_down: Color::Rgb(200, 0, 0),
            trend_flat: Color::Rgb(100, 100, 100),

            primary: Color::Rgb(0, 100, 150),
            secondary: Color::Rgb(0, 0, 150),
            accent: Color::Rgb(180, 140, 0),
            muted: Color::Rgb(150, 150, 150),
            border: Color::Rgb(180, 180, 180),
            border_focused: Color::Rgb(0, 100, 150),
            background: Color::Rgb(255, 255, 255),
            background_alt: Color::Rgb(240, 240, 245),
            text: Color::Rgb(30, 30, 30),
            text_muted: Color::Rgb(100, 100, 100),
            selection: Color::Rgb(200, 220, 240),

            success: Color::Rgb(0, 128, 0),
            warning: Color::Rgb(180, 140, 0),
            error: Color::Rgb(200, 0, 0),
        }
    }

    /// Get color for a risk rating.
    #[must_use]
    pub const fn risk_color(&self, rating: RiskRating) -> Color {
        match rating {
            RiskRating::Low => self.risk_low,
            RiskRating::Medium => self.risk_medium,
            RiskRating::High => self.risk_high,
        }
    }

    /// Get color for a trend direction.
    #[must_use]
    pub const fn trend_color(&self, trend: Trend) -> Color {
        match trend {
            Trend::Up => self.trend_up,
            Trend::Down => self.trend_down,
            Trend::Flat => self.trend_flat,
        }
    }
}

/// Global theme instance (runtime switchable)
static THEME: RwLock<Theme> = RwLock::new(Theme::dark_const());

/// Theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ColorScheme,
    pub name: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Const dark theme for static initialization
    const fn dark_const() -> Self {
        Self {
            colors: ColorScheme::dark_const(),
            name: "dark",
        }
    }

    #[must_use]
    pub const fn dark() -> Self {
        Self::dark_const()
    }

    #[must_use]
    pub const fn light() -> Self {
        Self {
            colors: ColorScheme::light(),
            name: "light",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Get the next theme in the rotation
    #[must_use]
    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            _ => Self::dark(),
        }
    }
}

/// Get the current theme name
pub fn current_theme_name() -> &'static str {
    THEME.read().expect("THEME lock not poisoned").name
}

/// Set the current theme
pub fn set_theme(theme: Theme) {
    *THEME.write().expect("THEME lock not poisoned") = theme;
}

/// Toggle to the next theme in rotation (dark -> light -> dark)
pub fn toggle_theme() -> &'static str {
    let mut theme = THEME.write().expect("THEME lock not poisoned");
    *theme = theme.next();
    theme.name
}

/// Convenience function to get current colors
pub fn colors() -> ColorScheme {
    THEME.read().expect("THEME lock not poisoned").colors
}

// ============================================================================
// Style Helpers
// ============================================================================

/// Common style presets for consistent UI elements
pub struct Styles;

impl Styles {
    /// Header title style
    pub fn header_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    /// Section title style
    pub fn section_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    /// Normal text style
    pub fn text() -> Style {
        Style::default().fg(colors().text)
    }

    /// Muted/secondary text style
    pub fn text_muted() -> Style {
        Style::default().fg(colors().text_muted)
    }

    /// Label text style
    pub fn label() -> Style {
        Style::default().fg(colors().muted)
    }

    /// Value text style (for data values)
    pub fn value() -> Style {
        Style::default().fg(colors().text).bold()
    }

    /// Selection style (for selected items)
    pub fn selected() -> Style {
        Style::default()
            .bg(colors().selection)
            .fg(colors().text)
            .bold()
    }

    /// Border style (unfocused)
    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    /// Border style (focused)
    pub fn border_focused() -> Style {
        Style::default().fg(colors().border_focused)
    }

    /// Keyboard shortcut style
    pub fn shortcut_key() -> Style {
        Style::default().fg(colors().accent)
    }

    /// Shortcut description style
    pub fn shortcut_desc() -> Style {
        Style::default().fg(colors().text_muted)
    }

    /// Success style
    pub fn success() -> Style {
        Style::default().fg(colors().success)
    }

    /// Warning style
    pub fn warning() -> Style {
        Style::default().fg(colors().warning)
    }

    /// Error style
    pub fn error() -> Style {
        Style::default().fg(colors().error)
    }
}

// ============================================================================
// Badge Rendering Helpers
// ============================================================================

/// Render a risk rating badge with consistent styling.
pub fn risk_badge(rating: RiskRating) -> Span<'static> {
    let scheme = colors();
    Span::styled(
        format!(" {} ", rating.label()),
        Style::default()
            .fg(Color::Black)
            .bg(scheme.risk_color(rating))
            .bold(),
    )
}

/// Render an active-filter chip.
pub fn filter_chip(label: &str) -> Span<'static> {
    let scheme = colors();
    Span::styled(
        format!(" {label} ✕ "),
        Style::default().fg(Color::Black).bg(scheme.accent),
    )
}

/// Render an inert suggestion chip, outlined rather than filled.
pub fn outline_chip(label: &str) -> Span<'static> {
    let scheme = colors();
    Span::styled(
        format!(" {label} "),
        Style::default().fg(scheme.text).bg(scheme.background_alt),
    )
}

// ============================================================================
// Footer Hints
// ============================================================================

/// Per-page footer hints.
pub struct FooterHints;

impl FooterHints {
    /// Get hints for a specific page.
    pub fn for_route(route: crate::session::Route) -> Vec<(&'static str, &'static str)> {
        use crate::session::Route;
        let mut hints = Self::global();

        match route {
            Route::Home => {}
            Route::AssetSearch => {
                hints.insert(0, ("type", "search address"));
                hints.insert(1, ("↑↓", "suggestions"));
                hints.insert(2, ("Enter", "select asset"));
                hints.insert(3, ("x", "remove selected"));
            }
            Route::AssetOverview => {
                hints.insert(0, ("↑↓", "field"));
                hints.insert(1, ("Enter", "edit/save"));
                hints.insert(2, ("Esc", "cancel edit"));
                hints.insert(3, ("n/p", "next/prev step"));
            }
            Route::AssetView => {
                hints.insert(0, ("←→", "year"));
                hints.insert(1, ("Enter", "breakdown"));
                hints.insert(2, ("s", "scenario"));
                hints.insert(3, ("c", "plan"));
                hints.insert(4, ("e", "export CSV"));
            }
            Route::Filter => {
                hints.insert(0, ("←→", "category"));
                hints.insert(1, ("↑↓", "option"));
                hints.insert(2, ("Space", "toggle"));
                hints.insert(3, ("/", "search options"));
            }
            Route::PortfolioView => {
                hints.insert(0, ("↑↓", "table"));
                hints.insert(1, ("←→", "year"));
                hints.insert(2, ("Enter", "breakdown"));
                hints.insert(3, ("u", "upload CSV"));
                hints.insert(4, ("e", "export CSV"));
            }
        }

        hints
    }

    /// Global hints (always shown)
    pub fn global() -> Vec<(&'static str, &'static str)> {
        vec![
            ("Tab", "page"),
            ("1-6", "jump"),
            ("T", "theme"),
            ("?", "help"),
            ("q", "quit"),
        ]
    }
}

/// Render footer hints as spans
pub fn render_footer_hints(hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{key}]"), Styles::shortcut_key()));
        spans.push(Span::styled((*desc).to_string(), Styles::shortcut_desc()));
    }

    spans
}
