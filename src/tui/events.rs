//! Event handling: background input thread and per-page key dispatch.

use crate::session::Route;
use crate::tui::app::{App, SearchFocus};
use crate::tui::state::ListNavigation;
use crate::tui::theme::toggle_theme;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent};
use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Terminal events.
pub enum Event {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
}

/// Event handler: reads crossterm events on a background thread.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
    _tx: mpsc::Sender<Event>,
}

impl Default for EventHandler {
    fn default() -> Self {
        let (tx, rx) = mpsc::channel();
        let tick_rate = Duration::from_millis(100);

        let event_tx = tx.clone();
        thread::spawn(move || loop {
            if event::poll(tick_rate).unwrap_or(false) {
                match event::read() {
                    Ok(CrosstermEvent::Key(key)) => {
                        if event_tx.send(Event::Key(key)).is_err() {
                            break;
                        }
                    }
                    Ok(CrosstermEvent::Resize(w, h)) => {
                        if event_tx.send(Event::Resize(w, h)).is_err() {
                            break;
                        }
                    }
                    _ => {}
                }
            } else if event_tx.send(Event::Tick).is_err() {
                break;
            }
        });

        Self { rx, _tx: tx }
    }
}

impl EventHandler {
    pub fn next(&self) -> io::Result<Event> {
        self.rx.recv().map_err(io::Error::other)
    }
}

/// Handle a key event for the whole app.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if app.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')) {
            app.show_help = false;
        }
        return;
    }

    // Text input modes capture keys before global shortcuts.
    if app.route == Route::AssetOverview && app.overview.editor.editing_field().is_some() {
        handle_field_edit_key(app, key);
        return;
    }
    if app.route == Route::Filter && app.filter_page.search_active {
        handle_option_search_key(app, key);
        return;
    }
    if app.route == Route::AssetSearch && app.search.query_active {
        handle_query_edit_key(app, key);
        return;
    }

    // Global shortcuts
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('?') => {
            app.toggle_help();
            return;
        }
        KeyCode::Char('T') => {
            let name = toggle_theme();
            app.status.set(format!("Theme: {name}"));
            return;
        }
        KeyCode::Tab => {
            app.next_route();
            return;
        }
        KeyCode::BackTab => {
            app.prev_route();
            return;
        }
        KeyCode::Char(c @ '1'..='6') => {
            let idx = (c as usize) - ('1' as usize);
            if let Some(route) = Route::from_index(idx) {
                app.goto(route);
            }
            return;
        }
        _ => {}
    }

    match app.route {
        Route::Home => handle_home_key(app, key),
        Route::AssetSearch => handle_search_key(app, key),
        Route::AssetOverview => handle_overview_key(app, key),
        Route::AssetView => handle_asset_view_key(app, key),
        Route::Filter => handle_filter_key(app, key),
        Route::PortfolioView => handle_portfolio_key(app, key),
    }
}

// ============================================================================
// Input-mode handlers
// ============================================================================

fn handle_field_edit_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.overview.editor.save(),
        KeyCode::Esc => app.overview.editor.cancel(),
        KeyCode::Backspace => app.overview.editor.pop_char(),
        KeyCode::Char(c) => app.overview.editor.push_char(c),
        _ => {}
    }
}

fn handle_option_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.filter_page.clear_search(),
        KeyCode::Enter => app.filter_page.stop_search(),
        KeyCode::Backspace => {
            app.filter_page.search_query.pop();
        }
        KeyCode::Char(c) => app.filter_page.search_query.push(c),
        _ => {}
    }
    let catalog = app.catalog.clone();
    app.filter_page.refresh(&catalog);
}

fn handle_query_edit_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.search.input.clear();
            app.search.query_active = false;
        }
        KeyCode::Enter => app.search.query_active = false,
        KeyCode::Backspace => app.search.input.pop_char(),
        KeyCode::Char(c) => app.search.input.push_char(c),
        _ => {}
    }
    app.search.refresh(&app.selection);
}

// ============================================================================
// Per-page handlers
// ============================================================================

fn handle_home_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.home.geography.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.home.geography.select_next(),
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('/') => app.search.query_active = true,
        KeyCode::Left | KeyCode::Right => app.search.toggle_focus(),
        KeyCode::Up | KeyCode::Char('k') => match app.search.focus {
            SearchFocus::Suggestions => app.search.suggestions.select_prev(),
            SearchFocus::Selected => app.search.selected_list.select_prev(),
        },
        KeyCode::Down | KeyCode::Char('j') => match app.search.focus {
            SearchFocus::Suggestions => app.search.suggestions.select_next(),
            SearchFocus::Selected => app.search.selected_list.select_next(),
        },
        KeyCode::Enter => {
            if app.search.focus == SearchFocus::Suggestions {
                app.select_highlighted_suggestion();
            }
        }
        KeyCode::Char('x') => app.remove_highlighted_selection(),
        _ => {}
    }
}

fn handle_overview_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.overview.fields.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.overview.fields.select_next(),
        KeyCode::Enter => {
            let field = app.overview.highlighted_field();
            app.overview.editor.start_edit(field);
        }
        KeyCode::Char('n') => app.overview.stepper.advance(),
        KeyCode::Char('p') => app.overview.stepper.retreat(),
        KeyCode::Char('x') => app.extract_from_pdf_stub(),
        _ => {}
    }
}

fn handle_asset_view_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.asset_view.year_prev(),
        KeyCode::Right | KeyCode::Char('l') => app.asset_view.year_next(),
        KeyCode::Enter => app.open_asset_breakdown(),
        KeyCode::Esc => app.asset_view.relay.close(),
        KeyCode::Char('s') => app.asset_view.scenario.next(),
        KeyCode::Char('c') => app.asset_view.plan.next(),
        KeyCode::Char('e') => app.export_asset_csv(),
        _ => {}
    }
}

fn handle_filter_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left => {
            app.filter_page.category.select_prev();
            app.filter_page.options.go_first();
            let catalog = app.catalog.clone();
            app.filter_page.refresh(&catalog);
        }
        KeyCode::Right => {
            app.filter_page.category.select_next();
            app.filter_page.options.go_first();
            let catalog = app.catalog.clone();
            app.filter_page.refresh(&catalog);
        }
        KeyCode::Up | KeyCode::Char('k') => app.filter_page.options.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.filter_page.options.select_next(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_highlighted_option(),
        KeyCode::Char('/') => app.filter_page.start_search(),
        KeyCode::Char('r') => {
            let active: Vec<(crate::model::FilterCategory, String)> = app
                .filters
                .all_selected()
                .into_iter()
                .map(|(c, v)| (c, v.to_string()))
                .collect();
            for (category, value) in active {
                app.filters.clear(category, &value);
            }
            app.status.set("Cleared all filters");
        }
        _ => {}
    }
}

fn handle_portfolio_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.portfolio.table.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.portfolio.table.select_next(),
        KeyCode::Left | KeyCode::Char('h') => app.portfolio.year_prev(),
        KeyCode::Right | KeyCode::Char('l') => app.portfolio.year_next(),
        KeyCode::Enter => app.open_portfolio_breakdown(),
        KeyCode::Esc => app.portfolio.relay.close(),
        KeyCode::Char('s') => app.portfolio.split.next(),
        KeyCode::Char('g') => app.portfolio.grouping.next(),
        KeyCode::Char('u') => app.upload_portfolio_stub(),
        KeyCode::Char('e') => app.export_portfolio_csv(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(&AppConfig::default())
    }

    #[test]
    fn test_quit_key() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_number_keys_respect_gating() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('4')));
        assert_eq!(app.route, Route::Home);

        handle_key_event(&mut app, key(KeyCode::Char('2')));
        assert_eq!(app.route, Route::AssetSearch);
    }

    #[test]
    fn test_search_flow_via_keys() {
        let mut app = app();
        app.goto(Route::AssetSearch);

        handle_key_event(&mut app, key(KeyCode::Char('/')));
        for c in "georgia".chars() {
            handle_key_event(&mut app, key(KeyCode::Char(c)));
        }
        handle_key_event(&mut app, key(KeyCode::Enter)); // leave query mode
        handle_key_event(&mut app, key(KeyCode::Enter)); // select suggestion

        assert_eq!(app.selection.len(), 1);
        assert_eq!(
            app.selection.list()[0].address,
            "1055 West Georgia Street, Vancouver, BC"
        );
    }

    #[test]
    fn test_query_typing_does_not_quit() {
        let mut app = app();
        app.goto(Route::AssetSearch);

        handle_key_event(&mut app, key(KeyCode::Char('/')));
        handle_key_event(&mut app, key(KeyCode::Char('q')));

        assert!(!app.should_quit);
        assert_eq!(app.search.input.query(), "q");
    }

    #[test]
    fn test_edit_save_via_keys() {
        let mut app = app();
        let asset = app.assets[0].clone();
        app.selection.select(asset);
        app.goto(Route::AssetOverview);

        handle_key_event(&mut app, key(KeyCode::Enter)); // edit Company
        handle_key_event(&mut app, key(KeyCode::Backspace));
        handle_key_event(&mut app, key(KeyCode::Char('X')));
        handle_key_event(&mut app, key(KeyCode::Enter)); // save

        let value = app
            .overview
            .editor
            .record()
            .value(crate::model::FieldId::Company);
        assert!(value.ends_with('X'));
        assert!(app.overview.editor.editing_field().is_none());
    }

    #[test]
    fn test_edit_cancel_reverts_via_keys() {
        let mut app = app();
        let asset = app.assets[0].clone();
        app.selection.select(asset);
        app.goto(Route::AssetOverview);

        let before = app
            .overview
            .editor
            .record()
            .value(crate::model::FieldId::Company)
            .to_string();

        handle_key_event(&mut app, key(KeyCode::Enter));
        handle_key_event(&mut app, key(KeyCode::Char('Z')));
        handle_key_event(&mut app, key(KeyCode::Esc));

        assert_eq!(
            app.overview
                .editor
                .record()
                .value(crate::model::FieldId::Company),
            before
        );
    }

    #[test]
    fn test_breakdown_open_close_via_keys() {
        let mut app = app();
        let asset = app.assets[0].clone();
        app.selection.select(asset);
        app.goto(Route::AssetView);

        handle_key_event(&mut app, key(KeyCode::Right));
        handle_key_event(&mut app, key(KeyCode::Enter));
        assert!(app.asset_view.relay.is_open());
        assert_eq!(app.asset_view.relay.detail_year(), Some(2030));

        handle_key_event(&mut app, key(KeyCode::Esc));
        assert!(!app.asset_view.relay.is_open());
    }

    #[test]
    fn test_filter_toggle_and_reset_via_keys() {
        let mut app = app();
        app.goto(Route::Filter);

        handle_key_event(&mut app, key(KeyCode::Char(' ')));
        handle_key_event(&mut app, key(KeyCode::Down));
        handle_key_event(&mut app, key(KeyCode::Char(' ')));
        assert_eq!(app.filters.active_count(), 2);

        handle_key_event(&mut app, key(KeyCode::Char('r')));
        assert!(app.filters.is_empty());
    }

    #[test]
    fn test_upload_unlocks_portfolio_page() {
        let mut app = app();
        app.upload_portfolio_stub();
        handle_key_event(&mut app, key(KeyCode::Char('6')));
        assert_eq!(app.route, Route::PortfolioView);

        handle_key_event(&mut app, key(KeyCode::Char('s')));
        assert_eq!(
            app.portfolio.split.display_name(),
            "Property Type"
        );
    }
}
