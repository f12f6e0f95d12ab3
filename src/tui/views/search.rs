//! Asset search page: address query, suggestions, selection panel.

use crate::model::fixtures;
use crate::session::MAX_SELECTED;
use crate::tui::app::{App, SearchFocus};
use crate::tui::state::ListNavigation;
use crate::tui::theme::{colors, outline_chip, risk_badge, Styles};
use crate::tui::widgets::truncate_str;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Static chip row shown beneath the search panels.
const QUICK_FILTERS: [&str; 8] = [
    "Toronto",
    "Montreal",
    "Vancouver",
    "Calgary",
    "Office",
    "Retail",
    "Mixed Use",
    "High Risk",
];

pub fn render_search(frame: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Query input
            Constraint::Min(6),    // Suggestions + selection
            Constraint::Length(3), // Quick filter chips
        ])
        .split(area);

    render_query_input(frame, chunks[0], app);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_suggestions(frame, panels[0], app);
    render_selection_panel(frame, panels[1], app);
    render_quick_filters(frame, chunks[2]);
}

fn render_quick_filters(frame: &mut Frame, area: Rect) {
    let mut spans = Vec::with_capacity(QUICK_FILTERS.len() * 2);
    for label in QUICK_FILTERS {
        spans.push(outline_chip(label));
        spans.push(Span::raw(" "));
    }

    let chips = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" Quick Filters ")
            .title_style(Styles::section_title())
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );
    frame.render_widget(chips, area);
}

fn render_query_input(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let query = app.search.input.query();

    let mut spans = vec![
        Span::styled("⌕ ", Style::default().fg(scheme.accent)),
        Span::styled(query.to_string(), Style::default().fg(scheme.text)),
    ];
    if app.search.query_active {
        spans.push(Span::styled("▏", Style::default().fg(scheme.accent)));
    } else if query.is_empty() {
        spans.push(Span::styled(
            "press / to search by address",
            Style::default().fg(scheme.text_muted).italic(),
        ));
    }

    let border = if app.search.query_active {
        Styles::border_focused()
    } else {
        Styles::border()
    };
    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" Address Search ")
            .title_style(Styles::section_title())
            .borders(Borders::ALL)
            .border_style(border),
    );
    frame.render_widget(input, area);
}

fn render_suggestions(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let suggestions = app.search.input.suggestions(&fixtures::ADDRESS_BOOK);

    let items: Vec<ListItem> = if !app.search.input.is_active() {
        vec![ListItem::new(Line::styled(
            "Type at least 3 characters to see matches",
            Style::default().fg(scheme.text_muted).italic(),
        ))]
    } else if suggestions.is_empty() {
        vec![ListItem::new(Line::styled(
            "No matching addresses",
            Style::default().fg(scheme.text_muted).italic(),
        ))]
    } else {
        suggestions
            .iter()
            .enumerate()
            .map(|(i, address)| {
                let highlighted = app.search.focus == SearchFocus::Suggestions
                    && i == app.search.suggestions.selected();
                let style = if highlighted {
                    Styles::selected()
                } else {
                    Styles::text()
                };
                let already = app.selection.list().iter().any(|a| a.address == *address);
                let marker = if already { "● " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(scheme.success)),
                    Span::styled(
                        truncate_str(address, area.width.saturating_sub(6) as usize),
                        style,
                    ),
                ]))
            })
            .collect()
    };

    let border = if app.search.focus == SearchFocus::Suggestions {
        Styles::border_focused()
    } else {
        Styles::border()
    };
    let list = List::new(items).block(
        Block::default()
            .title(format!(" Matches ({}) ", suggestions.len()))
            .title_style(Styles::section_title())
            .borders(Borders::ALL)
            .border_style(border),
    );
    frame.render_widget(list, area);
}

fn render_selection_panel(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let selected = app.selection.list();

    let mut items: Vec<ListItem> = selected
        .iter()
        .enumerate()
        .map(|(i, asset)| {
            let highlighted = app.search.focus == SearchFocus::Selected
                && i == app.search.selected_list.selected();
            let style = if highlighted {
                Styles::selected()
            } else {
                Styles::text()
            };
            ListItem::new(vec![
                Line::from(vec![Span::styled(
                    truncate_str(&asset.address, area.width.saturating_sub(4) as usize),
                    style,
                )]),
                Line::from(vec![
                    Span::raw("  "),
                    risk_badge(asset.risk),
                    Span::styled(
                        format!("  {}  {}", asset.property_type, asset.value),
                        Style::default().fg(scheme.text_muted),
                    ),
                ]),
            ])
        })
        .collect();

    if items.is_empty() {
        items.push(ListItem::new(Line::styled(
            "No assets selected yet",
            Style::default().fg(scheme.text_muted).italic(),
        )));
    }

    let list = List::new(items).block(
        Block::default()
            .title(format!(" Selected ({}/{MAX_SELECTED}) ", selected.len()))
            .title_style(Styles::section_title())
            .borders(Borders::ALL)
            .border_style(if app.search.focus == SearchFocus::Selected {
                Styles::border_focused()
            } else {
                Styles::border()
            }),
    );
    frame.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered_text(app: &mut App) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal
            .draw(|frame| render_search(frame, frame.area(), app))
            .expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_search_page_shows_quick_filter_chips() {
        let config = AppConfig::default();
        let mut app = App::new(&config);
        let text = rendered_text(&mut app);

        assert!(text.contains("Quick Filters"), "chip row title missing");
        for label in QUICK_FILTERS {
            assert!(text.contains(label), "missing chip '{label}'");
        }
    }
}
