//! Filter page: category cards, option toggles, derived summary bar.

use crate::model::FilterCategory;
use crate::session::search_options;
use crate::tui::app::App;
use crate::tui::state::ListNavigation;
use crate::tui::theme::{colors, filter_chip, Styles};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

pub fn render_filter(frame: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Summary bar
            Constraint::Length(2), // Active chips
            Constraint::Min(6),    // Categories + options
        ])
        .split(area);

    render_summary_bar(frame, chunks[0], app);
    render_active_chips(frame, chunks[1], app);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(chunks[2]);

    render_categories(frame, panels[0], app);
    render_options(frame, panels[1], app);
}

fn render_summary_bar(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let summary = app.filters.summary(&app.summary_model);

    let line = Line::from(vec![
        Span::styled("Matching: ", Style::default().fg(scheme.text_muted)),
        Span::styled(
            summary.assets_match.to_string(),
            Style::default().fg(scheme.primary).bold(),
        ),
        Span::styled(" properties │ ", Style::default().fg(scheme.muted)),
        Span::styled("Value: ", Style::default().fg(scheme.text_muted)),
        Span::styled(
            format!("${:.1}B", summary.total_value_billions),
            Style::default().fg(scheme.accent).bold(),
        ),
        Span::styled(" │ ", Style::default().fg(scheme.muted)),
        Span::styled("Low risk: ", Style::default().fg(scheme.text_muted)),
        Span::styled(
            format!("{}%", summary.low_risk_pct),
            Style::default().fg(scheme.risk_low),
        ),
        Span::styled(" │ ", Style::default().fg(scheme.muted)),
        Span::styled("High risk: ", Style::default().fg(scheme.text_muted)),
        Span::styled(
            format!("{}%", summary.high_risk_pct),
            Style::default().fg(scheme.risk_high),
        ),
    ]);

    let bar = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );
    frame.render_widget(bar, area);
}

fn render_active_chips(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let active = app.filters.all_selected();

    let mut spans = vec![Span::styled(
        format!(" {} active  ", active.len()),
        Style::default().fg(scheme.text_muted),
    )];
    for (category, value) in &active {
        spans.push(filter_chip(app.catalog.label_for(*category, value)));
        spans.push(Span::raw(" "));
    }
    if active.is_empty() {
        spans.push(Span::styled(
            "no filters set",
            Style::default().fg(scheme.muted).italic(),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_categories(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let cursor = app.filter_page.category.selected();

    let items: Vec<ListItem> = FilterCategory::ALL
        .into_iter()
        .enumerate()
        .map(|(i, category)| {
            let style = if i == cursor {
                Styles::selected()
            } else {
                Styles::text()
            };
            let count = app.filters.count(category);
            let count_span = if count > 0 {
                Span::styled(
                    format!(" ({count})"),
                    Style::default().fg(scheme.accent).bold(),
                )
            } else {
                Span::raw("")
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {:<18}", category.label()), style),
                count_span,
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Categories ")
            .title_style(Styles::section_title())
            .borders(Borders::ALL)
            .border_style(Styles::border()),
    );
    frame.render_widget(list, area);
}

fn render_options(frame: &mut Frame, area: Rect, app: &App) {
    let scheme = colors();
    let category = app.current_category();
    let options = search_options(&app.catalog, category, &app.filter_page.search_query);
    let cursor = app.filter_page.options.selected();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(area);

    // Search line above the option list.
    let search_line = if app.filter_page.search_active {
        Line::from(vec![
            Span::styled("⌕ ", Style::default().fg(scheme.accent)),
            Span::styled(
                app.filter_page.search_query.clone(),
                Style::default().fg(scheme.text),
            ),
            Span::styled("▏", Style::default().fg(scheme.accent)),
        ])
    } else if app.filter_page.search_query.is_empty() {
        Line::styled(
            "press / to search options",
            Style::default().fg(scheme.muted).italic(),
        )
    } else {
        Line::from(vec![
            Span::styled("⌕ ", Style::default().fg(scheme.muted)),
            Span::styled(
                app.filter_page.search_query.clone(),
                Style::default().fg(scheme.text_muted),
            ),
        ])
    };
    frame.render_widget(Paragraph::new(search_line), chunks[0]);

    let items: Vec<ListItem> = if options.is_empty() {
        vec![ListItem::new(Line::styled(
            "No options match the search",
            Style::default().fg(scheme.text_muted).italic(),
        ))]
    } else {
        options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let selected = app.filters.is_selected(category, &option.value);
                let marker = if selected { "[x]" } else { "[ ]" };
                let style = if i == cursor {
                    Styles::selected()
                } else {
                    Styles::text()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!(" {marker} "),
                        Style::default().fg(if selected {
                            scheme.success
                        } else {
                            scheme.muted
                        }),
                    ),
                    Span::styled(format!("{:<22}", option.label), style),
                    Span::styled(
                        format!("{:>5}", option.count),
                        Style::default().fg(scheme.text_muted),
                    ),
                ]))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(format!(" {} Options ", category.label()))
            .title_style(Styles::section_title())
            .borders(Borders::ALL)
            .border_style(if app.filter_page.search_active {
                Styles::border_focused()
            } else {
                Styles::border()
            }),
    );
    frame.render_widget(list, chunks[1]);
}
